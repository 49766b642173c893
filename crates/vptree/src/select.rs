//! Order-statistic selection (quickselect with median-of-three pivoting).
//!
//! The mix of 1-based ranks in [`nth_element`] and 0-based ranks in
//! [`select`] follows C++ `std::nth_element`: the 1-based form counts how
//! many elements of the range are at or before the answer.

use crate::error::VpTreeError;

/// Finds the element of rank `nth` within the inclusive range `[left, right]`.
///
/// `less` is a strict-less-than comparator. On return the range is
/// partitioned around the answer: elements before it never compare greater,
/// elements after it never compare less. Neither side is sorted.
///
/// # Errors
///
/// Returns [`VpTreeError::InvalidRange`] if `[left, right]` does not fit in
/// `list`, and [`VpTreeError::OutOfRange`] if `nth` is outside
/// `[1, right - left + 1]`.
///
/// # Example
///
/// ```
/// use vantage_vptree::nth_element;
///
/// let mut values = [9, 1, 8, 2, 7, 3];
/// // Third smallest of the first four elements.
/// let third = *nth_element(&mut values, 0, 3, 3, |a, b| a < b).unwrap();
/// assert_eq!(third, 8);
/// ```
pub fn nth_element<T, F>(
    list: &mut [T],
    left: usize,
    nth: usize,
    right: usize,
    mut less: F,
) -> Result<&T, VpTreeError>
where
    F: FnMut(&T, &T) -> bool,
{
    if left > right || right >= list.len() {
        return Err(VpTreeError::InvalidRange {
            left,
            right,
            len: list.len(),
        });
    }
    let len = right - left + 1;
    if nth == 0 || nth > len {
        return Err(VpTreeError::OutOfRange { rank: nth, len });
    }
    let pos = partition_nth(list, left, nth, right, &mut less);
    Ok(&list[pos])
}

/// Finds the element of 0-based rank `k` over the whole of `list`.
///
/// Equivalent to `nth_element(list, 0, k + 1, list.len() - 1, less)`.
///
/// # Errors
///
/// Returns [`VpTreeError::OutOfRange`] if `k >= list.len()`.
///
/// # Example
///
/// ```
/// use vantage_vptree::select;
///
/// let mut values = vec![5.0, 1.0, 4.0, 2.0, 3.0];
/// let median = *select(&mut values, 2, |a: &f64, b: &f64| a < b).unwrap();
/// assert_eq!(median, 3.0);
/// ```
pub fn select<T, F>(list: &mut [T], k: usize, less: F) -> Result<&T, VpTreeError>
where
    F: FnMut(&T, &T) -> bool,
{
    if k >= list.len() {
        return Err(VpTreeError::OutOfRange {
            rank: k,
            len: list.len(),
        });
    }
    let right = list.len() - 1;
    nth_element(list, 0, k + 1, right, less)
}

/// Unchecked selection loop. Returns the final position of the element of
/// rank `nth` in `[left, right]`.
///
/// Callers guarantee `left <= right < list.len()` and `1 <= nth <= right - left + 1`.
pub(crate) fn partition_nth<T, F>(
    list: &mut [T],
    mut left: usize,
    mut nth: usize,
    mut right: usize,
    less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left <= right && right < list.len());
    debug_assert!(nth >= 1 && nth <= right - left + 1);

    loop {
        let mid = left + (right - left) / 2;
        let pivot = median_of_three(list, left, right, mid, less);
        let pivot = partition(list, left, right, pivot, less);
        let pivot_rank = pivot - left + 1;

        if pivot_rank == nth {
            return pivot;
        } else if nth < pivot_rank {
            // pivot_rank >= 2 here, so pivot > left
            right = pivot - 1;
        } else {
            nth -= pivot_rank;
            left = pivot + 1;
        }
    }
}

/// Lomuto partition of `[left, right]` around `list[pivot]`.
///
/// Returns the pivot's final position.
fn partition<T, F>(list: &mut [T], left: usize, right: usize, pivot: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Park the pivot at the end so it stays put during the sweep
    list.swap(pivot, right);
    let mut store = left;
    for i in left..right {
        if less(&list[i], &list[right]) {
            list.swap(store, i);
            store += 1;
        }
    }
    list.swap(right, store);
    store
}

/// Index of the median of `list[a]`, `list[b]` and `list[c]` under `less`.
fn median_of_three<T, F>(list: &[T], a: usize, b: usize, c: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (x, y, z) = (&list[a], &list[b], &list[c]);
    if less(x, y) {
        if less(y, z) {
            b
        } else if less(x, z) {
            c
        } else {
            a
        }
    } else if less(x, z) {
        a
    } else if less(y, z) {
        c
    } else {
        b
    }
}
