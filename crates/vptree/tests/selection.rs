//! Order-statistic properties of the public selection functions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vantage_vptree::{VpTreeError, nth_element, select};

/// Checks that `list[left..=right]` is split around position `pos`.
fn assert_split_at(list: &[f64], left: usize, pos: usize, right: usize) {
    let pivot = list[pos];
    for (i, x) in list.iter().enumerate().take(right + 1).skip(left) {
        if i < pos {
            assert!(*x <= pivot, "{x} before {pivot} at {i}");
        } else if i > pos {
            assert!(*x >= pivot, "{x} after {pivot} at {i}");
        }
    }
}

#[test]
fn nth_element_matches_sorted_subrange() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let len = rng.random_range(1..60);
        let values: Vec<f64> = (0..len).map(|_| rng.random_range(-5.0..5.0)).collect();
        let left = rng.random_range(0..len);
        let right = rng.random_range(left..len);
        let nth = rng.random_range(1..=right - left + 1);

        let mut expected = values[left..=right].to_vec();
        expected.sort_by(f64::total_cmp);

        let mut list = values.clone();
        let got = *nth_element(&mut list, left, nth, right, |a: &f64, b: &f64| a < b).unwrap();
        assert_eq!(got, expected[nth - 1]);
        assert_split_at(&list, left, left + nth - 1, right);
        assert_eq!(&list[..left], &values[..left]);
        assert_eq!(&list[right + 1..], &values[right + 1..]);
    }
}

#[test]
fn select_with_heavy_duplicates() {
    let mut rng = StdRng::seed_from_u64(4);
    let values: Vec<f64> = (0..101).map(|_| f64::from(rng.random_range(0..3))).collect();
    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);
    for k in [0, 33, 50, 67, 100] {
        let mut list = values.clone();
        let got = *select(&mut list, k, |a: &f64, b: &f64| a < b).unwrap();
        assert_eq!(got, sorted[k], "k {k}");
        assert_split_at(&list, 0, k, list.len() - 1);
    }
}

#[test]
fn select_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(9);
    let values: Vec<u32> = (0..64).map(|_| rng.random_range(0..1000)).collect();
    let mut list = values.clone();
    select(&mut list, 20, |a, b| a < b).unwrap();
    let mut before = values;
    before.sort_unstable();
    list.sort_unstable();
    assert_eq!(list, before);
}

#[test]
fn misuse_is_reported() {
    let mut empty: [i32; 0] = [];
    assert_eq!(
        select(&mut empty, 0, |a, b| a < b).unwrap_err(),
        VpTreeError::OutOfRange { rank: 0, len: 0 }
    );

    let mut list = [3, 1, 2];
    assert_eq!(
        nth_element(&mut list, 0, 4, 2, |a, b| a < b).unwrap_err(),
        VpTreeError::OutOfRange { rank: 4, len: 3 }
    );
    assert_eq!(
        nth_element(&mut list, 1, 1, 3, |a, b| a < b).unwrap_err(),
        VpTreeError::InvalidRange {
            left: 1,
            right: 3,
            len: 3
        }
    );
    assert_eq!(list, [3, 1, 2]);
}
