//! Distance functions.

/// A distance between a query of type `Q` and a dataset element of type `T`.
///
/// Implementations must return non-negative values. Search results are exact
/// only when the distance satisfies the triangle inequality; symmetry is
/// assumed but not checked.
///
/// Any `Fn(&Q, &T) -> f64` closure is a metric:
///
/// ```
/// use vantage_vptree::Metric;
///
/// let abs_diff = |a: &f64, b: &f64| (a - b).abs();
/// assert_eq!(abs_diff.distance(&1.0, &3.5), 2.5);
/// ```
pub trait Metric<T: ?Sized, Q: ?Sized = T> {
    /// Distance from `query` to `item`.
    fn distance(&self, query: &Q, item: &T) -> f64;
}

impl<T, Q, F> Metric<T, Q> for F
where
    T: ?Sized,
    Q: ?Sized,
    F: Fn(&Q, &T) -> f64,
{
    fn distance(&self, query: &Q, item: &T) -> f64 {
        self(query, item)
    }
}

/// Euclidean (L2) distance between coordinate vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

/// Manhattan (L1) distance between coordinate vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

/// Chebyshev (L∞) distance between coordinate vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

/// Pairs up the coordinates of two equal-length vectors.
#[inline]
fn coords<'a>(a: &'a [f64], b: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    debug_assert_eq!(a.len(), b.len(), "coordinate vectors differ in length");
    a.iter().copied().zip(b.iter().copied())
}

impl<T, Q> Metric<T, Q> for Euclidean
where
    T: AsRef<[f64]> + ?Sized,
    Q: AsRef<[f64]> + ?Sized,
{
    fn distance(&self, query: &Q, item: &T) -> f64 {
        coords(query.as_ref(), item.as_ref())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl<T, Q> Metric<T, Q> for Manhattan
where
    T: AsRef<[f64]> + ?Sized,
    Q: AsRef<[f64]> + ?Sized,
{
    fn distance(&self, query: &Q, item: &T) -> f64 {
        coords(query.as_ref(), item.as_ref())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

impl<T, Q> Metric<T, Q> for Chebyshev
where
    T: AsRef<[f64]> + ?Sized,
    Q: AsRef<[f64]> + ?Sized,
{
    fn distance(&self, query: &Q, item: &T) -> f64 {
        coords(query.as_ref(), item.as_ref())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_closure_metric() {
        let hamming =
            |a: &str, b: &str| a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() as f64;
        assert_eq!(Metric::<str>::distance(&hamming, "karolin", "kathrin"), 3.0);
    }

    #[test]
    fn test_euclidean() {
        let d = Euclidean.distance(&vec![0.0, 0.0], &vec![3.0, 4.0]);
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_query_type() {
        let item = vec![1.0, 1.0];
        let query = [4.0, 5.0];
        let d = Metric::<Vec<f64>, [f64; 2]>::distance(&Euclidean, &query, &item);
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_manhattan() {
        let d = Manhattan.distance(&vec![1.0, -2.0, 3.0], &vec![0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(d, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chebyshev() {
        let d = Chebyshev.distance(&vec![1.0, -7.0, 3.0], &vec![0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(d, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_on_identical() {
        let p = vec![0.25, -1.5, 8.0];
        assert_eq!(Euclidean.distance(&p, &p), 0.0);
        assert_eq!(Manhattan.distance(&p, &p), 0.0);
        assert_eq!(Chebyshev.distance(&p, &p), 0.0);
    }
}
