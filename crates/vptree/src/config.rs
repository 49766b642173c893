//! Configuration for tree construction and search.

/// Configuration for building a vantage-point tree.
///
/// # Example
///
/// ```
/// use vantage_vptree::TreeConfig;
///
/// let config = TreeConfig::new().with_bucket_size(8);
/// assert_eq!(config.bucket_size(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Working sets of at most this many elements become leaf buckets.
    /// `0` disables bucketing: every element becomes a vantage point.
    bucket_size: usize,
}

impl TreeConfig {
    /// Creates a configuration without leaf buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leaf bucket size (`0` = no buckets).
    pub fn with_bucket_size(mut self, bucket_size: usize) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Returns the leaf bucket size.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }
}

/// Configuration for a nearest-neighbor query.
///
/// Defaults to an unlimited number of results within an unbounded radius,
/// i.e. every element sorted by distance.
///
/// # Example
///
/// ```
/// use vantage_vptree::SearchConfig;
///
/// let config = SearchConfig::new().with_limit(5).with_max_distance(2.0);
/// assert_eq!(config.limit(), Some(5));
/// assert_eq!(config.max_distance(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of neighbors to return. `None` = unlimited.
    limit: Option<usize>,
    /// Only elements strictly closer than this are returned.
    max_distance: f64,
}

impl SearchConfig {
    /// Creates an unbounded configuration.
    pub fn new() -> Self {
        Self {
            limit: None,
            max_distance: f64::INFINITY,
        }
    }

    /// Shorthand for the `k` nearest neighbors.
    pub fn nearest(k: usize) -> Self {
        Self::new().with_limit(k)
    }

    /// Sets the maximum number of neighbors (`0` = unlimited).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Sets the search radius. Elements at or beyond it are excluded.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Returns the result limit, `None` if unlimited.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the search radius.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
