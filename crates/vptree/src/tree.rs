//! The [`VpTree`] handle: build, load, search and stringify.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::build::build_root;
use crate::config::{SearchConfig, TreeConfig};
use crate::metric::Metric;
use crate::node::Node;
use crate::result::SearchResult;
use crate::search::search_root;

/// Dataset storage: borrowed from the caller, or the synthesized `0..n`
/// index range.
enum Elements<'a, T> {
    Borrowed(&'a [T]),
    Owned(Vec<T>),
}

impl<T> Deref for Elements<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Elements::Borrowed(items) => items,
            Elements::Owned(items) => items,
        }
    }
}

/// An immutable vantage-point tree over a dataset.
///
/// The tree refers to elements by their position in the dataset and never
/// copies or mutates them. Searches take `&self`, so one tree can serve
/// many concurrent queries.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vantage_vptree::{SearchConfig, TreeConfig, VpTree};
///
/// let points = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let mut rng = StdRng::seed_from_u64(42);
/// let tree = VpTree::build(
///     &points,
///     |a: &f64, b: &f64| (a - b).abs(),
///     &TreeConfig::new(),
///     &mut rng,
/// );
///
/// let result = tree.search(&3.9, &SearchConfig::nearest(2));
/// assert_eq!(result.indices(), vec![4, 3]);
/// ```
pub struct VpTree<'a, T, M> {
    items: Elements<'a, T>,
    metric: M,
    root: Node,
    /// Distance evaluations performed by the most recent search call.
    comparisons: AtomicUsize,
}

impl<'a, T, M> VpTree<'a, T, M>
where
    M: Metric<T>,
{
    /// Builds a tree over `items`, drawing vantage points from `rng`.
    ///
    /// A dataset of `n` elements costs `O(n log n)` distance evaluations on
    /// well-spread data and at most `O(n²)` on degenerate metrics.
    #[tracing::instrument(skip_all, fields(n = items.len(), bucket_size = config.bucket_size()))]
    pub fn build(items: &'a [T], metric: M, config: &TreeConfig, rng: &mut impl Rng) -> Self {
        let root = build_root(items, &metric, config.bucket_size(), rng);
        debug!(depth = root.depth(), "tree built");
        Self::from_parts(Elements::Borrowed(items), metric, root)
    }
}

impl<M> VpTree<'static, usize, M>
where
    M: Metric<usize>,
{
    /// Builds a tree over the implicit dataset `0..len`.
    ///
    /// Elements are their own indices; `metric` interprets them.
    #[tracing::instrument(skip_all, fields(n = len, bucket_size = config.bucket_size()))]
    pub fn build_indexed(len: usize, metric: M, config: &TreeConfig, rng: &mut impl Rng) -> Self {
        let items: Vec<usize> = (0..len).collect();
        let root = build_root(&items, &metric, config.bucket_size(), rng);
        debug!(depth = root.depth(), "tree built");
        Self::from_parts(Elements::Owned(items), metric, root)
    }

    /// Restores a tree over the implicit dataset `0..len` from a node
    /// structure, without rebuilding.
    ///
    /// The structure is not validated. Searching a tree whose `root` refers
    /// to an index outside the dataset panics.
    pub fn load_indexed(len: usize, metric: M, root: Node) -> Self {
        Self::from_parts(Elements::Owned((0..len).collect()), metric, root)
    }
}

impl<'a, T, M> VpTree<'a, T, M> {
    /// Restores a tree from a previously built node structure, without
    /// rebuilding.
    ///
    /// `root` must only refer to indices of `items`, and must have been built
    /// with a metric equivalent to `metric`, or searches will miss results.
    ///
    /// The structure is not validated. Searching a tree whose `root` refers
    /// to an index outside the dataset panics.
    pub fn load(items: &'a [T], metric: M, root: Node) -> Self {
        Self::from_parts(Elements::Borrowed(items), metric, root)
    }

    fn from_parts(items: Elements<'a, T>, metric: M, root: Node) -> Self {
        Self {
            items,
            metric,
            root,
            comparisons: AtomicUsize::new(0),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the tree, returning its root node.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Returns the dataset the tree indexes.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the metric used to build the tree.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Number of elements in the dataset.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distance evaluations performed by the most recent search call
    /// (summed over all queries for [`VpTree::search_batch`]).
    pub fn comparisons(&self) -> usize {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Renders the tree structure in its compact text form.
    pub fn stringify(&self) -> String {
        self.root.to_string()
    }

    /// Finds the nearest elements to `query` using the tree's own metric.
    ///
    /// # Panics
    ///
    /// Panics if the tree was loaded from a node structure that refers to an
    /// index outside the dataset.
    pub fn search<Q>(&self, query: &Q, config: &SearchConfig) -> SearchResult
    where
        Q: ?Sized,
        M: Metric<T, Q>,
    {
        self.search_with(query, config, &self.metric, |_: &T| true)
    }

    /// Finds the nearest elements to `query` using `metric` in place of the
    /// tree's own, retaining only elements accepted by `filter`.
    ///
    /// `metric` must agree with the build metric on dataset elements for the
    /// pruning bounds to stay valid. `filter` never affects pruning.
    ///
    /// # Panics
    ///
    /// Panics if the tree was loaded from a node structure that refers to an
    /// index outside the dataset.
    pub fn search_with<Q, D, F>(
        &self,
        query: &Q,
        config: &SearchConfig,
        metric: &D,
        filter: F,
    ) -> SearchResult
    where
        Q: ?Sized,
        D: Metric<T, Q> + ?Sized,
        F: Fn(&T) -> bool,
    {
        let result = search_root(&self.root, &self.items, query, config, metric, filter);
        trace!(
            comparisons = result.comparisons(),
            found = result.len(),
            "search complete"
        );
        self.comparisons.store(result.comparisons(), Ordering::Relaxed);
        result
    }

    /// Runs independent searches for every query in parallel.
    ///
    /// Results are returned in query order.
    ///
    /// # Panics
    ///
    /// Panics if the tree was loaded from a node structure that refers to an
    /// index outside the dataset.
    pub fn search_batch<Q>(&self, queries: &[Q], config: &SearchConfig) -> Vec<SearchResult>
    where
        Q: Sync,
        T: Sync,
        M: Metric<T, Q> + Sync,
    {
        let results: Vec<SearchResult> = queries
            .par_iter()
            .map(|query| {
                search_root(&self.root, &self.items, query, config, &self.metric, |_: &T| {
                    true
                })
            })
            .collect();
        let total = results.iter().map(SearchResult::comparisons).sum();
        debug!(
            n_queries = queries.len(),
            comparisons = total,
            "batch search complete"
        );
        self.comparisons.store(total, Ordering::Relaxed);
        results
    }
}

impl<T, M> fmt::Debug for VpTree<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VpTree")
            .field("len", &self.items.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
