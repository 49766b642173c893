//! Branch-and-bound nearest-neighbor traversal.

use crate::config::SearchConfig;
use crate::metric::Metric;
use crate::node::Node;
use crate::queue::BoundedQueue;
use crate::result::SearchResult;

/// Per-query traversal state.
struct Search<'s, T, Q: ?Sized, D: ?Sized, F> {
    items: &'s [T],
    query: &'s Q,
    metric: &'s D,
    filter: F,
    queue: BoundedQueue,
    /// Current search radius. Only elements strictly closer are accepted.
    tau: f64,
    comparisons: usize,
}

/// Runs one query against `root`.
///
/// The radius starts at the configured maximum distance and shrinks to the
/// farthest retained neighbor as soon as `limit` neighbors are held.
/// `filter` only decides which candidates are retained; pruning never
/// depends on it.
///
/// # Panics
///
/// Panics if `root` refers to an index outside `items`.
pub(crate) fn search_root<T, Q, D, F>(
    root: &Node,
    items: &[T],
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
    let mut search = Search {
        items,
        query,
        metric,
        filter,
        queue: BoundedQueue::new(config.limit().unwrap_or(0)),
        tau: config.max_distance(),
        comparisons: 0,
    };
    search.visit(root);
    SearchResult::new(search.queue.into_list(), search.comparisons)
}

impl<T, Q, D, F> Search<'_, T, Q, D, F>
where
    Q: ?Sized,
    D: Metric<T, Q> + ?Sized,
    F: Fn(&T) -> bool,
{
    fn visit(&mut self, node: &Node) {
        match node {
            Node::Empty => {}
            Node::Leaf(bucket) => {
                for &index in bucket {
                    let dist = self.measure(index);
                    self.offer(index, dist);
                }
            }
            Node::Vantage(vp) => {
                let dist = self.measure(vp.index);
                self.offer(vp.index, dist);

                let Some(split) = &vp.split else { return };

                // Visit the side the query falls on first: the sooner tau
                // shrinks, the more of the other side gets pruned. Left may
                // hold matches iff dist is in (m - tau, mu + tau), right iff
                // dist is in (mu - tau, M + tau).
                if dist < split.median {
                    if !split.left.is_empty() && split.min - self.tau < dist {
                        self.visit(&split.left);
                    }
                    if !split.right.is_empty() && split.median - self.tau < dist {
                        self.visit(&split.right);
                    }
                } else {
                    if !split.right.is_empty() && dist < split.max + self.tau {
                        self.visit(&split.right);
                    }
                    if !split.left.is_empty() && dist < split.median + self.tau {
                        self.visit(&split.left);
                    }
                }
            }
        }
    }

    fn measure(&mut self, index: usize) -> f64 {
        self.comparisons += 1;
        self.metric.distance(self.query, &self.items[index])
    }

    fn offer(&mut self, index: usize, dist: f64) {
        if dist < self.tau && (self.filter)(&self.items[index]) {
            if let Some(worst) = self.queue.insert(index, dist) {
                self.tau = worst;
            }
        }
    }
}
