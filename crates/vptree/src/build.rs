//! Recursive vantage-point tree construction.

use rand::Rng;

use crate::metric::Metric;
use crate::node::{Node, Split};
use crate::select::partition_nth;

/// Build-time record: a dataset index and its distance to the current
/// vantage point.
#[derive(Debug, Clone, Copy)]
struct WorkItem {
    index: usize,
    dist: f64,
}

fn closer(a: &WorkItem, b: &WorkItem) -> bool {
    a.dist < b.dist
}

/// Builds the node structure over every element of `items`.
///
/// Vantage points are drawn uniformly at random from each working set using
/// `rng`. Working sets of at most `bucket_size` elements become leaves when
/// `bucket_size > 0`. Each element's distance to a vantage point is computed
/// exactly once.
pub(crate) fn build_root<T, M, R>(items: &[T], metric: &M, bucket_size: usize, rng: &mut R) -> Node
where
    M: Metric<T> + ?Sized,
    R: Rng,
{
    let work = (0..items.len())
        .map(|index| WorkItem { index, dist: 0.0 })
        .collect();
    build_node(items, metric, bucket_size, rng, work)
}

fn build_node<T, M, R>(
    items: &[T],
    metric: &M,
    bucket_size: usize,
    rng: &mut R,
    mut work: Vec<WorkItem>,
) -> Node
where
    M: Metric<T> + ?Sized,
    R: Rng,
{
    if work.is_empty() {
        return Node::Empty;
    }
    if bucket_size > 0 && work.len() <= bucket_size {
        return Node::leaf(work.iter().map(|w| w.index).collect());
    }

    let vp = work.swap_remove(rng.random_range(0..work.len())).index;
    if work.is_empty() {
        return Node::vantage(vp, None);
    }

    let vp_item = &items[vp];
    let mut min = f64::INFINITY;
    let mut max = 0.0_f64;
    for w in &mut work {
        w.dist = metric.distance(vp_item, &items[w.index]);
        min = min.min(w.dist);
        max = max.max(w.dist);
    }

    // Everything before the median position ends up no farther than it,
    // everything from it onwards no nearer.
    let median_index = work.len() / 2;
    let last = work.len() - 1;
    let pos = partition_nth(&mut work, 0, median_index + 1, last, &mut closer);
    let median = work[pos].dist;

    let right = work.split_off(median_index);
    let left = work;

    let left = build_node(items, metric, bucket_size, rng, left);
    let right = build_node(items, metric, bucket_size, rng, right);
    Node::vantage(
        vp,
        Some(Split {
            min,
            max,
            median,
            left,
            right,
        }),
    )
}
