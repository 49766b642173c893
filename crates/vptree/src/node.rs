//! Tree node types.
//!
//! Nodes refer to dataset elements by index only. Each child subtree is owned
//! by its parent, and every element index appears in exactly one node.

/// A node of a vantage-point tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// No elements. The tree over an empty dataset, or an empty partition.
    #[default]
    Empty,
    /// A bucket of element indices stored without further partitioning.
    Leaf(Vec<usize>),
    /// A vantage point, optionally splitting its descendants in two.
    Vantage(Box<VantagePoint>),
}

/// A vantage point and the partition of its descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct VantagePoint {
    /// Dataset index of the vantage point element.
    pub index: usize,
    /// Descendants, or `None` when the vantage point was the last element
    /// of its working set.
    pub split: Option<Split>,
}

/// Distance bounds and children of a vantage point.
///
/// `left` holds elements whose distance to the vantage point is at most
/// `median`; `right` holds the rest, starting with the median element itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Smallest distance from the vantage point to a descendant.
    pub min: f64,
    /// Largest distance from the vantage point to a descendant.
    pub max: f64,
    /// Median split distance.
    pub median: f64,
    /// Descendants at distance `<= median`.
    pub left: Node,
    /// Descendants at distance `>= median`.
    pub right: Node,
}

impl Node {
    /// Creates a bucket leaf.
    pub fn leaf(indices: Vec<usize>) -> Self {
        Node::Leaf(indices)
    }

    /// Creates a vantage-point node.
    pub fn vantage(index: usize, split: Option<Split>) -> Self {
        Node::Vantage(Box::new(VantagePoint { index, split }))
    }

    /// Returns `true` for [`Node::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Collects every element index below (and including) this node,
    /// vantage point before its left then right subtree.
    pub fn indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_indices(&mut out);
        out
    }

    fn collect_indices(&self, out: &mut Vec<usize>) {
        match self {
            Node::Empty => {}
            Node::Leaf(bucket) => out.extend_from_slice(bucket),
            Node::Vantage(vp) => {
                out.push(vp.index);
                if let Some(split) = &vp.split {
                    split.left.collect_indices(out);
                    split.right.collect_indices(out);
                }
            }
        }
    }

    /// Number of levels below (and including) this node. `Empty` has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Empty => 0,
            Node::Leaf(_) => 1,
            Node::Vantage(vp) => {
                1 + vp
                    .split
                    .as_ref()
                    .map_or(0, |s| s.left.depth().max(s.right.depth()))
            }
        }
    }
}
