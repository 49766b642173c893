//! Output types for nearest-neighbor queries.

/// A single search hit: an element index and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the element in the tree's dataset.
    pub index: usize,
    /// Distance from the query to the element.
    pub distance: f64,
}

impl Neighbor {
    /// Creates a new `Neighbor`.
    pub fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }
}

/// Result of a nearest-neighbor query.
///
/// Neighbors are sorted by ascending distance. Equal distances keep the
/// order in which the traversal discovered them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    neighbors: Vec<Neighbor>,
    /// Number of distance evaluations performed by the query.
    comparisons: usize,
}

impl SearchResult {
    /// Creates a new `SearchResult`.
    pub(crate) fn new(neighbors: Vec<Neighbor>, comparisons: usize) -> Self {
        Self {
            neighbors,
            comparisons,
        }
    }

    /// Returns the neighbors, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns the element indices, nearest first.
    pub fn indices(&self) -> Vec<usize> {
        self.neighbors.iter().map(|n| n.index).collect()
    }

    /// Returns the number of distance evaluations the query performed.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Returns the number of neighbors found.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Consumes the result, returning the neighbors.
    pub fn into_neighbors(self) -> Vec<Neighbor> {
        self.neighbors
    }
}
