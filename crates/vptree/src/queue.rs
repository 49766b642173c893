//! Size-bounded, distance-sorted accumulator for search results.

use crate::result::Neighbor;

/// Keeps the `capacity` nearest entries offered so far, sorted by ascending
/// distance.
///
/// The contents are sorted at all times, so the farthest entry is always the
/// last one and eviction is a plain truncate. Equal distances keep insertion
/// order. A capacity of zero means unbounded.
///
/// # Example
///
/// ```
/// use vantage_vptree::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(2);
/// assert_eq!(queue.insert(0, 3.0), None);
/// assert_eq!(queue.insert(1, 1.0), Some(3.0));
/// assert_eq!(queue.insert(2, 2.0), Some(2.0));
/// let indices: Vec<usize> = queue.list().iter().map(|n| n.index).collect();
/// assert_eq!(indices, vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoundedQueue {
    entries: Vec<Neighbor>,
    capacity: Option<usize>,
}

impl BoundedQueue {
    /// Creates an empty queue retaining at most `capacity` entries
    /// (`0` = unbounded).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: (capacity > 0).then_some(capacity),
        }
    }

    /// Offers an entry.
    ///
    /// Returns the distance of the farthest retained entry once the queue is
    /// full, `None` while it still has room (or when unbounded). Entries that
    /// would land past a full queue's tail are dropped, as are NaN distances.
    pub fn insert(&mut self, index: usize, distance: f64) -> Option<f64> {
        if !distance.is_nan() {
            let pos = self.entries.partition_point(|e| e.distance <= distance);
            if self.capacity.is_none_or(|cap| pos < cap) {
                self.entries.insert(pos, Neighbor::new(index, distance));
                if let Some(cap) = self.capacity {
                    self.entries.truncate(cap);
                }
            }
        }
        self.worst_when_full()
    }

    /// Returns the contents in ascending distance order.
    pub fn list(&self) -> Vec<Neighbor> {
        self.entries.clone()
    }

    /// Consumes the queue, returning its contents in ascending distance order.
    pub fn into_list(self) -> Vec<Neighbor> {
        self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries, `None` if unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn worst_when_full(&self) -> Option<f64> {
        match self.capacity {
            Some(cap) if self.entries.len() == cap => self.entries.last().map(|e| e.distance),
            _ => None,
        }
    }
}
