//! Vantage-point trees for nearest-neighbor search in metric spaces.
//!
//! A [`VpTree`] indexes any dataset given only a pairwise distance function.
//! Each inner node picks a random vantage point, splits the remaining
//! elements at the median distance to it, and records the minimum, maximum
//! and median distances so that queries can skip subtrees that cannot hold a
//! closer match.
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vantage_vptree::{Euclidean, SearchConfig, TreeConfig, VpTree};
//!
//! let points = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![5.0, 5.0], vec![0.5, 0.2]];
//! let mut rng = StdRng::seed_from_u64(42);
//! let tree = VpTree::build(&points, Euclidean, &TreeConfig::new(), &mut rng);
//!
//! let result = tree.search(&vec![0.4, 0.1], &SearchConfig::nearest(2));
//! assert_eq!(result.indices(), vec![3, 0]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! VpTree::build()
//!   └─ build_root()              (build.rs)
//!        └─ partition_nth()      (select.rs, median split)
//!
//! VpTree::search()
//!   └─ search_root()             (search.rs)
//!        └─ BoundedQueue         (queue.rs, shrinks the search radius)
//!
//! VpTree::stringify()            (stringify.rs)
//! ```
//!
//! Vantage points are drawn from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the same tree.

pub mod config;
pub mod error;
pub mod metric;
pub mod node;
pub mod queue;
pub mod result;
pub mod select;
pub mod tree;

pub(crate) mod build;
pub(crate) mod search;
mod stringify;

pub use config::{SearchConfig, TreeConfig};
pub use error::VpTreeError;
pub use metric::{Chebyshev, Euclidean, Manhattan, Metric};
pub use node::{Node, Split, VantagePoint};
pub use queue::BoundedQueue;
pub use result::{Neighbor, SearchResult};
pub use select::{nth_element, select};
pub use tree::VpTree;
