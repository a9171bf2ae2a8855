//! Structural properties of small undirected graphs.
//!
//! Graphs have at most [graph::MAX_VERTICES] vertices and keep one
//! [graph::VertexSet] of neighbors per vertex, so most algorithms here work
//! with whole neighborhoods at once through word-level bit operations.
//!
//! Algorithms live in [algorithm] as extension traits implemented for every
//! [graph::QueryableGraph]:
//!
//! ```rust
//! use tinygraph::{algorithm::*, graph::*};
//!
//! let c5 = Graph::cycle(5);
//! assert!(!c5.is_chordal());
//! assert!(!c5.is_perfect());
//! assert_eq!(c5.chromatic_number(), 3);
//! ```
pub mod algorithm;
pub mod graph;
mod error;
pub use self::error::*;
