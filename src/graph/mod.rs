//! Vertex sets, the dense [Graph] and useful graph wrappers.
//!
//! # Vertices and vertex sets
//!
//! Vertices are plain `usize` numbers $0, 1, \ldots, n-1$.
//! A [VertexSet] packs a set of them into one machine word,
//! so unions, intersections and differences of neighborhoods cost one instruction.
//! The width of that word bounds the order of every graph: see [MAX_VERTICES].
//!
//! # Graph traits
//!
//! Algorithms are written against [QueryableGraph], which only asks for the
//! order and the neighbor set of each vertex.
//! Mutation is split into [GrowableGraph], [EdgeShrinkableGraph] and [VertexShrinkableGraph].
//!
//! # Graph wrappers
//!
//! ## `ComplementView`
//!
//! It presents the complement of another graph without copying it.
//!
//! # Small-graph tooling
//!
//! [Graph::canonical] gives a canonical form, [Enumeration] lists all graphs of
//! an order up to isomorphism and [NamedGraphs] names the usual small graphs.

mod vertex_set;
pub use self::vertex_set::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod dense;
pub use self::dense::*;
mod components;
pub use self::components::*;
mod complement_view;
pub use self::complement_view::*;
mod graph_debug;
pub use self::graph_debug::*;
mod canonical;
mod graph6;
mod named;
pub use self::named::*;
mod enumerate;
pub use self::enumerate::*;
