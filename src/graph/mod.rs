//! Vertex ids, the read-only graph interface and its implementations.
//!
//! # `Graph`
//!
//! An adjacency arena built once from a flat pair list over the dense ids `1..=N`.
//! Neighbors come out in the reverse order they were inserted,
//! which fixes the order every traversal walks them in.
//!
//! # `MappedGraph`
//!
//! It wraps a `Graph` built from arbitrary external ids and how they map to dense vertices.

mod vertex;
pub use self::vertex::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency;
pub use self::adjacency::*;
mod mapped_graph;
pub use self::mapped_graph::*;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub use self::tests::*;
