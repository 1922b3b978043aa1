//! A graph over dense integer vertex ids and a hookable traversal engine.
//!
//! # Graphs
//!
//! Vertices are lightweight ID's, essentially `usize`, labeled `1..=N`.
//! `VertexId::NONE` (id 0) is reserved to say "no parent".
//! A [graph::Graph] is built once from a flat list of vertex pairs and never changes afterwards.
//! Use [graph::MappedGraph] when the ids at hand are not already dense.
//!
//! # Traversals
//!
//! Breadth-first and depth-first drivers call back into a [traversal::Visitor] on
//! entering a vertex, on leaving it, and on each edge worth reporting.
//! All bookkeeping of one run lives in a [traversal::TraversalState],
//! which algorithms reuse across roots to cover disconnected graphs.
//!
//! # Algorithms
//!
//! Connected components, bipartiteness, cycle detection, articulation vertices,
//! topological sorting and strongly connected components are extension traits in
//! [algorithm], implemented for every [graph::QueryableGraph].
//!
//! ```rust
//! use graphwalk::{algorithm::*, graph::*};
//!
//! let g = Graph::directed(&[1, 2, 2, 3, 3, 4, 4, 2]).unwrap();
//! let scc = g.strongly_connected_components().unwrap();
//! assert_eq!(scc.count(), 2);
//! assert_eq!(scc.component_of(VertexId(1)), Some(2));
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
pub mod traversal;
