use crate::graph::VertexId;
use thiserror::Error;

/// Errors raised while building graphs, traversing them or running algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The flat pair list ended in the middle of a pair.
    #[error("pair list has odd length {0}")]
    OddPairList(usize),

    /// Vertex ids do not form the dense range `1..=N`.
    #[error("vertex ids are not dense: {missing:?} is missing from 1..={vertex_size}")]
    SparseVertexIds {
        missing: VertexId,
        vertex_size: usize,
    },

    /// A vertex given by the caller does not belong to the graph.
    #[error("{vertex:?} is out of range 1..={vertex_size}")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_size: usize,
    },

    /// A traversal state was sized for another graph.
    #[error("traversal state holds {state_size} vertices but the graph has {vertex_size}")]
    StateMismatch {
        state_size: usize,
        vertex_size: usize,
    },

    /// The algorithm only makes sense on directed graphs.
    #[error("{0} requires a directed graph")]
    Undirected(&'static str),

    /// A back edge was met where the graph must be acyclic.
    #[error("back edge {from:?} -> {to:?} closes a cycle")]
    Cycle { from: VertexId, to: VertexId },

    /// Traversal bookkeeping is inconsistent; this is a bug, not bad input.
    #[error("cannot classify edge {from:?} -> {to:?}")]
    UnclassifiableEdge { from: VertexId, to: VertexId },
}
