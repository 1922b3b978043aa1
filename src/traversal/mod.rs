//! The traversal engine.
//!
//! Breadth-first and depth-first drivers share one contract.
//! They mark vertices in a [TraversalState] and call back into a [Visitor]
//! on entering a vertex, on leaving it, and on each edge worth reporting.
//! Algorithms keep their own accumulators inside their visitor.
//!
//! ```rust
//! use graphwalk::{graph::*, traversal::*};
//!
//! let g = Graph::undirected(&[1, 2, 1, 3, 3, 4]).unwrap();
//! let mut order = vec![];
//! let state = g
//!     .depth_first(
//!         VertexId(1),
//!         |v, _| order.push(v.0),
//!         |_, _| {},
//!         |_, _, _| {},
//!         TraversalState::for_graph(&g),
//!     )
//!     .unwrap();
//! assert_eq!(order, vec![1, 3, 4, 2]);
//! assert_eq!(state.parent(VertexId(4)), Some(VertexId(3)));
//! ```

mod state;
pub use self::state::*;
mod visitor;
pub use self::visitor::*;
mod classify;
pub use self::classify::*;
pub(crate) mod breadth_first;
pub(crate) mod depth_first;

use crate::{graph::*, GraphError};

/// How depth-first traversals are driven.
///
/// Both produce the same events, parents and timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DepthFirstStrategy {
    /// Recursion on the call stack; depth is bounded by the longest path from the start.
    #[default]
    Recursive,
    /// An explicit stack on the heap, for graphs too deep to recurse on.
    Iterative,
}

/// Exposes the traversal engine as methods on every graph.
pub trait Traverse
where
    Self: QueryableGraph + Sized,
{
    /// Breadth-first traversal from `start`, driving `visitor`.
    ///
    /// `state` may carry discovered flags from earlier runs on the same graph.
    fn breadth_first_visit<V>(
        &self,
        start: VertexId,
        visitor: &mut V,
        state: &mut TraversalState,
    ) -> Result<(), V::Error>
    where
        V: Visitor,
        V::Error: From<GraphError>,
    {
        check_run(self, start, state)?;
        breadth_first::run(self, start, visitor, state)
    }

    /// Depth-first traversal from `start`, driving `visitor`.
    fn depth_first_visit<V>(
        &self,
        start: VertexId,
        visitor: &mut V,
        state: &mut TraversalState,
    ) -> Result<(), V::Error>
    where
        V: Visitor,
        V::Error: From<GraphError>,
    {
        check_run(self, start, state)?;
        depth_first::run(self, start, visitor, state)
    }

    /// Breadth-first traversal with closures as hooks, returning the populated state.
    fn breadth_first<E, X, F>(
        &self,
        start: VertexId,
        on_enter: E,
        on_exit: X,
        on_edge: F,
        mut state: TraversalState,
    ) -> Result<TraversalState, GraphError>
    where
        E: FnMut(VertexId, &TraversalState),
        X: FnMut(VertexId, &TraversalState),
        F: FnMut(VertexId, VertexId, &TraversalState),
    {
        let mut visitor = FnVisitor::new(on_enter, on_exit, on_edge);
        self.breadth_first_visit(start, &mut visitor, &mut state)?;
        Ok(state)
    }

    /// Depth-first traversal with closures as hooks, returning the populated state.
    fn depth_first<E, X, F>(
        &self,
        start: VertexId,
        on_enter: E,
        on_exit: X,
        on_edge: F,
        mut state: TraversalState,
    ) -> Result<TraversalState, GraphError>
    where
        E: FnMut(VertexId, &TraversalState),
        X: FnMut(VertexId, &TraversalState),
        F: FnMut(VertexId, VertexId, &TraversalState),
    {
        let mut visitor = FnVisitor::new(on_enter, on_exit, on_edge);
        self.depth_first_visit(start, &mut visitor, &mut state)?;
        Ok(state)
    }
}

impl<G: QueryableGraph> Traverse for G {}

/// Rejects a start vertex or a state that does not belong to `graph`.
pub(crate) fn check_run<G>(graph: &G, start: VertexId, state: &TraversalState) -> Result<(), GraphError>
where
    G: QueryableGraph,
{
    if state.vertex_size() != graph.vertex_size() {
        return Err(GraphError::StateMismatch {
            state_size: state.vertex_size(),
            vertex_size: graph.vertex_size(),
        });
    }
    if !graph.contains_vertex(&start) {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            vertex_size: graph.vertex_size(),
        });
    }
    Ok(())
}
