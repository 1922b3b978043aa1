use crate::{graph::VertexId, traversal::TraversalState, GraphError};

/// Hooks a traversal calls back into.
///
/// Every hook defaults to doing nothing.
/// An `Err` from any hook stops the traversal and is handed back to the caller.
pub trait Visitor {
    type Error;

    /// Called when `v` is taken up, before its edges are scanned.
    fn enter_vertex(&mut self, _v: VertexId, _state: &TraversalState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once all edges of `v` are scanned.
    fn exit_vertex(&mut self, _v: VertexId, _state: &TraversalState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each edge `x -> y` the traversal reports.
    fn edge(&mut self, _x: VertexId, _y: VertexId, _state: &TraversalState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A [Visitor] made of three closures.
pub struct FnVisitor<E, X, F> {
    on_enter: E,
    on_exit: X,
    on_edge: F,
}

impl<E, X, F> FnVisitor<E, X, F>
where
    E: FnMut(VertexId, &TraversalState),
    X: FnMut(VertexId, &TraversalState),
    F: FnMut(VertexId, VertexId, &TraversalState),
{
    pub fn new(on_enter: E, on_exit: X, on_edge: F) -> Self {
        Self {
            on_enter,
            on_exit,
            on_edge,
        }
    }
}

impl<E, X, F> Visitor for FnVisitor<E, X, F>
where
    E: FnMut(VertexId, &TraversalState),
    X: FnMut(VertexId, &TraversalState),
    F: FnMut(VertexId, VertexId, &TraversalState),
{
    type Error = GraphError;

    fn enter_vertex(&mut self, v: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        (self.on_enter)(v, state);
        Ok(())
    }

    fn exit_vertex(&mut self, v: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        (self.on_exit)(v, state);
        Ok(())
    }

    fn edge(&mut self, x: VertexId, y: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        (self.on_edge)(x, y, state);
        Ok(())
    }
}
