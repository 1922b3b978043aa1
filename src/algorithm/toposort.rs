use crate::{
    graph::*,
    traversal::{depth_first, TraversalState, Visitor},
    GraphError,
};
use tracing::{debug, warn};

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Lists all vertices in depth-first finish order.
    ///
    /// Every vertex comes after all vertices reachable from it:
    /// for an edge `x -> y`, `y` is listed before `x`.
    /// Reverse the result to get dependencies last.
    fn toposort(&self) -> Result<Vec<VertexId>, GraphError> {
        if !self.is_directed() {
            warn!("topological sort asked for an undirected graph");
            return Err(GraphError::Undirected("topological sort"));
        }
        let mut state = TraversalState::for_graph(self);
        let mut order = FinishOrder(Vec::with_capacity(self.vertex_size()));
        for v in self.iter_vertices() {
            if !state.is_discovered(v) {
                depth_first::run(self, v, &mut order, &mut state)?;
            }
        }
        debug!(vertex_size = order.0.len(), "topologically sorted");
        Ok(order.0)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

struct FinishOrder(Vec<VertexId>);

impl Visitor for FinishOrder {
    type Error = GraphError;

    fn edge(&mut self, x: VertexId, y: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        if state.is_discovered(y) && !state.is_processed(y) {
            debug!(?x, ?y, "back edge");
            return Err(GraphError::Cycle { from: x, to: y });
        }
        Ok(())
    }

    fn exit_vertex(&mut self, v: VertexId, _: &TraversalState) -> Result<(), Self::Error> {
        self.0.push(v);
        Ok(())
    }
}
