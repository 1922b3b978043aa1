use crate::{
    graph::*,
    traversal::{depth_first, TraversalState, Visitor},
};
use std::convert::Infallible;
use tracing::debug;

pub trait HasCycle
where
    Self: QueryableGraph + Sized,
{
    /// Looks for a cycle with one depth-first traversal from `VertexId(1)`.
    ///
    /// Only the part of the graph reachable from `VertexId(1)` is examined,
    /// so a cycle elsewhere goes unnoticed.
    /// On directed graphs any edge to an already discovered vertex other than
    /// the parent counts, forward and cross edges included.
    fn has_cycle(&self) -> bool {
        if self.vertex_size() == 0 {
            return false;
        }
        let mut state = TraversalState::for_graph(self);
        let mut witness = CycleWitness(None);
        super::into_ok(depth_first::run(
            self,
            VertexId::FIRST,
            &mut witness,
            &mut state,
        ));
        if let Some((x, y)) = witness.0 {
            debug!(?x, ?y, "cycle closed");
        }
        witness.0.is_some()
    }
}

impl<G: QueryableGraph> HasCycle for G {}

/// The first edge found closing a cycle.
struct CycleWitness(Option<(VertexId, VertexId)>);

impl Visitor for CycleWitness {
    type Error = Infallible;

    fn edge(&mut self, x: VertexId, y: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        if state.is_discovered(y) && state.parent(x) != Some(y) {
            self.0.get_or_insert((x, y));
        }
        Ok(())
    }
}
