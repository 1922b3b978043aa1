use crate::{
    graph::*,
    traversal::{depth_first, EdgeClass, TraversalState, Visitor},
    GraphError,
};
use tracing::{debug, trace, warn};

/// Strongly connected components, numbered from 1 in the order they finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccPartition {
    count: usize,
    /// Component of each vertex, indexed by vertex id.
    membership: Vec<usize>,
}

impl SccPartition {
    pub fn count(&self) -> usize {
        self.count
    }

    /// The component holding `v`, if `v` is a vertex of the graph.
    pub fn component_of(&self, v: VertexId) -> Option<usize> {
        match self.membership.get(v.0) {
            Some(&id) if id > 0 => Some(id),
            _ => None,
        }
    }

    /// Vertices of component `id`, in ascending order.
    pub fn members(&self, id: usize) -> impl Iterator<Item = VertexId> + '_ {
        self.iter()
            .filter(move |(_, component)| *component == id)
            .map(|(v, _)| v)
    }

    /// Every vertex with its component.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.membership
            .iter()
            .enumerate()
            .skip(VertexId::FIRST.0)
            .map(|(v, component)| (VertexId(v), *component))
    }
}

pub trait StronglyConnectedComponents
where
    Self: QueryableGraph + Sized,
{
    /// Tarjan-style decomposition on top of depth-first traversals covering every vertex.
    ///
    /// A component gets its id when the depth-first traversal leaves its earliest entered vertex,
    /// so a lower id means it finished earlier.
    fn strongly_connected_components(&self) -> Result<SccPartition, GraphError> {
        if !self.is_directed() {
            warn!("strongly connected components asked for an undirected graph");
            return Err(GraphError::Undirected("strongly connected components"));
        }
        let n = self.vertex_size() + 1;
        let mut state = TraversalState::for_graph(self);
        let mut tarjan = Tarjan {
            low: (0..n).map(VertexId).collect(),
            active: Vec::new(),
            membership: vec![0; n],
            count: 0,
        };
        for v in self.iter_vertices() {
            if !state.is_discovered(v) {
                depth_first::run(self, v, &mut tarjan, &mut state)?;
            }
        }
        debug!(count = tarjan.count, "strongly connected components found");
        Ok(SccPartition {
            count: tarjan.count,
            membership: tarjan.membership,
        })
    }
}

impl<G: QueryableGraph> StronglyConnectedComponents for G {}

struct Tarjan {
    /// The earliest entered vertex known to share a component with each vertex.
    low: Vec<VertexId>,
    /// Entered vertices not assigned to any component yet.
    active: Vec<VertexId>,
    membership: Vec<usize>,
    count: usize,
}

impl Tarjan {
    fn lower(&mut self, x: VertexId, y: VertexId, state: &TraversalState) {
        if state.entry_time(y) < state.entry_time(self.low[x.0]) {
            self.low[x.0] = y;
        }
    }
}

impl Visitor for Tarjan {
    type Error = GraphError;

    fn enter_vertex(&mut self, v: VertexId, _: &TraversalState) -> Result<(), Self::Error> {
        self.active.push(v);
        Ok(())
    }

    fn edge(&mut self, x: VertexId, y: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        match state.classify_edge(x, y)? {
            EdgeClass::Back => self.lower(x, y, state),
            // a finished component must not pull `low` into it
            EdgeClass::Cross if self.membership[y.0] == 0 => self.lower(x, y, state),
            _ => {}
        }
        Ok(())
    }

    fn exit_vertex(&mut self, v: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        if self.low[v.0] == v {
            self.count += 1;
            while let Some(w) = self.active.pop() {
                self.membership[w.0] = self.count;
                if w == v {
                    break;
                }
            }
            trace!(root = ?v, id = self.count, "component finished");
        } else if let Some(parent) = state.parent(v) {
            let low = self.low[v.0];
            self.lower(parent, low, state);
        }
        Ok(())
    }
}
