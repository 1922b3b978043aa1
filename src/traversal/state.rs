use crate::graph::*;

/// Bookkeeping of one traversal run.
///
/// Arrays are indexed by vertex id, with slot 0 left for `VertexId::NONE`.
/// Entry and exit times are only stamped by depth-first runs.
/// They share one counter, bumped once per entry and once per exit.
///
/// Reusing a state across several starts keeps the discovered flags,
/// which is how algorithms cover every component of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    discovered: Vec<bool>,
    processed: Vec<bool>,
    parent: Vec<VertexId>,
    entry_time: Vec<usize>,
    exit_time: Vec<usize>,
    time: usize,
}

impl TraversalState {
    pub fn new(vertex_size: usize) -> Self {
        let size = vertex_size + 1;
        Self {
            discovered: vec![false; size],
            processed: vec![false; size],
            parent: vec![VertexId::NONE; size],
            entry_time: vec![0; size],
            exit_time: vec![0; size],
            time: 0,
        }
    }

    pub fn for_graph<G: QueryableGraph>(graph: &G) -> Self {
        Self::new(graph.vertex_size())
    }

    /// How many vertices this state has room for.
    pub fn vertex_size(&self) -> usize {
        self.discovered.len() - 1
    }

    pub fn is_discovered(&self, v: VertexId) -> bool {
        self.discovered[v.0]
    }

    pub fn is_processed(&self, v: VertexId) -> bool {
        self.processed[v.0]
    }

    /// The vertex `v` was discovered from, `None` for roots and undiscovered vertices.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        let p = self.parent[v.0];
        if p.is_none() {
            None
        } else {
            Some(p)
        }
    }

    pub fn entry_time(&self, v: VertexId) -> usize {
        self.entry_time[v.0]
    }

    pub fn exit_time(&self, v: VertexId) -> usize {
        self.exit_time[v.0]
    }

    /// The latest value of the shared depth-first clock.
    pub fn time(&self) -> usize {
        self.time
    }

    pub(crate) fn discover(&mut self, v: VertexId) {
        self.discovered[v.0] = true;
    }

    pub(crate) fn process(&mut self, v: VertexId) {
        self.processed[v.0] = true;
    }

    pub(crate) fn set_parent(&mut self, v: VertexId, parent: VertexId) {
        self.parent[v.0] = parent;
    }

    pub(crate) fn stamp_entry(&mut self, v: VertexId) {
        self.time += 1;
        self.entry_time[v.0] = self.time;
    }

    pub(crate) fn stamp_exit(&mut self, v: VertexId) {
        self.time += 1;
        self.exit_time[v.0] = self.time;
    }
}
