use crate::{
    graph::*,
    traversal::{check_run, depth_first, EdgeClass, TraversalState, Visitor},
    GraphError,
};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Why a vertex is a cut vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutKind {
    /// The traversal root, with more than one subtree.
    Root,
    /// Some child subtree reaches back no higher than this vertex.
    Parent,
    /// An end of a bridge, with vertices hanging on both sides of it.
    Bridge,
}

impl std::fmt::Display for CutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CutKind::Root => "root",
            CutKind::Parent => "parent",
            CutKind::Bridge => "bridge",
        };
        write!(f, "{}", label)
    }
}

pub trait ArticulationVertices
where
    Self: QueryableGraph + Sized,
{
    /// Finds the cut vertices of the component holding `start`.
    ///
    /// A vertex may qualify for several kinds; the last one found is kept.
    fn articulation_vertices(
        &self,
        start: VertexId,
    ) -> Result<HashMap<VertexId, CutKind, RandomState>, GraphError> {
        let mut state = TraversalState::for_graph(self);
        check_run(self, start, &state)?;
        let n = self.vertex_size() + 1;
        let mut finder = CutVertexFinder {
            ancestor: vec![VertexId::NONE; n],
            out_degree: vec![0; n],
            cuts: HashMap::with_hasher(RandomState::new()),
        };
        depth_first::run(self, start, &mut finder, &mut state)?;
        debug!(?start, count = finder.cuts.len(), "articulation vertices found");
        Ok(finder.cuts)
    }
}

impl<G: QueryableGraph> ArticulationVertices for G {}

struct CutVertexFinder {
    /// The earliest entered vertex reachable from a subtree through one back edge.
    ancestor: Vec<VertexId>,
    /// Number of tree edges down to children.
    out_degree: Vec<usize>,
    cuts: HashMap<VertexId, CutKind, RandomState>,
}

impl CutVertexFinder {
    fn mark(&mut self, v: VertexId, kind: CutKind) {
        trace!(?v, %kind, "cut vertex");
        self.cuts.insert(v, kind);
    }
}

impl Visitor for CutVertexFinder {
    type Error = GraphError;

    fn enter_vertex(&mut self, v: VertexId, _: &TraversalState) -> Result<(), Self::Error> {
        self.ancestor[v.0] = v;
        Ok(())
    }

    fn edge(&mut self, x: VertexId, y: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        match state.classify_edge(x, y)? {
            EdgeClass::Tree => {
                self.out_degree[x.0] += 1;
            }
            EdgeClass::Back if state.parent(x) != Some(y) => {
                if state.entry_time(y) < state.entry_time(self.ancestor[x.0]) {
                    self.ancestor[x.0] = y;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn exit_vertex(&mut self, v: VertexId, state: &TraversalState) -> Result<(), Self::Error> {
        let parent = match state.parent(v) {
            Some(parent) => parent,
            None => {
                if self.out_degree[v.0] > 1 {
                    self.mark(v, CutKind::Root);
                }
                return Ok(());
            }
        };
        // below the root's own children, the parent may separate v's subtree
        if state.parent(parent).is_some() {
            if self.ancestor[v.0] == parent {
                self.mark(parent, CutKind::Parent);
            } else if self.ancestor[v.0] == v {
                self.mark(parent, CutKind::Bridge);
                if self.out_degree[v.0] > 0 {
                    self.mark(v, CutKind::Bridge);
                }
            }
        }
        let reach = self.ancestor[v.0];
        if state.entry_time(reach) < state.entry_time(self.ancestor[parent.0]) {
            self.ancestor[parent.0] = reach;
        }
        Ok(())
    }
}
