use crate::{graph::*, traversal::DepthFirstStrategy, GraphError};
use bimap::BiHashMap;

/// This wraps a [Graph] and how its vertices are mapped from arbitrary external ids.
///
/// External ids are densified in order of first appearance,
/// so the first id met becomes `VertexId(1)`.
#[derive(Clone)]
pub struct MappedGraph {
    pub graph: Graph,
    pub vmap: BiHashMap<i64, VertexId>,
}

impl MappedGraph {
    pub fn new(directed: bool, pairs: &[(i64, i64)]) -> Result<Self, GraphError> {
        let mut vid_factory = VertexIdFactory::new();
        let mut vmap = BiHashMap::with_capacity(pairs.len());
        let mut dense = Vec::with_capacity(pairs.len() * 2);
        for (x, y) in pairs.iter() {
            for ext in [*x, *y] {
                let vid = match vmap.get_by_left(&ext) {
                    Some(vid) => *vid,
                    None => {
                        let vid = vid_factory.one_more();
                        vmap.insert(ext, vid);
                        vid
                    }
                };
                dense.push(vid.to_raw());
            }
        }
        debug_assert_eq!(vid_factory.issued(), vmap.len());
        let graph = Graph::new(directed, &dense)?;
        Ok(Self { graph, vmap })
    }

    pub fn with_depth_first_strategy(mut self, strategy: DepthFirstStrategy) -> Self {
        self.graph = self.graph.with_depth_first_strategy(strategy);
        self
    }

    /// The dense vertex standing for an external id.
    pub fn vertex_of(&self, external: i64) -> Option<VertexId> {
        self.vmap.get_by_left(&external).copied()
    }

    /// The external id a dense vertex was built from.
    pub fn external_of(&self, v: &VertexId) -> Option<i64> {
        self.vmap.get_by_right(v).copied()
    }
}

impl QueryableGraph for MappedGraph {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn neighbors(&self, v: &VertexId) -> &[VertexId] {
        self.graph.neighbors(v)
    }

    fn depth_first_strategy(&self) -> DepthFirstStrategy {
        self.graph.depth_first_strategy()
    }
}

impl std::fmt::Debug for MappedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            writeln!(f, "{:?} <- {:?}", v, self.external_of(&v))?;
        }
        write!(f, "{:?}", self.graph.debug())
    }
}
