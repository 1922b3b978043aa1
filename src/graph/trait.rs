use crate::{graph::*, traversal::DepthFirstStrategy};

/// Read access the traversal engine needs from a graph.
///
/// Vertices must be labeled `1..=vertex_size()`.
pub trait QueryableGraph {
    fn is_directed(&self) -> bool;
    fn vertex_size(&self) -> usize;
    fn edge_size(&self) -> usize;

    /// Out-neighbors of `v`, in the order traversals visit them.
    fn neighbors(&self, v: &VertexId) -> &[VertexId];

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((VertexId::FIRST.0..=self.vertex_size()).map(VertexId))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        !v.is_none() && v.0 <= self.vertex_size()
    }

    fn depth_first_strategy(&self) -> DepthFirstStrategy {
        DepthFirstStrategy::default()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
