use crate::{
    graph::*,
    traversal::{breadth_first, depth_first, TraversalState, Visitor},
};
use std::convert::Infallible;
use tracing::debug;

pub trait ConnectedComponents
where
    Self: QueryableGraph + Sized,
{
    /// Counts how many breadth-first starts it takes to discover every vertex.
    ///
    /// Traversals only follow out-edges, so on a directed graph this is the number
    /// of roots needed to cover it in id order, rather than its strong or weak components.
    fn connected_components(&self) -> usize {
        let count = count_roots(self, breadth_first::run);
        debug!(count, "connected components by breadth-first coverage");
        count
    }

    /// The same count, with depth-first traversals.
    fn connected_components_depth_first(&self) -> usize {
        let count = count_roots(self, depth_first::run);
        debug!(count, "connected components by depth-first coverage");
        count
    }
}

impl<G: QueryableGraph> ConnectedComponents for G {}

struct Untouched;

impl Visitor for Untouched {
    type Error = Infallible;
}

type Drive<G> = fn(&G, VertexId, &mut Untouched, &mut TraversalState) -> Result<(), Infallible>;

fn count_roots<G: QueryableGraph>(graph: &G, drive: Drive<G>) -> usize {
    let mut state = TraversalState::for_graph(graph);
    let mut count = 0;
    for v in graph.iter_vertices() {
        if !state.is_discovered(v) {
            count += 1;
            super::into_ok(drive(graph, v, &mut Untouched, &mut state));
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn empty() {
        let g = Graph::undirected(&[]).unwrap();
        assert_eq!(g.connected_components(), 0);
    }

    #[test]
    fn two_islands() {
        let g = Graph::undirected(&[1, 2, 3, 4, 4, 5]).unwrap();
        assert_eq!(g.connected_components(), 2);
        assert_eq!(g.connected_components_depth_first(), 2);
    }

    #[test]
    fn directed_counts_coverage_roots() {
        // weakly connected, yet 1 has no way out
        let g = Graph::directed(&[2, 1, 3, 2]).unwrap();
        assert_eq!(g.connected_components(), 3);
        let g = Graph::directed(&[1, 2, 2, 3]).unwrap();
        assert_eq!(g.connected_components(), 1);
    }

    #[quickcheck]
    fn matches_petgraph_on_undirected(pairs: Pairs) {
        let g = Graph::undirected(&pairs.pairs).unwrap();
        let mut oracle = petgraph::graph::UnGraph::<(), ()>::new_undirected();
        for _ in 0..pairs.vertex_size() {
            oracle.add_node(());
        }
        for (x, y) in pairs.iter() {
            oracle.add_edge((x as u32 - 1).into(), (y as u32 - 1).into(), ());
        }
        assert_eq!(g.connected_components(), petgraph::algo::connected_components(&oracle));
    }

    #[quickcheck]
    fn breadth_first_and_depth_first_agree(pairs: Pairs) {
        for directed in [true, false] {
            let g = Graph::new(directed, &pairs.pairs).unwrap();
            assert_eq!(g.connected_components(), g.connected_components_depth_first());
            assert_eq!(g.connected_components(), g.connected_components());
        }
    }
}
