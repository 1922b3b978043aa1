use crate::{
    graph::*,
    traversal::{breadth_first, TraversalState, Visitor},
};
use std::convert::Infallible;
use tracing::debug;

pub trait Bipartite
where
    Self: QueryableGraph + Sized,
{
    /// Tries to two-color the graph, one breadth-first traversal per uncovered vertex.
    ///
    /// Stops starting new traversals once a conflict is found.
    fn is_bipartite(&self) -> bool {
        let mut state = TraversalState::for_graph(self);
        let mut coloring = TwoColoring {
            colors: vec![Color::Blank; self.vertex_size() + 1],
            conflict: None,
        };
        for v in self.iter_vertices() {
            if coloring.conflict.is_some() {
                break;
            }
            if !state.is_discovered(v) {
                coloring.colors[v.0] = Color::Red;
                super::into_ok(breadth_first::run(self, v, &mut coloring, &mut state));
            }
        }
        match coloring.conflict {
            Some((x, y)) => {
                debug!(?x, ?y, "not bipartite");
                false
            }
            None => true,
        }
    }
}

impl<G: QueryableGraph> Bipartite for G {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Blank,
    Red,
    Black,
}

impl Color {
    fn complement(self) -> Self {
        match self {
            Color::Red => Color::Black,
            _ => Color::Red,
        }
    }
}

struct TwoColoring {
    colors: Vec<Color>,
    /// The first edge found with equal colors on both ends.
    conflict: Option<(VertexId, VertexId)>,
}

impl Visitor for TwoColoring {
    type Error = Infallible;

    fn edge(&mut self, x: VertexId, y: VertexId, _: &TraversalState) -> Result<(), Self::Error> {
        if self.colors[x.0] == self.colors[y.0] {
            self.conflict.get_or_insert((x, y));
        } else {
            self.colors[y.0] = self.colors[x.0].complement();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn even_and_odd_cycles() {
        let square = Graph::undirected(&[1, 2, 2, 3, 3, 4, 4, 1]).unwrap();
        assert!(square.is_bipartite());
        let triangle = Graph::undirected(&[1, 2, 2, 3, 3, 1]).unwrap();
        assert!(!triangle.is_bipartite());
    }

    #[test]
    fn conflict_in_a_later_component() {
        let g = Graph::undirected(&[1, 2, 3, 4, 4, 5, 5, 3]).unwrap();
        assert!(!g.is_bipartite());
    }

    #[test]
    fn trivial() {
        assert!(Graph::undirected(&[]).unwrap().is_bipartite());
        assert!(Graph::undirected(&[1, 2]).unwrap().is_bipartite());
    }

    /// Tries every coloring, for small graphs only.
    fn brute_force(pairs: &Pairs) -> bool {
        let n = pairs.vertex_size();
        (0u32..1 << n).any(|mask| {
            pairs
                .iter()
                .all(|(x, y)| (mask >> (x - 1)) & 1 != (mask >> (y - 1)) & 1)
        })
    }

    #[quickcheck]
    fn bipartite_iff_two_colorable(pairs: Pairs) {
        let g = Graph::undirected(&pairs.pairs).unwrap();
        assert_eq!(g.is_bipartite(), brute_force(&pairs));
        assert_eq!(g.is_bipartite(), g.is_bipartite());
    }
}
