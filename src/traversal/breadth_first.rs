use crate::{
    graph::*,
    traversal::{TraversalState, Visitor},
};
use std::collections::VecDeque;

/// Level-order walk from `start`, which must belong to `graph` and fit in `state`.
///
/// On undirected graphs an edge is reported unless its far end is already processed.
/// The edge back to a parent is thus skipped, but an edge to a vertex discovered and
/// still queued is reported from both sides.
pub(crate) fn run<G, V>(
    graph: &G,
    start: VertexId,
    visitor: &mut V,
    state: &mut TraversalState,
) -> Result<(), V::Error>
where
    G: QueryableGraph,
    V: Visitor + ?Sized,
{
    let directed = graph.is_directed();
    let mut queue = VecDeque::new();
    state.discover(start);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        visitor.enter_vertex(v, state)?;
        state.process(v);
        for &y in graph.neighbors(&v) {
            if directed || !state.is_processed(y) {
                visitor.edge(v, y, state)?;
            }
            if !state.is_discovered(y) {
                state.discover(y);
                state.set_parent(y, v);
                queue.push_back(y);
            }
        }
        visitor.exit_vertex(v, state)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{graph::*, traversal::*};
    use quickcheck_macros::quickcheck;
    use std::collections::VecDeque;

    fn order_and_state(g: &Graph) -> (Vec<usize>, TraversalState) {
        let mut order = vec![];
        let state = g
            .breadth_first(
                VertexId(1),
                |v, _| order.push(v.0),
                |_, _| {},
                |_, _, _| {},
                TraversalState::for_graph(g),
            )
            .unwrap();
        (order, state)
    }

    #[test]
    fn undirected_level_order() {
        let g = Graph::undirected(&[1, 2, 1, 3, 3, 4]).unwrap();
        let (order, state) = order_and_state(&g);
        // 3 is met first, as it was inserted after 2
        assert_eq!(order, vec![1, 3, 2, 4]);
        for v in g.iter_vertices() {
            assert!(state.is_processed(v));
        }
        assert_eq!(state.parent(VertexId(1)), None);
        assert_eq!(state.parent(VertexId(2)), Some(VertexId(1)));
        assert_eq!(state.parent(VertexId(3)), Some(VertexId(1)));
        assert_eq!(state.parent(VertexId(4)), Some(VertexId(3)));
    }

    #[test]
    fn directed_level_order() {
        let g = Graph::directed(&[1, 2, 1, 3, 3, 4]).unwrap();
        let (order, state) = order_and_state(&g);
        assert_eq!(order, vec![1, 3, 2, 4]);
        assert_eq!(state.parent(VertexId(4)), Some(VertexId(3)));
        assert_eq!(state.time(), 0);
    }

    #[test]
    fn hooks_interleave() {
        let g = Graph::undirected(&[1, 2, 2, 3, 3, 1]).unwrap();
        let events = std::cell::RefCell::new(vec![]);
        g.breadth_first(
            VertexId(1),
            |v, _| events.borrow_mut().push(format!("enter {}", v.0)),
            |v, _| events.borrow_mut().push(format!("exit {}", v.0)),
            |x, y, _| events.borrow_mut().push(format!("edge {} {}", x.0, y.0)),
            TraversalState::for_graph(&g),
        )
        .unwrap();
        let oracle = vec![
            "enter 1", "edge 1 3", "edge 1 2", "exit 1",
            // 2 is discovered but not processed yet, so 3 -> 2 is reported
            "enter 3", "edge 3 2", "exit 3",
            "enter 2", "exit 2",
        ];
        assert_eq!(events.into_inner(), oracle);
    }

    #[test]
    fn unreachable_vertices_stay_undiscovered() {
        let g = Graph::directed(&[2, 1, 3, 2]).unwrap();
        let (order, state) = order_and_state(&g);
        assert_eq!(order, vec![1]);
        assert!(!state.is_discovered(VertexId(2)));
        assert!(!state.is_discovered(VertexId(3)));
    }

    #[test]
    fn bad_start() {
        let g = Graph::directed(&[1, 2]).unwrap();
        let res = g.breadth_first(
            VertexId(3),
            |_, _| {},
            |_, _| {},
            |_, _, _| {},
            TraversalState::for_graph(&g),
        );
        assert_eq!(
            res,
            Err(crate::GraphError::VertexOutOfRange {
                vertex: VertexId(3),
                vertex_size: 2,
            })
        );
        let res = g.breadth_first(
            VertexId(1),
            |_, _| {},
            |_, _| {},
            |_, _, _| {},
            TraversalState::new(5),
        );
        assert_eq!(
            res,
            Err(crate::GraphError::StateMismatch {
                state_size: 5,
                vertex_size: 2,
            })
        );
    }

    fn distances(g: &Graph, start: usize) -> Vec<Option<usize>> {
        let mut dist = vec![None; g.vertex_size() + 1];
        dist[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for y in g.neighbors(&VertexId(v)) {
                if dist[y.0].is_none() {
                    dist[y.0] = dist[v].map(|d| d + 1);
                    queue.push_back(y.0);
                }
            }
        }
        dist
    }

    #[quickcheck]
    fn parents_form_shortest_path_tree(pairs: Pairs) {
        for directed in [true, false] {
            let g = Graph::new(directed, &pairs.pairs).unwrap();
            if g.vertex_size() == 0 {
                continue;
            }
            let (_, state) = order_and_state(&g);
            let dist = distances(&g, 1);
            for v in g.iter_vertices() {
                assert_eq!(state.is_discovered(v), dist[v.0].is_some());
                if let Some(p) = state.parent(v) {
                    assert!(g.neighbors(&p).contains(&v));
                    assert_eq!(dist[p.0].map(|d| d + 1), dist[v.0]);
                }
            }
        }
    }
}
