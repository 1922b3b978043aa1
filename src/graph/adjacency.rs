use crate::{graph::*, traversal::DepthFirstStrategy, GraphError};
use tracing::{debug, warn};

/// An immutable graph over the dense vertex ids `1..=N`, built from a flat pair list.
///
/// All adjacency lives in one arena.
/// The neighbors of `v` are `arena[offsets[v]..offsets[v + 1]]`,
/// stored in the reverse order of insertion.
///
/// | Operation        | Complexity                       |
/// | ---------------- | -------------------------------- |
/// | `new`            | $O(\|E\| \log \|E\|)$            |
/// | `neighbors`      | $O(1)$                           |
/// | `vertex_size`    | $O(1)$                           |
/// | `edge_size`      | $O(1)$                           |
/// | `iter_vertices`  | $O(1)$ on each call to `.next`   |
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    directed: bool,
    edge_size: usize,
    offsets: Vec<usize>,
    arena: Vec<VertexId>,
    strategy: DepthFirstStrategy,
}

impl Graph {
    /// Builds a graph from `pairs = [x1, y1, x2, y2, ...]`.
    ///
    /// Each pair inserts `x -> y`, and also `y -> x` when `directed` is false.
    /// Ids appearing in `pairs` must be exactly `1..=N` for some `N`.
    pub fn new(directed: bool, pairs: &[usize]) -> Result<Self, GraphError> {
        if pairs.len() % 2 != 0 {
            warn!(len = pairs.len(), "rejecting pair list of odd length");
            return Err(GraphError::OddPairList(pairs.len()));
        }
        let vertex_size = dense_vertex_size(pairs)?;

        let mut degrees = vec![0usize; vertex_size + 1];
        for pair in pairs.chunks_exact(2) {
            degrees[pair[0]] += 1;
            if !directed {
                degrees[pair[1]] += 1;
            }
        }
        let mut offsets = Vec::with_capacity(vertex_size + 2);
        offsets.push(0);
        let mut acc = 0;
        for d in degrees.iter() {
            acc += d;
            offsets.push(acc);
        }

        // Filling each slice back to front puts the latest insertion first.
        let mut cursors: Vec<usize> = offsets[1..].to_vec();
        let mut arena = vec![VertexId::NONE; acc];
        let mut insert = |x: usize, y: usize| {
            cursors[x] -= 1;
            arena[cursors[x]] = VertexId(y);
        };
        for pair in pairs.chunks_exact(2) {
            insert(pair[0], pair[1]);
            if !directed {
                insert(pair[1], pair[0]);
            }
        }

        let res = Self {
            directed,
            edge_size: pairs.len() / 2,
            offsets,
            arena,
            strategy: DepthFirstStrategy::default(),
        };
        debug!(
            directed,
            vertex_size,
            edge_size = res.edge_size,
            "graph built"
        );
        Ok(res)
    }

    pub fn directed(pairs: &[usize]) -> Result<Self, GraphError> {
        Self::new(true, pairs)
    }

    pub fn undirected(pairs: &[usize]) -> Result<Self, GraphError> {
        Self::new(false, pairs)
    }

    /// Chooses how depth-first traversals over this graph are driven.
    pub fn with_depth_first_strategy(mut self, strategy: DepthFirstStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Returns `N` if the distinct ids in `pairs` are exactly `1..=N`.
fn dense_vertex_size(pairs: &[usize]) -> Result<usize, GraphError> {
    let mut ids = pairs.to_vec();
    ids.sort_unstable();
    ids.dedup();
    let vertex_size = ids.len();
    if ids.first() == Some(&VertexId::NONE.0) {
        warn!("rejecting reserved vertex id 0");
        return Err(GraphError::VertexOutOfRange {
            vertex: VertexId::NONE,
            vertex_size,
        });
    }
    for (expected, id) in (VertexId::FIRST.0..).zip(ids.iter()) {
        if *id != expected {
            let missing = VertexId(expected);
            warn!(?missing, vertex_size, "rejecting sparse vertex ids");
            return Err(GraphError::SparseVertexIds {
                missing,
                vertex_size,
            });
        }
    }
    Ok(vertex_size)
}

impl QueryableGraph for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_size(&self) -> usize {
        self.offsets.len() - 2
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn neighbors(&self, v: &VertexId) -> &[VertexId] {
        &self.arena[self.offsets[v.0]..self.offsets[v.0 + 1]]
    }

    fn depth_first_strategy(&self) -> DepthFirstStrategy {
        self.strategy
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn undirected_sizes() {
        let g = Graph::undirected(&[1, 2, 1, 3, 3, 4, 4, 1, 4, 2]).unwrap();
        assert!(!g.is_directed());
        assert_eq!(g.edge_size(), 5);
        assert_eq!(g.vertex_size(), 4);
    }

    #[test]
    fn directed_sizes() {
        let g = Graph::directed(&[1, 2, 1, 3, 3, 4, 4, 1, 4, 2]).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.edge_size(), 5);
        assert_eq!(g.vertex_size(), 4);
    }

    #[test]
    fn neighbors_in_reverse_insertion_order() {
        let g = Graph::undirected(&[1, 2, 1, 3, 3, 4]).unwrap();
        assert_eq!(g.neighbors(&VertexId(1)), &[VertexId(3), VertexId(2)]);
        assert_eq!(g.neighbors(&VertexId(3)), &[VertexId(4), VertexId(1)]);
        assert_eq!(g.neighbors(&VertexId(2)), &[VertexId(1)]);

        let g = Graph::directed(&[1, 2, 1, 3, 3, 4]).unwrap();
        assert_eq!(g.neighbors(&VertexId(1)), &[VertexId(3), VertexId(2)]);
        assert!(g.neighbors(&VertexId(4)).is_empty());
    }

    #[test]
    fn empty_graph() {
        let g = Graph::directed(&[]).unwrap();
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.edge_size(), 0);
        assert_eq!(g.iter_vertices().count(), 0);
    }

    #[test]
    fn odd_pair_list() {
        assert_eq!(
            Graph::directed(&[1, 2, 3]),
            Err(GraphError::OddPairList(3))
        );
    }

    #[test]
    fn sparse_ids() {
        assert_eq!(
            Graph::undirected(&[1, 2, 2, 4]),
            Err(GraphError::SparseVertexIds {
                missing: VertexId(3),
                vertex_size: 3,
            })
        );
        assert_eq!(
            Graph::undirected(&[2, 3]),
            Err(GraphError::SparseVertexIds {
                missing: VertexId(1),
                vertex_size: 2,
            })
        );
    }

    #[test]
    fn reserved_id() {
        assert_eq!(
            Graph::directed(&[0, 1]),
            Err(GraphError::VertexOutOfRange {
                vertex: VertexId::NONE,
                vertex_size: 2,
            })
        );
    }

    #[test]
    fn contains_vertex() {
        let g = Graph::directed(&[1, 2]).unwrap();
        assert!(!g.contains_vertex(&VertexId::NONE));
        assert!(g.contains_vertex(&VertexId(1)));
        assert!(g.contains_vertex(&VertexId(2)));
        assert!(!g.contains_vertex(&VertexId(3)));
    }

    #[quickcheck]
    fn undirected_pairs_link_both_ways(pairs: Pairs) {
        let g = Graph::undirected(&pairs.pairs).unwrap();
        assert_eq!(g.edge_size(), pairs.pairs.len() / 2);
        for pair in pairs.pairs.chunks_exact(2) {
            let (x, y) = (VertexId(pair[0]), VertexId(pair[1]));
            assert!(g.neighbors(&x).contains(&y));
            assert!(g.neighbors(&y).contains(&x));
        }
        let degree_sum: usize = g.iter_vertices().map(|v| g.neighbors(&v).len()).sum();
        assert_eq!(degree_sum, 2 * g.edge_size());
    }

    #[quickcheck]
    fn directed_pairs_link_one_way(pairs: Pairs) {
        let g = Graph::directed(&pairs.pairs).unwrap();
        assert_eq!(g.edge_size(), pairs.pairs.len() / 2);
        for (i, pair) in pairs.pairs.chunks_exact(2).enumerate() {
            let (x, y) = (VertexId(pair[0]), VertexId(pair[1]));
            // the last insertion from x comes first
            let later = pairs.pairs.chunks_exact(2).skip(i + 1).filter(|p| p[0] == pair[0]);
            assert_eq!(g.neighbors(&x)[later.count()], y);
        }
    }
}
