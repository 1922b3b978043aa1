use crate::{
    graph::*,
    traversal::{DepthFirstStrategy, TraversalState, Visitor},
};

/// Preorder/postorder walk from `start`, which must belong to `graph` and fit in `state`.
///
/// A tree edge is reported right before the walk descends along it.
/// On undirected graphs an edge to an already discovered vertex is reported
/// only if it leads to an ancestor other than the parent.
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
    match graph.depth_first_strategy() {
        DepthFirstStrategy::Recursive => recurse(graph, start, visitor, state),
        DepthFirstStrategy::Iterative => iterate(graph, start, visitor, state),
    }
}

fn reports_revisit(directed: bool, x: VertexId, y: VertexId, state: &TraversalState) -> bool {
    directed || (!state.is_processed(y) && state.parent(x) != Some(y))
}

fn enter<V>(v: VertexId, visitor: &mut V, state: &mut TraversalState) -> Result<(), V::Error>
where
    V: Visitor + ?Sized,
{
    state.discover(v);
    visitor.enter_vertex(v, state)?;
    state.stamp_entry(v);
    Ok(())
}

fn exit<V>(v: VertexId, visitor: &mut V, state: &mut TraversalState) -> Result<(), V::Error>
where
    V: Visitor + ?Sized,
{
    state.process(v);
    visitor.exit_vertex(v, state)?;
    state.stamp_exit(v);
    Ok(())
}

fn recurse<G, V>(
    graph: &G,
    v: VertexId,
    visitor: &mut V,
    state: &mut TraversalState,
) -> Result<(), V::Error>
where
    G: QueryableGraph,
    V: Visitor + ?Sized,
{
    enter(v, visitor, state)?;
    for &y in graph.neighbors(&v) {
        if !state.is_discovered(y) {
            state.set_parent(y, v);
            visitor.edge(v, y, state)?;
            recurse(graph, y, visitor, state)?;
        } else if reports_revisit(graph.is_directed(), v, y, state) {
            visitor.edge(v, y, state)?;
        }
    }
    exit(v, visitor, state)
}

/// Same events in the same order as `recurse`, on an explicit stack.
fn iterate<G, V>(
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
    // each frame holds a vertex and the index of its next neighbor to scan
    let mut stack: Vec<(VertexId, usize)> = vec![];
    enter(start, visitor, state)?;
    stack.push((start, 0));

    while let Some(top) = stack.last_mut() {
        let (v, next) = *top;
        match graph.neighbors(&v).get(next) {
            Some(&y) => {
                top.1 += 1;
                if !state.is_discovered(y) {
                    state.set_parent(y, v);
                    visitor.edge(v, y, state)?;
                    enter(y, visitor, state)?;
                    stack.push((y, 0));
                } else if reports_revisit(directed, v, y, state) {
                    visitor.edge(v, y, state)?;
                }
            }
            None => {
                stack.pop();
                exit(v, visitor, state)?;
            }
        }
    }
    Ok(())
}
