use crate::{graph::VertexId, traversal::TraversalState, GraphError};

/// Kinds of edges met during a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// Discovers a new vertex.
    Tree,
    /// Points to an ancestor still being processed.
    Back,
    /// Points to an already processed descendant.
    Forward,
    /// Points to an already processed vertex in another subtree.
    Cross,
}

impl TraversalState {
    /// Classifies `x -> y` against the bookkeeping of a depth-first run.
    ///
    /// Failing means the bookkeeping is inconsistent.
    pub fn classify_edge(&self, x: VertexId, y: VertexId) -> Result<EdgeClass, GraphError> {
        if self.parent(y) == Some(x) {
            return Ok(EdgeClass::Tree);
        }
        if self.is_discovered(y) && !self.is_processed(y) {
            return Ok(EdgeClass::Back);
        }
        if self.is_processed(y) {
            match self.entry_time(y).cmp(&self.entry_time(x)) {
                std::cmp::Ordering::Greater => return Ok(EdgeClass::Forward),
                std::cmp::Ordering::Less => return Ok(EdgeClass::Cross),
                std::cmp::Ordering::Equal => {}
            }
        }
        Err(GraphError::UnclassifiableEdge { from: x, to: y })
    }
}
