//! Graph algorithms built on the traversal engine.
//!
//! Each algorithm is an extension trait implemented for every [QueryableGraph](crate::graph::QueryableGraph).
//! A call allocates its own [TraversalState](crate::traversal::TraversalState) and accumulators,
//! so calling twice on the same graph gives the same answer.
mod connected_components;
pub use self::connected_components::*;
mod bipartite;
pub use self::bipartite::*;
mod has_cycle;
pub use self::has_cycle::*;
mod articulation;
pub use self::articulation::*;
mod toposort;
pub use self::toposort::*;
mod scc;
pub use self::scc::*;

use std::convert::Infallible;

/// Unwraps results of visitors that cannot fail.
fn into_ok<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(x) => x,
        Err(never) => match never {},
    }
}
