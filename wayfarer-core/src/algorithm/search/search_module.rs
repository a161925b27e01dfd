use crate::model::network::{Edge, Node};
use crate::model::unit::Cost;

/// A pluggable capability of the shortest path search. The engine holds a
/// short ordered list of modules and consults every one of them at each
/// hook, combining the answers:
///
/// * edge admission chains through the modules in order, any rejection
///   wins, and each module sees the cost adjusted by its predecessors
/// * estimates combine by maximum, which stays admissible when every
///   contributing estimate is admissible
/// * any module may request an early end to the settle loop
///
/// Every method is optional; the defaults leave the search a plain
/// Dijkstra.
pub trait SearchModule: Send + Sync {
    /// decide whether the edge may be relaxed, and at what cost. the
    /// returned cost must not undercut the given one or settled costs
    /// lose their optimality guarantee.
    fn consider_edge(&self, _edge: &Edge, cost: Cost) -> Option<Cost> {
        Some(cost)
    }

    /// a lower bound on the remaining cost from `node` to `target`
    fn estimate(&self, _node: &Node, _target: &Node) -> Option<Cost> {
        None
    }

    /// called after each node settles; returning true ends the search
    /// early. implementations must answer false-then-true across one run.
    fn should_abort(&self, _settled: &Node, _cost: Cost) -> bool {
        false
    }
}
