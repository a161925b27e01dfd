use crate::model::network::Node;
use crate::model::unit::Cost;

/// Estimates the travel cost between two nodes of the road network.
///
/// Implementations must never return a negative value. When a metric is
/// used as an A* heuristic it must also be admissible (never an
/// over-estimate of the true shortest path cost) and consistent, or the
/// search may settle nodes with non-optimal costs.
pub trait Metric: Send + Sync {
    fn distance(&self, a: &Node, b: &Node) -> Cost;
}
