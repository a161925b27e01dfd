use std::sync::Arc;

use crate::algorithm::search::SearchModule;
use crate::model::metric::Metric;
use crate::model::network::Node;
use crate::model::unit::Cost;

/// turns the plain Dijkstra engine into an A* search by contributing the
/// backing metric's estimate as a queue heuristic. correctness of the
/// settled costs requires the metric to be admissible and consistent.
pub struct AStarModule {
    metric: Arc<dyn Metric>,
}

impl AStarModule {
    pub fn new(metric: Arc<dyn Metric>) -> AStarModule {
        AStarModule { metric }
    }
}

impl SearchModule for AStarModule {
    fn estimate(&self, node: &Node, target: &Node) -> Option<Cost> {
        Some(self.metric.distance(node, target))
    }
}
