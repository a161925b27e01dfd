use std::sync::Arc;

use crate::model::landmark::Landmarks;
use crate::model::metric::Metric;
use crate::model::network::Node;
use crate::model::unit::Cost;

/// travel time lower bound backed by precomputed landmark tables (the
/// ALT family of heuristics). admissible and consistent by the triangle
/// inequality, and usually much tighter than straight-line estimates on
/// real road networks.
pub struct LandmarkMetric {
    landmarks: Arc<Landmarks>,
}

impl LandmarkMetric {
    pub fn new(landmarks: Arc<Landmarks>) -> LandmarkMetric {
        LandmarkMetric { landmarks }
    }
}

impl Metric for LandmarkMetric {
    fn distance(&self, a: &Node, b: &Node) -> Cost {
        self.landmarks.lower_bound(a.node_id, b.node_id)
    }
}
