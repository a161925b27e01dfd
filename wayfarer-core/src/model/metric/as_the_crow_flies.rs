use crate::model::metric::Metric;
use crate::model::network::{Graph, Node};
use crate::model::unit::Cost;
use crate::util::geo::haversine;

/// fallback speed when a graph carries no usable edge, roughly the
/// highest signposted limit found on European motorways (km/h)
const DEFAULT_MAX_SPEED_KMH: f64 = 130.0;

/// straight-line travel time estimate: great-circle distance divided by
/// the fastest speed present in the graph. admissible for a graph whose
/// edge costs are travel seconds at legal speed, since no edge can be
/// traversed faster than the network-wide maximum.
pub struct AsTheCrowFlies {
    max_speed_mps: f64,
}

impl AsTheCrowFlies {
    pub fn new(max_speed_mps: f64) -> AsTheCrowFlies {
        AsTheCrowFlies { max_speed_mps }
    }

    /// derives the maximum speed over all edges of a graph, taking each
    /// edge's straight-line length over its traversal time. edges with
    /// non-positive cost or invalid coordinates are skipped.
    pub fn from_graph(graph: &Graph) -> AsTheCrowFlies {
        let mut max_speed_mps = DEFAULT_MAX_SPEED_KMH / 3.6;
        for edge in graph.edges() {
            let speed = match (
                graph.get_node(&edge.src_node_id),
                graph.get_node(&edge.dst_node_id),
            ) {
                (Ok(src), Ok(dst)) => {
                    match haversine::coord_distance_meters(src.coordinate, dst.coordinate) {
                        Ok(meters) if edge.cost > Cost::ZERO => meters / edge.cost.as_f64(),
                        _ => continue,
                    }
                }
                _ => continue,
            };
            if speed > max_speed_mps {
                max_speed_mps = speed;
            }
        }
        AsTheCrowFlies { max_speed_mps }
    }
}

impl Metric for AsTheCrowFlies {
    fn distance(&self, a: &Node, b: &Node) -> Cost {
        // out-of-range coordinates estimate as zero, which stays admissible
        let meters = haversine::coord_distance_meters(a.coordinate, b.coordinate).unwrap_or(0.0);
        Cost::new(meters / self.max_speed_mps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seconds_at_max_speed() {
        // ~111.19 km along the equator at 100 m/s
        let metric = AsTheCrowFlies::new(100.0);
        let a = Node::new(0, 0.0, 0.0);
        let b = Node::new(1, 1.0, 0.0);
        let expected = haversine::coord_distance_meters(a.coordinate, b.coordinate).unwrap() / 100.0;
        assert_relative_eq!(metric.distance(&a, &b).as_f64(), expected, max_relative = 1e-9);
    }

    #[test]
    fn test_non_negative_and_symmetric() {
        let metric = AsTheCrowFlies::new(30.0);
        let a = Node::new(0, -105.20423, 39.71221);
        let b = Node::new(1, -105.22927, 39.75842);
        let ab = metric.distance(&a, &b);
        let ba = metric.distance(&b, &a);
        assert!(ab >= Cost::ZERO);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_from_graph_tracks_fastest_edge() {
        let mut graph = Graph::default();
        graph.add_node(Node::new(0, 0.0, 0.0));
        graph.add_node(Node::new(1, 1.0, 0.0));
        let meters = haversine::haversine_distance_meters(0.0, 0.0, 1.0, 0.0).unwrap();
        // traversed in 1000 seconds: faster than the default fallback
        graph
            .add_edge(crate::model::network::Edge::new(0, 1, 1000.0, 0))
            .unwrap();
        let metric = AsTheCrowFlies::from_graph(&graph);
        let a = Node::new(0, 0.0, 0.0);
        let b = Node::new(1, 1.0, 0.0);
        assert_relative_eq!(
            metric.distance(&a, &b).as_f64(),
            meters / (meters / 1000.0),
            max_relative = 1e-9
        );
    }
}
