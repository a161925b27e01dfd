use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app::journey::{Journey, RouteElement, RoutingRequest, RoutingResponse, TransportationMode};
use crate::app::metadata::MetadataStore;
use crate::app::AppError;
use itertools::Itertools;
use wayfarer_core::algorithm::search::{DeadlineModule, ShortestPathComputation};
use wayfarer_core::model::network::{Graph, Node, NodeId, Path, WayId};

/// Answers routing requests against the frozen road network: resolves
/// the OSM endpoints, runs the search computation, and materializes the
/// resulting path into a journey document.
///
/// The service holds only shared read-only state, so one instance is
/// used concurrently by every request worker.
pub struct RoutingService {
    graph: Arc<Graph>,
    computation: Arc<ShortestPathComputation>,
    metadata: Arc<dyn MetadataStore>,
    deadline: Option<Duration>,
}

impl RoutingService {
    pub fn new(
        graph: Arc<Graph>,
        computation: Arc<ShortestPathComputation>,
        metadata: Arc<dyn MetadataStore>,
        deadline: Option<Duration>,
    ) -> RoutingService {
        RoutingService {
            graph,
            computation,
            metadata,
            deadline,
        }
    }

    /// handles one routing request. unresolvable endpoints and exhausted
    /// searches answer with an empty journey list; the reported time
    /// covers everything from request entry to just before the response
    /// document is assembled, including metadata lookups.
    pub fn plan(&self, request: &RoutingRequest) -> Result<RoutingResponse, AppError> {
        let started = Instant::now();

        let resolved = (self.resolve(request.from), self.resolve(request.to));
        let (source, target) = match resolved {
            (Some(source), Some(target)) => (source, target),
            _ => {
                log::debug!(
                    "request ({}, {}) has an unresolvable endpoint",
                    request.from,
                    request.to
                );
                return Ok(empty_response(request, started));
            }
        };

        let path = match self.deadline {
            Some(limit) => self
                .computation
                .with_module(Arc::new(DeadlineModule::new(limit)))
                .compute_shortest_path(&[source], target)?,
            None => self.computation.compute_shortest_path(&[source], target)?,
        };

        let path = match path {
            Some(path) => path,
            None => return Ok(empty_response(request, started)),
        };

        let journey = self.materialize(request, &path)?;
        let time = started.elapsed().as_millis() as u64;
        Ok(RoutingResponse {
            time,
            from: request.from,
            to: request.to,
            journeys: vec![journey],
        })
    }

    /// an OSM node id is usable when the metadata store knows it and the
    /// pruned graph still contains it
    fn resolve(&self, osm_id: i64) -> Option<NodeId> {
        self.metadata
            .internal_by_osm(osm_id)
            .filter(|node_id| self.graph.contains_node_id(node_id))
    }

    fn materialize(&self, request: &RoutingRequest, path: &Path) -> Result<Journey, AppError> {
        let source = self.graph.get_node(&path.source())?;
        let destination = self.graph.get_node(&path.destination())?;

        let duration_ms = (path.total_cost().as_f64() * 1000.0).ceil() as i64;
        let route = if path.is_empty() {
            vec![self.node_element(source)]
        } else {
            vec![
                self.node_element(source),
                self.path_element(path)?,
                self.node_element(destination),
            ]
        };

        Ok(Journey {
            dep_time: request.dep_time,
            arr_time: request.dep_time + duration_ms,
            route,
        })
    }

    fn node_display_name(&self, node: &Node) -> String {
        self.metadata
            .osm_by_internal(node.node_id)
            .and_then(|osm_id| self.metadata.node_name(osm_id))
            .unwrap_or("")
            .to_string()
    }

    fn node_element(&self, node: &Node) -> RouteElement {
        RouteElement::Node {
            name: self.node_display_name(node),
            geom: vec![[node.y(), node.x()]],
        }
    }

    /// a single path element covering the whole route. its name joins
    /// the source node's name with the name of every way where the way
    /// id changes along the path, so an unbroken road is named once.
    fn path_element(&self, path: &Path) -> Result<RouteElement, AppError> {
        let source = self.graph.get_node(&path.source())?;

        let mut names: Vec<String> = vec![];
        let source_name = self.node_display_name(source);
        if !source_name.is_empty() {
            names.push(source_name);
        }

        let mut geom: Vec<[f32; 2]> = vec![[source.y(), source.x()]];
        let mut previous_way: Option<WayId> = None;
        for edge in path.edges() {
            if previous_way != Some(edge.way_id) {
                if let Some(name) = self.metadata.way_name(edge.way_id.0) {
                    names.push(name.to_string());
                }
                previous_way = Some(edge.way_id);
            }
            let destination = self.graph.get_node(&edge.dst_node_id)?;
            geom.push([destination.y(), destination.x()]);
        }

        Ok(RouteElement::Path {
            mode: TransportationMode::Car,
            name: names.iter().join(", "),
            geom,
        })
    }
}

fn empty_response(request: &RoutingRequest, started: Instant) -> RoutingResponse {
    RoutingResponse {
        time: started.elapsed().as_millis() as u64,
        from: request.from,
        to: request.to,
        journeys: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::metadata::InMemoryMetadata;
    use wayfarer_core::model::network::Edge;

    /// three stops on two named ways:
    /// (0 "Depot") -[way 7 "Canal Road"]-> (1) -[way 7]-> (2) -[way 8 "Harbor Street"]-> (3 "Pier")
    fn build_service(deadline: Option<Duration>) -> RoutingService {
        let mut graph = Graph::default();
        graph.add_node(Node::new(0, -105.0, 39.5));
        graph.add_node(Node::new(1, -105.25, 39.5));
        graph.add_node(Node::new(2, -105.5, 39.75));
        graph.add_node(Node::new(3, -105.75, 39.75));
        graph.add_edge(Edge::new(0, 1, 5.0, 7)).unwrap();
        graph.add_edge(Edge::new(1, 2, 7.0, 7)).unwrap();
        graph.add_edge(Edge::new(2, 3, 2.5, 8)).unwrap();

        let mut metadata = InMemoryMetadata::new();
        metadata.insert_node_mapping(1000, NodeId(0));
        metadata.insert_node_mapping(1001, NodeId(1));
        metadata.insert_node_mapping(1002, NodeId(2));
        metadata.insert_node_mapping(1003, NodeId(3));
        metadata.insert_node_name(1000, String::from("Depot"));
        metadata.insert_node_name(1003, String::from("Pier"));
        metadata.insert_way_name(7, String::from("Canal Road"));
        metadata.insert_way_name(8, String::from("Harbor Street"));

        let graph = Arc::new(graph);
        let computation = Arc::new(ShortestPathComputation::new(Arc::clone(&graph), vec![]));
        RoutingService::new(graph, computation, Arc::new(metadata), deadline)
    }

    fn request(from: i64, to: i64) -> RoutingRequest {
        RoutingRequest {
            dep_time: 1_000_000,
            modes: vec![TransportationMode::Car],
            from,
            to,
        }
    }

    #[test]
    fn test_plan_full_journey() {
        let service = build_service(None);
        let response = service.plan(&request(1000, 1003)).unwrap();

        assert_eq!(response.from, 1000);
        assert_eq!(response.to, 1003);
        assert_eq!(response.journeys.len(), 1);

        let journey = &response.journeys[0];
        assert_eq!(journey.dep_time, 1_000_000);
        // 14.5 seconds of travel, rounded up to whole milliseconds
        assert_eq!(journey.arr_time, 1_000_000 + 14_500);
        assert_eq!(journey.route.len(), 3);

        match &journey.route[0] {
            RouteElement::Node { name, geom } => {
                assert_eq!(name, "Depot");
                assert_eq!(geom, &vec![[39.5, -105.0]]);
            }
            other => panic!("expected a node element, got {:?}", other),
        }
        match &journey.route[1] {
            RouteElement::Path { mode, name, geom } => {
                assert_eq!(*mode, TransportationMode::Car);
                // way 7 is named once even though two edges share it
                assert_eq!(name, "Depot, Canal Road, Harbor Street");
                assert_eq!(
                    geom,
                    &vec![
                        [39.5, -105.0],
                        [39.5, -105.25],
                        [39.75, -105.5],
                        [39.75, -105.75]
                    ]
                );
            }
            other => panic!("expected a path element, got {:?}", other),
        }
        match &journey.route[2] {
            RouteElement::Node { name, geom } => {
                assert_eq!(name, "Pier");
                assert_eq!(geom, &vec![[39.75, -105.75]]);
            }
            other => panic!("expected a node element, got {:?}", other),
        }
    }

    #[test]
    fn test_source_equals_destination() {
        let service = build_service(None);
        let response = service.plan(&request(1001, 1001)).unwrap();
        assert_eq!(response.journeys.len(), 1);
        let journey = &response.journeys[0];
        assert_eq!(journey.dep_time, journey.arr_time);
        // a zero-length path renders as the lone source node
        assert_eq!(journey.route.len(), 1);
    }

    #[test]
    fn test_no_route_yields_empty_journeys() {
        let service = build_service(None);
        // edges only lead away from the depot
        let response = service.plan(&request(1003, 1000)).unwrap();
        assert_eq!(response.from, 1003);
        assert_eq!(response.to, 1000);
        assert!(response.journeys.is_empty());
    }

    #[test]
    fn test_unknown_osm_id_yields_empty_journeys() {
        let service = build_service(None);
        let response = service.plan(&request(1000, 424242)).unwrap();
        assert!(response.journeys.is_empty());
    }

    #[test]
    fn test_unnamed_endpoints_render_empty_strings() {
        let service = build_service(None);
        let response = service.plan(&request(1001, 1002)).unwrap();
        let journey = &response.journeys[0];
        match &journey.route[0] {
            RouteElement::Node { name, .. } => assert_eq!(name, ""),
            other => panic!("expected a node element, got {:?}", other),
        }
        match &journey.route[1] {
            // no source name to lead with, so the way name stands alone
            RouteElement::Path { name, .. } => assert_eq!(name, "Canal Road"),
            other => panic!("expected a path element, got {:?}", other),
        }
    }

    #[test]
    fn test_generous_deadline_still_routes() {
        let service = build_service(Some(Duration::from_secs(60)));
        let response = service.plan(&request(1000, 1003)).unwrap();
        assert_eq!(response.journeys.len(), 1);
    }
}
