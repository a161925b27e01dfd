use std::sync::Arc;

use crate::algorithm::search::{AStarModule, SearchError, ShortestPathComputation};
use crate::model::landmark::Landmarks;
use crate::model::metric::{AsTheCrowFlies, LandmarkMetric};
use crate::model::network::Graph;
use serde::Deserialize;

/// selects and assembles the search computation used to answer routing
/// queries, configurable from the application TOML.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchPolicy {
    /// plain Dijkstra with no modules attached
    Dijkstra,
    /// A* guided by the straight-line travel time estimate
    AStarHaversine,
    /// A* guided by greedy-farthest landmark tables of the given size
    AStarLandmarks { landmarks: usize },
}

impl SearchPolicy {
    /// builds a computation over the shared graph. landmark preparation
    /// runs its one-to-all searches here, once, so the resulting engine
    /// carries only read-only tables.
    pub fn build(&self, graph: Arc<Graph>) -> Result<ShortestPathComputation, SearchError> {
        match self {
            SearchPolicy::Dijkstra => Ok(ShortestPathComputation::new(graph, vec![])),
            SearchPolicy::AStarHaversine => {
                let metric = Arc::new(AsTheCrowFlies::from_graph(&graph));
                let module = Arc::new(AStarModule::new(metric));
                Ok(ShortestPathComputation::new(graph, vec![module]))
            }
            SearchPolicy::AStarLandmarks { landmarks } => {
                let prepared =
                    Landmarks::greedy_farthest(Arc::clone(&graph), *landmarks, &mut rand::rng())
                        .map_err(|e| SearchError::BuildError(e.to_string()))?;
                let metric = Arc::new(LandmarkMetric::new(Arc::new(prepared)));
                let module = Arc::new(AStarModule::new(metric));
                Ok(ShortestPathComputation::new(graph, vec![module]))
            }
        }
    }
}
