use std::collections::HashMap;
use std::sync::Arc;

use crate::algorithm::search::ShortestPathComputation;
use crate::model::landmark::LandmarkError;
use crate::model::network::{Graph, NodeId};
use crate::model::unit::Cost;
use rand::Rng;
use rayon::prelude::*;

/// a set of landmark nodes with precomputed shortest path cost tables in
/// both directions, backing the triangle inequality lower bound used by
/// the landmark metric. built once after the graph is frozen and read-only
/// thereafter.
pub struct Landmarks {
    tables: Vec<LandmarkTable>,
}

/// cost tables for a single landmark L: `from_landmark` holds d(L, n) for
/// every n reachable from L, `to_landmark` holds d(n, L) for every n that
/// can reach L.
struct LandmarkTable {
    landmark: NodeId,
    from_landmark: HashMap<NodeId, Cost>,
    to_landmark: HashMap<NodeId, Cost>,
}

impl Landmarks {
    /// chooses up to `count` landmarks by greedy farthest selection: the
    /// seed is drawn uniformly at random, then each further landmark is
    /// the node settled at the greatest cost in a multi-source one-to-all
    /// search from the landmarks chosen so far, ties broken by lowest
    /// node id. nodes unreachable from every landmark are ignored.
    pub fn greedy_farthest<R: Rng + ?Sized>(
        graph: Arc<Graph>,
        count: usize,
        rng: &mut R,
    ) -> Result<Landmarks, LandmarkError> {
        let n_nodes = graph.n_nodes();
        if n_nodes == 0 || count == 0 {
            return Ok(Landmarks { tables: vec![] });
        }

        let seed_position = rng.random_range(0..n_nodes);
        let seed = graph.node_ids().nth(seed_position).ok_or_else(|| {
            LandmarkError::InternalError(format!(
                "node iterator ended before position {} of {}",
                seed_position, n_nodes
            ))
        })?;

        let forward = ShortestPathComputation::new(Arc::clone(&graph), vec![]);
        let mut chosen: Vec<NodeId> = vec![seed];
        while chosen.len() < count.min(n_nodes) {
            let costs = forward.compute_shortest_path_costs_reachable(&chosen)?;
            let mut farthest: Option<(Cost, NodeId)> = None;
            for (node_id, cost) in costs.iter() {
                if chosen.contains(node_id) {
                    continue;
                }
                farthest = match farthest {
                    None => Some((*cost, *node_id)),
                    Some((best_cost, best_id))
                        if *cost > best_cost || (*cost == best_cost && *node_id < best_id) =>
                    {
                        Some((*cost, *node_id))
                    }
                    keep => keep,
                };
            }
            match farthest {
                // every node reachable from the current set is already a landmark
                None => break,
                Some((_, node_id)) => chosen.push(node_id),
            }
        }

        let backward = ShortestPathComputation::new(Arc::new(graph.reverse()), vec![]);
        let tables = chosen
            .par_iter()
            .map(|landmark| {
                let from_landmark = forward.compute_shortest_path_costs_reachable(&[*landmark])?;
                let to_landmark = backward.compute_shortest_path_costs_reachable(&[*landmark])?;
                Ok(LandmarkTable {
                    landmark: *landmark,
                    from_landmark,
                    to_landmark,
                })
            })
            .collect::<Result<Vec<_>, LandmarkError>>()?;

        log::info!(
            "prepared {} landmarks over {} graph nodes",
            tables.len(),
            n_nodes
        );
        Ok(Landmarks { tables })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn landmark_ids(&self) -> Vec<NodeId> {
        self.tables.iter().map(|t| t.landmark).collect()
    }

    /// triangle inequality lower bound on the cost from `source` to
    /// `target`: the best of d(L,t) − d(L,s) and d(s,L) − d(t,L) over all
    /// landmarks, never below zero. landmarks missing either endpoint
    /// contribute nothing.
    pub fn lower_bound(&self, source: NodeId, target: NodeId) -> Cost {
        let mut best = Cost::ZERO;
        for table in self.tables.iter() {
            if let (Some(to_source), Some(to_target)) = (
                table.from_landmark.get(&source),
                table.from_landmark.get(&target),
            ) {
                let bound = Cost::new(to_target.as_f64() - to_source.as_f64());
                if bound > best {
                    best = bound;
                }
            }
            if let (Some(from_source), Some(from_target)) = (
                table.to_landmark.get(&source),
                table.to_landmark.get(&target),
            ) {
                let bound = Cost::new(from_source.as_f64() - from_target.as_f64());
                if bound > best {
                    best = bound;
                }
            }
        }
        best
    }
}
