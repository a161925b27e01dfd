use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::algorithm::search::{SearchError, SearchModule};
use crate::model::network::{Edge, Graph, Node, NodeId, Path};
use crate::model::unit::Cost;
use crate::util::priority_queue::InternalPriorityQueue;

/// record kept for every node touched by a search: the best known cost
/// from the source set, the edge the node was reached through, and the
/// frontier total including the heuristic estimate when one is available.
#[derive(Clone, Debug)]
struct TentativeDistance {
    cost: Cost,
    parent: Option<Edge>,
    estimated_total: Option<Cost>,
}

/// frontier priority of a relaxed node. orders the keyed max-queue so
/// that the lowest total pops first, ties broken by lowest node id so
/// settlement order is deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct SearchPriority {
    total: Cost,
    node_id: NodeId,
}

impl Ord for SearchPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total
            .cmp(&self.total)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

impl PartialOrd for SearchPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Dijkstra skeleton over a shared road network, specialized by an
/// ordered list of [`SearchModule`]s that may filter edges, adjust their
/// costs, contribute heuristic estimates (turning the search into A*),
/// or end the settle loop early.
///
/// The computation itself is stateless apart from per-call allocations,
/// so one instance may serve concurrent requests.
#[derive(Clone)]
pub struct ShortestPathComputation {
    graph: Arc<Graph>,
    modules: Vec<Arc<dyn SearchModule>>,
}

impl ShortestPathComputation {
    pub fn new(graph: Arc<Graph>, modules: Vec<Arc<dyn SearchModule>>) -> ShortestPathComputation {
        ShortestPathComputation { graph, modules }
    }

    /// a copy of this computation carrying one extra module. used to
    /// attach per-request modules, such as a deadline, to an engine that
    /// is otherwise shared.
    pub fn with_module(&self, module: Arc<dyn SearchModule>) -> ShortestPathComputation {
        let mut modules = self.modules.clone();
        modules.push(module);
        ShortestPathComputation {
            graph: Arc::clone(&self.graph),
            modules,
        }
    }

    /// computes a cheapest path from any of the given sources to the
    /// target. sources and targets missing from the graph resolve to no
    /// path, as does exhaustion of the frontier under the module filters.
    /// a target contained in the source set resolves to the empty path.
    pub fn compute_shortest_path(
        &self,
        sources: &[NodeId],
        target: NodeId,
    ) -> Result<Option<Path>, SearchError> {
        if !self.graph.contains_node_id(&target) {
            return Ok(None);
        }
        let sources: Vec<NodeId> = sources
            .iter()
            .copied()
            .filter(|s| self.graph.contains_node_id(s))
            .collect();
        if sources.is_empty() {
            return Ok(None);
        }
        if sources.contains(&target) {
            return Ok(Some(Path::empty(target)));
        }
        let solution = self.run(&sources, Some(target))?;
        if !solution.contains_key(&target) {
            return Ok(None);
        }
        let path = backtrack(&solution, target)?;
        Ok(Some(path))
    }

    /// runs the search to exhaustion with estimates disabled, returning
    /// the final cost for every node reachable from the source set.
    pub fn compute_shortest_path_costs_reachable(
        &self,
        sources: &[NodeId],
    ) -> Result<HashMap<NodeId, Cost>, SearchError> {
        let sources: Vec<NodeId> = sources
            .iter()
            .copied()
            .filter(|s| self.graph.contains_node_id(s))
            .collect();
        if sources.is_empty() {
            return Ok(HashMap::new());
        }
        let solution = self.run(&sources, None)?;
        Ok(solution
            .into_iter()
            .map(|(node_id, record)| (node_id, record.cost))
            .collect())
    }

    /// the settle loop shared by the one-to-one and one-to-all searches.
    /// every source starts at cost zero; decrease-key happens through the
    /// keyed frontier, and a settled guard discards anything stale.
    fn run(
        &self,
        sources: &[NodeId],
        target: Option<NodeId>,
    ) -> Result<HashMap<NodeId, TentativeDistance>, SearchError> {
        let target_node: Option<&Node> = match &target {
            Some(t) => Some(self.graph.get_node(t)?),
            None => None,
        };
        let mut tentative: HashMap<NodeId, TentativeDistance> = HashMap::new();
        let mut settled: HashMap<NodeId, TentativeDistance> = HashMap::new();
        let mut frontier: InternalPriorityQueue<NodeId, SearchPriority> =
            InternalPriorityQueue::default();
        let mut iterations: u64 = 0;

        for source in sources {
            let estimated_total = match target_node {
                None => None,
                Some(t) => self.estimate(self.graph.get_node(source)?, t),
            };
            tentative.insert(
                *source,
                TentativeDistance {
                    cost: Cost::ZERO,
                    parent: None,
                    estimated_total,
                },
            );
            frontier.push(
                *source,
                SearchPriority {
                    total: estimated_total.unwrap_or(Cost::ZERO),
                    node_id: *source,
                },
            );
        }

        'settle: while let Some((node_id, _)) = frontier.pop() {
            if settled.contains_key(&node_id) {
                continue;
            }
            let record = match tentative.get(&node_id) {
                Some(r) => r.clone(),
                None => {
                    return Err(SearchError::InternalError(format!(
                        "frontier node {} has no tentative record",
                        node_id
                    )))
                }
            };
            settled.insert(node_id, record.clone());
            iterations += 1;

            let settled_node = self.graph.get_node(&node_id)?;
            if self
                .modules
                .iter()
                .any(|m| m.should_abort(settled_node, record.cost))
            {
                break 'settle;
            }
            if target == Some(node_id) {
                break 'settle;
            }

            for edge in self.graph.out_edges_iter(&node_id) {
                if edge.cost < Cost::ZERO {
                    return Err(SearchError::InvalidEdgeCost(edge.cost));
                }
                let destination = edge.dst_node_id;
                if settled.contains_key(&destination) {
                    continue;
                }
                let edge_cost = match self.consider_edge(edge) {
                    None => continue,
                    Some(cost) => cost,
                };
                if edge_cost < Cost::ZERO {
                    return Err(SearchError::InvalidEdgeCost(edge_cost));
                }
                let cost = record.cost + edge_cost;
                // a prior relaxation already paid for the heuristic, and the
                // estimate depends on the node alone, so recover it instead
                // of consulting the modules again
                let (improves, cached_estimate) = match tentative.get(&destination) {
                    None => (true, None),
                    Some(existing) => (
                        cost < existing.cost,
                        existing
                            .estimated_total
                            .map(|total| Cost::new(total.as_f64() - existing.cost.as_f64())),
                    ),
                };
                if improves {
                    let estimate = match target_node {
                        None => None,
                        Some(t) => match cached_estimate {
                            Some(estimate) => Some(estimate),
                            None => self.estimate(self.graph.get_node(&destination)?, t),
                        },
                    };
                    let estimated_total = estimate.map(|estimate| cost + estimate);
                    frontier.push_increase(
                        destination,
                        SearchPriority {
                            total: estimated_total.unwrap_or(cost),
                            node_id: destination,
                        },
                    );
                    tentative.insert(
                        destination,
                        TentativeDistance {
                            cost,
                            parent: Some(*edge),
                            estimated_total,
                        },
                    );
                }
            }
        }

        log::debug!(
            "search settled {} nodes in {} iterations",
            settled.len(),
            iterations
        );
        Ok(settled)
    }

    /// chain the edge through every module in order; any rejection wins
    fn consider_edge(&self, edge: &Edge) -> Option<Cost> {
        let mut cost = edge.cost;
        for module in self.modules.iter() {
            cost = module.consider_edge(edge, cost)?;
        }
        Some(cost)
    }

    /// combined heuristic over the modules that provide one
    fn estimate(&self, node: &Node, target: &Node) -> Option<Cost> {
        self.modules
            .iter()
            .filter_map(|m| m.estimate(node, target))
            .max()
    }
}

/// reconstructs the cheapest path by walking parent edges from the
/// target back to whichever source the search tree roots in.
fn backtrack(
    solution: &HashMap<NodeId, TentativeDistance>,
    target: NodeId,
) -> Result<Path, SearchError> {
    let mut edges: Vec<Edge> = vec![];
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut cursor = target;
    loop {
        if !visited.insert(cursor) {
            return Err(SearchError::InternalError(format!(
                "loop at node {} while reconstructing a path",
                cursor
            )));
        }
        let record = solution.get(&cursor).ok_or_else(|| {
            SearchError::InternalError(format!(
                "node {} missing from solution during backtrack",
                cursor
            ))
        })?;
        match record.parent {
            None => break,
            Some(edge) => {
                edges.push(edge);
                cursor = edge.src_node_id;
            }
        }
    }
    edges.reverse();
    Path::new(cursor, edges).map_err(SearchError::from)
}
