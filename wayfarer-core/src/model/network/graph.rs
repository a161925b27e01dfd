use super::{Edge, GraphConfig, NetworkError, Node, NodeId};
use crate::util::fs::read_utils;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use kdam::Bar;

/// Road network topology represented as a directed multigraph with
/// adjacency kept on both orientations.
///
/// # Arguments
///
/// * `nodes` - node attributes keyed by `NodeId`
/// * `adj` - for each node, the set of edges departing from it
/// * `rev` - for each node, the set of edges arriving at it
///
/// # Performance
///
/// Operations on a single entity are expected _O(1)_; incidence queries
/// are _O(degree)_. All maps are insertion-ordered so that node and edge
/// iteration is deterministic given the insertion sequence.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    adj: IndexMap<NodeId, IndexSet<Edge>>,
    rev: IndexMap<NodeId, IndexSet<Edge>>,
}

impl TryFrom<&GraphConfig> for Graph {
    type Error = NetworkError;

    /// create a graph from the configured node list and edge list files.
    fn try_from(config: &GraphConfig) -> Result<Self, Self::Error> {
        let nodes: Box<[Node]> = read_utils::from_csv(
            &config.node_list_input_file,
            true,
            Some(Bar::builder().desc(format!("graph nodes: {}", config.node_list_input_file))),
            None,
        )?;

        let mut graph = Graph::default();
        for node in nodes.iter() {
            graph.add_node(*node);
        }

        let edges: Box<[Edge]> = read_utils::from_csv(
            &config.edge_list_input_file,
            true,
            Some(Bar::builder().desc(format!("graph edges: {}", config.edge_list_input_file))),
            None,
        )?;

        for edge in edges.iter() {
            graph.add_edge(*edge).map_err(|e| {
                NetworkError::DatasetError(format!(
                    "invalid edge record in {}: {}",
                    config.edge_list_input_file, e
                ))
            })?;
        }

        Ok(graph)
    }
}

impl Graph {
    /// number of nodes in the Graph
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// number of edges in the Graph
    pub fn n_edges(&self) -> usize {
        self.adj.values().map(|edges| edges.len()).sum()
    }

    /// insert a node. idempotent by identity: an existing node with the
    /// same id is never replaced.
    ///
    /// # Returns
    ///
    /// True if the node was newly inserted
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.node_id) {
            return false;
        }
        self.adj.insert(node.node_id, IndexSet::new());
        self.rev.insert(node.node_id, IndexSet::new());
        self.nodes.insert(node.node_id, node);
        true
    }

    /// remove a node along with every incident edge, in both directions.
    ///
    /// # Returns
    ///
    /// True if the node was present
    pub fn remove_node(&mut self, node_id: &NodeId) -> bool {
        if !self.nodes.contains_key(node_id) {
            return false;
        }
        let incident: Vec<Edge> = self
            .out_edges_iter(node_id)
            .chain(self.in_edges_iter(node_id))
            .cloned()
            .collect();
        for edge in incident {
            self.remove_edge(&edge);
        }
        self.adj.shift_remove(node_id);
        self.rev.shift_remove(node_id);
        self.nodes.shift_remove(node_id);
        true
    }

    /// insert a directed edge, keeping both incidence sides in sync.
    ///
    /// # Returns
    ///
    /// True if the edge was newly inserted, false if an identical edge was
    /// already present, or an error if either endpoint is missing.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, NetworkError> {
        if !self.nodes.contains_key(&edge.src_node_id) || !self.nodes.contains_key(&edge.dst_node_id)
        {
            return Err(NetworkError::DanglingEdge(
                edge.src_node_id,
                edge.dst_node_id,
            ));
        }
        let inserted = match self.adj.get_mut(&edge.src_node_id) {
            Some(out_links) => out_links.insert(edge),
            None => false,
        };
        if let Some(in_links) = self.rev.get_mut(&edge.dst_node_id) {
            in_links.insert(edge);
        }
        Ok(inserted)
    }

    /// remove a directed edge from both incidence sides.
    ///
    /// # Returns
    ///
    /// True if the edge was present
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        let removed = match self.adj.get_mut(&edge.src_node_id) {
            Some(out_links) => out_links.shift_remove(edge),
            None => false,
        };
        if let Some(in_links) = self.rev.get_mut(&edge.dst_node_id) {
            in_links.shift_remove(edge);
        }
        removed
    }

    pub fn contains_node_id(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// retrieve a `Node` record from the graph
    ///
    /// # Arguments
    ///
    /// * `node_id` - the `NodeId` for the `Node` that we want to retrieve
    ///
    /// # Returns
    ///
    /// The associated `Node` or an error if the id is missing
    pub fn get_node(&self, node_id: &NodeId) -> Result<&Node, NetworkError> {
        match self.nodes.get(node_id) {
            None => Err(NetworkError::NodeNotFound(*node_id)),
            Some(node) => Ok(node),
        }
    }

    /// iterates over all node ids in insertion order
    pub fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.nodes.keys().copied())
    }

    /// iterates over all node records in insertion order
    pub fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(self.nodes.values())
    }

    /// iterates through all edges in the graph
    pub fn edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.adj.values().flat_map(|edges| edges.iter()))
    }

    /// retrieve a list of edges that depart from the given `NodeId`
    pub fn out_edges(&self, src: &NodeId) -> Vec<Edge> {
        self.out_edges_iter(src).cloned().collect_vec()
    }

    /// builds an iterator over the edges departing from the given `NodeId`.
    /// the view is stable while the graph is not mutated.
    pub fn out_edges_iter<'a>(&'a self, src: &NodeId) -> Box<dyn Iterator<Item = &'a Edge> + 'a> {
        match self.adj.get(src) {
            Some(out_links) => Box::new(out_links.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// retrieve a list of edges that arrive at the given `NodeId`
    pub fn in_edges(&self, dst: &NodeId) -> Vec<Edge> {
        self.in_edges_iter(dst).cloned().collect_vec()
    }

    /// builds an iterator over the edges arriving at the given `NodeId`.
    pub fn in_edges_iter<'a>(&'a self, dst: &NodeId) -> Box<dyn Iterator<Item = &'a Edge> + 'a> {
        match self.rev.get(dst) {
            Some(in_links) => Box::new(in_links.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// builds the graph with every edge's orientation flipped. node
    /// insertion order is preserved. used to run backward one-to-many
    /// searches through the forward-oriented search engine.
    pub fn reverse(&self) -> Graph {
        let mut reversed = Graph::default();
        for node in self.nodes() {
            reversed.add_node(*node);
        }
        for edge in self.edges() {
            // endpoints exist by construction, so insertion cannot fail
            let _ = reversed.add_edge(edge.flipped());
        }
        reversed
    }
}
