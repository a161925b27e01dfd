use crate::model::network::{Edge, NetworkError, NodeId};
use crate::model::unit::Cost;

/// an ordered sequence of edges in which every edge departs from the
/// previous edge's destination. the empty path with zero cost represents
/// a query whose source and destination coincide.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    source: NodeId,
    edges: Vec<Edge>,
}

impl Path {
    /// the zero-length, zero-cost path anchored at a single node
    pub fn empty(source: NodeId) -> Path {
        Path {
            source,
            edges: vec![],
        }
    }

    /// build a path from an edge sequence, validating the chain condition.
    pub fn new(source: NodeId, edges: Vec<Edge>) -> Result<Path, NetworkError> {
        let mut position = source;
        for edge in edges.iter() {
            if edge.src_node_id != position {
                return Err(NetworkError::PathDiscontinuity(position));
            }
            position = edge.dst_node_id;
        }
        Ok(Path { source, edges })
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// the final node of the path, which is the source itself when the
    /// path is empty
    pub fn destination(&self) -> NodeId {
        match self.edges.last() {
            Some(edge) => edge.dst_node_id,
            None => self.source,
        }
    }

    pub fn total_cost(&self) -> Cost {
        self.edges.iter().map(|e| e.cost).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
