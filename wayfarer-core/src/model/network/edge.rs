use crate::model::network::{NodeId, WayId};
use crate::model::unit::Cost;
use serde::{Deserialize, Serialize};

/// represents a single directed edge in the road network. the cost is the
/// traversal time of the edge in seconds at the legal speed of its way.
/// edges are immutable once inserted into a graph; parallel edges that
/// differ in cost or way id are distinct members of the multigraph.
/// this struct implements Serialize and Deserialize to support reading
/// edge records from CSV files.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub src_node_id: NodeId,
    pub dst_node_id: NodeId,
    pub cost: Cost,
    pub way_id: WayId,
}

impl Edge {
    pub fn new(src_node_id: usize, dst_node_id: usize, cost: f64, way_id: i64) -> Self {
        Self {
            src_node_id: NodeId(src_node_id),
            dst_node_id: NodeId(dst_node_id),
            cost: Cost::new(cost),
            way_id: WayId(way_id),
        }
    }

    /// the same edge traversed in the opposite direction. used when
    /// constructing the reverse orientation of a graph.
    pub fn flipped(&self) -> Edge {
        Edge {
            src_node_id: self.dst_node_id,
            dst_node_id: self.src_node_id,
            cost: self.cost,
            way_id: self.way_id,
        }
    }
}
