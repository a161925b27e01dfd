use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::model::network::NodeId;
use geo::{coord, Coord};
use serde::de;

/// represents a node in the road network. spatial attributes are stored
/// as 32-bit degrees in the WGS84 coordinate system, x = longitude and
/// y = latitude. equality and hashing are by identity only, so a node can
/// stand in for its id in set-like collections.
/// this struct implements Deserialize to support reading node records
/// from CSV files.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub node_id: NodeId,
    pub coordinate: Coord<f32>,
}

impl Node {
    pub fn new(node_id: usize, x: f32, y: f32) -> Self {
        Self {
            node_id: NodeId(node_id),
            coordinate: coord! {x: x, y: y},
        }
    }

    pub fn x(&self) -> f32 {
        self.coordinate.x
    }

    pub fn y(&self) -> f32 {
        self.coordinate.y
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id.hash(state)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} ({},{})", self.node_id, self.x(), self.y())
    }
}

const NODE_ID: &str = "node_id";
const X_COORDINATE: &str = "x";
const Y_COORDINATE: &str = "y";

impl<'de> de::Deserialize<'de> for Node {
    /// specialized deserialization for `Node` that creates a Node from a CSV
    /// row that has node_id, x, and y columns.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> de::Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a node_id, x, and y field")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                // columns may appear in arbitrary order. each expected value is
                // stored as it is found, unknown columns are ignored, and once all
                // three are present the Node is built and the loop ends.
                let mut node_id_result: Option<usize> = None;
                let mut x_result: Option<f32> = None;
                let mut y_result: Option<f32> = None;
                let mut node_result: Option<Node> = None;
                let mut next: Option<(&str, &str)> = map.next_entry()?;
                while let Some((key, value)) = next {
                    match key {
                        NODE_ID => {
                            let id: usize = value.parse().map_err(|e| {
                                de::Error::custom(format!(
                                    "unable to parse node_id '{}': {}",
                                    &value, e
                                ))
                            })?;
                            node_id_result = Some(id);
                        }
                        X_COORDINATE => {
                            let x_coord: f32 = value.parse().map_err(|e| {
                                de::Error::custom(format!("unable to parse x '{}': {}", &value, e))
                            })?;
                            x_result = Some(x_coord);
                        }
                        Y_COORDINATE => {
                            let y_coord: f32 = value.parse().map_err(|e| {
                                de::Error::custom(format!("unable to parse y '{}': {}", &value, e))
                            })?;
                            y_result = Some(y_coord);
                        }
                        &_ => {} // ignore unknown key/value pairs
                    }
                    match node_id_result.zip(x_result).zip(y_result) {
                        Some(((node_id, x), y)) => {
                            node_result = Some(Node::new(node_id, x, y));
                            next = None;
                        }
                        None => {
                            next = map.next_entry()?;
                        }
                    }
                }

                match node_result {
                    None => Err(de::Error::custom("failed to deserialize Node")),
                    Some(node) => Ok(node),
                }
            }
        }

        deserializer.deserialize_map(NodeVisitor {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_identity_equality() {
        let a = Node::new(3, -105.2, 39.7);
        let b = Node::new(3, 0.0, 0.0);
        let c = Node::new(4, -105.2, 39.7);
        assert_eq!(a, b, "nodes with equal ids should be equal");
        assert_ne!(a, c, "nodes with distinct ids should not be equal");
    }

    #[test]
    fn test_deserialize_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "y,node_id,x").unwrap();
        writeln!(file, "39.71221,5,-105.20423").unwrap();
        writeln!(file, "39.75842,10,-105.22927").unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let result: Vec<Node> = reader.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].node_id, NodeId(5));
        assert_eq!(result[0].x(), -105.20423);
        assert_eq!(result[0].y(), 39.71221);
        assert_eq!(result[1].node_id, NodeId(10));
    }
}
