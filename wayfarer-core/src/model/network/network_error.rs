use crate::model::network::NodeId;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("node attribute not found for node {0}")]
    NodeNotFound(NodeId),
    #[error("edge ({0})-[]->({1}) references a node missing from the graph")]
    DanglingEdge(NodeId, NodeId),
    #[error("path broken at node {0}: edge sequence does not chain")]
    PathDiscontinuity(NodeId),
    #[error("error with provided dataset: {0}")]
    DatasetError(String),
    #[error("failure reading graph data from file: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure reading graph data from CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
