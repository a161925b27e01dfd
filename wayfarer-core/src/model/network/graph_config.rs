use serde::{Deserialize, Serialize};

/// file locations for the ingested road network. both files are CSV with
/// a header row and may be gzip-compressed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphConfig {
    pub node_list_input_file: String,
    pub edge_list_input_file: String,
}
