use serde::{Deserialize, Serialize};

/// file locations of the ingested metadata. the mapping file is CSV with
/// `osm_id` and `node_id` columns; the name files are CSV with `osm_id`
/// and `name` columns. any of the files may be gzip-compressed, and the
/// name files may be omitted for networks without naming data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MetadataConfig {
    pub node_mapping_input_file: String,
    #[serde(default)]
    pub node_names_input_file: Option<String>,
    #[serde(default)]
    pub way_names_input_file: Option<String>,
}
