use std::path::Path;

use crate::app::metadata::MetadataConfig;
use crate::app::server::ServerConfig;
use crate::app::AppError;
use config::Config;
use serde::Deserialize;
use wayfarer_core::algorithm::search::SearchPolicy;
use wayfarer_core::model::network::GraphConfig;

/// full service configuration, loaded from a TOML file whose sections
/// mirror the fields of this struct.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub graph: GraphConfig,
    pub metadata: MetadataConfig,
    pub search: SearchPolicy,
    pub server: ServerConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// per-request knobs. a deadline bounds the wall clock time one search
/// may spend before it gives up and reports no route.
#[derive(Debug, Default, Deserialize)]
pub struct QueryConfig {
    pub deadline_ms: Option<u64>,
}

impl TryFrom<&Path> for AppConfig {
    type Error = AppError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let config = Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config_toml() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"
[graph]
node_list_input_file = "nodes.csv"
edge_list_input_file = "edges.csv"

[metadata]
node_mapping_input_file = "mapping.csv"
node_names_input_file = "node_names.csv"

[search]
type = "a_star_landmarks"
landmarks = 8

[server]
host = "127.0.0.1"
port = 2846
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = AppConfig::try_from(file.path()).unwrap();
        assert_eq!(config.graph.node_list_input_file, "nodes.csv");
        assert_eq!(config.metadata.way_names_input_file, None);
        assert!(matches!(
            config.search,
            SearchPolicy::AStarLandmarks { landmarks: 8 }
        ));
        assert_eq!(config.server.port, 2846);
        assert_eq!(config.query.deadline_ms, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = NamedTempFile::new().unwrap();
        let path = missing.path().to_path_buf();
        drop(missing);
        assert!(AppConfig::try_from(path.as_path()).is_err());
    }
}
