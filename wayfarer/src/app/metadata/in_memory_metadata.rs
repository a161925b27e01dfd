use std::collections::HashMap;

use super::{MetadataConfig, MetadataStore};
use crate::app::AppError;
use kdam::Bar;
use serde::Deserialize;
use wayfarer_core::model::network::NodeId;
use wayfarer_core::util::fs::read_utils;

/// metadata held fully in memory. populated during ingestion and frozen
/// for the server's lifetime, so lookups need no synchronization.
#[derive(Debug, Default)]
pub struct InMemoryMetadata {
    internal_by_osm: HashMap<i64, NodeId>,
    osm_by_internal: HashMap<NodeId, i64>,
    node_names: HashMap<i64, String>,
    way_names: HashMap<i64, String>,
}

#[derive(Debug, Deserialize)]
struct NodeMappingRow {
    osm_id: i64,
    node_id: usize,
}

#[derive(Debug, Deserialize)]
struct NameRow {
    osm_id: i64,
    name: String,
}

impl InMemoryMetadata {
    pub fn new() -> InMemoryMetadata {
        InMemoryMetadata::default()
    }

    /// register the OSM id an internal node id was assigned from
    pub fn insert_node_mapping(&mut self, osm_id: i64, node_id: NodeId) {
        self.internal_by_osm.insert(osm_id, node_id);
        self.osm_by_internal.insert(node_id, osm_id);
    }

    pub fn insert_node_name(&mut self, osm_id: i64, name: String) {
        self.node_names.insert(osm_id, name);
    }

    pub fn insert_way_name(&mut self, osm_id: i64, name: String) {
        self.way_names.insert(osm_id, name);
    }
}

impl TryFrom<&MetadataConfig> for InMemoryMetadata {
    type Error = AppError;

    fn try_from(config: &MetadataConfig) -> Result<Self, Self::Error> {
        let mut metadata = InMemoryMetadata::new();

        let mappings: Box<[NodeMappingRow]> = read_utils::from_csv(
            &config.node_mapping_input_file,
            true,
            Some(Bar::builder().desc(format!("node mapping: {}", config.node_mapping_input_file))),
            None,
        )?;
        for row in mappings.iter() {
            metadata.insert_node_mapping(row.osm_id, NodeId(row.node_id));
        }

        if let Some(file) = &config.node_names_input_file {
            let rows: Box<[NameRow]> = read_utils::from_csv(
                file,
                true,
                Some(Bar::builder().desc(format!("node names: {}", file))),
                None,
            )?;
            for row in rows.into_vec() {
                metadata.insert_node_name(row.osm_id, row.name);
            }
        }

        if let Some(file) = &config.way_names_input_file {
            let rows: Box<[NameRow]> = read_utils::from_csv(
                file,
                true,
                Some(Bar::builder().desc(format!("way names: {}", file))),
                None,
            )?;
            for row in rows.into_vec() {
                metadata.insert_way_name(row.osm_id, row.name);
            }
        }

        log::info!(
            "loaded metadata: {} node mappings, {} node names, {} way names",
            metadata.internal_by_osm.len(),
            metadata.node_names.len(),
            metadata.way_names.len()
        );
        Ok(metadata)
    }
}

impl MetadataStore for InMemoryMetadata {
    fn internal_by_osm(&self, osm_id: i64) -> Option<NodeId> {
        self.internal_by_osm.get(&osm_id).copied()
    }

    fn osm_by_internal(&self, node_id: NodeId) -> Option<i64> {
        self.osm_by_internal.get(&node_id).copied()
    }

    fn node_name(&self, osm_id: i64) -> Option<&str> {
        self.node_names.get(&osm_id).map(|s| s.as_str())
    }

    fn way_name(&self, osm_id: i64) -> Option<&str> {
        self.way_names.get(&osm_id).map(|s| s.as_str())
    }
}
