use wayfarer_core::model::network::NodeId;

/// Resolves between OSM identifiers and internal graph identifiers, and
/// answers display names for nodes and ways. Implementations must be
/// safe for concurrent reads; the routing service shares one store
/// across all request workers.
pub trait MetadataStore: Send + Sync {
    /// the internal graph id assigned to an OSM node id during ingestion
    fn internal_by_osm(&self, osm_id: i64) -> Option<NodeId>;

    /// the OSM node id an internal graph id was assigned from
    fn osm_by_internal(&self, node_id: NodeId) -> Option<i64>;

    /// display name of an OSM node
    fn node_name(&self, osm_id: i64) -> Option<&str>;

    /// display name of an OSM way
    fn way_name(&self, osm_id: i64) -> Option<&str>;
}
