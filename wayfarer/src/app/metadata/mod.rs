mod in_memory_metadata;
mod metadata_config;
mod metadata_store;

pub use in_memory_metadata::InMemoryMetadata;
pub use metadata_config::MetadataConfig;
pub use metadata_store::MetadataStore;
