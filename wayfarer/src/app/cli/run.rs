use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::cli_args::CliArgs;
use crate::app::metadata::{InMemoryMetadata, MetadataStore};
use crate::app::server;
use crate::app::service::RoutingService;
use crate::app::{AppConfig, AppError};
use wayfarer_core::algorithm::component::largest_scc_subgraph;
use wayfarer_core::model::network::Graph;

/// boots the routing server from a configuration file: ingests the road
/// network, prunes it to its largest strongly connected component,
/// prepares the configured search computation, and serves until
/// shutdown. any failure on this path is fatal.
pub fn run(args: &CliArgs) -> Result<(), AppError> {
    let config = AppConfig::try_from(Path::new(&args.config_file))?;

    let ingested = Graph::try_from(&config.graph)?;
    log::info!(
        "ingested road network: {} nodes, {} edges",
        ingested.n_nodes(),
        ingested.n_edges()
    );

    let graph = largest_scc_subgraph(&ingested);
    log::info!(
        "pruned to largest strongly connected component: kept {} of {} nodes, {} of {} edges",
        graph.n_nodes(),
        ingested.n_nodes(),
        graph.n_edges(),
        ingested.n_edges()
    );

    let graph = Arc::new(graph);
    let computation = Arc::new(config.search.build(Arc::clone(&graph))?);
    let metadata: Arc<dyn MetadataStore> = Arc::new(InMemoryMetadata::try_from(&config.metadata)?);
    let deadline = config.query.deadline_ms.map(Duration::from_millis);
    let service = Arc::new(RoutingService::new(
        Arc::clone(&graph),
        computation,
        metadata,
        deadline,
    ));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(&config.server, service))
}
