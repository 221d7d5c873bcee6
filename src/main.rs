use std::sync::Arc;

use cache_recipe::cache::CacheHeaderWriter;
use cache_recipe::config::ServerConfig;
use cache_recipe::handler::ResourceHandler;
use cache_recipe::lifecycle::{tracing::setup_tracing, CacheSystem};
use cache_recipe::server::HttpServer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServerConfig::from_env();
    info!(?config, "Starting conditional-cache demo");

    // Spawns the store actor and the rotator
    let system = CacheSystem::new(&config);

    let handler = Arc::new(ResourceHandler::new(
        system.store_client.clone(),
        CacheHeaderWriter::new(config.freshness_window()),
    ));
    let server = HttpServer::new(handler);

    tokio::select! {
        result = server.listen(config.addr()) => {
            result.map_err(|e| format!("Server error: {e}"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received");
        }
    }

    system.shutdown().await
}
