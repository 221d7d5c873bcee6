use tracing::{error, info};

use crate::config::ServerConfig;
use crate::rotator::Rotator;
use crate::store::{ResourceStore, StoreClient};

const STORE_BUFFER: usize = 32;

/// Owns the background tasks behind the demo: the store actor and the
/// validator rotator.
///
/// Built once at startup; hands out [`StoreClient`]s to the transport layer
/// and tears both tasks down at shutdown.
pub struct CacheSystem {
    /// Client for the resource store actor.
    pub store_client: StoreClient,

    /// Task handles for graceful shutdown.
    store_handle: tokio::task::JoinHandle<()>,
    rotator_handle: tokio::task::JoinHandle<()>,
}

impl CacheSystem {
    /// Spawns the store actor and the rotator, each in its own task.
    pub fn new(config: &ServerConfig) -> Self {
        let (store, store_client) = ResourceStore::new(STORE_BUFFER);
        let store_handle = tokio::spawn(store.run());

        let rotator = Rotator::new(store_client.clone(), config.rotation_interval());
        let rotator_handle = tokio::spawn(rotator.run());

        Self {
            store_client,
            store_handle,
            rotator_handle,
        }
    }

    /// Stops the rotator, closes the store channel and waits for the actor.
    ///
    /// Aborting the rotator only cancels future ticks; it has no in-flight
    /// work to drain. Dropping the last client then closes the store's
    /// channel, and its event loop exits on its own.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let Self {
            store_client,
            store_handle,
            rotator_handle,
        } = self;

        rotator_handle.abort();
        let _ = rotator_handle.await;

        drop(store_client);
        if let Err(e) = store_handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
