//! Periodic validator rotation.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::store::StoreClient;

/// Time-driven task that replaces the store's validator pair on a fixed
/// period, independent of request traffic.
///
/// The period is intentionally decoupled from the advertised freshness
/// window; the two are separate configuration knobs.
pub struct Rotator {
    store: StoreClient,
    period: Duration,
}

impl Rotator {
    pub fn new(store: StoreClient, period: Duration) -> Self {
        Self { store, period }
    }

    /// Ticks forever; ends when the store goes away or the task is aborted.
    ///
    /// The first rotation happens one full period after start, so clients
    /// see the initial validator pair for a whole interval.
    pub async fn run(self) {
        info!(period_secs = self.period.as_secs(), "Rotator started");

        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // An interval's first tick completes immediately; consume it.
        interval.tick().await;

        loop {
            interval.tick().await;
            if self.store.rotate().await.is_err() {
                info!("Store closed, rotator stopping");
                break;
            }
            debug!("Rotation tick complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ResourceStore;

    #[tokio::test(start_paused = true)]
    async fn rotates_once_per_period() {
        let (store, client) = ResourceStore::new(8);
        tokio::spawn(store.run());

        let initial = client.snapshot().await.unwrap();
        tokio::spawn(Rotator::new(client.clone(), Duration::from_secs(20)).run());

        // Inside the first period the initial pair is still live.
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(
            client.snapshot().await.unwrap().entity_tag,
            initial.entity_tag
        );

        time::sleep(Duration::from_secs(15)).await;
        assert_ne!(
            client.snapshot().await.unwrap().entity_tag,
            initial.entity_tag
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_the_store_closes() {
        let (store, client) = ResourceStore::new(8);
        let store_handle = tokio::spawn(store.run());

        let rotator_handle = tokio::spawn(Rotator::new(client, Duration::from_secs(1)).run());

        store_handle.abort();
        let _ = store_handle.await;

        time::sleep(Duration::from_secs(3)).await;
        assert!(rotator_handle.is_finished());
    }
}
