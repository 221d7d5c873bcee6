use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::domain::Resource;
use crate::version;

use super::StoreClient;

/// Reply channel for a single store request.
pub type Reply<T> = oneshot::Sender<T>;

/// Messages understood by the store actor.
///
/// Every operation is total: the actor always answers, and nothing here can
/// fail inside the store itself.
#[derive(Debug)]
pub enum StoreRequest {
    /// A consistent point-in-time copy of the resource.
    Snapshot { respond_to: Reply<Resource> },
    /// Replace the entity tag and last-modified pair together.
    Rotate { respond_to: Reply<()> },
    /// Increment the served-response counter; replies with the new value.
    RecordServed { respond_to: Reply<u64> },
}

/// The actor that owns the [`Resource`].
///
/// **Concurrency model**: the actor processes its messages sequentially in
/// its own task, so a snapshot can never observe a half-rotated validator
/// pair and counter increments cannot be lost, without any locking.
pub struct ResourceStore {
    receiver: mpsc::Receiver<StoreRequest>,
    resource: Resource,
}

impl ResourceStore {
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            resource: Resource::new(),
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the store's event loop, processing messages until every client
    /// is dropped.
    pub async fn run(mut self) {
        info!(etag = %self.resource.entity_tag, "Resource store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Snapshot { respond_to } => {
                    debug!(etag = %self.resource.entity_tag, "Snapshot");
                    let _ = respond_to.send(self.resource.clone());
                }
                StoreRequest::Rotate { respond_to } => {
                    self.resource.entity_tag = version::new_entity_tag();
                    self.resource.last_modified = version::now();
                    info!(etag = %self.resource.entity_tag, "Validators rotated");
                    let _ = respond_to.send(());
                }
                StoreRequest::RecordServed { respond_to } => {
                    self.resource.update_counter += 1;
                    debug!(counter = self.resource.update_counter, "Served response recorded");
                    let _ = respond_to.send(self.resource.update_counter);
                }
            }
        }

        info!(counter = self.resource.update_counter, "Resource store shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SAMPLE_CONTENT;

    #[tokio::test]
    async fn snapshot_is_idempotent() {
        let (store, client) = ResourceStore::new(8);
        tokio::spawn(store.run());

        let first = client.snapshot().await.unwrap();
        let second = client.snapshot().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn rotate_replaces_the_pair_and_nothing_else() {
        let (store, client) = ResourceStore::new(8);
        tokio::spawn(store.run());

        let before = client.snapshot().await.unwrap();
        client.rotate().await.unwrap();
        let after = client.snapshot().await.unwrap();

        assert_ne!(before.entity_tag, after.entity_tag);
        assert!(after.last_modified >= before.last_modified);
        assert_eq!(after.content, SAMPLE_CONTENT);
        assert_eq!(after.update_counter, before.update_counter);
    }

    #[tokio::test]
    async fn record_served_increments_by_one() {
        let (store, client) = ResourceStore::new(8);
        tokio::spawn(store.run());

        assert_eq!(client.record_served().await.unwrap(), 1);
        assert_eq!(client.record_served().await.unwrap(), 2);

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.update_counter, 2);
    }

    #[tokio::test]
    async fn record_served_does_not_touch_validators() {
        let (store, client) = ResourceStore::new(8);
        tokio::spawn(store.run());

        let before = client.snapshot().await.unwrap();
        client.record_served().await.unwrap();
        let after = client.snapshot().await.unwrap();

        assert_eq!(before.entity_tag, after.entity_tag);
        assert_eq!(before.last_modified, after.last_modified);
    }

    #[tokio::test]
    async fn client_errors_once_the_store_is_gone() {
        let (store, client) = ResourceStore::new(8);
        let handle = tokio::spawn(store.run());

        handle.abort();
        let _ = handle.await;

        assert!(client.snapshot().await.is_err());
    }
}
