use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::Resource;

use super::{StoreError, StoreRequest};

/// Type-safe handle for talking to the store actor.
///
/// Cheap to clone; every handler task and the rotator hold one.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// A consistent copy of the resource as of this call.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Resource, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)
    }

    /// Install a freshly generated entity tag + last-modified pair.
    #[instrument(skip(self))]
    pub async fn rotate(&self) -> Result<(), StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Rotate { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)
    }

    /// Record one served full response; replies with the counter after the
    /// increment.
    #[instrument(skip(self))]
    pub async fn record_served(&self) -> Result<u64, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::RecordServed { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)
    }
}
