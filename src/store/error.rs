//! Error types for the store actor.

use thiserror::Error;

/// Errors surfaced when talking to the store actor.
///
/// The store's own operations are total; the only failures are losing the
/// actor task itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store task is no longer accepting requests.
    #[error("store actor closed")]
    ActorClosed,

    /// The store task dropped the reply channel mid-request.
    #[error("store actor dropped response channel")]
    ActorDropped,
}
