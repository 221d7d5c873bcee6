//! The resource store actor.
//!
//! The store owns the single mutable [`Resource`](crate::domain::Resource)
//! and serializes every read and write through a message channel. No other
//! part of the system holds the resource directly.

mod actor;
mod client;
mod error;

pub use actor::{ResourceStore, StoreRequest};
pub use client::StoreClient;
pub use error::StoreError;
