//! Data types for the cached resource and its wire representation.

mod resource;

pub use resource::{Resource, ResourceResponse, SAMPLE_CONTENT};
