use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::version;

/// Initial payload of the demo resource.
pub const SAMPLE_CONTENT: &str = "This is a sample resource";

/// The single server-held resource and its cache validators.
///
/// `entity_tag` and `last_modified` only ever change together, when the
/// rotator installs a new pair. `update_counter` counts served full (200)
/// responses, not rotations, and never decreases.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub content: String,
    pub entity_tag: String,
    pub last_modified: DateTime<Utc>,
    pub update_counter: u64,
}

impl Resource {
    /// A fresh resource with newly generated validators and a zero counter.
    pub fn new() -> Self {
        Self {
            content: SAMPLE_CONTENT.to_string(),
            entity_tag: version::new_entity_tag(),
            last_modified: version::now(),
            update_counter: 0,
        }
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON body of a full (200) response.
///
/// Field names match the demo's wire format; the previous-validator fields
/// echo whatever the request carried, or null.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceResponse {
    pub content: String,
    #[serde(rename = "eTag")]
    pub e_tag: String,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    #[serde(rename = "previousETag")]
    pub previous_e_tag: Option<String>,
    #[serde(rename = "previousLastModified")]
    pub previous_last_modified: Option<String>,
    pub message: String,
}
