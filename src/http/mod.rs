//! The narrow seam between the caching core and the HTTP transport.
//!
//! The transport hands the core a [`Request`] (method, path and validator
//! headers) and gets back a [`Response`] (status, headers, body). Nothing
//! else crosses the boundary.

use async_trait::async_trait;
use bytes::Bytes;
use hyper::{HeaderMap, Method, StatusCode, Uri};

use crate::store::StoreError;

/// An inbound request, reduced to what the core consumes.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
}

impl Request {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        Self {
            method,
            uri,
            headers,
        }
    }
}

/// An outbound response for the transport to write to the wire.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

/// Anything that can turn a request into a response.
///
/// The only failure a handler can surface is losing the store actor; the
/// transport maps that to a 500.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, request: Request) -> Result<Response, StoreError>;
}
