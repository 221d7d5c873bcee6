//! Request orchestration for the cached resource.

use async_trait::async_trait;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::cache::{self, CacheHeaderWriter, Freshness, RequestValidators};
use crate::domain::{Resource, ResourceResponse};
use crate::http::{Handler, Request, Response};
use crate::store::{StoreClient, StoreError};

/// Serves `GET /resource`, honoring conditional validators.
///
/// Every request walks the same path: write cache headers from a store
/// snapshot, evaluate the request's validators against that snapshot, then
/// either short-circuit with an empty 304 or build the full JSON body and
/// record the served response. The 304 branch never touches the counter.
pub struct ResourceHandler {
    store: StoreClient,
    header_writer: CacheHeaderWriter,
}

impl ResourceHandler {
    pub fn new(store: StoreClient, header_writer: CacheHeaderWriter) -> Self {
        Self {
            store,
            header_writer,
        }
    }

    fn build_body(snapshot: &Resource, validators: &RequestValidators) -> ResourceResponse {
        let message = if validators.is_empty() {
            "First request".to_string()
        } else {
            // Counter value from before this response is recorded.
            format!("Resource updated {} times", snapshot.update_counter)
        };

        ResourceResponse {
            content: snapshot.content.clone(),
            e_tag: snapshot.entity_tag.clone(),
            last_modified: cache::http_date(snapshot.last_modified),
            previous_e_tag: validators.if_none_match.clone(),
            previous_last_modified: validators.if_modified_since.clone(),
            message,
        }
    }
}

#[async_trait]
impl Handler for ResourceHandler {
    #[instrument(skip(self, request), fields(method = %request.method, path = request.uri.path()))]
    async fn handle(&self, request: Request) -> Result<Response, StoreError> {
        if request.method != Method::GET || request.uri.path() != "/resource" {
            return Ok(Response::new(StatusCode::NOT_FOUND));
        }

        let snapshot = self.store.snapshot().await?;
        let mut response = Response::new(StatusCode::OK);
        self.header_writer.apply(&snapshot, &mut response.headers);

        let validators = RequestValidators::from_headers(&request.headers);
        if cache::evaluate(&validators, &snapshot) == Freshness::NotModified {
            debug!("Serving 304");
            response.status = StatusCode::NOT_MODIFIED;
            return Ok(response);
        }

        let body = Self::build_body(&snapshot, &validators);
        let counter = self.store.record_served().await?;
        debug!(counter, "Serving full body");

        response
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let payload = serde_json::to_vec(&body).unwrap_or_default();
        Ok(response.with_body(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ResourceStore;
    use hyper::{HeaderMap, Uri};
    use std::time::Duration;

    fn handler() -> ResourceHandler {
        let (store, client) = ResourceStore::new(8);
        tokio::spawn(store.run());
        ResourceHandler::new(client, CacheHeaderWriter::new(Duration::from_secs(10)))
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let response = handler()
            .handle(Request::new(
                Method::GET,
                Uri::from_static("/other"),
                HeaderMap::new(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_is_404() {
        let response = handler()
            .handle(Request::new(
                Method::POST,
                Uri::from_static("/resource"),
                HeaderMap::new(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn full_response_is_json_with_cache_headers() {
        let response = handler()
            .handle(Request::new(
                Method::GET,
                Uri::from_static("/resource"),
                HeaderMap::new(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(response.headers.contains_key(hyper::header::ETAG));
        assert!(response.headers.contains_key(hyper::header::LAST_MODIFIED));

        let json: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(json["message"], "First request");
    }
}
