use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use hyper::header::{HeaderName, HeaderValue, CACHE_CONTROL, ETAG, EXPIRES, LAST_MODIFIED};
use hyper::HeaderMap;

use crate::domain::Resource;

/// Formats a timestamp as an HTTP-date (RFC 7231) string.
///
/// Used for headers and for the JSON body, so the value we emit is always
/// parseable by [`evaluate`](crate::cache::evaluate).
pub fn http_date(timestamp: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(SystemTime::from(timestamp))
}

/// Writes freshness and validator headers for the current resource version.
///
/// Applied to every response, 304s included: `Cache-Control`, `Expires`,
/// `ETag` and `Last-Modified`.
#[derive(Debug, Clone)]
pub struct CacheHeaderWriter {
    freshness_window: Duration,
}

impl CacheHeaderWriter {
    pub fn new(freshness_window: Duration) -> Self {
        Self { freshness_window }
    }

    pub fn apply(&self, snapshot: &Resource, headers: &mut HeaderMap) {
        let cache_control = format!("public, max-age={}", self.freshness_window.as_secs());
        let expires = httpdate::fmt_http_date(SystemTime::now() + self.freshness_window);

        insert(headers, CACHE_CONTROL, &cache_control);
        insert(headers, EXPIRES, &expires);
        insert(headers, ETAG, &snapshot.entity_tag);
        insert(headers, LAST_MODIFIED, &http_date(snapshot.last_modified));
    }
}

// All values written here are machine-generated and valid header text; an
// invalid one is simply skipped rather than failing the response.
fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}
