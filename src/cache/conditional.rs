use chrono::{DateTime, Utc};
use hyper::header::{HeaderName, IF_MODIFIED_SINCE, IF_NONE_MATCH};
use hyper::HeaderMap;

use crate::domain::Resource;

/// Outcome of conditional evaluation for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The client's cached copy is current; short-circuit with an empty 304.
    NotModified,
    /// The client needs the full body again.
    Modified,
}

/// The validators a request carried, as raw strings.
///
/// Values stay unparsed here: they are echoed back in the response body and
/// only interpreted inside [`evaluate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestValidators {
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
}

impl RequestValidators {
    /// Extracts `If-None-Match` and `If-Modified-Since` from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            if_none_match: header_str(headers, IF_NONE_MATCH),
            if_modified_since: header_str(headers, IF_MODIFIED_SINCE),
        }
    }

    /// True when the request carried neither validator.
    pub fn is_empty(&self) -> bool {
        self.if_none_match.is_none() && self.if_modified_since.is_none()
    }
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Decides whether the client's cached copy is still current.
///
/// Not-modified requires **both** validators to agree: the supplied entity
/// tag must equal the current one by exact string match, and the supplied
/// timestamp must be at or after the current last-modified instant. This is
/// stricter than the usual any-validator handling on purpose: a rotation
/// always changes both fields together, so an old pair can never revalidate.
///
/// A missing or unparseable `If-Modified-Since` compares as older, so
/// ambiguous input re-serves the full body rather than risking a stale 304.
pub fn evaluate(validators: &RequestValidators, snapshot: &Resource) -> Freshness {
    let tag_matches = validators.if_none_match.as_deref() == Some(snapshot.entity_tag.as_str());
    let timestamp_fresh = validators
        .if_modified_since
        .as_deref()
        .and_then(parse_http_date)
        .is_some_and(|since| since >= snapshot.last_modified);

    if tag_matches && timestamp_fresh {
        Freshness::NotModified
    } else {
        Freshness::Modified
    }
}

/// Parses an HTTP date, yielding `None` for anything unparseable.
fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    httpdate::parse_http_date(value).ok().map(DateTime::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::http_date;
    use crate::version;
    use chrono::Duration as ChronoDuration;

    fn snapshot() -> Resource {
        Resource {
            content: "body".to_string(),
            entity_tag: "\"abc123def\"".to_string(),
            last_modified: version::now(),
            update_counter: 0,
        }
    }

    fn validators(tag: Option<&str>, since: Option<&str>) -> RequestValidators {
        RequestValidators {
            if_none_match: tag.map(str::to_owned),
            if_modified_since: since.map(str::to_owned),
        }
    }

    #[test]
    fn matching_tag_and_fresh_timestamp_is_not_modified() {
        let snap = snapshot();
        let since = http_date(snap.last_modified);
        let v = validators(Some("\"abc123def\""), Some(&since));
        assert_eq!(evaluate(&v, &snap), Freshness::NotModified);
    }

    #[test]
    fn timestamp_after_last_modified_is_not_modified() {
        let snap = snapshot();
        let since = http_date(snap.last_modified + ChronoDuration::seconds(5));
        let v = validators(Some("\"abc123def\""), Some(&since));
        assert_eq!(evaluate(&v, &snap), Freshness::NotModified);
    }

    #[test]
    fn matching_tag_with_stale_timestamp_is_modified() {
        // The conjunctive policy: a matching tag alone is not enough.
        let snap = snapshot();
        let since = http_date(snap.last_modified - ChronoDuration::seconds(1));
        let v = validators(Some("\"abc123def\""), Some(&since));
        assert_eq!(evaluate(&v, &snap), Freshness::Modified);
    }

    #[test]
    fn matching_tag_with_unparseable_timestamp_is_modified() {
        let snap = snapshot();
        let v = validators(Some("\"abc123def\""), Some("not a date"));
        assert_eq!(evaluate(&v, &snap), Freshness::Modified);
    }

    #[test]
    fn fresh_timestamp_with_wrong_tag_is_modified() {
        let snap = snapshot();
        let since = http_date(snap.last_modified);
        let v = validators(Some("\"something\""), Some(&since));
        assert_eq!(evaluate(&v, &snap), Freshness::Modified);
    }

    #[test]
    fn tag_comparison_is_exact_including_quotes() {
        let snap = snapshot();
        let since = http_date(snap.last_modified);
        let v = validators(Some("abc123def"), Some(&since));
        assert_eq!(evaluate(&v, &snap), Freshness::Modified);
    }

    #[test]
    fn absent_validators_are_modified() {
        let snap = snapshot();
        let since = http_date(snap.last_modified);

        assert_eq!(evaluate(&validators(None, None), &snap), Freshness::Modified);
        assert_eq!(
            evaluate(&validators(Some("\"abc123def\""), None), &snap),
            Freshness::Modified
        );
        assert_eq!(
            evaluate(&validators(None, Some(&since)), &snap),
            Freshness::Modified
        );
    }

    #[test]
    fn from_headers_reads_both_validators() {
        let mut headers = HeaderMap::new();
        headers.insert(IF_NONE_MATCH, "\"abc123def\"".parse().unwrap());
        headers.insert(
            IF_MODIFIED_SINCE,
            "Thu, 01 Jan 2026 00:00:00 GMT".parse().unwrap(),
        );

        let v = RequestValidators::from_headers(&headers);
        assert_eq!(v.if_none_match.as_deref(), Some("\"abc123def\""));
        assert!(!v.is_empty());
        assert!(RequestValidators::from_headers(&HeaderMap::new()).is_empty());
    }
}
