//! Entity-tag and timestamp generation.
//!
//! Tags are opaque, quoted tokens drawn from a uniform alphanumeric alphabet.
//! Collisions are acceptably rare for cache validation; this is not a
//! security boundary.

use chrono::{DateTime, Timelike, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

const TAG_LEN: usize = 9;

/// Returns a fresh opaque entity tag, quoted per HTTP convention.
pub fn new_entity_tag() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TAG_LEN)
        .map(char::from)
        .collect();
    format!("\"{token}\"")
}

/// Current wall-clock time, truncated to whole seconds.
///
/// HTTP-date carries second precision. Keeping the stored timestamp at the
/// same granularity means a client echoing our `Last-Modified` value compares
/// equal rather than "older".
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(0).unwrap_or(now)
}
