//! Observability setup.
//!
//! Structured logging via the `tracing` crate, with levels controlled through
//! the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Lifecycle events only
//! RUST_LOG=info cargo run
//!
//! # Per-request and per-message detail
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=cache_recipe::store=debug cargo run
//! ```
//!
//! The compact format hides the module prefix (`with_target(false)`); log
//! lines carry structured fields (entity tags, counters) instead.

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
