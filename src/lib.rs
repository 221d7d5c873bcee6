//! # Conditional-Cache Recipe
//!
//! > **HTTP cache validation with rotating validators, built on actors.**
//!
//! This crate serves a single in-memory resource at `GET /resource` and
//! demonstrates conditional re-validation. Every response advertises a
//! freshness window plus a validator pair (entity tag and last-modified
//! time), and a request carrying `If-None-Match` / `If-Modified-Since` gets
//! an empty `304 Not Modified` when its cached copy is still current. A
//! background task rotates the validator pair on a fixed period, independent
//! of request traffic.
//!
//! ## 🏗️ Design
//!
//! The resource is the only shared mutable state in the process, and a single
//! **store actor** owns it: a Tokio task that processes snapshot, rotate and
//! record messages sequentially from a channel. Rotation is therefore atomic
//! (no request can observe a half-replaced validator pair) and counter
//! increments cannot be lost, all without locks. See [`store::ResourceStore`].
//!
//! The validation policy is deliberately conjunctive: a `304` requires
//! **both** the entity tag to match exactly **and** the client's timestamp to
//! be at or after the current last-modified instant. Since a rotation always
//! replaces both validators together, an old pair can never revalidate. See
//! [`cache::evaluate`] for the rule, including its fail-open handling of
//! unparseable dates.
//!
//! Two timing knobs are intentionally independent: the freshness window
//! advertised to clients (default 10 s) and the rotation period (default
//! 20 s). Roughly half of all freshness windows span a rotation boundary,
//! which is part of what the demo demonstrates.
//!
//! ## 🗺️ Module Tour
//!
//! - [`store`]: the actor that owns the resource, plus its typed client.
//! - [`cache`]: the core rules — outbound cache headers and conditional
//!   evaluation of inbound validators.
//! - [`handler`]: orchestrates one request from headers to `304`/`200`.
//! - [`rotator`]: the time-driven rotation task.
//! - [`http`] / [`server`]: the narrow transport seam and the hyper loop
//!   behind it.
//! - [`lifecycle`]: startup wiring, graceful shutdown and tracing setup.
//! - [`config`], [`domain`], [`version`]: knobs, data types and tag
//!   generation.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -i http://localhost:8081/resource
//! ```
//!
//! Then replay the returned validators to see the 304 path:
//!
//! ```bash
//! curl -i http://localhost:8081/resource \
//!   -H 'If-None-Match: "<etag from above>"' \
//!   -H 'If-Modified-Since: <last-modified from above>'
//! ```

pub mod cache;
pub mod config;
pub mod domain;
pub mod handler;
pub mod http;
pub mod lifecycle;
pub mod rotator;
pub mod server;
pub mod store;
pub mod version;
