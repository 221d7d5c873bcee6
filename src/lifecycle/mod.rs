//! System orchestration: task startup, wiring and graceful shutdown.

mod cache_system;
pub mod tracing;

pub use cache_system::CacheSystem;
