//! Process configuration.

use std::env;
use std::fmt::Display;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_FRESHNESS_WINDOW_SECS: u64 = 10;
pub const DEFAULT_ROTATION_INTERVAL_SECS: u64 = 20;

/// Runtime knobs for the demo server.
///
/// The freshness window and rotation interval are independent on purpose:
/// by default the server advertises a 10 second window while rotating
/// validators every 20 seconds, so roughly half of all freshness windows
/// span a rotation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the transport binds to.
    pub port: u16,
    /// Advertised cache lifetime in seconds (`max-age` and `Expires`).
    pub freshness_window_secs: u64,
    /// Period between validator rotations, in seconds.
    pub rotation_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            freshness_window_secs: DEFAULT_FRESHNESS_WINDOW_SECS,
            rotation_interval_secs: DEFAULT_ROTATION_INTERVAL_SECS,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from `PORT`, `FRESHNESS_WINDOW_SECS` and
    /// `ROTATION_INTERVAL_SECS`, keeping the defaults for anything unset or
    /// unparseable.
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", DEFAULT_PORT),
            freshness_window_secs: env_or("FRESHNESS_WINDOW_SECS", DEFAULT_FRESHNESS_WINDOW_SECS),
            rotation_interval_secs: env_or(
                "ROTATION_INTERVAL_SECS",
                DEFAULT_ROTATION_INTERVAL_SECS,
            ),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn freshness_window(&self) -> Duration {
        Duration::from_secs(self.freshness_window_secs)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_secs(self.rotation_interval_secs)
    }
}

fn env_or<T: FromStr + Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, raw = %raw, default = %default, "Invalid value, using default");
                default
            }
        },
        Err(_) => default,
    }
}
