//! Environment-driven settings.

use std::env;
use std::net::SocketAddr;

use crate::gateway::{DEFAULT_BASE_URL, GatewayConfig};

pub const ENV_API_URL: &str = "STATION_MAP_API_URL";
pub const ENV_BIND: &str = "STATION_MAP_BIND";
pub const ENV_STATIC_DIR: &str = "STATION_MAP_STATIC_DIR";
pub const ENV_TIMEOUT_SECS: &str = "STATION_MAP_TIMEOUT_SECS";

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Error returned for settings that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}: {value:?}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
}

/// Runtime settings for the map server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub bind: SocketAddr,
    pub static_dir: String,
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through `lookup`. Unset or blank values take their
    /// defaults. The request timeout is only set when given as a whole number
    /// of seconds; otherwise requests never time out.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = get(ENV_API_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = get(ENV_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok());

        let bind_raw = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.trim().parse().map_err(|_| ConfigError {
            name: ENV_BIND,
            value: bind_raw.clone(),
        })?;

        let mut gateway = GatewayConfig::new(base_url);
        if let Some(secs) = timeout_secs {
            gateway = gateway.with_timeout(secs);
        }

        Ok(Self {
            gateway,
            bind,
            static_dir: get(ENV_STATIC_DIR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        })
    }
}
