// Runtime configuration for the HTTP shell, read from the process environment.
//
// A `.env` file, when present, is loaded by `main` before `AppConfig::from_env` runs.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub address: IpAddr,
    pub port: u16,
    pub timeout: Duration,
    pub cors: bool,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    /// Per-request log line from a custom middleware instead of tower-http's trace layer.
    pub task_logger: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cors: false,
            allowed_origins: Vec::new(),
            task_logger: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = parse_or(&lookup, "HTTP_ADDRESS", DEFAULT_ADDRESS, |raw| {
            raw.parse::<IpAddr>().ok()
        })?;
        let port = parse_or(&lookup, "HTTP_PORT", "8080", |raw| raw.parse::<u16>().ok())?;
        let timeout_secs = parse_or(&lookup, "HTTP_TIMEOUT_SECS", "4", |raw| {
            raw.parse::<u64>().ok().filter(|secs| *secs > 0)
        })?;
        let cors = parse_or(&lookup, "HTTP_CORS", "false", parse_bool)?;
        let task_logger = parse_or(&lookup, "HTTP_TASK_LOGGER", "false", parse_bool)?;
        let allowed_origins = lookup("HTTP_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            address,
            port,
            timeout: Duration::from_secs(timeout_secs),
            cors,
            allowed_origins,
            task_logger,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Blank or missing values take `default`; anything else must parse.
fn parse_or<F, T, P>(
    lookup: &F,
    key: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let raw = lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string());
    parse(&raw).ok_or(ConfigError::Invalid { key, value: raw })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
