use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use super::errors::ConfigError;

pub const DEFAULT_CONCURRENCY: usize = 50;
pub const DEFAULT_TIMEOUT_MS: u64 = 4_000;
const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Maximum number of lookups in flight at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Deadline applied to each individual lookup.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub backend: ResolverBackend,

    /// `ip` or `ip:port` of the server queried by the hickory backend.
    /// Falls back to the system resolver configuration when unset.
    #[serde(default)]
    pub nameserver: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_ms: default_timeout_ms(),
            backend: ResolverBackend::default(),
            nameserver: None,
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parses `nameserver`, defaulting the port to 53.
    pub fn nameserver_addr(&self) -> Result<Option<SocketAddr>, ConfigError> {
        let Some(raw) = self.nameserver.as_deref() else {
            return Ok(None);
        };
        let raw = raw.trim();

        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(Some(addr));
        }
        raw.parse::<IpAddr>()
            .map(|ip| Some(SocketAddr::new(ip, DNS_PORT)))
            .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address: {}", raw)))
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackend {
    /// Host resolver (`getnameinfo`), honours `/etc/hosts` and NSS.
    #[default]
    System,

    /// Async stub resolver talking DNS directly.
    Hickory,
}

impl ResolverBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Hickory => "hickory",
        }
    }
}

impl FromStr for ResolverBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "hickory" => Ok(Self::Hickory),
            other => Err(ConfigError::Validation(format!(
                "Unknown resolver backend: {}",
                other
            ))),
        }
    }
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
