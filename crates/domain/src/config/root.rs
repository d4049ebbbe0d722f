use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::resolver::{ResolverBackend, ResolverConfig};

const LOCAL_CONFIG_PATH: &str = "ferrous-rdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-rdns/config.toml";

/// Main configuration structure for Ferrous rDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Lookup concurrency, timeout and backend selection
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// CSV report settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-rdns.toml in current directory
    /// 3. /etc/ferrous-rdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(concurrency) = overrides.concurrency {
            self.resolver.concurrency = concurrency;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(backend) = overrides.backend {
            self.resolver.backend = backend;
        }
        if let Some(nameserver) = overrides.nameserver {
            self.resolver.nameserver = Some(nameserver);
        }
        if let Some(csv_path) = overrides.csv_path {
            self.output.csv_path = Some(csv_path);
        }
        if overrides.no_prompt {
            self.output.prompt = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.concurrency == 0 {
            return Err(ConfigError::Validation(
                "Resolver concurrency must be at least 1".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        self.resolver.nameserver_addr()?;

        if let Some(path) = &self.output.csv_path {
            if path.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "CSV output path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub concurrency: Option<usize>,
    pub timeout_ms: Option<u64>,
    pub backend: Option<ResolverBackend>,
    pub nameserver: Option<String>,
    pub csv_path: Option<String>,
    pub no_prompt: bool,
    pub log_level: Option<String>,
}
