/// Configuration system for fnindex
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dev server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Scan configuration
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Dev server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the dev server binds to, `ip:port`
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Repository root served by the HTTP facade. `None` until a
    /// repository is loaded; the facade answers 400 in that state.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

fn default_bind() -> String {
    "127.0.0.1:4150".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(bind) = std::env::var("FNINDEX_BIND") {
            self.server.bind = bind;
        }

        if let Ok(root) = std::env::var("FNINDEX_ROOT") {
            self.scan.root = Some(PathBuf::from(root));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                key: "server.bind".to_string(),
                reason: format!("must be an ip:port address, got '{}'", self.server.bind),
            });
        }

        Ok(())
    }
}
