//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `skillbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use skillbridge_domain::config::{AlexaConfig, DEFAULT_PLATFORM_NAME, EntityOverrides, HostInfo};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Where entity states are read from.
    pub states: StatesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Exposure settings.
    pub alexa: AlexaSection,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Entity state source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StatesConfig {
    /// JSON dump of the host's entity states.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// The `[alexa]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AlexaSection {
    /// Active skill locale.
    pub locale: String,
    /// Entity ids never exposed, on top of the built-in list.
    pub never_exposed: Vec<String>,
    /// Host platform name, reported as manufacturer.
    pub platform_name: String,
    /// Host platform version, reported as software version.
    pub platform_version: String,
    /// Per-entity overrides keyed by entity id.
    pub entity_config: HashMap<String, EntityOverrides>,
}

impl Config {
    /// Load configuration from `skillbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("skillbridge.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SKILLBRIDGE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("SKILLBRIDGE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("SKILLBRIDGE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SKILLBRIDGE_STATES") {
            self.states.path = PathBuf::from(val);
        }
        if let Some(val) = var("SKILLBRIDGE_LOCALE") {
            self.alexa.locale = val;
        }
        if let Some(val) = var("SKILLBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.alexa.locale.trim().is_empty() {
            return Err(ConfigError::Validation("locale must not be empty".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Identity of the host platform.
    #[must_use]
    pub fn host_info(&self) -> HostInfo {
        HostInfo::new(&self.alexa.platform_name, &self.alexa.platform_version)
    }

    /// Exposure settings handed to the discovery service.
    ///
    /// Configured never-exposed ids extend the built-in list.
    #[must_use]
    pub fn alexa_config(&self) -> AlexaConfig {
        AlexaConfig {
            locale: self.alexa.locale.clone(),
            entity_config: self.alexa.entity_config.clone(),
            ..AlexaConfig::default()
        }
        .never_expose(self.alexa.never_exposed.iter().cloned())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StatesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("states.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "skillbridged=info,skillbridge=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for AlexaSection {
    fn default() -> Self {
        Self {
            locale: AlexaConfig::default().locale,
            never_exposed: Vec::new(),
            platform_name: DEFAULT_PLATFORM_NAME.to_string(),
            platform_version: "unknown".to_string(),
            entity_config: HashMap::new(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
