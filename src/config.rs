//! Configuration loading and logging initialization.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Error, Result};

/// Top-level application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub book: BookConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Order-book cache configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Snapshot time-to-live in seconds; 0 disables expiry.
    pub ttl_secs: u64,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// The CLI works out of the box without a config file; a file that
    /// exists but fails to read or parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.is_empty() {
            return Err(Error::Config(ConfigError::MissingField { field: "level" }));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(Error::Config(ConfigError::InvalidValue {
                    field: "format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            book: BookConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` overrides the configured level. Logs go to stderr so
    /// JSON results on stdout stay pipeable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl BookConfig {
    /// Cache TTL as a [`Duration`].
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self { ttl_secs: 10 }
    }
}
