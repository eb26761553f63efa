//! Service configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from leafreader.toml)
//! - ~/.config/leafreader/leafreader.toml
//! - ./leafreader.toml
//! - An explicit file passed on the command line
//!
//! The upstream credential is never stored in a file: it is read from the
//! environment variable named by `gateway.api_key_env`.

use config::{Config, File, FileFormat};
use leafreader_error::{ConfigError, LeafreaderResult};
use leafreader_models::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../leafreader.toml");

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Largest accepted request body in bytes
    pub body_limit_bytes: usize,
}

/// Upstream gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySettings {
    /// Chat-completions URL
    pub url: String,
    /// Model identifier
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl GatewaySettings {
    /// Gateway connection settings, or `None` when the credential is unset or empty.
    pub fn connect(&self) -> Option<GatewayConfig> {
        let api_key = std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())?;
        Some(GatewayConfig::new(&self.url, &self.model, api_key))
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listener settings
    pub server: ServerSettings,
    /// Upstream gateway settings
    pub gateway: GatewaySettings,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// The bundled defaults alone.
    pub fn bundled() -> LeafreaderResult<Self> {
        build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration with user files layered over the bundled defaults.
    ///
    /// `explicit` must exist when given; the other user files are optional.
    /// Runs before logging is installed, so it emits no events.
    pub fn load(explicit: Option<&Path>) -> LeafreaderResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/leafreader/leafreader.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("leafreader").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        build(builder)
    }
}

fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> LeafreaderResult<AppConfig> {
    let config = builder.build().map_err(|e| {
        ConfigError::new(format!("Failed to read configuration: {}", e))
    })?;
    let parsed = config.try_deserialize().map_err(|e| {
        ConfigError::new(format!("Failed to parse configuration: {}", e))
    })?;
    Ok(parsed)
}
