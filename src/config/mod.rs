//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values: the LLM credential only ever comes from
//! `GEMINI_API_KEY`, never from the file.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

mod llm;
mod logging;

pub use llm::{LlmConfig, GEMINI_API_KEY_ENV};
pub use logging::LoggingConfig;

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout applied by the router.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Upstream Pokémon catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_upstream_timeout(),
        }
    }
}

/// Matchup resolution configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchupsConfig {
    /// Cache time-to-live in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    /// Whether the computed type-relation fallback tier runs when the LLM
    /// tier fails. When disabled, a cached placeholder with remediation
    /// guidance is returned instead.
    #[serde(default = "default_fallback_enabled")]
    pub fallback_enabled: bool,
}

impl Default for MatchupsConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: default_cache_ttl(),
            fallback_enabled: default_fallback_enabled(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub matchups: MatchupsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // Credential from environment only (never from the config file).
        config.llm.api_key = std::env::var(GEMINI_API_KEY_ENV).ok();

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults.
    ///
    /// The environment credential override is applied in both cases.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.llm.api_key = std::env::var(GEMINI_API_KEY_ENV).ok();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "upstream.base_url",
            }
            .into());
        }
        if self.upstream.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream.timeout_seconds",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature",
                reason: format!("{} is outside 0.0..=2.0", self.llm.temperature),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

const fn default_port() -> u16 {
    8080
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".into()
}

const fn default_upstream_timeout() -> u64 {
    10
}

const fn default_cache_ttl() -> u64 {
    86_400
}

const fn default_fallback_enabled() -> bool {
    true
}
