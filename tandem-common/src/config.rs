//! Configuration management for Tandem services.
//!
//! The CLI and the HTTP service share one configuration file at `~/.tandem/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (TANDEM_* prefix)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `TANDEM_HOST` → server.host
//! - `TANDEM_PORT` → server.port
//! - `TANDEM_LOG_LEVEL` → observability.log_level
//! - `TANDEM_LOG_FORMAT` → observability.log_format
//! - `TANDEM_CURRENCY_SYMBOL` → display.currency_symbol

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".tandem"),
        |dirs| dirs.home_dir().join(".tandem"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Observability
// ============================================================================

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// HTTP Server
// ============================================================================

/// HTTP service bind configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address. Default: "127.0.0.1" (local only)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the allocation API
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    4440
}

// ============================================================================
// Input Defaults & Limits
// ============================================================================

/// Values used when a front-end is not given an explicit input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Total capital under management
    #[serde(default = "default_total_capital")]
    pub total_capital: f64,

    /// Volatility breakout strength (0-100)
    #[serde(default = "default_score")]
    pub tactical_strength: u8,

    /// Fear & greed sentiment (0-100)
    #[serde(default = "default_score")]
    pub sentiment_index: u8,

    /// Analyst consensus (1 = sell, 5 = strong buy)
    #[serde(default = "default_analyst_consensus")]
    pub analyst_consensus: u8,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            total_capital: default_total_capital(),
            tactical_strength: default_score(),
            sentiment_index: default_score(),
            analyst_consensus: default_analyst_consensus(),
        }
    }
}

fn default_total_capital() -> f64 {
    100_000_000.0
}

fn default_score() -> u8 {
    50
}

fn default_analyst_consensus() -> u8 {
    3
}

/// Bounds enforced by input collectors before the engine is called.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    /// Smallest accepted total capital
    #[serde(default = "default_min_total_capital")]
    pub min_total_capital: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_total_capital: default_min_total_capital(),
        }
    }
}

fn default_min_total_capital() -> f64 {
    1_000_000.0
}

// ============================================================================
// Display
// ============================================================================

/// Presentation settings shared by the front-ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol prefixed to formatted amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₩".into()
}

// ============================================================================
// Holdings
// ============================================================================

/// A configured strategic holding, overriding the built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingConfig {
    /// Display name
    pub name: String,
    /// Relative weight within the strategic sleeve, in (0, 1]
    pub weight: f64,
    /// Investment rationale
    #[serde(default)]
    pub rationale: String,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration shared by all Tandem front-ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub defaults: InputDefaults,

    #[serde(default)]
    pub limits: InputLimits,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Replaces the built-in holding table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdings: Option<Vec<HoldingConfig>>,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides.
    ///
    /// An explicit path must exist; without one the default location is optional.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TANDEM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TANDEM_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid TANDEM_PORT"),
            }
        }
        if let Some(level) = lookup("TANDEM_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("TANDEM_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Some(symbol) = lookup("TANDEM_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
    }

    /// Socket address string for the HTTP service.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
