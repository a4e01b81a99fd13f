//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::Error;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default Saillogger AIS API root.
pub const DEFAULT_AIS_BASE_URL: &str = "https://saillogger.com/ais/api";

/// User agent sent with every AIS request.
pub const DEFAULT_AIS_USER_AGENT: &str = "Saillogger MCP Server";

/// Whole request/response budget for one AIS lookup.
pub const DEFAULT_AIS_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream AIS API settings.
    pub ais: AisConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Settings for the upstream vessel-tracking API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AisConfig {
    /// API root; `/vessels/` is appended to it.
    pub base_url: String,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl AisConfig {
    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AIS_BASE_URL.to_string(),
            user_agent: DEFAULT_AIS_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_AIS_TIMEOUT_SECS,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ais-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            ais: AisConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_AIS_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_AIS_BASE_URL") {
            info!("AIS endpoint overridden: {}", base_url);
            config.ais.base_url = base_url;
        }

        if let Ok(user_agent) = std::env::var("MCP_AIS_USER_AGENT") {
            config.ais.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("MCP_AIS_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.ais.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_AIS_TIMEOUT_SECS={:?}, using {}s",
                    timeout, DEFAULT_AIS_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Check values that cannot be verified until the first request.
    pub fn validate(&self) -> crate::core::Result<()> {
        let url = reqwest::Url::parse(&self.ais.base_url).map_err(|e| {
            Error::config(format!("Invalid AIS base URL {:?}: {}", self.ais.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "AIS base URL must use http or https, got {:?}",
                url.scheme()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_ais_env() {
        unsafe {
            std::env::remove_var("MCP_AIS_BASE_URL");
            std::env::remove_var("MCP_AIS_USER_AGENT");
            std::env::remove_var("MCP_AIS_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_ais_defaults() {
        let config = Config::default();
        assert_eq!(config.ais.base_url, "https://saillogger.com/ais/api");
        assert_eq!(config.ais.user_agent, "Saillogger MCP Server");
        assert_eq!(config.ais.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_ais_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_AIS_BASE_URL", "http://localhost:9999/api");
            std::env::set_var("MCP_AIS_USER_AGENT", "test-agent");
            std::env::set_var("MCP_AIS_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.ais.base_url, "http://localhost:9999/api");
        assert_eq!(config.ais.user_agent, "test-agent");
        assert_eq!(config.ais.timeout_secs, 5);
        clear_ais_env();
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.ais.base_url = "saillogger.com/ais/api".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.ais.base_url = "ftp://saillogger.com/ais/api".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        for bad in ["soon", "0", "-3"] {
            unsafe {
                std::env::set_var("MCP_AIS_TIMEOUT_SECS", bad);
            }
            let config = Config::from_env();
            assert_eq!(config.ais.timeout_secs, DEFAULT_AIS_TIMEOUT_SECS);
        }
        clear_ais_env();
    }
}
