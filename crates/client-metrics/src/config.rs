//! Client metrics service configuration.
//!
//! Configuration is loaded from environment variables.

use std::collections::HashMap;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default outbound request timeout in seconds.
pub const DEFAULT_CLIENT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Maximum outbound request timeout in seconds.
pub const MAX_CLIENT_REQUEST_TIMEOUT_SECONDS: u64 = 300;

/// Default graceful shutdown drain period in seconds.
pub const DEFAULT_DRAIN_SECONDS: u64 = 0;

/// Service configuration.
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:8080").
    pub bind_address: String,

    /// Timeout applied to each outbound request made by the instrumented client.
    pub client_request_timeout_seconds: u64,

    /// Seconds to keep draining connections after a shutdown signal.
    pub drain_seconds: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid client request timeout configuration: {0}")]
    InvalidClientRequestTimeout(String),

    #[error("Invalid drain period configuration: {0}")]
    InvalidDrainSeconds(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        // Parse client request timeout with validation
        let client_request_timeout_seconds =
            if let Some(value_str) = vars.get("CLIENT_REQUEST_TIMEOUT_SECONDS") {
                let value: u64 = value_str.parse().map_err(|e| {
                    ConfigError::InvalidClientRequestTimeout(format!(
                        "CLIENT_REQUEST_TIMEOUT_SECONDS must be a valid positive integer, got '{}': {}",
                        value_str, e
                    ))
                })?;

                if value == 0 {
                    return Err(ConfigError::InvalidClientRequestTimeout(
                        "CLIENT_REQUEST_TIMEOUT_SECONDS must be greater than 0".to_string(),
                    ));
                }

                if value > MAX_CLIENT_REQUEST_TIMEOUT_SECONDS {
                    return Err(ConfigError::InvalidClientRequestTimeout(format!(
                        "CLIENT_REQUEST_TIMEOUT_SECONDS must not exceed {} seconds, got {}",
                        MAX_CLIENT_REQUEST_TIMEOUT_SECONDS, value
                    )));
                }

                value
            } else {
                DEFAULT_CLIENT_REQUEST_TIMEOUT_SECONDS
            };

        let drain_seconds = if let Some(value_str) = vars.get("DRAIN_SECONDS") {
            value_str.parse().map_err(|e| {
                ConfigError::InvalidDrainSeconds(format!(
                    "DRAIN_SECONDS must be a valid non-negative integer, got '{}': {}",
                    value_str, e
                ))
            })?
        } else {
            DEFAULT_DRAIN_SECONDS
        };

        Ok(Config {
            bind_address,
            client_request_timeout_seconds,
            drain_seconds,
        })
    }

    pub fn client_request_timeout(&self) -> Duration {
        Duration::from_secs(self.client_request_timeout_seconds)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_success_with_defaults() {
        let config = Config::from_vars(&HashMap::new()).expect("Config should load successfully");

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(
            config.client_request_timeout_seconds,
            DEFAULT_CLIENT_REQUEST_TIMEOUT_SECONDS
        );
        assert_eq!(config.drain_seconds, DEFAULT_DRAIN_SECONDS);
        assert_eq!(config.client_request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_from_vars_success_with_custom_values() {
        let vars = HashMap::from([
            ("BIND_ADDRESS".to_string(), "127.0.0.1:9000".to_string()),
            (
                "CLIENT_REQUEST_TIMEOUT_SECONDS".to_string(),
                "30".to_string(),
            ),
            ("DRAIN_SECONDS".to_string(), "5".to_string()),
        ]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.client_request_timeout_seconds, 30);
        assert_eq!(config.drain_seconds, 5);
    }

    #[test]
    fn test_client_request_timeout_rejects_zero() {
        let vars = HashMap::from([(
            "CLIENT_REQUEST_TIMEOUT_SECONDS".to_string(),
            "0".to_string(),
        )]);

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidClientRequestTimeout(msg)) if msg.contains("must be greater than 0"))
        );
    }

    #[test]
    fn test_client_request_timeout_rejects_too_large() {
        let vars = HashMap::from([(
            "CLIENT_REQUEST_TIMEOUT_SECONDS".to_string(),
            "301".to_string(),
        )]);

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidClientRequestTimeout(msg)) if msg.contains("must not exceed 300"))
        );
    }

    #[test]
    fn test_client_request_timeout_accepts_max() {
        let vars = HashMap::from([(
            "CLIENT_REQUEST_TIMEOUT_SECONDS".to_string(),
            "300".to_string(),
        )]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        assert_eq!(config.client_request_timeout_seconds, 300);
    }

    #[test]
    fn test_client_request_timeout_rejects_non_numeric() {
        let vars = HashMap::from([(
            "CLIENT_REQUEST_TIMEOUT_SECONDS".to_string(),
            "ten".to_string(),
        )]);

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidClientRequestTimeout(msg)) if msg.contains("must be a valid positive integer"))
        );
    }

    #[test]
    fn test_drain_seconds_rejects_negative() {
        let vars = HashMap::from([("DRAIN_SECONDS".to_string(), "-1".to_string())]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidDrainSeconds(_))));
    }

    #[test]
    fn test_debug_lists_fields() {
        let config = Config::from_vars(&HashMap::new()).unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("bind_address"));
        assert!(debug.contains("client_request_timeout_seconds"));
    }
}
