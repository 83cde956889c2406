//! Configuration management.
//!
//! This module handles loading and validating configuration from
//! environment variables, plus the tracing initialization the surrounding
//! tool calls once at startup.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

const LOG_LEVEL_VAR: &str = "TUTORMATCH_LOG_LEVEL";
const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the record store core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TUTORMATCH_LOG_LEVEL`: one of trace, debug, info, warn, error
    ///   (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "error".to_string());

        if !KNOWN_LEVELS.contains(&log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: format!(
                    "Must be one of trace, debug, info, warn, error, got: {}",
                    log_level
                ),
            });
        }

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}

/// Initialize tracing for the process: `RUST_LOG` wins when set,
/// otherwise the configured level applies. Output goes to stderr so a
/// host process owning stdout stays clean. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
