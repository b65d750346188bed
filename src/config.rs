//! Harness configuration.

use std::{path::PathBuf, time::Duration};

use crate::error::config::ConfigError;

/// Product name embedded in versioned media types, e.g. `go.cd`.
pub const ENV_PRODUCT: &str = "ROUTEMOCK_PRODUCT";
/// Directory relative fixture paths resolve against.
pub const ENV_FIXTURE_DIR: &str = "ROUTEMOCK_FIXTURE_DIR";
/// Milliseconds `MockServer::close` waits for a graceful shutdown.
pub const ENV_SHUTDOWN_TIMEOUT_MS: &str = "ROUTEMOCK_SHUTDOWN_TIMEOUT_MS";

const DEFAULT_SHUTDOWN_TIMEOUT_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Product token of `application/vnd.<product>.v<N>+json`.
    pub product: String,
    /// Base directory for relative fixture file paths.
    pub fixture_dir: PathBuf,
    /// How long to wait for the listener to shut down gracefully before aborting it.
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Create a configuration for `product`, resolving fixtures against the working directory.
    pub fn new(product: impl Into<String>) -> Result<Self, ConfigError> {
        let product = product.into();
        validate_product(&product)?;

        Ok(Self {
            product,
            fixture_dir: PathBuf::from("."),
            shutdown_timeout_ms: DEFAULT_SHUTDOWN_TIMEOUT_MS,
        })
    }

    pub fn with_fixture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixture_dir = dir.into();
        self
    }

    pub fn with_shutdown_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.shutdown_timeout_ms = timeout_ms;
        self
    }

    /// Load configuration from the process environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let product =
            lookup(ENV_PRODUCT).ok_or_else(|| ConfigError::MissingEnvVar(ENV_PRODUCT.to_string()))?;

        let mut config = Self::new(product).map_err(|e| ConfigError::InvalidEnvValue {
            var: ENV_PRODUCT.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(dir) = lookup(ENV_FIXTURE_DIR) {
            config.fixture_dir = PathBuf::from(dir);
        }

        if let Some(timeout) = lookup(ENV_SHUTDOWN_TIMEOUT_MS) {
            config.shutdown_timeout_ms =
                timeout
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnvValue {
                        var: ENV_SHUTDOWN_TIMEOUT_MS.to_string(),
                        reason: e.to_string(),
                    })?;
        }

        Ok(config)
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

// The product is spliced into header values, so anything outside a plain token is refused.
fn validate_product(product: &str) -> Result<(), ConfigError> {
    let valid = !product.is_empty()
        && product
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidProduct(product.to_string()))
    }
}
