//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Environment variable holding the expiration duration in milliseconds.
pub const EXPIRATION_ENV_VAR: &str = "CACHE_EXPIRATION_MS";

/// Cache configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    /// Time-to-live applied to every write. `Duration::ZERO` disables expiration.
    pub expiration: Duration,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a config with no expiration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cache-wide expiration duration.
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_EXPIRATION_MS` - Expiration in milliseconds (default: 0, never expire)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expiration = match lookup(EXPIRATION_ENV_VAR) {
            Some(raw) => {
                let millis = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| CacheError::InvalidConfig {
                        var: EXPIRATION_ENV_VAR,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                Duration::from_millis(millis)
            }
            None => Duration::ZERO,
        };

        Ok(Self { expiration })
    }
}
