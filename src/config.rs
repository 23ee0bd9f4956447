//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::store::{DEFAULT_CAPACITY, DEFAULT_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of records the store can hold
    pub max_records: usize,
    /// Record TTL in seconds
    pub record_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweeper interval in seconds
    pub cleanup_interval: u64,
    /// Artificial delay applied to create/update, in milliseconds
    ///
    /// A latency simulation for exercising caller-side optimistic
    /// updates; 0 disables it. Demo setups typically use 5000.
    pub mutation_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_RECORDS` - Maximum live records (default: 25)
    /// - `RECORD_TTL` - Record TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweeper frequency in seconds (default: 30)
    /// - `MUTATION_DELAY_MS` - Artificial mutation delay (default: 0)
    pub fn from_env() -> Self {
        Self {
            max_records: env::var("MAX_RECORDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            record_ttl: env::var("RECORD_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            mutation_delay_ms: env::var("MUTATION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_CAPACITY,
            record_ttl: DEFAULT_TTL_SECS,
            server_port: 3000,
            cleanup_interval: 30,
            mutation_delay_ms: 0,
        }
    }
}
