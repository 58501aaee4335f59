use std::{env, time::Duration};

use localities_core::repository::CacheFailurePolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store location: `:memory:` or a directory (default: ":memory:")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub store_uri: String,
    /// Store database name (default: "localities")
    #[allow(dead_code)]
    pub store_database: String,
    /// Cache connection address (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub cache_address: String,
    /// Maximum number of in-process cache entries (default: 1,024)
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// What reads do when the cache errors (default: fail-open)
    pub cache_failure_policy: CacheFailurePolicy,
    /// Per-request deadline in milliseconds (default: 5,000)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORE_URI` - Store location (default: ":memory:")
    /// - `STORE_DATABASE` - Store database name (default: "localities")
    /// - `CACHE_ADDRESS` - Cache connection address (default: "redis://localhost:6379")
    /// - `CACHE_MAX_ENTRIES` - Maximum in-process cache entries (default: 1,024)
    /// - `CACHE_FAILURE_POLICY` - `fail-open` or `fail-closed` (default: fail-open)
    /// - `REQUEST_TIMEOUT_MS` - Per-request deadline (default: 5,000)
    pub fn from_env() -> Self {
        Self {
            store_uri: env::var("STORE_URI").unwrap_or_else(|_| ":memory:".to_string()),
            store_database: env::var("STORE_DATABASE")
                .unwrap_or_else(|_| "localities".to_string()),
            cache_address: env::var("CACHE_ADDRESS")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_024),
            cache_failure_policy: env::var("CACHE_FAILURE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5_000),
        }
    }

    /// Get the per-request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            store_uri: ":memory:".to_string(),
            store_database: "localities".to_string(),
            cache_address: "redis://localhost:6379".to_string(),
            cache_max_entries: 1_024,
            cache_failure_policy: CacheFailurePolicy::FailOpen,
            request_timeout_ms: 250,
        };

        assert_eq!(config.request_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("STORE_URI");
        env::remove_var("STORE_DATABASE");
        env::remove_var("CACHE_ADDRESS");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_FAILURE_POLICY");
        env::remove_var("REQUEST_TIMEOUT_MS");

        let config = Config::from_env();

        assert_eq!(config.store_uri, ":memory:");
        assert_eq!(config.store_database, "localities");
        assert_eq!(config.cache_address, "redis://localhost:6379");
        assert_eq!(config.cache_max_entries, 1_024);
        assert_eq!(config.cache_failure_policy, CacheFailurePolicy::FailOpen);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
