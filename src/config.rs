//! Configuration management for the DexPaprika client.
//!
//! Configuration is a plain value handed to the client at construction. It can
//! be built in code with the `with_*` methods or loaded from environment
//! variables (and an optional `.env` file, read without printing anything).

use crate::cache::TtlPolicy;
use crate::client::RetryPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Public DexPaprika endpoint.
pub const DEFAULT_API_URL: &str = "https://api.dexpaprika.com";

/// Configuration for the DexPaprika client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub api_url: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Retries after the first attempt for transient failures (default: 4)
    pub max_retries: u32,

    /// Base delay before each retry, in milliseconds (default: 100, 500, 1000, 5000)
    pub backoff_ms: Vec<u64>,

    /// Upper bound of random jitter as a fraction of the base delay (default: 0.1)
    pub jitter_ratio: f64,

    /// Whether GET responses are cached at all (default: true)
    pub cache_enabled: bool,

    /// Freshness window per resource type
    pub ttl: TtlPolicy,

    /// User-Agent header value
    pub user_agent: String,

    /// Log level used by the binary when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `DEXPAPRIKA_API_URL`: Base URL (default: https://api.dexpaprika.com)
    /// - `DEXPAPRIKA_REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `DEXPAPRIKA_MAX_RETRIES`: Retry count (default: 4)
    /// - `DEXPAPRIKA_BACKOFF_MS`: Comma-separated delays in ms (default: 100,500,1000,5000)
    /// - `DEXPAPRIKA_JITTER_RATIO`: Jitter fraction 0.0-1.0 (default: 0.1)
    /// - `DEXPAPRIKA_CACHE_ENABLED`: true/false (default: true)
    /// - `DEXPAPRIKA_CACHE_TTL_{NETWORK,POOL,TOKEN,STAT,DEFAULT}_SECS`: TTL overrides
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let api_url = env::var("DEXPAPRIKA_API_URL").unwrap_or(defaults.api_url);
        Self::validate_url("DEXPAPRIKA_API_URL", &api_url)?;

        let request_timeout =
            Self::parse_env_u64("DEXPAPRIKA_REQUEST_TIMEOUT", defaults.request_timeout)?;
        let max_retries = Self::parse_env_u32("DEXPAPRIKA_MAX_RETRIES", defaults.max_retries)?;
        let backoff_ms = match env::var("DEXPAPRIKA_BACKOFF_MS") {
            Ok(val) => Self::parse_backoff("DEXPAPRIKA_BACKOFF_MS", &val)?,
            Err(_) => defaults.backoff_ms,
        };

        let jitter_ratio = Self::parse_env_f64("DEXPAPRIKA_JITTER_RATIO", defaults.jitter_ratio)?;
        if !(0.0..=1.0).contains(&jitter_ratio) {
            return Err(ConfigError::InvalidValue {
                var: "DEXPAPRIKA_JITTER_RATIO".to_string(),
                reason: "Must be between 0.0 and 1.0".to_string(),
            });
        }

        let cache_enabled =
            Self::parse_env_bool("DEXPAPRIKA_CACHE_ENABLED", defaults.cache_enabled)?;

        let ttl = TtlPolicy {
            network: Self::parse_env_secs("DEXPAPRIKA_CACHE_TTL_NETWORK_SECS", defaults.ttl.network)?,
            pool: Self::parse_env_secs("DEXPAPRIKA_CACHE_TTL_POOL_SECS", defaults.ttl.pool)?,
            token: Self::parse_env_secs("DEXPAPRIKA_CACHE_TTL_TOKEN_SECS", defaults.ttl.token)?,
            stat: Self::parse_env_secs("DEXPAPRIKA_CACHE_TTL_STAT_SECS", defaults.ttl.stat)?,
            default: Self::parse_env_secs("DEXPAPRIKA_CACHE_TTL_DEFAULT_SECS", defaults.ttl.default)?,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            api_url,
            request_timeout,
            max_retries,
            backoff_ms,
            jitter_ratio,
            cache_enabled,
            ttl,
            user_agent: defaults.user_agent,
            log_level,
        })
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the backoff schedule.
    pub fn with_backoff_ms(mut self, backoff_ms: Vec<u64>) -> Self {
        self.backoff_ms = backoff_ms;
        self
    }

    /// Override the jitter fraction.
    pub fn with_jitter_ratio(mut self, jitter_ratio: f64) -> Self {
        self.jitter_ratio = jitter_ratio;
        self
    }

    /// Override the request timeout (seconds).
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout = secs;
        self
    }

    /// Turn response caching on or off.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Override the TTL table.
    pub fn with_ttl(mut self, ttl: TtlPolicy) -> Self {
        self.ttl = ttl;
        self
    }

    /// Retry policy derived from this configuration.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            self.backoff_ms.iter().copied().map(Duration::from_millis).collect(),
            self.jitter_ratio,
        )
    }

    fn validate_url(var_name: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a comma-separated list of millisecond delays.
    fn parse_backoff(var_name: &str, val: &str) -> ConfigResult<Vec<u64>> {
        val.split(',')
            .map(|part| {
                part.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Expected comma-separated milliseconds, got: {}", val),
                    })
            })
            .collect()
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_env_secs(var_name: &str, default: Duration) -> ConfigResult<Duration> {
        Self::parse_env_u64(var_name, default.as_secs()).map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 30,
            max_retries: 4,
            backoff_ms: vec![100, 500, 1000, 5000],
            jitter_ratio: 0.1,
            cache_enabled: true,
            ttl: TtlPolicy::default(),
            user_agent: format!("dexpaprika-rust/{}", env!("CARGO_PKG_VERSION")),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.dexpaprika.com");
        assert_eq!(config.max_retries, 4);
        assert_eq!(config.backoff_ms.len(), 4);
        assert!(config.backoff_ms.windows(2).all(|w| w[0] <= w[1]));
        assert!(config.cache_enabled);
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_api_url("http://localhost:1234")
            .with_max_retries(1)
            .with_backoff_ms(vec![1])
            .with_cache_enabled(false);

        assert_eq!(config.api_url, "http://localhost:1234");
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.retry_policy().max_retries(), 1);
        assert!(!config.cache_enabled);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("DEXPAPRIKA_API_URL", "not-a-url");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "DEXPAPRIKA_API_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("DEXPAPRIKA_API_URL", "https://api.example.com");
        guard.set("DEXPAPRIKA_MAX_RETRIES", "2");
        guard.set("DEXPAPRIKA_BACKOFF_MS", "10, 20,40");
        guard.set("DEXPAPRIKA_CACHE_ENABLED", "false");
        guard.set("DEXPAPRIKA_CACHE_TTL_POOL_SECS", "7");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.backoff_ms, vec![10, 20, 40]);
        assert!(!config.cache_enabled);
        assert_eq!(config.ttl.pool, Duration::from_secs(7));
        assert_eq!(config.ttl.network, Duration::from_secs(86_400));
    }

    #[test]
    #[serial]
    fn test_config_invalid_backoff() {
        let mut guard = EnvGuard::new();
        guard.set("DEXPAPRIKA_BACKOFF_MS", "100,fast");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "DEXPAPRIKA_BACKOFF_MS"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_jitter() {
        let mut guard = EnvGuard::new();
        guard.set("DEXPAPRIKA_JITTER_RATIO", "1.5");

        let result = Config::from_env();
        assert!(result.is_err(), "Config should fail with jitter above 1.0");
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", true).is_err());
    }
}
