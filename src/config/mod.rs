use std::env;

use lazy_static::lazy_static;

use crate::constants::{DEFAULT_SOURCE_TAG, DEFAULT_SOURCE_URL};

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub cache_time_secs: u64,
    pub upstream_timeout_secs: u64,
    pub upstream_user_agent: String,
    /// Raw `tag=url;tag=url` list, parsed by `SourceRegistry::parse`.
    pub catalog_sources: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            cache_time_secs: env::var("CACHE_TIME_SECS")
                .unwrap_or_else(|_| "7200".to_string())
                .parse()
                .expect("CACHE_TIME_SECS must be a valid number"),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("UPSTREAM_TIMEOUT_SECS must be a valid number"),
            upstream_user_agent: env::var("UPSTREAM_USER_AGENT").unwrap_or_else(|_| {
                "Mozilla/5.0 (compatible; CatalogProxy/0.1)".to_string()
            }),
            catalog_sources: env::var("CATALOG_SOURCES")
                .unwrap_or_else(|_| format!("{}={}", DEFAULT_SOURCE_TAG, DEFAULT_SOURCE_URL)),
        }
    }
}

/// Supplies the `max-age` attached to successful catalog responses.
///
/// Consulted once per request so an implementation may change its answer at
/// runtime.
pub trait CacheTimeProvider: Send + Sync {
    fn cache_time_secs(&self) -> u64;
}

impl CacheTimeProvider for Config {
    fn cache_time_secs(&self) -> u64 {
        self.cache_time_secs
    }
}

/// A provider that always answers with the same duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedCacheTime(pub u64);

impl CacheTimeProvider for FixedCacheTime {
    fn cache_time_secs(&self) -> u64 {
        self.0
    }
}
