use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{CacheError, CacheResult};

/// Prefix of every environment variable read into [`Config`]
pub const ENV_PREFIX: &str = "TRAKT_CACHE_";

/// Process configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// JSON snapshot used to populate the stores on start
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            snapshot_path: None,
        }
    }
}

impl Config {
    /// Load configuration from `TRAKT_CACHE_*` environment variables,
    /// reading a `.env` file first if one exists
    pub fn from_env() -> CacheResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> CacheResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .map_err(|e| CacheError::Config(format!("Failed to load config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_prefixed_values() {
        let config = Config::from_vars(vars(&[
            ("TRAKT_CACHE_LOG_FILTER", "trakt_cache=debug"),
            ("TRAKT_CACHE_SNAPSHOT_PATH", "/tmp/snapshot.json"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "trakt_cache=debug");
        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/snapshot.json")));
    }
}
