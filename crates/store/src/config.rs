//! File locations.

use std::path::PathBuf;

pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";
pub const DEFAULT_SCORES_PATH: &str = "leaderboard.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub settings_path: PathBuf,
    pub scores_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables; unset or blank values use defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            settings_path: path("SNAKE_SETTINGS_PATH", DEFAULT_SETTINGS_PATH),
            scores_path: path("SNAKE_SCORES_PATH", DEFAULT_SCORES_PATH),
        }
    }
}
