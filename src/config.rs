// ABOUTME: Configuration module for the deck-slides application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::metadata::DEFAULT_THEME;
use crate::watch::WatchConfig;
use std::env;
use std::path::PathBuf;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub presentations_dir: PathBuf,
    pub default_theme: String,
    pub debounce_ms: u64,
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            presentations_dir: PathBuf::from("presentations"),
            default_theme: DEFAULT_THEME.to_string(),
            debounce_ms: 500,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let presentations_dir = env::var("PRESENTATIONS_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.presentations_dir);
        let default_theme = env::var("DEFAULT_THEME")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.default_theme);
        let debounce_ms = env::var("WATCH_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);
        let pretty_json = env::var("PRETTY_JSON")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(defaults.pretty_json);

        Self {
            presentations_dir,
            default_theme,
            debounce_ms,
            pretty_json,
        }
    }

    /// Directory to search for presentations, preferring an explicit override
    pub fn presentations_dir_or(&self, dir: Option<PathBuf>) -> PathBuf {
        dir.unwrap_or_else(|| self.presentations_dir.clone())
    }

    /// Get a watch configuration with defaults from this config
    pub fn get_watch_config(
        &self,
        input: PathBuf,
        output: PathBuf,
        ast_input: bool,
        debounce_ms: Option<u64>,
    ) -> WatchConfig {
        WatchConfig {
            input,
            output,
            ast_input,
            debounce_ms: debounce_ms.unwrap_or(self.debounce_ms),
            pretty_json: self.pretty_json,
            default_theme: self.default_theme.clone(),
        }
    }
}
