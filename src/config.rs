//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::DEFAULT_STORAGE_KEY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub heatmap: HeatmapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_department")]
    pub department: String,

    #[serde(default = "default_session_file")]
    pub session_file: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_department() -> String {
    "Computer Science".to_string()
}

#[cfg(feature = "cli")]
fn default_session_file() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("syllabus-sync").join("session.json").to_string_lossy().to_string())
        .unwrap_or_else(|| "./syllabus-sync-session.json".to_string())
}

#[cfg(not(feature = "cli"))]
fn default_session_file() -> String {
    "./syllabus-sync-session.json".to_string()
}

/// Replace a leading `~` with the home directory
#[cfg(feature = "cli")]
fn expand_home(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return path.to_string(),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home.to_string_lossy().to_string(),
        Some(home) => home.join(rest).to_string_lossy().to_string(),
        None => path.to_string(),
    }
}

#[cfg(not(feature = "cli"))]
fn expand_home(path: &str) -> String {
    path.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            department: default_department(),
            session_file: default_session_file(),
        }
    }
}

/// Front-end timing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_latency")]
    pub simulated_latency_ms: u32,

    #[serde(default = "default_success_toast")]
    pub success_toast_ms: u32,

    #[serde(default = "default_error_toast")]
    pub error_toast_ms: u32,
}

fn default_latency() -> u32 {
    1000
}

fn default_success_toast() -> u32 {
    3000
}

fn default_error_toast() -> u32 {
    5000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency(),
            success_toast_ms: default_success_toast(),
            error_toast_ms: default_error_toast(),
        }
    }
}

/// Heatmap configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default = "default_weeks")]
    pub weeks: usize,
}

fn default_weeks() -> usize {
    12
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;
        config.session.session_file = expand_home(&config.session.session_file);
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            #[cfg(feature = "cli")]
            dirs::config_dir().map(|p| p.join("syllabus-sync").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Session overrides
        if let Some(department) = var("SYLLABUS_SYNC_DEPARTMENT") {
            self.session.department = department;
        }
        if let Some(file) = var("SYLLABUS_SYNC_SESSION_FILE") {
            self.session.session_file = expand_home(&file);
        }

        // UI overrides
        if let Some(latency) = var("SYLLABUS_SYNC_LATENCY_MS") {
            if let Ok(ms) = latency.parse() {
                self.ui.simulated_latency_ms = ms;
            }
        }

        // Logging overrides
        if let Some(level) = var("SYLLABUS_SYNC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SYLLABUS_SYNC_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SyllabusSync Configuration
#
# Environment variables override these settings:
# - SYLLABUS_SYNC_DEPARTMENT
# - SYLLABUS_SYNC_SESSION_FILE
# - SYLLABUS_SYNC_LATENCY_MS
# - SYLLABUS_SYNC_LOG_LEVEL
# - SYLLABUS_SYNC_LOG_FORMAT

[session]
# Storage key holding the signed-in user record
storage_key = "syllabusSync_user"

# Department assigned to every login
department = "Computer Science"

# Session record location for the terminal front-end. Defaults to the
# platform data directory; a leading ~ is expanded to the home directory.
# session_file = "~/.local/share/syllabus-sync/session.json"

[ui]
# Simulated delay for login and lecture logging (ms)
simulated_latency_ms = 1000

# How long notifications stay visible (ms)
success_toast_ms = 3000
error_toast_ms = 5000

[heatmap]
# Number of trailing weeks in the activity grid
weeks = 12

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
