//! Configuration file loading with precedence handling.

use crate::config::keybindings::KeyBindings;
use crate::model::{ScreenId, UserType};
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GUIDEMATE_CONFIG";

/// Environment variable overriding the user type.
pub const USER_TYPE_ENV_VAR: &str = "GUIDEMATE_USER_TYPE";

/// Default color for search match highlighting.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::Yellow;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// `highlight_color` is not a color name, index or hex code.
    #[error("Invalid highlight color '{0}'")]
    InvalidColor(String),

    /// An environment override holds an unusable value.
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A `[keybindings]` entry names an unknown action or an unparseable key.
    #[error("Invalid key binding '{action} = \"{key}\"': {reason}")]
    InvalidKeyBinding {
        /// Action name as written.
        action: String,
        /// Key spec as written.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/guidemate/config.toml`:
///
/// ```toml
/// user_type = "teacher"
/// content_path = "/srv/guides/pack.toml"
/// start_screen = "extended_essay"
/// highlight_color = "#ffaf00"
///
/// [keybindings]
/// next_match = "ctrl+n"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reader role.
    #[serde(default)]
    pub user_type: Option<UserType>,

    /// Content pack to load instead of the bundled guides.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Screen opened on top of the root at startup.
    #[serde(default)]
    pub start_screen: Option<ScreenId>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Search match highlight color.
    #[serde(default)]
    pub highlight_color: Option<String>,

    /// Extra key bindings: action name to key spec.
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Reader role.
    pub user_type: UserType,
    /// Content pack path; `None` means the bundled guides.
    pub content_path: Option<PathBuf>,
    /// Screen opened at startup, if any.
    pub start_screen: Option<ScreenId>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Search match highlight color.
    pub highlight_color: Color,
    /// Key bindings: defaults plus config overrides.
    pub key_bindings: KeyBindings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            user_type: UserType::default(),
            content_path: None,
            start_screen: None,
            log_file_path: default_log_path(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            key_bindings: KeyBindings::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/guidemate/guidemate.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("guidemate").join("guidemate.log")
    } else {
        PathBuf::from("guidemate.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/guidemate/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("guidemate").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `GUIDEMATE_CONFIG` environment variable
/// 3. Default path `~/.config/guidemate/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns error for an unparseable `highlight_color` or `[keybindings]` entry.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let highlight_color = match config.highlight_color {
        Some(raw) => Color::from_str(raw.trim()).map_err(|_| ConfigError::InvalidColor(raw))?,
        None => defaults.highlight_color,
    };

    let key_bindings = match config.keybindings {
        Some(overrides) => defaults.key_bindings.with_overrides(&overrides)?,
        None => defaults.key_bindings,
    };

    Ok(ResolvedConfig {
        user_type: config.user_type.unwrap_or(defaults.user_type),
        content_path: config.content_path.or(defaults.content_path),
        start_screen: config.start_screen.or(defaults.start_screen),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        highlight_color,
        key_bindings,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `GUIDEMATE_USER_TYPE`: Override user type
///
/// # Errors
///
/// Returns error if the variable is set to something other than a user type.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(USER_TYPE_ENV_VAR) {
        config.user_type = raw.parse().map_err(|e: crate::model::InvalidUserType| {
            ConfigError::InvalidEnv {
                var: USER_TYPE_ENV_VAR,
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    user_type_override: Option<UserType>,
    content_override: Option<PathBuf>,
    screen_override: Option<ScreenId>,
) -> ResolvedConfig {
    if let Some(user_type) = user_type_override {
        config.user_type = user_type;
    }

    if let Some(path) = content_override {
        config.content_path = Some(path);
    }

    if let Some(screen) = screen_override {
        config.start_screen = Some(screen);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
