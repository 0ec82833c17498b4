//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A `[keybindings]` entry names an unknown key or action.
    #[error("Invalid key binding '{key}': {reason}")]
    InvalidKeyBinding {
        /// Key spec as written in the config file.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/termfolio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Portfolio content file replacing the built-in content.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Rows covered by the top navigation bar on wide terminals.
    #[serde(default)]
    pub nav_bar_height: Option<u16>,

    /// Terminals narrower than this many columns hide the nav bar.
    #[serde(default)]
    pub narrow_width: Option<u16>,

    /// Delay before the headline typewriter starts, in milliseconds.
    #[serde(default)]
    pub typewriter_delay_ms: Option<u64>,

    /// Time per revealed headline character, in milliseconds.
    #[serde(default)]
    pub typewriter_interval_ms: Option<u64>,

    /// Animate section jumps instead of jumping instantly.
    #[serde(default)]
    pub smooth_scroll: Option<bool>,

    /// Let background orbs drift with the mouse pointer.
    #[serde(default)]
    pub pointer_parallax: Option<bool>,

    /// Rows above the bottom edge a card must reach before it is revealed.
    #[serde(default)]
    pub reveal_threshold: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Extra key bindings: key spec (`"ctrl+f"`) to action name (`"page_down"`).
    #[serde(default)]
    pub keybindings: BTreeMap<String, String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Content file, `None` for the built-in portfolio.
    pub content_path: Option<PathBuf>,
    /// Nav bar height in rows.
    pub nav_bar_height: u16,
    /// Narrow-terminal threshold in columns.
    pub narrow_width: u16,
    /// Typewriter start delay in milliseconds.
    pub typewriter_delay_ms: u64,
    /// Typewriter per-character interval in milliseconds.
    pub typewriter_interval_ms: u64,
    /// Smooth section scrolling.
    pub smooth_scroll: bool,
    /// Pointer-driven background parallax.
    pub pointer_parallax: bool,
    /// Reveal threshold in rows.
    pub reveal_threshold: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides applied on top of the defaults.
    pub keybindings: BTreeMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            nav_bar_height: 1,
            narrow_width: 80,
            typewriter_delay_ms: 2000,
            typewriter_interval_ms: 50,
            smooth_scroll: true,
            pointer_parallax: true,
            reveal_threshold: 4,
            log_file_path: default_log_path(),
            keybindings: BTreeMap::new(),
        }
    }
}

/// Overrides taken from the command line. `None`/`false` leaves a value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--content`.
    pub content_path: Option<PathBuf>,
    /// `--no-animation`: reveal the headline at once and jump without easing.
    pub no_animation: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/termfolio/termfolio.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("termfolio").join("termfolio.log")
    } else {
        PathBuf::from("termfolio.log")
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

/// Resolve default config file path (`~/.config/termfolio/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termfolio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TERMFOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/termfolio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TERMFOLIO_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        content_path: config.content_path.or(defaults.content_path),
        nav_bar_height: config.nav_bar_height.unwrap_or(defaults.nav_bar_height),
        narrow_width: config.narrow_width.unwrap_or(defaults.narrow_width),
        typewriter_delay_ms: config
            .typewriter_delay_ms
            .unwrap_or(defaults.typewriter_delay_ms),
        typewriter_interval_ms: config
            .typewriter_interval_ms
            .unwrap_or(defaults.typewriter_interval_ms),
        smooth_scroll: config.smooth_scroll.unwrap_or(defaults.smooth_scroll),
        pointer_parallax: config.pointer_parallax.unwrap_or(defaults.pointer_parallax),
        reveal_threshold: config.reveal_threshold.unwrap_or(defaults.reveal_threshold),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config.keybindings,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TERMFOLIO_CONTENT`: Override content file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("TERMFOLIO_CONTENT") {
        config.content_path = Some(PathBuf::from(path));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(path) = cli.content_path {
        config.content_path = Some(path);
    }

    if cli.no_animation {
        config.typewriter_delay_ms = 0;
        config.typewriter_interval_ms = 0;
        config.smooth_scroll = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
