//! Configuration file support for minsh.
//!
//! Configuration is read from a TOML file. Unknown fields are ignored, problems with the
//! default file are logged without preventing startup, and settings are layered:
//! defaults < config file < command-line arguments.

use etcetera::BaseStrategy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::args::CommandLineArgs;
use crate::events::TraceEvent;

/// Prompt used when neither the command line nor the config file provides one.
pub const DEFAULT_PROMPT: &str = "minsh> ";

/// Root configuration structure.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// User interface configuration options.
    pub ui: UiConfig,

    /// Tracing configuration options.
    pub trace: TraceConfig,
}

/// User interface configuration options.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prompt shown before each line read from a terminal.
    pub prompt: Option<String>,
}

/// Tracing configuration options.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Classes of tracing events to enable at debug level.
    pub events: Vec<TraceEvent>,
}

impl Config {
    /// Returns the prompt to use; the command line takes priority over the config file.
    pub fn prompt(&self, args: &CommandLineArgs) -> String {
        args.prompt
            .clone()
            .or_else(|| self.ui.prompt.clone())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_owned())
    }

    /// Returns the union of trace events enabled on the command line and in the config file.
    pub fn trace_events(&self, args: &CommandLineArgs) -> HashSet<TraceEvent> {
        args.enabled_debug_events
            .iter()
            .chain(&self.trace.events)
            .copied()
            .collect()
    }
}

/// Result of attempting to load a configuration file.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration, or default if loading failed.
    pub config: Config,

    /// The path that was used (or attempted) for loading.
    pub path: Option<PathBuf>,

    /// Any error that occurred during loading.
    pub error: Option<ConfigLoadError>,

    /// Whether the path was explicitly provided by the user (via `--config`).
    /// If true and there's an error, startup should fail rather than continue.
    pub explicit_path: bool,
}

impl ConfigLoadResult {
    fn defaults(path: Option<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path,
            error: None,
            explicit_path: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigLoadError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the TOML content.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Returns the default configuration file path for the current platform, or `None` if the
/// platform's config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("minsh").join("config.toml"))
}

/// Loads configuration from the specified path.
pub fn load_from_path(path: &Path) -> ConfigLoadResult {
    let parsed = std::fs::read_to_string(path)
        .map_err(ConfigLoadError::from)
        .and_then(|content| toml::from_str::<Config>(&content).map_err(ConfigLoadError::from));

    match parsed {
        Ok(config) => ConfigLoadResult {
            config,
            ..ConfigLoadResult::defaults(Some(path.to_path_buf()))
        },
        Err(error) => ConfigLoadResult {
            error: Some(error),
            ..ConfigLoadResult::defaults(Some(path.to_path_buf()))
        },
    }
}

/// Loads configuration based on the provided options.
///
/// # Arguments
///
/// * `disabled` - If true, skip loading and return defaults
/// * `explicit_path` - If provided, use this path instead of the default
pub fn load_config(disabled: bool, explicit_path: Option<&Path>) -> ConfigLoadResult {
    if disabled {
        return ConfigLoadResult::defaults(None);
    }

    if let Some(path) = explicit_path {
        return ConfigLoadResult {
            explicit_path: true,
            ..load_from_path(path)
        };
    }

    match default_config_path() {
        // A missing default file just means defaults.
        Some(path) if !path.exists() => ConfigLoadResult::defaults(Some(path)),
        Some(path) => load_from_path(&path),
        None => ConfigLoadResult::defaults(None),
    }
}
