use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::dispatch::{DEFAULT_FIXED_DECIMALS, MAX_FIXED_DECIMALS};

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "geometry_toolbox.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GEOMETRY_TOOLBOX_CONFIG";

/// How results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Decimal places for circle and rhombus results.
    pub fixed_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fixed_decimals: DEFAULT_FIXED_DECIMALS,
        }
    }
}

/// Log verbosity accepted in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No log output
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log filter used when neither `RUST_LOG` nor `-v` is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: LogLevel,
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

/// Errors raised while locating or parsing a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Well-formed TOML holding a value outside its accepted range
    #[error("invalid config file '{path}': {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl Config {
    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    /// Checks values the TOML types alone cannot bound.
    pub fn validate(&self) -> Result<(), String> {
        if self.display.fixed_decimals > MAX_FIXED_DECIMALS {
            return Err(format!(
                "display.fixed_decimals must be at most {MAX_FIXED_DECIMALS}, got {}",
                self.display.fixed_decimals
            ));
        }
        Ok(())
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Config::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }
}

/// Picks the config file to use, if any.
///
/// An explicit path (flag, then environment) must exist; the working
/// directory default is used only when present.
pub fn resolve_path(explicit: Option<&Path>, env_value: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    fallback.exists().then(|| fallback.to_path_buf())
}

/// Loads the resolved config file, or the built-in defaults when there is none.
///
/// Nothing is ever written back; each run is independent.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let env_value = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    match resolve_path(explicit, env_value) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    }
}
