//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/monfocus/config.json`.
//! Each concern gets its own top-level key so the file can grow new
//! sections without breaking older ones.
//!
//! # Example
//!
//! ```json
//! {
//!   "tools": {
//!     "xdotool": "/usr/bin/xdotool",
//!     "xrandr": "xrandr"
//!   },
//!   "focus": {
//!     "restore_pointer": true,
//!     "sync_activate": false
//!   }
//! }
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locations of the external programs.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// How the pointer and focus are handled.
    #[serde(default)]
    pub focus: FocusConfig,
}

/// Names or paths of the programs monfocus invokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub xdotool: String,
    pub xrandr: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            xdotool: "xdotool".into(),
            xrandr: "xrandr".into(),
        }
    }
}

/// Pointer and activation behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Put the pointer back where it was after probing the target monitor.
    pub restore_pointer: bool,
    /// Wait for the window manager to report the window as active before
    /// exiting (`windowactivate --sync`).
    pub sync_activate: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            restore_pointer: true,
            sync_activate: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Load `path`, falling back to compiled-in defaults.
    ///
    /// A missing file is normal and only logged at `info`; a file that exists
    /// but cannot be read or parsed is logged at `warn`.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cfg) => {
                info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) if e.is_missing() => {
                info!("no config file ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                warn!("ignoring config: {}, using defaults", e);
                Self::default()
            }
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config error: failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Whether the config file simply does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/monfocus`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("monfocus")
}
