//! Optional TOML configuration file.
//!
//! Values here fill in whatever the command line leaves unset. The file lives
//! at `<config_dir>/html-grader/config.toml` unless `--config` points elsewhere.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::{GraderError, Result};

/// Defaults loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Checklist used when `--checks` is not given.
    pub checks: Option<PathBuf>,
    /// Request timeout in seconds for `--url` runs.
    pub timeout_secs: Option<u64>,
    /// User agent sent with remote requests.
    pub user_agent: Option<String>,
    /// Report selectors that fail to compile as absent instead of failing.
    pub lenient_selectors: bool,
}

impl Config {
    /// Location of the per-user config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::APP_NAME)
                .join(constants::CONFIG_FILE_NAME)
        })
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. The default location is optional and
    /// silently falls back to [`Config::default`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::FileNotFound`] for a missing explicit path,
    /// [`GraderError::Io`] if the file cannot be read and
    /// [`GraderError::Config`] if it is not valid.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(GraderError::FileNotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        log::debug!("Loading config from {}", path.display());
        let content =
            std::fs::read_to_string(&path).map_err(|e| GraderError::io(&path, e))?;
        Self::from_toml(&content, &path)
    }

    /// Parses config file content. `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| GraderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
