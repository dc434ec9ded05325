//! Error types shared by every stage of a grading run.

use std::path::PathBuf;

/// Everything that can stop a grading run.
///
/// None of these are recovered from: the binary prints the diagnostic and
/// exits with status 1 without emitting a partial report.
#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    /// Invalid or conflicting combination of flags.
    #[error("{0}")]
    Configuration(String),

    /// A path argument names a file that does not exist.
    #[error("{} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// `--url` is not an http, https or ftp address with a host.
    #[error("{0} is not a valid URL")]
    InvalidUrl(String),

    /// The remote document could not be fetched.
    #[error("failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The checklist is not a JSON array of strings.
    #[error("failed to parse checklist {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A selector could not be compiled.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The report could not be serialized.
    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

impl GraderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, GraderError>;
