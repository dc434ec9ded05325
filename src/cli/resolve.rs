//! Turns parsed flags and the config file into a validated invocation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::args::Args;
use crate::config::Config;
use crate::constants;
use crate::error::{GraderError, Result};

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file, already known to exist.
    File(PathBuf),
    /// Remote document fetched with a single GET.
    Url(Url),
}

/// Fully validated settings for one grading run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    /// Document to grade.
    pub source: Source,
    /// Checklist file, already known to exist.
    pub checks_path: PathBuf,
    /// Request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// User agent for remote requests.
    pub user_agent: String,
    /// Treat selectors that fail to compile as fatal. Off in lenient mode.
    pub strict: bool,
}

/// Validates the flag combination and merges it with the config file.
///
/// Flags win over config values, config values win over built-in defaults.
///
/// # Errors
///
/// - [`GraderError::Configuration`] if neither or both of `--file`/`--url` are set.
/// - [`GraderError::FileNotFound`] if `--file` or the checklist does not exist.
/// - [`GraderError::InvalidUrl`] if `--url` is malformed.
pub fn resolve(args: &Args, config: &Config) -> Result<InvocationConfig> {
    let source = match (&args.file, &args.url) {
        (None, None) => {
            return Err(GraderError::Configuration(constants::ERR_NO_SOURCE.to_string()))
        }
        (Some(_), Some(_)) => {
            return Err(GraderError::Configuration(
                constants::ERR_BOTH_SOURCES.to_string(),
            ))
        }
        (Some(file), None) => Source::File(assert_file_exists(file)?),
        (None, Some(url)) => Source::Url(assert_url_valid(url)?),
    };

    let checks_path = args
        .checks
        .clone()
        .or_else(|| config.checks.clone())
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CHECKS_FILE));
    let checks_path = assert_file_exists(&checks_path)?;

    let timeout = args
        .timeout
        .or(config.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(|| format!("{}/{}", constants::APP_NAME, constants::APP_VERSION));

    Ok(InvocationConfig {
        source,
        checks_path,
        timeout,
        user_agent,
        strict: !(args.lenient || config.lenient_selectors),
    })
}

/// Ensures `path` exists on disk.
///
/// # Errors
///
/// Returns [`GraderError::FileNotFound`] otherwise.
pub fn assert_file_exists(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(GraderError::FileNotFound(path.to_path_buf()))
    }
}

/// Parses `input` as a remote document address.
///
/// # Errors
///
/// Returns [`GraderError::InvalidUrl`] unless [`is_valid_url`] accepts it.
pub fn assert_url_valid(input: &str) -> Result<Url> {
    if !is_valid_url(input) {
        return Err(GraderError::InvalidUrl(input.to_string()));
    }
    Url::parse(input).map_err(|_| GraderError::InvalidUrl(input.to_string()))
}

/// Checks the URL shape: a supported scheme, then at least two characters
/// of which the first is ASCII alphanumeric, and a non-empty host.
pub fn is_valid_url(input: &str) -> bool {
    let Some(rest) = constants::URL_SCHEMES
        .iter()
        .find_map(|scheme| input.strip_prefix(scheme))
    else {
        return false;
    };

    let mut chars = rest.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphanumeric()) || chars.next().is_none() {
        return false;
    }

    Url::parse(input).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}
