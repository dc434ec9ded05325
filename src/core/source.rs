//! Fetches the raw HTML for a grading run.

use std::path::Path;

use log::{info, warn};

use super::downloader::{download_document, FetchOptions};
use crate::cli::resolve::Source;
use crate::constants;
use crate::error::{GraderError, Result};

/// Reads the HTML text of `source`.
///
/// Remote documents are saved to `scratch`, read back like a local file and
/// then removed. A failed removal is only logged.
///
/// # Errors
///
/// Propagates read failures as [`GraderError::Io`] and fetch failures as
/// [`GraderError::Transport`].
pub async fn acquire(source: &Source, options: &FetchOptions, scratch: &Path) -> Result<String> {
    match source {
        Source::File(path) => read_html(path),
        Source::Url(url) => {
            let saved = download_document(url, scratch, options).await?;
            read_scratch(&saved)
        }
    }
}

/// Reads a downloaded document and removes it. A failed removal is logged
/// and otherwise ignored.
///
/// # Errors
///
/// Returns [`GraderError::Io`] if the file cannot be read.
pub fn read_scratch(path: &Path) -> Result<String> {
    let html = read_html(path);
    if let Err(e) = std::fs::remove_file(path) {
        warn!("{}{}: {e}", constants::ERR_CLEANUP_FAILED, path.display());
    }
    html
}

/// Reads an HTML file, replacing invalid UTF-8 sequences.
///
/// # Errors
///
/// Returns [`GraderError::Io`] if the file cannot be read.
pub fn read_html(path: &Path) -> Result<String> {
    info!("{}{}", constants::MSG_READING_FILE, path.display());
    let bytes = std::fs::read(path).map_err(|e| GraderError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
