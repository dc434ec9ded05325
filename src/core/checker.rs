//! Selector presence checks against a parsed document.

use log::warn;
use scraper::{Html, Selector};

use crate::error::{GraderError, Result};
use crate::state::{CheckList, CheckResult};

/// Parses `html` into a queryable document.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Runs every check in `checks` against `document`.
///
/// A selector that fails to compile aborts the run when `strict` is set, and
/// otherwise counts as absent.
///
/// # Errors
///
/// Returns [`GraderError::Selector`] for the first uncompilable selector in
/// strict mode.
pub fn check_document(document: &Html, checks: &CheckList, strict: bool) -> Result<CheckResult> {
    let mut result = CheckResult::default();
    for selector in checks.iter() {
        let present = match is_present(document, selector) {
            Ok(present) => present,
            Err(e) if strict => return Err(e),
            Err(e) => {
                warn!("{e}");
                false
            }
        };
        result.insert(selector, present);
    }
    Ok(result)
}

/// True if at least one element of `document` matches `selector`.
///
/// # Errors
///
/// Returns [`GraderError::Selector`] if `selector` cannot be compiled.
pub fn is_present(document: &Html, selector: &str) -> Result<bool> {
    let compiled = Selector::parse(selector).map_err(|e| GraderError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;
    Ok(document.select(&compiled).next().is_some())
}
