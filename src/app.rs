//! One grading run, from validated invocation to finished result.

use std::path::{Path, PathBuf};

use log::info;

use crate::cli::resolve::InvocationConfig;
use crate::constants;
use crate::core::{checker, checklist, downloader::FetchOptions, source};
use crate::error::Result;
use crate::state::{CheckList, CheckResult};

/// Runs the whole pipeline, saving remote documents in the working directory.
///
/// Nothing is printed here; the caller reports the result only once every
/// stage has succeeded.
///
/// # Errors
///
/// Returns the first error raised by any stage.
pub async fn run(invocation: &InvocationConfig) -> Result<CheckResult> {
    run_in(invocation, Path::new(".")).await
}

/// Same as [`run`], with the scratch file for remote documents placed in `work_dir`.
///
/// # Errors
///
/// Returns the first error raised by any stage.
pub async fn run_in(invocation: &InvocationConfig, work_dir: &Path) -> Result<CheckResult> {
    let options = FetchOptions {
        timeout: invocation.timeout,
        user_agent: invocation.user_agent.clone(),
    };
    let scratch: PathBuf = work_dir.join(constants::DOWNLOAD_FILE_NAME);

    let html = source::acquire(&invocation.source, &options, &scratch).await?;
    let checks = checklist::load_checks(&invocation.checks_path)?;
    let result = check_html(&html, &checks, invocation.strict)?;

    if result.all_present() {
        info!("All {} checks present", result.len());
    } else {
        let present = result.iter().filter(|(_, present)| *present).count();
        info!("{present} of {} checks present", result.len());
    }
    Ok(result)
}

/// Checks an HTML string against `checks`.
///
/// # Errors
///
/// Fails in strict mode on a selector that cannot be compiled.
pub fn check_html(html: &str, checks: &CheckList, strict: bool) -> Result<CheckResult> {
    let document = checker::parse_document(html);
    checker::check_document(&document, checks, strict)
}

/// Checks a local HTML file against the checklist file at `checks_path`.
///
/// # Errors
///
/// Fails if either file cannot be read, the checklist is malformed, or (in
/// strict mode) a selector cannot be compiled.
pub fn check_html_file(html_path: &Path, checks_path: &Path, strict: bool) -> Result<CheckResult> {
    let html = source::read_html(html_path)?;
    let checks = checklist::load_checks(checks_path)?;
    check_html(&html, &checks, strict)
}
