//! JSON report output.
//!
//! The report is the only thing written to stdout, so its output can be piped
//! straight into other tools. Logs and diagnostics go to stderr.

use std::io::{self, Write};

use serde::Serialize;

use crate::constants;
use crate::error::{GraderError, Result};
use crate::state::CheckResult;

/// Renders `result` as a JSON object indented with four spaces.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(result: &CheckResult) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(constants::REPORT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    result.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the rendered report to `out`, followed by a newline.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn write_report(out: &mut impl Write, result: &CheckResult) -> Result<()> {
    let rendered = render(result)?;
    writeln!(out, "{rendered}").map_err(|e| GraderError::io("<stdout>", e))?;
    Ok(())
}

/// Prints the report to stdout.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn print(result: &CheckResult) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, result)?;
    handle
        .flush()
        .map_err(|e| GraderError::io("<stdout>", e))
}
