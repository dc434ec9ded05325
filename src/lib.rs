//! Check HTML documents for required elements.
//!
//! A checklist is a JSON array of CSS selectors. Each selector is looked up in
//! the document and reported as present when at least one element matches:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = html_grader::check_html_file(
//!     Path::new("index.html"),
//!     Path::new("checks.json"),
//!     false,
//! )?;
//! for (selector, present) in result.iter() {
//!     println!("{selector}: {present}");
//! }
//! # Ok::<(), html_grader::GraderError>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod state;

pub use app::{check_html, check_html_file};
pub use error::{GraderError, Result};
pub use state::{CheckList, CheckResult};
