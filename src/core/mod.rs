//! Grading pipeline: acquire the document, load the checklist, run the checks.

pub mod checker;
pub mod checklist;
pub mod downloader;
pub mod source;
