//! Data passed between the stages of a grading run.

mod checklist;

pub use checklist::{CheckList, CheckResult};
