//! Checklist file loading.

use std::path::Path;

use log::debug;

use crate::constants;
use crate::error::{GraderError, Result};
use crate::state::CheckList;

/// Reads and parses the checklist at `path`.
///
/// # Errors
///
/// Returns [`GraderError::Io`] if the file cannot be read and
/// [`GraderError::Parse`] if it is not a JSON array of strings.
pub fn load_checks(path: &Path) -> Result<CheckList> {
    let content = std::fs::read_to_string(path).map_err(|e| GraderError::io(path, e))?;
    let checks = CheckList::from_json(&content).map_err(|source| GraderError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{}{}", constants::MSG_LOADED_CHECKS, checks.len());
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_checks_sorted() {
        let path = std::env::temp_dir().join("html_grader_test_load_checks.json");
        std::fs::write(&path, r#"["h1", "p", "img"]"#).unwrap();

        let checks = load_checks(&path).unwrap();
        assert_eq!(checks.iter().collect::<Vec<_>>(), ["h1", "img", "p"]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_checks_malformed() {
        let path = std::env::temp_dir().join("html_grader_test_load_checks_bad.json");
        std::fs::write(&path, "h1, p").unwrap();

        let result = load_checks(&path);
        assert!(matches!(result, Err(GraderError::Parse { .. })));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_checks_missing() {
        let result = load_checks(Path::new("/nonexistent/checks.json"));
        assert!(matches!(result, Err(GraderError::Io { .. })));
    }
}
