//! Checklist and check result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Selectors a document is expected to contain.
///
/// Always kept sorted so reports come out in a stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    /// Builds a checklist, sorting the selectors.
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        Self { selectors }
    }

    /// Parses a JSON array of selector strings.
    ///
    /// # Errors
    ///
    /// Fails if `json` is not an array of strings.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Vec<String>>(json).map(Self::new)
    }

    /// Selectors in check order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CheckList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Outcome of a run: selector to "at least one element matched".
///
/// Keys are unique, so a selector listed twice yields a single entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckResult {
    checks: BTreeMap<String, bool>,
}

impl CheckResult {
    /// Records the outcome for `selector`, replacing any earlier one.
    pub fn insert(&mut self, selector: impl Into<String>, present: bool) {
        self.checks.insert(selector.into(), present);
    }

    /// Outcome for `selector`, if it was checked.
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.checks.get(selector).copied()
    }

    /// Entries in sorted selector order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.checks.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// True when every selector matched.
    pub fn all_present(&self) -> bool {
        self.checks.values().all(|present| *present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_is_sorted() {
        let checks = CheckList::from_json(r##"["p", "h1", "img", "a[href]", "#header"]"##).unwrap();
        let order: Vec<&str> = checks.iter().collect();
        assert_eq!(order, ["#header", "a[href]", "h1", "img", "p"]);
    }

    #[test]
    fn test_checklist_rejects_malformed_json() {
        assert!(CheckList::from_json(r#"["h1", "p""#).is_err());
        assert!(CheckList::from_json(r#"{"h1": true}"#).is_err());
        assert!(CheckList::from_json(r#"["h1", 2]"#).is_err());
    }

    #[test]
    fn test_checklist_empty() {
        let checks = CheckList::from_json("[]").unwrap();
        assert!(checks.is_empty());
        assert_eq!(checks.len(), 0);
    }

    #[test]
    fn test_result_duplicates_overwrite() {
        let mut result = CheckResult::default();
        result.insert("h1", false);
        result.insert("h1", true);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("h1"), Some(true));
        assert_eq!(result.get("p"), None);
    }

    #[test]
    fn test_result_all_present() {
        let mut result = CheckResult::default();
        assert!(result.all_present());
        result.insert("h1", true);
        assert!(result.all_present());
        result.insert("p", false);
        assert!(!result.all_present());
    }
}
