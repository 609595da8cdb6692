//! The grade report and its JSON rendering
//!
//! A report maps each selector to whether the page satisfied it. Keys are
//! held in a sorted map, so serialization order is stable for a given set
//! of checks and repeat runs produce byte-identical output.

use std::collections::{BTreeMap, btree_map};
use std::path::Path;

use serde::Serialize;

use crate::error::GradeError;

/// Outcome of a grading run, one pass/fail flag per selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    results: BTreeMap<String, bool>,
}

impl Report {
    /// Wraps per-selector results into a report
    #[must_use]
    pub const fn new(results: BTreeMap<String, bool>) -> Self {
        Self { results }
    }

    /// Result for one selector, if it was part of the run
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    /// Number of checks in the report
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report holds no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over `(selector, passed)` pairs in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, bool> {
        self.results.iter()
    }

    /// Renders the report as pretty JSON, indented with four spaces
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GradeError> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the report to `path` and returns the exact text written
    ///
    /// The returned string is what callers should echo to the console so
    /// file and console always agree.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::Serialize`] if serialization fails and
    /// [`GradeError::Io`] if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<String, GradeError> {
        let json = self.to_json()?;
        std::fs::write(path, &json)?;
        log::info!("wrote {} results to {}", self.len(), path.display());
        Ok(json)
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a String, &'a bool);
    type IntoIter = btree_map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
