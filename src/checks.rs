//! The list of CSS selectors a page is graded against
//!
//! Checks live on disk as a JSON array of selector strings, e.g.
//! `["h1", ".navigation", "#main img"]`. The order in the file does not
//! matter: the list is sorted and deduplicated on construction so the
//! report always comes out in the same order for the same set of checks.

use std::path::Path;

use crate::error::GradeError;

/// A sorted, deduplicated list of CSS selectors to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    /// Builds a check list from raw selector strings
    ///
    /// Selectors are sorted lexicographically and exact duplicates are
    /// dropped, so two files with the same selectors in different orders
    /// produce identical lists.
    #[must_use]
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        selectors.dedup();
        Self { selectors }
    }

    /// Loads a check list from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::MissingInput`] if the file does not exist,
    /// [`GradeError::Io`] if it cannot be read, and
    /// [`GradeError::ChecksParse`] if it is not a JSON array of strings.
    pub fn from_file(path: &Path) -> Result<Self, GradeError> {
        if !path.exists() {
            return Err(GradeError::MissingInput(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let selectors: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| GradeError::ChecksParse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded {} checks from {}", selectors.len(), path.display());
        Ok(Self::new(selectors))
    }

    /// The selectors, in report order
    #[must_use]
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Iterates over the selectors in report order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.selectors.iter()
    }

    /// Number of selectors in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Whether the list contains no selectors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl<'a> IntoIterator for &'a CheckList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
