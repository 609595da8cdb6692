//! Selector evaluation against a parsed page
//!
//! The grader only ever asks one question of a document: does at least one
//! element match this selector? That question sits behind [`QueryEngine`]
//! so the HTML backend can be swapped without touching the pipeline.
//! [`ScraperEngine`] is the stock implementation.

use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::checks::CheckList;
use crate::error::GradeError;
use crate::report::Report;

/// Evaluates CSS selectors against a parsed HTML document
pub trait QueryEngine {
    /// Parsed form of a page, built once and queried per selector
    type Document;

    /// Parses raw HTML into the engine's document form
    ///
    /// HTML parsing is forgiving: malformed markup yields a best-effort
    /// document rather than an error.
    fn parse(&self, html: &str) -> Self::Document;

    /// Whether at least one element in the document matches the selector
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::Selector`] when the selector itself does not
    /// parse as CSS.
    fn matches(&self, document: &Self::Document, selector: &str) -> Result<bool, GradeError>;
}

/// The stock engine, backed by the `scraper` HTML parser
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperEngine;

impl QueryEngine for ScraperEngine {
    type Document = Html;

    fn parse(&self, html: &str) -> Html {
        Html::parse_document(html)
    }

    fn matches(&self, document: &Html, selector: &str) -> Result<bool, GradeError> {
        let parsed = Selector::parse(selector).map_err(|err| GradeError::Selector {
            selector: selector.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(document.select(&parsed).next().is_some())
    }
}

/// Grades every check in the list against one document
///
/// The page is parsed once and each selector is asked in turn. Results
/// keep the check list's order, which is already sorted.
///
/// # Errors
///
/// Returns [`GradeError::Selector`] on the first selector that fails to
/// parse; no partial report is produced in that case.
pub fn evaluate<E: QueryEngine>(
    engine: &E,
    html: &str,
    checks: &CheckList,
) -> Result<Report, GradeError> {
    let document = engine.parse(html);
    let mut results = BTreeMap::new();
    for selector in checks {
        let found = engine.matches(&document, selector)?;
        log::debug!("check {selector:?}: {found}");
        results.insert(selector.clone(), found);
    }
    Ok(Report::new(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sample</title></head>
<body>
    <h1 id="headline" class="big">Hello</h1>
    <div class="intro"><p>First paragraph.</p></div>
</body>
</html>"#;

    #[test]
    fn finds_present_elements() {
        let engine = ScraperEngine;
        let document = engine.parse(PAGE);
        assert!(engine.matches(&document, "h1").unwrap());
        assert!(engine.matches(&document, "#headline").unwrap());
        assert!(engine.matches(&document, ".intro p").unwrap());
    }

    #[test]
    fn misses_absent_elements() {
        let engine = ScraperEngine;
        let document = engine.parse(PAGE);
        assert!(!engine.matches(&document, "img").unwrap());
        assert!(!engine.matches(&document, ".intro h2").unwrap());
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let engine = ScraperEngine;
        let document = engine.parse(PAGE);
        let err = engine.matches(&document, "???").unwrap_err();
        assert!(matches!(err, GradeError::Selector { .. }));
        assert!(err.to_string().contains("???"));
    }

    #[test]
    fn evaluate_grades_every_check() {
        let checks = CheckList::new(vec!["title".into(), "img".into(), "h1.big".into()]);
        let report = evaluate(&ScraperEngine, PAGE, &checks).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.get("title"), Some(true));
        assert_eq!(report.get("h1.big"), Some(true));
        assert_eq!(report.get("img"), Some(false));
    }

    #[test]
    fn evaluate_with_no_checks_is_empty() {
        let report = evaluate(&ScraperEngine, PAGE, &CheckList::new(vec![])).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn evaluate_stops_on_bad_selector() {
        let checks = CheckList::new(vec!["h1".into(), "??".into()]);
        let err = evaluate(&ScraperEngine, PAGE, &checks).unwrap_err();
        assert!(matches!(err, GradeError::Selector { .. }));
    }
}
