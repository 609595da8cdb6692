//! The end-to-end grading pipeline
//!
//! [`grade`] ties the stages together: resolve where the HTML comes from,
//! load the checks, load the page, evaluate every selector. Each stage
//! reports failure through [`GradeError`] and the first failure stops the
//! run, so no partial report is ever produced.

use std::path::PathBuf;

use crate::checks::CheckList;
use crate::engine::{self, QueryEngine};
use crate::error::GradeError;
use crate::report::Report;
use crate::source::HtmlSource;

/// HTML file graded when neither `--file` nor `--url` is given
pub const DEFAULT_HTML_FILE: &str = "index.html";
/// Checks file read when `--checks` is not given
pub const DEFAULT_CHECKS_FILE: &str = "checks.json";
/// Report destination when `--outfile` is not given
pub const DEFAULT_OUTFILE: &str = "checked.json";

/// Inputs for one grading run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOptions {
    /// Path of the JSON checks file
    pub checks: PathBuf,
    /// Path of the HTML file to grade
    pub file: PathBuf,
    /// Path the JSON report is written to
    pub outfile: PathBuf,
    /// URL to grade instead of the file, when set
    pub url: Option<String>,
}

impl Default for GradeOptions {
    fn default() -> Self {
        Self {
            checks: PathBuf::from(DEFAULT_CHECKS_FILE),
            file: PathBuf::from(DEFAULT_HTML_FILE),
            outfile: PathBuf::from(DEFAULT_OUTFILE),
            url: None,
        }
    }
}

/// Grades one page against one checks file
///
/// The source is resolved before anything is read, so a missing HTML file
/// fails the run up front. The checks file is parsed before a URL is
/// fetched, so a bad checks file never costs a network round trip. The
/// report is returned rather than written; callers decide where it goes.
///
/// # Errors
///
/// Returns the first [`GradeError`] any stage produces.
pub fn grade<E: QueryEngine>(options: &GradeOptions, engine: &E) -> Result<Report, GradeError> {
    let source = HtmlSource::resolve(options.url.as_deref(), &options.file)?;
    let checks = CheckList::from_file(&options.checks)?;
    log::info!("grading {source} against {} checks", checks.len());
    let html = source.load()?;
    engine::evaluate(engine, &html, &checks)
}
