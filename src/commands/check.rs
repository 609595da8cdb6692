//! Grade a page and write the report

use sitegrade::engine::ScraperEngine;
use sitegrade::grader::{self, GradeOptions};

/// Grades the configured page and writes the JSON report
///
/// The report lands in the outfile and is echoed to stdout, identically.
/// Progress goes to stderr via the logger, so stdout stays parseable.
pub fn check(options: GradeOptions) -> anyhow::Result<()> {
    let report = grader::grade(&options, &ScraperEngine)?;
    let json = report.write_to(&options.outfile)?;
    println!("{json}");
    Ok(())
}
