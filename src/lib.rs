//! sitegrade - grade HTML pages for the presence of required elements
//!
//! This library implements a single-pass grading pipeline: load an HTML
//! document from disk or from a URL, evaluate a list of CSS selectors
//! against it, and produce a JSON report mapping each selector to whether
//! it matched at least one node.
//!
//! ```no_run
//! use sitegrade::engine::ScraperEngine;
//! use sitegrade::grader::{self, GradeOptions};
//!
//! let options = GradeOptions::default();
//! let report = grader::grade(&options, &ScraperEngine)?;
//! println!("{}", report.to_json()?);
//! # Ok::<(), sitegrade::error::GradeError>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod checks;
pub mod engine;
pub mod error;
pub mod grader;
pub mod report;
pub mod server;
pub mod source;
