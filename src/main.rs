//! sitegrade - Grade HTML pages for the presence of required elements
//!
//! Points the grading pipeline at a file or URL: load the page, load a
//! JSON list of CSS selectors, and report which selectors the page
//! satisfies. Can also serve a page over HTTP for quick inspection.

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

mod cli;
mod commands;

/// Main entry point for the sitegrade CLI
///
/// All error handling funnels through here: commands return errors, this
/// prints them and picks the exit code.
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
