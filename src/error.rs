//! Error types for the grading pipeline
//!
//! Every failure here is terminal for a CLI run: the binary's top-level
//! handler prints the message and exits non-zero. Nothing in the library
//! terminates the process itself, so the same stages can be embedded and
//! tested without killing the test runner.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while grading a page or serving one
#[derive(Debug, Error)]
pub enum GradeError {
    /// A local input file (HTML page or checks list) does not exist
    #[error("{} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// The checks file is not a JSON array of selector strings
    #[error("invalid checks json in {}: {source}", .path.display())]
    ChecksParse {
        /// Path of the offending checks file
        path: PathBuf,
        /// Underlying JSON parse error
        source: serde_json::Error,
    },

    /// A selector in the checks list is not valid CSS selector syntax
    #[error("invalid selector {selector:?}: {reason}")]
    Selector {
        /// The selector as written in the checks file
        selector: String,
        /// Parser diagnostic from the query engine
        reason: String,
    },

    /// The page could not be fetched from the given URL
    #[error("unable to load html from {url}: {source}")]
    Fetch {
        /// The URL that was requested
        url: String,
        /// Transport or HTTP status error from the client
        source: reqwest::Error,
    },

    /// The report could not be serialized to JSON
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTTP server could not bind its listen address
    #[error("failed to start server on {addr}: {reason}")]
    ServerBind {
        /// Address the server tried to listen on
        addr: String,
        /// Reason reported by the server library
        reason: String,
    },

    /// Filesystem error while reading inputs or writing the report
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
