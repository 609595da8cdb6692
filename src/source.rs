//! Where the HTML under grade comes from
//!
//! A page is graded either from a file on disk or from a URL fetched over
//! HTTP. Resolution happens before any loading: a URL always wins when one
//! is given, and a file target must already exist or the run stops there.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::GradeError;

/// Upper bound on a page fetch, connection and body included
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A resolved origin for the HTML document under grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    /// A file on the local filesystem
    File(PathBuf),
    /// A remote page fetched over HTTP
    Url(String),
}

impl HtmlSource {
    /// Picks the source for a run from an optional URL and a file path
    ///
    /// A URL takes precedence over the file whenever one is supplied; the
    /// file path is not touched in that case and need not exist.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::MissingInput`] when no URL is given and the
    /// file does not exist.
    pub fn resolve(url: Option<&str>, file: &Path) -> Result<Self, GradeError> {
        match url {
            Some(url) => Ok(Self::Url(url.to_owned())),
            None if file.exists() => Ok(Self::File(file.to_path_buf())),
            None => Err(GradeError::MissingInput(file.to_path_buf())),
        }
    }

    /// Loads the HTML text from this source
    ///
    /// Files are read in one call; URLs are fetched with a single blocking
    /// GET. There are no retries in either case. Pages need not be valid
    /// UTF-8: both variants decode bytes lossily, so the same markup grades
    /// the same whether it came from disk or over the wire.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::Io`] when a file cannot be read and
    /// [`GradeError::Fetch`] when the request fails, times out, or comes
    /// back with a non-success status.
    pub fn load(&self) -> Result<String, GradeError> {
        match self {
            Self::File(path) => {
                let bytes = std::fs::read(path)?;
                log::info!("loaded {} ({} bytes)", path.display(), bytes.len());
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Self::Url(url) => fetch(url),
        }
    }
}

impl fmt::Display for HtmlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Url(url) => write!(f, "url {url}"),
        }
    }
}

/// Fetches a page body with a single GET, treating HTTP errors as failures
fn fetch(url: &str) -> Result<String, GradeError> {
    let fetch_error = |source| GradeError::Fetch {
        url: url.to_owned(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(fetch_error)?;
    let html = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(fetch_error)?;
    log::info!("loaded {url} ({} bytes)", html.len());
    Ok(html)
}
