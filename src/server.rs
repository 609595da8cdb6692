//! A tiny HTTP server for the page under grade
//!
//! Handy for eyeballing a page before grading it, or for pointing the
//! grader's `--url` mode at a local copy. The page is read once at bind
//! time and served from memory, so edits on disk need a restart.

use std::fmt;
use std::path::Path;

use tiny_http::{Header, Method, Request, Response, Server};

use crate::error::GradeError;

/// Port served when neither `--port` nor `$PORT` is set
pub const DEFAULT_PORT: u16 = 5000;

/// Picks the port to serve on
///
/// An explicit flag wins, then the `PORT` environment value, then
/// [`DEFAULT_PORT`]. A `PORT` that does not parse as a port number falls
/// through to the default rather than failing the run. The caller supplies
/// the environment value so the policy stays testable.
#[must_use]
pub fn resolve_port(flag: Option<u16>, env: Option<&str>) -> u16 {
    flag.or_else(|| env.and_then(|value| value.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

/// Serves a single cached HTML page on `GET /`
pub struct StaticServer {
    server: Server,
    page: String,
}

impl StaticServer {
    /// Reads the page and binds the listen address
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::MissingInput`] when the page file does not
    /// exist, [`GradeError::Io`] when it cannot be read, and
    /// [`GradeError::ServerBind`] when the address cannot be bound.
    pub fn bind(addr: &str, file: &Path) -> Result<Self, GradeError> {
        if !file.exists() {
            return Err(GradeError::MissingInput(file.to_path_buf()));
        }
        let page = std::fs::read_to_string(file)?;
        let server = Server::http(addr).map_err(|err| GradeError::ServerBind {
            addr: addr.to_owned(),
            reason: err.to_string(),
        })?;
        log::debug!("caching {} ({} bytes)", file.display(), page.len());
        Ok(Self { server, page })
    }

    /// The port actually bound, which differs from the requested one when
    /// binding port `0`
    #[must_use]
    pub fn port(&self) -> u16 {
        self.server
            .server_addr()
            .to_ip()
            .map_or(0, |addr| addr.port())
    }

    /// Serves requests until the process exits
    pub fn run(&self) {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, request: Request) {
        let path = request.url().split('?').next().unwrap_or("/");
        log::debug!("{} {path}", request.method());
        let response = match (request.method(), path) {
            (Method::Get, "/") => Response::from_string(&self.page).with_header(html_header()),
            _ => Response::from_string("not found").with_status_code(404),
        };
        if let Err(err) = request.respond(response) {
            log::warn!("failed to respond: {err}");
        }
    }
}

impl fmt::Debug for StaticServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticServer")
            .field("port", &self.port())
            .field("page_bytes", &self.page.len())
            .finish()
    }
}

fn html_header() -> Header {
    // Both byte strings are valid header content.
    Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]).unwrap()
}
