//! Serve a page over HTTP

use std::path::Path;

use sitegrade::server::{self, StaticServer};

/// Serves the page until the process is interrupted
///
/// An explicit `--port` wins, then the `PORT` environment variable, then
/// the default of 5000.
pub fn serve(file: &Path, port: Option<u16>) -> anyhow::Result<()> {
    let port = server::resolve_port(port, std::env::var("PORT").ok().as_deref());
    let server = StaticServer::bind(&format!("0.0.0.0:{port}"), file)?;
    println!("Serving {} on port {}", file.display(), server.port());
    server.run();
    Ok(())
}
