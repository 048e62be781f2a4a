//! Static file serving module
//!
//! Reads matched files and the SPA entry document and turns them into
//! responses. Decision-making lives in the pipeline; this module only does
//! I/O and response building.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::assets::contain::SPA_ENTRY;
use crate::http::{self, mime};
use crate::logger;

/// Content type for a resolved file, defaulting to a generic binary stream
pub fn content_type_of(path: &Path) -> &'static str {
    mime::content_type_for(path.extension().and_then(|e| e.to_str()))
        .unwrap_or(mime::OCTET_STREAM)
}

/// Read and serve a matched static file
///
/// The file existed when the pipeline decided on it; a read failure here is a
/// server error for this request only.
pub async fn serve_file(
    path: &Path,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => http::build_asset_response(content, content_type, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to read {}: {e}", path.display()));
            http::build_500_response()
        }
    }
}

/// Serve the SPA entry document for an application route
pub async fn serve_spa_entry(build_root: &Path, is_head: bool) -> Response<Full<Bytes>> {
    let entry = build_root.join(SPA_ENTRY);
    match fs::read(&entry).await {
        Ok(content) => http::build_spa_response(content, is_head),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            logger::log_error(&format!("SPA entry document missing: {}", entry.display()));
            http::build_404_response()
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read {}: {e}", entry.display()));
            http::build_500_response()
        }
    }
}
