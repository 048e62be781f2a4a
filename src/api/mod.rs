//! Tag management API surface
//!
//! The tag CRUD handlers are mounted by the RPC backend under [`API_PREFIX`].
//! The static pipeline bypasses every path under that prefix; this module is
//! the seam where those requests land. Endpoints nothing has mounted answer
//! 404 with a JSON body so an unconfigured deployment fails loudly instead of
//! leaking the SPA document.

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use serde_json::json;

use crate::config::AppState;
use crate::logger;

/// Path prefix reserved for the tag API. Never served from disk.
pub const API_PREFIX: &str = "/api/";

/// Handle a request under the reserved prefix.
pub async fn dispatch(
    req: Request<hyper::body::Incoming>,
    _state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    logger::log_api_request(method.as_str(), &path, 404);

    let body = json!({ "error": "no such endpoint", "path": path }).to_string();
    Response::builder()
        .status(404)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build API response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}
