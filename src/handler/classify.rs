//! Request classification
//!
//! Sorts inbound paths into the three kinds the pipeline cares about: API
//! calls it must never touch, paths that look like static assets, and
//! application routes eligible for the SPA fallback. Classification depends
//! only on the path, never on the method or the filesystem.

use std::path::Path;

use crate::api;
use crate::http::mime;

/// What a request path looks like before any filesystem access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reserved for the tag API; never served from disk
    Api,
    /// Looks like a file: known static extension, or the root document
    StaticCandidate,
    /// Anything else; candidate for the SPA fallback
    ApplicationRoute,
}

/// Classify a raw request path
pub fn classify(path: &str) -> RouteClass {
    if path.starts_with(api::API_PREFIX) {
        return RouteClass::Api;
    }
    if path == "/" || mime::is_static_extension(extension_of(path)) {
        return RouteClass::StaticCandidate;
    }
    RouteClass::ApplicationRoute
}

/// Extension of the final path segment, if any
fn extension_of(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|e| e.to_str())
}
