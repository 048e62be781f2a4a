//! Serving pipeline
//!
//! Ordered dispatch for every request: bypass reserved API paths, try the
//! direct file match through the containment guard, 404 static-looking
//! misses, give contained directory paths a second chance at their index
//! document, and finally fall back to the SPA entry document.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::api;
use crate::assets::contain;
use crate::config::AppState;
use crate::handler::classify::{classify, RouteClass};
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Terminal decision for one request, computed before any file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Reserved API path; the pipeline never answers these
    ApiBypass,
    /// An existing regular file under the build root
    StaticHit {
        path: PathBuf,
        content_type: &'static str,
    },
    /// Looked like a static asset (or was rejected) and nothing matched
    StaticMiss,
    /// Application route; serve the entry document
    SpaFallback,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let is_head = method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&method, &path);
    }

    let response = match decide(&state.build_root, &path) {
        RouteDecision::ApiBypass => api::dispatch(req, &state).await,
        RouteDecision::StaticHit { path: file, content_type } => {
            static_files::serve_file(&file, content_type, is_head).await
        }
        RouteDecision::StaticMiss => http::build_404_response(),
        RouteDecision::SpaFallback => {
            static_files::serve_spa_entry(&state.build_root, is_head).await
        }
    };

    if access_log {
        logger::log_response(response.status().as_u16(), &path);
    }
    Ok(response)
}

/// Run the staged dispatch for one path.
///
/// Touches the filesystem only through existence checks; file contents are
/// read later, when the decision is acted on.
pub fn decide(build_root: &Path, raw_path: &str) -> RouteDecision {
    let class = classify(raw_path);

    // Stage 1: reserved API paths bypass the static pipeline entirely. This
    // also keeps them away from the SPA fallback below.
    if class == RouteClass::Api {
        return RouteDecision::ApiBypass;
    }

    let resolved = contain::resolve(build_root, raw_path);
    if resolved.is_none() {
        logger::log_warning(&format!(
            "Rejected request path outside build root: {raw_path}"
        ));
    }

    // Stage 2: direct match.
    if let Some(candidate) = &resolved {
        if candidate.is_file() {
            return RouteDecision::StaticHit {
                content_type: static_files::content_type_of(candidate),
                path: candidate.clone(),
            };
        }
    }

    // Stage 3: static-looking paths and rejected resolutions never fall
    // through to the SPA document.
    if class == RouteClass::StaticCandidate || resolved.is_none() {
        return RouteDecision::StaticMiss;
    }

    // Stage 4: conventional file-server second chance. A contained directory
    // path may still carry its own index document.
    if let Some(candidate) = resolved {
        if candidate.is_dir() {
            let index = candidate.join(contain::SPA_ENTRY);
            if index.is_file() {
                return RouteDecision::StaticHit {
                    content_type: static_files::content_type_of(&index),
                    path: index,
                };
            }
        }
    }

    // Stage 5: SPA fallback for whatever remains.
    RouteDecision::SpaFallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;

    fn build_root() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), b"<html>entry</html>").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), b"console.log(1);").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/index.html"), b"<html>docs</html>").unwrap();
        dir
    }

    #[test]
    fn test_root_resolves_to_entry_document() {
        let dir = build_root();
        assert_eq!(
            decide(dir.path(), "/"),
            RouteDecision::StaticHit {
                path: dir.path().join("index.html"),
                content_type: "text/html; charset=utf-8",
            }
        );
    }

    #[test]
    fn test_existing_asset_is_a_direct_hit() {
        let dir = build_root();
        assert_eq!(
            decide(dir.path(), "/assets/app.js"),
            RouteDecision::StaticHit {
                path: dir.path().join("assets/app.js"),
                content_type: "application/javascript; charset=utf-8",
            }
        );
    }

    #[test]
    fn test_missing_static_asset_is_a_miss() {
        let dir = build_root();
        assert_eq!(
            decide(dir.path(), "/assets/missing.png"),
            RouteDecision::StaticMiss
        );
    }

    #[test]
    fn test_traversal_is_a_miss_never_a_fallback() {
        let dir = build_root();
        assert_eq!(
            decide(dir.path(), "/../../etc/passwd"),
            RouteDecision::StaticMiss
        );
        assert_eq!(
            decide(dir.path(), "/assets/../../outside.js"),
            RouteDecision::StaticMiss
        );
    }

    #[test]
    fn test_application_route_falls_back() {
        let dir = build_root();
        assert_eq!(
            decide(dir.path(), "/dashboard/settings"),
            RouteDecision::SpaFallback
        );
    }

    #[test]
    fn test_api_paths_bypass_the_pipeline() {
        let dir = build_root();
        assert_eq!(decide(dir.path(), "/api/tags"), RouteDecision::ApiBypass);
    }

    #[test]
    fn test_directory_index_served_by_fallback_lookup() {
        let dir = build_root();
        assert_eq!(
            decide(dir.path(), "/docs"),
            RouteDecision::StaticHit {
                path: dir.path().join("docs").join("index.html"),
                content_type: "text/html; charset=utf-8",
            }
        );
    }

    #[tokio::test]
    async fn test_served_bytes_match_file() {
        let dir = build_root();
        let resp = static_files::serve_file(
            &dir.path().join("assets/app.js"),
            "application/javascript; charset=utf-8",
            false,
        )
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/javascript; charset=utf-8"
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"console.log(1);");
    }

    #[tokio::test]
    async fn test_spa_fallback_serves_entry_document() {
        let dir = build_root();
        let resp = static_files::serve_spa_entry(dir.path(), false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>entry</html>");
    }

    #[tokio::test]
    async fn test_missing_entry_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resp = static_files::serve_spa_entry(dir.path(), false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_head_response_has_empty_body() {
        let dir = build_root();
        let resp = static_files::serve_file(
            &dir.path().join("assets/app.js"),
            "application/javascript; charset=utf-8",
            true,
        )
        .await;
        assert_eq!(resp.status(), 200);
        // Content-Length still reflects the file size
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "15");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
