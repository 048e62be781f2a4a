//! Content-type table
//!
//! Single data-driven lookup from file extension to MIME type. Extensions
//! outside the table yield `None` so the caller can fall back to a generic
//! binary type.

/// Generic binary fallback for extensions outside the table.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Look up the Content-Type for a file extension.
///
/// Text-bearing types declare a UTF-8 charset.
pub fn content_type_for(extension: Option<&str>) -> Option<&'static str> {
    match extension? {
        // Markup and styles
        "html" | "htm" => Some("text/html; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "txt" => Some("text/plain; charset=utf-8"),

        // Scripts and structured data
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "json" | "map" => Some("application/json; charset=utf-8"),

        // Images
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),

        // Fonts
        "woff" => Some("font/woff"),
        "woff2" => Some("font/woff2"),
        "ttf" => Some("font/ttf"),
        "otf" => Some("font/otf"),
        "eot" => Some("application/vnd.ms-fontobject"),

        _ => None,
    }
}

/// Whether an extension belongs to the fixed set of static-asset extensions.
pub fn is_static_extension(extension: Option<&str>) -> bool {
    content_type_for(extension).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_types_declare_charset() {
        assert_eq!(
            content_type_for(Some("html")),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(
            content_type_for(Some("css")),
            Some("text/css; charset=utf-8")
        );
        assert_eq!(
            content_type_for(Some("js")),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(
            content_type_for(Some("json")),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(
            content_type_for(Some("map")),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn test_binary_types() {
        assert_eq!(content_type_for(Some("png")), Some("image/png"));
        assert_eq!(content_type_for(Some("jpeg")), Some("image/jpeg"));
        assert_eq!(content_type_for(Some("ico")), Some("image/x-icon"));
        assert_eq!(content_type_for(Some("svg")), Some("image/svg+xml"));
        assert_eq!(content_type_for(Some("woff2")), Some("font/woff2"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Some("exe")), None);
        assert_eq!(content_type_for(Some("toml")), None);
        assert_eq!(content_type_for(None), None);
    }

    #[test]
    fn test_static_extension_set_matches_table() {
        assert!(is_static_extension(Some("js")));
        assert!(is_static_extension(Some("woff")));
        assert!(!is_static_extension(Some("rs")));
        assert!(!is_static_extension(None));
    }
}
