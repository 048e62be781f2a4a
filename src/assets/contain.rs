//! Path containment guard
//!
//! Maps a raw request path onto the build root and refuses any result that
//! escapes it. This is the sole defense against path traversal, so the join
//! is lexical: `.` and `..` segments are collapsed without consulting the
//! filesystem, and the result must keep the build root as a prefix.

use std::path::{Component, Path, PathBuf};

/// Name of the SPA entry document inside the build root.
pub const SPA_ENTRY: &str = "index.html";

/// Map a raw request path to an absolute path inside `build_root`.
///
/// The root path `/` resolves to the entry document. Returns `None` when the
/// normalized path does not stay under the build root; callers degrade that
/// to not-found behavior.
pub fn resolve(build_root: &Path, raw_path: &str) -> Option<PathBuf> {
    let relative = if raw_path == "/" {
        SPA_ENTRY
    } else {
        raw_path.strip_prefix('/').unwrap_or(raw_path)
    };

    let candidate = normalized_join(build_root, relative);
    if candidate.starts_with(build_root) {
        Some(candidate)
    } else {
        None
    }
}

/// Join `relative` onto `base`, collapsing `.` and `..` segments lexically.
///
/// A `..` may pop past `base`; the prefix check in [`resolve`] is what
/// decides whether the result is acceptable.
fn normalized_join(base: &Path, relative: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => joined.push(segment),
            Component::ParentDir => {
                joined.pop();
            }
            // Root and drive markers embedded mid-path carry no meaning here.
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    joined
}
