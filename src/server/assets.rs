//! Request-path resolution and the extension to content-type table.

use std::path::{Component, Path, PathBuf};

/// Document served for `/` and as the SPA fallback.
pub const INDEX_FILE: &str = "index.html";

/// Content type for extensions outside the table.
pub const DEFAULT_MIME: &str = "application/octet-stream";

const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
];

/// Outcome of mapping a request path to a file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Candidate file to read, confined to the asset root.
    Serve(PathBuf),
    /// The path resolved outside the asset root; no file access allowed.
    Forbidden,
}

/// Map a request path (query string already removed) to a location
/// under `root`. `/` substitutes the index document. The candidate is
/// normalized lexically, without touching the filesystem, so `..`
/// segments cannot escape the root.
pub fn resolve(root: &Path, request_path: &str) -> Resolution {
    let path = if request_path == "/" {
        INDEX_FILE
    } else {
        request_path.trim_start_matches('/')
    };

    let candidate = normalize(&root.join(path));
    if candidate.starts_with(normalize(root)) {
        Resolution::Serve(candidate)
    } else {
        Resolution::Forbidden
    }
}

/// Content type for a resolved file, from its extension. The table is
/// case-sensitive; unknown and missing extensions get the generic type.
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_MIME;
    };
    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME)
}

/// Resolve `.` and `..` segments without consulting the filesystem.
/// A `..` that would climb past the start of a relative path is kept,
/// and one at the root of an absolute path is dropped.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let tail_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                let tail_is_root =
                    matches!(out.components().next_back(), Some(Component::RootDir));
                if tail_is_normal {
                    out.pop();
                } else if !tail_is_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
