//! URL -> mirrored file path mapping.
//!
//! Pure functions: the mirrored path of a URL depends only on the download
//! root and the URL itself. The host becomes a sanitized top directory, each
//! path segment is sanitized in turn, directory-style URLs get `index.html`,
//! and extension-less names get `.html`. Query and fragment are ignored.

mod sanitize;

pub use sanitize::sanitize_component;

use std::path::{Path, PathBuf};
use url::Url;

/// Maps a URL to its local mirrored file path under `root`.
pub fn local_path_for(root: &Path, url: &Url) -> PathBuf {
    let mut host = url.host_str().unwrap_or_default().to_string();
    if let Some(port) = url.port() {
        host = format!("{}:{}", host, port);
    }

    let mut path = root.join(sanitize_component(&host));

    let url_path = url.path();
    for segment in url_path.split('/').filter(|s| !s.is_empty()) {
        path.push(sanitize_component(segment));
    }

    if url_path.is_empty() || url_path == "/" || url_path.ends_with('/') {
        path.push("index.html");
    } else if path.extension().is_none() {
        let mut name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        name.push_str(".html");
        path.set_file_name(name);
    }

    path
}

/// Relative link from the directory holding `from_page` to `to_target`, in
/// forward-slash form suitable for HTML. `None` if no relative path exists.
pub fn relative_href(from_page: &Path, to_target: &Path) -> Option<String> {
    let from_dir = from_page.parent()?;
    let rel = pathdiff::diff_paths(to_target, from_dir)?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
