//! Rewrites intra-site links in mirrored HTML to relative local paths.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;
use url::Url;

use crate::mirror_path::{local_path_for, relative_href};

use super::same_host;

static HREF_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(href\s*=\s*["'])([^"']+)(["'])"#).unwrap());
static SRC_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(src\s*=\s*["'])([^"']+)(["'])"#).unwrap());
static CSS_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(url\s*\(\s*["']?)([^"')]+)(["']?\s*\))"#).unwrap());

/// Schemes and pseudo-links that are never rewritten.
fn is_special_link(link: &str) -> bool {
    link.starts_with('#')
        || link.starts_with("mailto:")
        || link.starts_with("tel:")
        || link.starts_with("javascript:")
        || link.starts_with("data:")
}

/// Rewrites `href`, `src`, and CSS `url()` references in `html` so that
/// same-domain links resolve inside the mirror rooted at `root`.
///
/// Each link is resolved against `page_url`; if the target shares the crawl's
/// base host, the link text is replaced with the relative path from the
/// current page's mirrored directory to the target's mirrored file, in
/// forward-slash form. Cross-domain links and special schemes pass through
/// unmodified.
pub fn rewrite_html(html: &str, page_url: &Url, base: &Url, root: &Path) -> String {
    let page_path = local_path_for(root, page_url);

    let mut result = html.to_string();
    for re in [&*HREF_ATTR, &*SRC_ATTR, &*CSS_URL] {
        result = re
            .replace_all(&result, |caps: &Captures<'_>| {
                match local_link_for(&caps[2], page_url, base, root, &page_path) {
                    Some(local) => format!("{}{}{}", &caps[1], local, &caps[3]),
                    None => caps[0].to_string(),
                }
            })
            .into_owned();
    }
    result
}

/// The relative mirrored path for one link, or `None` when the link must be
/// left as-is (special scheme, unparsable, cross-domain).
fn local_link_for(
    link: &str,
    page_url: &Url,
    base: &Url,
    root: &Path,
    page_path: &Path,
) -> Option<String> {
    if is_special_link(link) {
        return None;
    }
    let resolved = page_url.join(link).ok()?;
    if !same_host(&resolved, base) {
        return None;
    }
    let target_path = local_path_for(root, &resolved);
    relative_href(page_path, &target_path)
}
