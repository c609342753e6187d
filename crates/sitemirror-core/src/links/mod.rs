//! Regex-based link handling for mirrored HTML.
//!
//! Attribute-pattern matching is the contract here, not DOM parsing: the
//! extractor and rewriter both target `href`/`src` attributes (the rewriter
//! additionally handles CSS `url()`), and leave everything else untouched.

mod extract;
mod rewrite;

pub use extract::extract_links;
pub use rewrite::rewrite_html;

use url::Url;

/// Same-domain filter: true when both URLs point at the same host and port.
pub fn same_host(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
}
