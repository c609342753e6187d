//! Outbound link extraction for the BFS frontier.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static HREF_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).unwrap());
static SRC_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)src\s*=\s*["']([^"']+)["']"#).unwrap());

/// Scans raw HTML for `href="..."` and `src="..."` values and resolves each
/// against `page_url`. Returns absolute URLs of any domain, duplicates
/// included; unparsable matches are silently dropped. Domain and depth
/// filtering is the worker's job, not this function's.
pub fn extract_links(html: &str, page_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();
    for re in [&*HREF_VALUE, &*SRC_VALUE] {
        for caps in re.captures_iter(html) {
            if let Ok(resolved) = page_url.join(&caps[1]) {
                links.push(resolved);
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn finds_href_and_src() {
        let html = r#"<a href="/a.html">a</a><img src="img/logo.png">"#;
        let links = extract_links(html, &url("http://site.test/docs/"));
        assert_eq!(
            links,
            vec![
                url("http://site.test/a.html"),
                url("http://site.test/docs/img/logo.png"),
            ]
        );
    }

    #[test]
    fn case_insensitive_attributes() {
        let html = r#"<A HREF='/x'>x</A><IMG SRC='/y.png'>"#;
        let links = extract_links(html, &url("http://site.test/"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn absolute_links_kept_any_domain() {
        let html = r#"<a href="http://other.test/page">x</a>"#;
        let links = extract_links(html, &url("http://site.test/"));
        assert_eq!(links, vec![url("http://other.test/page")]);
    }

    #[test]
    fn duplicates_not_collapsed() {
        let html = r#"<a href="/a">1</a><a href="/a">2</a>"#;
        let links = extract_links(html, &url("http://site.test/"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn unparsable_dropped() {
        let html = r#"<a href="http://[bad">x</a><a href="/ok">y</a>"#;
        let links = extract_links(html, &url("http://site.test/"));
        assert_eq!(links, vec![url("http://site.test/ok")]);
    }
}
