//! Frontier job: one page to fetch and mirror.

use url::Url;

/// A `(URL, depth)` pair queued for one worker. Immutable once created;
/// lives only in the job/results channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlJob {
    pub url: Url,
    pub depth: u32,
}

impl CrawlJob {
    pub fn new(url: Url, depth: u32) -> Self {
        Self { url, depth }
    }

    /// The job a discovered link becomes: one level deeper than its parent.
    pub fn child(&self, url: Url) -> Self {
        Self {
            url,
            depth: self.depth + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_increments_depth() {
        let parent = CrawlJob::new(Url::parse("http://site.test/").unwrap(), 1);
        let child = parent.child(Url::parse("http://site.test/a").unwrap());
        assert_eq!(child.depth, 2);
    }
}
