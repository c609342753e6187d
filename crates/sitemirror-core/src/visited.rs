//! Dedup gate: concurrent set of URLs already claimed for processing.
//!
//! Shared by all workers; every read and write goes through the lock. The set
//! grows monotonically for the lifetime of one crawl run.

use std::collections::HashSet;
use std::sync::RwLock;

/// Lock-protected set of URL strings. `claim` performs check-and-mark under a
/// single write lock, so a URL can be claimed by exactly one worker even when
/// several discover it simultaneously.
#[derive(Default)]
pub struct VisitedSet {
    inner: RwLock<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the URL has already been claimed.
    pub fn is_visited(&self, url: &str) -> bool {
        self.inner.read().unwrap().contains(url)
    }

    /// Mark a URL as visited without claiming it (used when a caller holds
    /// its own ordering guarantees).
    pub fn mark_visited(&self, url: &str) {
        self.inner.write().unwrap().insert(url.to_string());
    }

    /// Atomically claim a URL. Returns true for the first caller and false
    /// for everyone after, including concurrent callers.
    pub fn claim(&self, url: &str) -> bool {
        self.inner.write().unwrap().insert(url.to_string())
    }

    /// Number of URLs claimed so far.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}
