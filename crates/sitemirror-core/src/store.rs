//! Mirrored-file writes under the download root.

use anyhow::{Context, Result};
use std::path::Path;

/// Outcome of a mirror write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File created and body written.
    Written,
    /// A file already existed at the target path; nothing was touched.
    AlreadyExists,
}

/// Writes `body` to `path`, creating parent directories as needed.
///
/// Pre-existing files are never overwritten: re-running a crawl against the
/// same output directory leaves already-mirrored pages byte-identical.
pub async fn write_mirrored(path: &Path, body: &[u8]) -> Result<WriteOutcome> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(WriteOutcome::AlreadyExists);
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating mirror directory {}", parent.display()))?;
    }

    tokio::fs::write(path, body)
        .await
        .with_context(|| format!("writing mirrored file {}", path.display()))?;
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.test/docs/index.html");
        let outcome = write_mirrored(&path, b"hello").await.unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        write_mirrored(&path, b"first").await.unwrap();
        let outcome = write_mirrored(&path, b"second").await.unwrap();
        assert_eq!(outcome, WriteOutcome::AlreadyExists);
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }
}
