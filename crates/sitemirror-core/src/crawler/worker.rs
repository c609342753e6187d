//! Worker loop: fetch, mirror, extract, report.

use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Mutex;

use crate::job::CrawlJob;
use crate::links;
use crate::mirror_path;
use crate::store::{self, WriteOutcome};

use super::Crawler;

/// One pool worker: pulls jobs until the queue closes and is drained.
///
/// Every completed job sends exactly one results batch, empty included, so
/// the scheduler's in-flight counter stays exact. The send is time-bounded;
/// on expiry the batch is dropped with a warning rather than blocking the
/// worker indefinitely.
pub(super) async fn run(
    worker_id: usize,
    ctx: Arc<Crawler>,
    jobs: Arc<Mutex<mpsc::Receiver<CrawlJob>>>,
    results: mpsc::Sender<Vec<CrawlJob>>,
) {
    loop {
        let job = { jobs.lock().await.recv().await };
        let Some(job) = job else { break };

        let new_jobs = process_job(&ctx, &job).await;

        match tokio::time::timeout(ctx.cfg.result_send_timeout(), results.send(new_jobs)).await {
            Ok(Ok(())) => {}
            Ok(Err(_)) => break,
            Err(_) => {
                tracing::warn!(
                    worker_id,
                    url = %job.url,
                    "timed out delivering results batch; discovered jobs dropped"
                );
            }
        }

        tokio::time::sleep(ctx.cfg.politeness_delay()).await;
    }
    tracing::debug!(worker_id, "worker exiting");
}

/// Processes one job end to end and returns the discovered child jobs.
///
/// Guards run in order: depth bound, same-domain filter, visited claim. The
/// claim is atomic, so a URL reachable over several paths is fetched at most
/// once per run. A single GET serves both the mirrored copy and link
/// extraction.
async fn process_job(ctx: &Crawler, job: &CrawlJob) -> Vec<CrawlJob> {
    if job.depth > ctx.max_depth {
        return Vec::new();
    }
    if !links::same_host(&job.url, &ctx.base_url) {
        return Vec::new();
    }
    if !ctx.visited.claim(job.url.as_str()) {
        return Vec::new();
    }

    tracing::info!(depth = job.depth, url = %job.url, "processing");

    let page = match ctx.fetcher.fetch(&job.url).await {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(url = %job.url, error = %err, "fetch failed; dropping job");
            return Vec::new();
        }
    };

    let html_text = page
        .is_html()
        .then(|| String::from_utf8_lossy(&page.body).into_owned());

    let path = mirror_path::local_path_for(&ctx.download_dir, &job.url);
    let body: Cow<'_, [u8]> = match &html_text {
        Some(text) => Cow::Owned(
            links::rewrite_html(text, &job.url, &ctx.base_url, &ctx.download_dir).into_bytes(),
        ),
        None => Cow::Borrowed(&page.body),
    };

    match store::write_mirrored(&path, &body).await {
        Ok(WriteOutcome::Written) => {
            tracing::info!(url = %job.url, path = %path.display(), "mirrored");
        }
        Ok(WriteOutcome::AlreadyExists) => {
            tracing::debug!(path = %path.display(), "already mirrored; skipping write");
        }
        Err(err) => {
            tracing::warn!(url = %job.url, error = %err, "mirror write failed; dropping job");
            return Vec::new();
        }
    }

    // Frontier leaf: jobs at max depth never spawn children.
    if job.depth >= ctx.max_depth {
        return Vec::new();
    }
    let Some(text) = html_text else {
        tracing::debug!(url = %job.url, content_type = %page.content_type, "not HTML; no links to extract");
        return Vec::new();
    };

    let mut children = Vec::new();
    for mut link in links::extract_links(&text, &job.url) {
        link.set_fragment(None);
        if links::same_host(&link, &ctx.base_url) && !ctx.visited.is_visited(link.as_str()) {
            children.push(job.child(link));
        }
    }
    children
}
