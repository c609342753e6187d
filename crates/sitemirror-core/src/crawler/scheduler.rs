//! Frontier/result loop and the termination protocol.
//!
//! The scheduler owns both ends of the crawl: it is the only sender on the
//! job queue and the only receiver of results batches. In-flight accounting
//! is exact because every job produces exactly one batch; the queue is closed
//! (sender dropped) at most once, as soon as the counter reaches zero, when
//! the pool exits, or when the inactivity timeout fires.

use std::time::Duration;
use tokio::sync::mpsc;

use crate::job::CrawlJob;

use super::Crawler;

/// Pause after an inactivity-timeout shutdown so in-flight workers can finish
/// their current job before the run returns.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// How often progress is logged, in processed jobs.
const PROGRESS_EVERY: u64 = 50;

/// Final report of one crawl run.
#[derive(Debug, Clone, Copy)]
pub struct CrawlSummary {
    /// Jobs accepted into the frontier, the seed included. Counts attempts:
    /// a job whose fetch later fails is still processed.
    pub processed: u64,
}

pub(super) async fn run(
    ctx: &Crawler,
    job_tx: mpsc::Sender<CrawlJob>,
    mut results: mpsc::Receiver<Vec<CrawlJob>>,
) -> CrawlSummary {
    let mut job_tx = Some(job_tx);
    let mut in_flight: u64 = 0;
    let mut processed: u64 = 0;

    // The seed is always attempted; it defines the crawl's domain.
    let seed = CrawlJob::new(ctx.base_url.clone(), 0);
    if let Some(tx) = &job_tx {
        if tx.send(seed).await.is_ok() {
            in_flight = 1;
            processed = 1;
        }
    }

    while in_flight > 0 {
        match tokio::time::timeout(ctx.cfg.idle_timeout(), results.recv()).await {
            Ok(Some(batch)) => {
                for job in batch {
                    let Some(tx) = &job_tx else { continue };
                    let url = job.url.clone();
                    match tokio::time::timeout(ctx.cfg.enqueue_timeout(), tx.send(job)).await {
                        Ok(Ok(())) => {
                            in_flight += 1;
                            processed += 1;
                        }
                        Ok(Err(_)) => {
                            tracing::warn!(url = %url, "job queue closed; dropping job");
                        }
                        Err(_) => {
                            tracing::warn!(url = %url, "frontier full; dropping job after bounded wait");
                        }
                    }
                }
                in_flight -= 1;

                if processed % PROGRESS_EVERY == 0 {
                    tracing::info!(processed, in_flight, "crawl progress");
                }
            }
            Ok(None) => {
                // All workers exited while jobs were still open.
                job_tx.take();
                break;
            }
            Err(_) => {
                tracing::warn!(
                    in_flight,
                    "no results within idle timeout; treating crawl as complete"
                );
                job_tx.take();
                tokio::time::sleep(SHUTDOWN_GRACE).await;
                break;
            }
        }
    }

    // Normal completion path: frontier drained, close the queue so workers exit.
    job_tx.take();

    tracing::info!(processed, "crawl finished");
    CrawlSummary { processed }
}
