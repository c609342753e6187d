//! Crawl orchestration: worker pool plus the frontier/result scheduler loop.
//!
//! One `Crawler` is built per run and discarded with the process; there is no
//! cross-run state beyond the files already present in the mirror.

mod scheduler;
mod worker;

pub use scheduler::CrawlSummary;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use url::Url;

use crate::config::MirrorConfig;
use crate::fetch::Fetcher;
use crate::job::CrawlJob;
use crate::visited::VisitedSet;

/// Domain-scoped mirroring crawler. Construction validates the base URL and
/// download root; everything after `new` is per-job and recoverable.
pub struct Crawler {
    base_url: Url,
    max_depth: u32,
    download_dir: PathBuf,
    cfg: MirrorConfig,
    fetcher: Fetcher,
    visited: VisitedSet,
}

impl Crawler {
    /// Validates the base URL, absolutizes and creates the download root, and
    /// builds the shared HTTP client. Errors here are fatal to the run.
    pub fn new(
        base_url: &str,
        max_depth: u32,
        download_dir: &Path,
        cfg: MirrorConfig,
    ) -> Result<Self> {
        let base_url: Url = base_url
            .parse()
            .with_context(|| format!("invalid base URL: {}", base_url))?;
        anyhow::ensure!(
            base_url.host_str().is_some(),
            "base URL has no host: {}",
            base_url
        );

        let download_dir = if download_dir.is_absolute() {
            download_dir.to_path_buf()
        } else {
            std::env::current_dir()
                .context("resolving current directory")?
                .join(download_dir)
        };
        std::fs::create_dir_all(&download_dir)
            .with_context(|| format!("creating download directory {}", download_dir.display()))?;

        let fetcher = Fetcher::new(&cfg.user_agent, cfg.request_timeout())?;

        Ok(Self {
            base_url,
            max_depth,
            download_dir,
            cfg,
            fetcher,
            visited: VisitedSet::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Runs the crawl to completion: seeds the frontier with the base URL at
    /// depth 0, drains it through the worker pool, and returns once no jobs
    /// remain in flight (or the inactivity timeout fires). Always terminates.
    pub async fn crawl(self) -> Result<CrawlSummary> {
        let ctx = Arc::new(self);

        let (job_tx, job_rx) = mpsc::channel::<CrawlJob>(ctx.cfg.job_queue_capacity.max(1));
        let (result_tx, result_rx) =
            mpsc::channel::<Vec<CrawlJob>>(ctx.cfg.result_queue_capacity.max(1));
        let job_rx = Arc::new(tokio::sync::Mutex::new(job_rx));

        let mut pool = JoinSet::new();
        for worker_id in 0..ctx.cfg.workers.max(1) {
            pool.spawn(worker::run(
                worker_id,
                Arc::clone(&ctx),
                Arc::clone(&job_rx),
                result_tx.clone(),
            ));
        }
        // The scheduler observes pool shutdown through the results channel
        // closing, so only workers may hold senders.
        drop(result_tx);

        let summary = scheduler::run(&ctx, job_tx, result_rx).await;

        while pool.join_next().await.is_some() {}

        Ok(summary)
    }
}
