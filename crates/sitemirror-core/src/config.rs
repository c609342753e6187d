use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/sitemirror/config.toml`.
///
/// Built once at startup and read-only afterwards; the crawler shares it
/// across workers without locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Number of concurrent crawl workers.
    pub workers: usize,
    /// Capacity of the bounded job queue (the frontier).
    pub job_queue_capacity: usize,
    /// Capacity of the bounded results queue (worker -> scheduler batches).
    pub result_queue_capacity: usize,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Pause between jobs on each worker, in milliseconds (politeness delay).
    pub politeness_delay_ms: u64,
    /// How long the scheduler waits to place one discovered job into a full
    /// frontier before dropping it, in seconds.
    pub enqueue_timeout_secs: u64,
    /// How long a worker waits to deliver a results batch before dropping it,
    /// in seconds.
    pub result_send_timeout_secs: u64,
    /// With no results for this long, the crawl is treated as complete, in seconds.
    pub idle_timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            job_queue_capacity: 1000,
            result_queue_capacity: 100,
            request_timeout_secs: 30,
            politeness_delay_ms: 1000,
            enqueue_timeout_secs: 30,
            result_send_timeout_secs: 10,
            idle_timeout_secs: 60,
            user_agent: concat!("sitemirror/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl MirrorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }

    pub fn enqueue_timeout(&self) -> Duration {
        Duration::from_secs(self.enqueue_timeout_secs)
    }

    pub fn result_send_timeout(&self) -> Duration {
        Duration::from_secs(self.result_send_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitemirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MirrorConfig = toml::from_str(&data)?;
    Ok(cfg)
}
