//! CLI for the sitemirror crawler.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use sitemirror_core::config;
use sitemirror_core::crawler::Crawler;

/// Mirror one web domain into a local directory tree.
#[derive(Debug, Parser)]
#[command(name = "sitemirror")]
#[command(about = "sitemirror: domain-scoped concurrent site mirroring crawler", long_about = None)]
pub struct Cli {
    /// URL of the site to mirror. Without it, usage is printed and nothing is crawled.
    #[arg(long)]
    pub url: Option<String>,

    /// Maximum recursion depth (0 = only the starting page).
    #[arg(long, default_value_t = 2)]
    pub depth: u32,

    /// Directory the mirrored file tree is written under.
    #[arg(long, default_value = "./downloads")]
    pub dir: PathBuf,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let Some(url) = cli.url else {
            // Help path: exit code 0, no crawling.
            Cli::command().print_long_help()?;
            println!();
            return Ok(());
        };

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let crawler = Crawler::new(&url, cli.depth, &cli.dir, cfg)?;

        println!("Mirroring {} (depth {}) into {}", url, cli.depth, crawler.download_dir().display());
        let summary = crawler.crawl().await?;
        println!("Processed {} URL(s).", summary.processed);
        Ok(())
    }
}
