//! rsassetscan 命令行入口：提取页面资源并以 JSON 输出
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use rsassetscan::{AssetExtractor, ConfigManager, DirStore, LibraryDetector};

#[derive(Parser)]
#[command(name = "rsassetscan", about = "Extract the assets and technology stack of a web page", version)]
struct Cli {
    /// Page URL (https:// is assumed when no scheme is given).
    url: String,

    /// Skip fetching CSS/JS content.
    #[arg(long)]
    no_content: bool,

    /// Maximum number of external scripts whose content is fetched.
    #[arg(long, default_value_t = 10)]
    max_js: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Maximum concurrent asset fetches.
    #[arg(long, default_value_t = 8)]
    concurrency: usize,

    /// Custom signature catalog (JSON array of {name, icon, signatures}).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Download every external asset into this folder (defaults to ./assets_<unix time>).
    #[arg(long, value_name = "FOLDER", num_args = 0..=1)]
    download: Option<Option<PathBuf>>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigManager::custom()
        .fetch_content(!cli.no_content)
        .max_js(cli.max_js)
        .http_timeout(cli.timeout)
        .concurrency(cli.concurrency)
        .build();

    let mut extractor = AssetExtractor::new(config).context("failed to build HTTP client")?;
    if let Some(path) = &cli.catalog {
        let detector = LibraryDetector::from_file(path)
            .await
            .with_context(|| format!("failed to load catalog {}", path.display()))?;
        extractor = extractor.with_detector(detector);
    }

    let report = extractor
        .extract(&cli.url)
        .await
        .with_context(|| format!("failed to extract {}", cli.url))?;
    print_json(&report, cli.pretty)?;

    if let Some(folder) = &cli.download {
        let store = match folder {
            Some(path) => DirStore::new(path),
            None => DirStore::timestamped(),
        };
        let downloads = extractor.download_assets(&report.assets, &store).await;
        tracing::info!(
            "saved {}/{} assets into {}",
            downloads.saved_count(),
            downloads.count,
            downloads.folder
        );
        print_json(&downloads, cli.pretty)?;
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
