//! Anchor-Audit main entry point
//!
//! This is the command-line interface for the Anchor-Audit link checker.

use anchor_audit::config::{load_config_with_hash, Config};
use anchor_audit::crawler::{crawl, HttpFetcher, DEFAULT_USER_AGENT};
use anchor_audit::output::{compute_statistics, print_statistics, to_rows, write_csv};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Anchor-Audit: a concurrent link accessibility checker
///
/// Anchor-Audit fetches every configured page concurrently and reports
/// anchors whose accessible name is missing, duplicated, or unclear
/// (WCAG 2.4.4, techniques H77-H81 and H33).
#[derive(Parser, Debug)]
#[command(name = "anchor-audit")]
#[command(version)]
#[command(about = "A concurrent link accessibility checker", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the CSV report here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be audited without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));

    if cli.dry_run {
        handle_dry_run(&config, &output_path);
    } else {
        handle_audit(&config, output_path, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("anchor_audit=info,warn"),
            1 => EnvFilter::new("anchor_audit=debug,info"),
            2 => EnvFilter::new("anchor_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn user_agent(config: &Config) -> String {
    config
        .user_agent
        .as_ref()
        .map(|ua| ua.header_value())
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
}

/// Handles the --dry-run mode: validates config and shows what would be audited
fn handle_dry_run(config: &Config, output_path: &std::path::Path) {
    println!("=== Anchor-Audit Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!("  User agent: {}", user_agent(config));

    println!("\nOutput:");
    println!("  CSV report: {}", output_path.display());

    println!("\nTarget URLs ({}):", config.targets.urls.len());
    for url in &config.targets.urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main audit operation
async fn handle_audit(
    config: &Config,
    output_path: PathBuf,
    quiet: bool,
) -> anchor_audit::Result<()> {
    let fetcher = Arc::new(HttpFetcher::new(&user_agent(config))?);

    let report = crawl(&config.targets.urls, fetcher, config.fetch_timeout()).await;

    let rows = to_rows(&report.findings);
    if rows.is_empty() {
        tracing::info!("No findings; writing header-only report");
    }

    match write_csv(&rows, &output_path) {
        Ok(()) => tracing::info!("Results saved to CSV file: {}", output_path.display()),
        Err(e) => {
            tracing::error!("Failed to write {}: {}", output_path.display(), e);
            return Err(e.into());
        }
    }

    if !quiet {
        print_statistics(&compute_statistics(&report));
    }

    Ok(())
}
