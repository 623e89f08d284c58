//! cf-crawler main entry point
//!
//! This is the command-line interface for downloading a Codeforces user's
//! accepted solutions.

use anyhow::{bail, Context};
use cf_crawler::config::{load_config, resolve_solutions_dir, validate, Config};
use cf_crawler::crawler::Coordinator;
use cf_crawler::output::{format_elapsed, print_summary, SolutionWriter};
use cf_crawler::url::Endpoints;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// cf-crawler: download a Codeforces user's accepted solutions
///
/// Fetches the user's submission history, keeps one accepted submission per
/// problem and writes each source file to
/// `<output-dir>/<username>/<problem><extension>`.
#[derive(Parser, Debug)]
#[command(name = "cf-crawler")]
#[command(version)]
#[command(about = "Download a Codeforces user's accepted solutions", long_about = None)]
struct Cli {
    /// Codeforces handle; prompted for when omitted
    #[arg(value_name = "USERNAME")]
    username: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Root directory for solutions (default: ~/CodeforcesSolutions)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show what would be crawled without making any request
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output.solutions_dir = Some(dir);
    }
    validate(&config).context("invalid configuration")?;

    let username = match cli.username {
        Some(name) => name,
        None => prompt_username()?,
    };
    let username = username.trim().to_string();
    if username.is_empty() {
        bail!("username must not be empty");
    }

    if cli.dry_run {
        handle_dry_run(&config, &username)
    } else {
        handle_crawl(&config, &username).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cf_crawler=info,warn"),
            1 => EnvFilter::new("cf_crawler=debug,info"),
            2 => EnvFilter::new("cf_crawler=trace,debug"),
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

/// Asks for the username on stdin
fn prompt_username() -> anyhow::Result<String> {
    println!("Enter username:");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read username from stdin")?;
    Ok(line)
}

/// Handles the --dry-run mode: shows configuration and the requests a crawl would make
fn handle_dry_run(config: &Config, username: &str) -> anyhow::Result<()> {
    let endpoints = Endpoints::new(&config.remote.base_url)?;
    let writer = SolutionWriter::new(resolve_solutions_dir(&config.output)?);

    println!("=== cf-crawler Dry Run ===\n");

    println!("Remote:");
    println!("  Base URL: {}", endpoints.base());
    println!(
        "  Submission list: {}",
        endpoints.submission_list_url(username)?
    );
    println!(
        "  Submission pages: {}contest/<contest>/submission/<id>",
        endpoints.base()
    );

    println!("\nCrawler:");
    println!(
        "  Max requests per second: {}",
        config.crawler.requests_per_second
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout);
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!(
        "  Solutions directory: {}",
        writer.base_dir().join(username).display()
    );

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, username: &str) -> anyhow::Result<()> {
    let start = Instant::now();

    let coordinator = Coordinator::new(config).context("failed to start crawl")?;
    tracing::info!(
        "Writing solutions under {}",
        coordinator.writer().base_dir().display()
    );

    let summary = coordinator.run(username).await;
    print_summary(&summary);

    println!(
        "Completed fetching all successful submissions in {}.",
        format_elapsed(start.elapsed())
    );

    Ok(())
}
