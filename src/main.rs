//! verbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verbump::config::DEFAULT_CONFIG_PATH;
use verbump::target::DEFAULT_TARGET_PATH;
use verbump::{format_report, run_bump, BumpOptions, MessageSource};

/// Bump the version embedded in a source file and stamp its build date.
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Bump the version embedded in a source file and stamp its build date")]
#[command(version)]
struct Cli {
    /// Commit message to scan for [major], [minor] or [patch] markers
    #[arg(allow_hyphen_values = true)]
    message: Option<String>,

    /// Scan the HEAD commit message instead of an explicit one
    #[arg(long, conflicts_with = "message")]
    head: bool,

    /// Repository to read HEAD from (with --head)
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// File containing the version and build date tokens
    #[arg(short = 'f', long, default_value = DEFAULT_TARGET_PATH)]
    file: PathBuf,

    /// Path to the strategy config file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Dry run - report the bump without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let message = if cli.head {
        MessageSource::Head(cli.repo.clone())
    } else {
        cli.message.clone().map_or(MessageSource::None, MessageSource::Text)
    };

    let options = BumpOptions {
        target: cli.file.clone(),
        config: cli.config.clone(),
        message,
        dry_run: cli.dry_run,
    };

    let today = Local::now().date_naive();

    let outcome = run_bump(&options, today)
        .with_context(|| format!("Failed to bump version in {}", cli.file.display()))?;

    for line in format_report(&outcome) {
        println!("{}", line);
    }

    Ok(())
}

/// Install the tracing subscriber on stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
