//! Bump pipeline: load config, bump the version token, stamp the build date.
//!
//! Orchestrates config loading, version extraction, strategy resolution,
//! token substitution and the write-back of the target file.

pub mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use semver::Version;
use tracing::debug;

use crate::config::load_config;
use crate::error::BumpError;
use crate::git::head_commit_message;
use crate::target::{apply_to_text, read_target, write_target};
use crate::version::{extract_version, increment, resolve_strategy, Strategy};

pub use report::format_report;

/// Where the strategy-override commit message comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessageSource {
    /// No message; the configured strategy is used.
    #[default]
    None,
    /// A message passed on the command line.
    Text(String),
    /// The HEAD commit of the repository containing this path.
    Head(PathBuf),
}

/// Options for one bump run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct BumpOptions {
    pub target: PathBuf,
    pub config: PathBuf,
    pub message: MessageSource,
    pub dry_run: bool,
}

/// Result of a successful bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub target: PathBuf,
    /// The version as it was written in the file before the bump.
    pub previous: String,
    pub version: Version,
    pub strategy: Strategy,
    pub build_date: NaiveDate,
    /// False on a dry run.
    pub written: bool,
}

/// Run the bump pipeline, stamping `today` as the build date.
///
/// Nothing is written unless every step before the write succeeds.
pub fn run_bump(options: &BumpOptions, today: NaiveDate) -> Result<BumpOutcome, BumpError> {
    let config = load_config(&options.config)?;

    let content = read_target(&options.target)?;
    let token = extract_version(&content)?;

    let message = match &options.message {
        MessageSource::None => None,
        MessageSource::Text(text) => Some(text.clone()),
        MessageSource::Head(repo_path) => Some(head_commit_message(repo_path)?),
    };

    let strategy = resolve_strategy(config.strategy, message.as_deref());
    let version = increment(&token.version, strategy)?;
    debug!("Bumping {} -> {} ({})", token.raw, version, strategy);

    let updated = apply_to_text(&content, &version, today);

    if options.dry_run {
        debug!("Dry run, not writing {}", options.target.display());
    } else {
        write_target(&options.target, &updated)?;
    }

    Ok(BumpOutcome {
        target: options.target.clone(),
        previous: token.raw,
        version,
        strategy,
        build_date: today,
        written: !options.dry_run,
    })
}
