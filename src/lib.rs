//! verbump - A CLI tool that bumps an embedded version string and stamps a build date.
//!
//! # Overview
//!
//! verbump finds `this.version = "X.Y.Z"` in a source file, increments it by a
//! configured strategy (major, minor or patch) that a `[major]`, `[minor]` or
//! `[patch]` marker in a commit message can override, rewrites
//! `this.buildDate = "YYYY-MM-DD"` to today, and writes the file back.

pub mod bumper;
pub mod config;
pub mod error;
pub mod git;
pub mod target;
pub mod version;

// Re-export commonly used types
pub use bumper::{format_report, run_bump, BumpOptions, BumpOutcome, MessageSource};
pub use config::{load_config, Config};
pub use error::{BumpError, ConfigError, GitError, TargetError, VersionError};
pub use version::{Strategy, VersionToken};
