//! Error types for verbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::Strategy;

/// Errors from loading the strategy config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from locating and parsing the version token.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Could not find version in target file (expected `this.version = \"X.Y.Z\"`)")]
    TokenNotFound,

    #[error("Invalid version format '{raw}': component '{component}' is not a non-negative integer")]
    InvalidFormat { raw: String, component: String },

    #[error("Cannot apply a {strategy} bump to {version}: component would overflow")]
    Overflow { version: String, strategy: Strategy },
}

/// Errors from reading or writing the target file.
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),

    #[error("Could not read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to resolve HEAD commit: {0}")]
    HeadNotFound(#[source] git2::Error),

    #[error("HEAD commit {0} has a message that is not valid UTF-8")]
    NonUtf8Message(String),
}

/// Errors from the bump pipeline.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Git(#[from] GitError),
}
