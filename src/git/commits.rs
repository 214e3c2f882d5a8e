//! HEAD commit message lookup.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

/// Return the full message of the commit `HEAD` points at.
///
/// The repository is discovered from `repo_path`, so any directory inside a
/// working tree works.
pub fn head_commit_message(repo_path: &Path) -> Result<String, GitError> {
    let repo = Repository::discover(repo_path).map_err(GitError::OpenRepository)?;

    let commit = repo
        .head()
        .and_then(|h| h.peel_to_commit())
        .map_err(GitError::HeadNotFound)?;

    let message = commit
        .message()
        .ok_or_else(|| GitError::NonUtf8Message(commit.id().to_string()))?
        .to_string();

    debug!(
        "HEAD commit {}: {}",
        commit.id(),
        message.lines().next().unwrap_or("")
    );

    Ok(message)
}
