//! Git operations using git2-rs.

pub mod commits;

pub use commits::head_commit_message;
