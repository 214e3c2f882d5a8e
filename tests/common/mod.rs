//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use git2::{Oid, Repository, Signature};

use verbump::{BumpOptions, MessageSource};

/// A small game source file with both tokens, shaped like a real one.
pub const GAME_JS: &str = r#"class Game {
    constructor() {
        this.score = 0;
        this.level = 1;

        // Version system
        this.version = "1.2.16";
        this.buildDate = "2025-08-28";

        this.isMobile = /Android|iPhone/i.test(navigator.userAgent);
    }

    drawVersionInfo() {
        const versionText = `v${this.version}`;
        const buildText = `Build: ${this.buildDate}`;
    }
}
"#;

/// The fixed build date used by tests.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// A temp directory holding a target file and, optionally, a config.
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    /// Create a workspace with `game.js` containing `content`.
    pub fn with_target(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("game.js"), content).expect("Failed to write game.js");
        Self { dir }
    }

    /// Create a workspace with no files at all.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Write `version-config.json`.
    pub fn config(&self, json: &str) {
        std::fs::write(self.config_path(), json).expect("Failed to write config");
    }

    pub fn target_path(&self) -> PathBuf {
        self.dir.path().join("game.js")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("version-config.json")
    }

    /// Current content of the target file.
    pub fn target(&self) -> String {
        std::fs::read_to_string(self.target_path()).expect("Failed to read game.js")
    }

    /// Bump options pointing at this workspace.
    pub fn options(&self, message: MessageSource) -> BumpOptions {
        BumpOptions {
            target: self.target_path(),
            config: self.config_path(),
            message,
            dry_run: false,
        }
    }
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write `game.js` into the working tree.
    pub fn write_target(&self, content: &str) {
        std::fs::write(self.dir.path().join("game.js"), content).expect("Failed to write game.js");
    }

    /// Commit everything in the working tree with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to add files");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        // Get parent commit if exists
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());

        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }
}
