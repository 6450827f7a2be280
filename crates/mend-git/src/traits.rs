//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the git
//! operations the CLI services need, enabling dependency injection and
//! testability.

use crate::{CommitInfo, Repository, Result, StashEntry};

/// Trait for git repository operations.
///
/// This trait abstracts git operations, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    // === Commit Operations ===

    /// Soft-reset HEAD to its parent, returning the undone commit.
    fn undo_last_commit(&self) -> Result<CommitInfo>;

    // === Working Directory ===

    /// List untracked files.
    fn untracked_files(&self) -> Result<Vec<String>>;

    /// Add paths to the index.
    fn add_paths(&self, paths: &[String]) -> Result<()>;

    /// Paths a clean would remove, without removing them.
    fn clean_candidates(&self, directories: bool) -> Result<Vec<String>>;

    /// Remove untracked files (and directories if asked), returning the
    /// removed paths.
    fn clean_untracked(&self, directories: bool) -> Result<Vec<String>>;

    // === Stash Operations ===

    /// Stash working tree changes.
    fn stash_push(&self, message: Option<&str>) -> Result<()>;

    /// List stashes.
    fn stash_list(&self) -> Result<Vec<StashEntry>>;

    /// Apply a stash by id.
    fn stash_apply(&self, id: &str) -> Result<()>;
}

impl GitOps for Repository {
    fn undo_last_commit(&self) -> Result<CommitInfo> {
        Self::undo_last_commit(self)
    }

    fn untracked_files(&self) -> Result<Vec<String>> {
        Self::untracked_files(self)
    }

    fn add_paths(&self, paths: &[String]) -> Result<()> {
        Self::add_paths(self, paths)
    }

    fn clean_candidates(&self, directories: bool) -> Result<Vec<String>> {
        Self::clean_candidates(self, directories)
    }

    fn clean_untracked(&self, directories: bool) -> Result<Vec<String>> {
        Self::clean_untracked(self, directories)
    }

    fn stash_push(&self, message: Option<&str>) -> Result<()> {
        Self::stash_push(self, message)
    }

    fn stash_list(&self) -> Result<Vec<StashEntry>> {
        Self::stash_list(self)
    }

    fn stash_apply(&self, id: &str) -> Result<()> {
        Self::stash_apply(self, id)
    }
}
