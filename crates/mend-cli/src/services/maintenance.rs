//! Maintenance service for routine repository chores.
//!
//! Wraps the git operations behind `undo`, `stash`, `apply-stash`, `track`
//! and `clean`, separated from prompting and presentation.

use anyhow::{Context, Result};
use mend_git::{CommitInfo, GitOps, StashEntry};
use tracing::info;

/// Service for maintenance operations with trait-based dependencies.
pub struct MaintenanceService<'a, G: GitOps> {
    repo: &'a G,
}

impl<'a, G: GitOps> MaintenanceService<'a, G> {
    /// Create a new maintenance service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Undo the last commit, keeping its changes staged.
    pub fn undo_last_commit(&self) -> Result<CommitInfo> {
        let undone = self
            .repo
            .undo_last_commit()
            .context("Failed to undo last commit")?;
        info!(commit = %undone.oid, "undid last commit");
        Ok(undone)
    }

    /// Stash working tree changes.
    ///
    /// Empty messages are treated as no message.
    pub fn stash(&self, message: Option<&str>) -> Result<()> {
        let message = message.map(str::trim).filter(|m| !m.is_empty());
        Ok(self.repo.stash_push(message)?)
    }

    /// List stashes, most recent first.
    pub fn stashes(&self) -> Result<Vec<StashEntry>> {
        Ok(self.repo.stash_list()?)
    }

    /// Apply a stash by id.
    pub fn apply_stash(&self, id: &str) -> Result<()> {
        self.repo
            .stash_apply(id)
            .with_context(|| format!("Failed to apply {id}"))
    }

    /// List untracked files.
    pub fn untracked_files(&self) -> Result<Vec<String>> {
        Ok(self.repo.untracked_files()?)
    }

    /// Add files to the index, returning how many were added.
    pub fn track(&self, paths: &[String]) -> Result<usize> {
        if paths.is_empty() {
            return Ok(0);
        }

        self.repo
            .add_paths(paths)
            .context("Failed to add files to the index")?;
        Ok(paths.len())
    }

    /// Paths a clean would remove.
    pub fn clean_candidates(&self, directories: bool) -> Result<Vec<String>> {
        Ok(self.repo.clean_candidates(directories)?)
    }

    /// Remove untracked files, returning how many paths git removed.
    ///
    /// Returns 0 without running clean when there is nothing to remove.
    pub fn clean(&self, directories: bool) -> Result<usize> {
        if self.clean_candidates(directories)?.is_empty() {
            return Ok(0);
        }

        let removed = self
            .repo
            .clean_untracked(directories)
            .context("Failed to clean working directory")?;
        info!(paths = removed.len(), directories, "cleaned working directory");
        Ok(removed.len())
    }
}
