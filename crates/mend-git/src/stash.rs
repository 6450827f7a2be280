//! Stash operations and `git stash list` parsing.

use tracing::debug;

use crate::Repository;
use crate::error::{Error, Result};

/// One entry of `git stash list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashEntry {
    /// Stash reference, e.g. `stash@{0}`.
    pub id: String,
    /// Stash description, e.g. `On main: wip`.
    pub message: String,
}

impl std::fmt::Display for StashEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.id)
    }
}

impl Repository {
    /// Stash working tree changes, optionally with a message.
    ///
    /// # Errors
    /// Returns `NothingToStash` if there were no local changes, or an error
    /// if git stash fails.
    pub fn stash_push(&self, message: Option<&str>) -> Result<()> {
        let mut args = vec!["stash", "push"];
        if let Some(msg) = message.filter(|m| !m.is_empty()) {
            args.extend(["-m", msg]);
        }

        let stdout = self.run_git(&args)?;
        if stdout.contains("No local changes to save") {
            return Err(Error::NothingToStash);
        }

        debug!(?message, "stashed changes");
        Ok(())
    }

    /// List stashes, most recent first.
    ///
    /// # Errors
    /// Returns error if git stash list fails.
    pub fn stash_list(&self) -> Result<Vec<StashEntry>> {
        let stdout = self.run_git(&["stash", "list"])?;
        Ok(parse_stash_list(&stdout))
    }

    /// Apply a stash by id, keeping it in the stash list.
    ///
    /// # Errors
    /// Returns `StashNotFound` if no stash has that id, or an error if git
    /// stash apply fails (e.g. it would conflict).
    pub fn stash_apply(&self, id: &str) -> Result<()> {
        if !self.stash_list()?.iter().any(|s| s.id == id) {
            return Err(Error::StashNotFound(id.to_string()));
        }

        self.run_git(&["stash", "apply", id])?;
        debug!(id, "applied stash");
        Ok(())
    }
}

/// Parse `git stash list` output.
///
/// Blank lines are skipped. The id is everything before the first `:`.
/// Lines in the usual `stash@{N}: <message>` form get the text after the
/// colon as their message; any other line is kept whole as the message.
#[must_use]
pub fn parse_stash_list(output: &str) -> Vec<StashEntry> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| StashEntry {
            id: line.split(':').next().unwrap_or(line).to_string(),
            message: stash_message(line).unwrap_or(line).to_string(),
        })
        .collect()
}

fn stash_message(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("stash@{")?;
    let (index, rest) = rest.split_once('}')?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    rest.strip_prefix(": ").filter(|m| !m.is_empty())
}
