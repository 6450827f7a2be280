//! Mock implementations for testing services.
//!
//! These mocks implement the traits from mend-git to enable unit testing
//! of service logic without real git repos.

use std::cell::RefCell;

use mend_git::{CommitInfo, Error as GitError, GitOps, Oid, Result as GitResult, StashEntry};

/// Mock implementation of `GitOps` for testing.
pub struct MockGitOps {
    pub commits: RefCell<Vec<CommitInfo>>,
    pub is_clean: RefCell<bool>,
    pub untracked: RefCell<Vec<String>>,
    pub staged: RefCell<Vec<String>>,
    pub stash_messages: RefCell<Vec<String>>,
    pub applied: RefCell<Vec<String>>,
    pub cleaned: RefCell<Option<bool>>,
}

impl Default for MockGitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitOps {
    pub fn new() -> Self {
        Self {
            commits: RefCell::new(Vec::new()),
            is_clean: RefCell::new(true),
            untracked: RefCell::new(Vec::new()),
            staged: RefCell::new(Vec::new()),
            stash_messages: RefCell::new(Vec::new()),
            applied: RefCell::new(Vec::new()),
            cleaned: RefCell::new(None),
        }
    }

    pub fn with_commit(self, summary: &str) -> Self {
        let n = self.commits.borrow().len() + 1;
        let oid = Oid::from_str(&format!("{n:040x}")).unwrap_or_else(|_| Oid::zero());
        self.commits.borrow_mut().push(CommitInfo {
            oid,
            summary: summary.to_string(),
        });
        self
    }

    pub fn with_clean(self, clean: bool) -> Self {
        *self.is_clean.borrow_mut() = clean;
        self
    }

    pub fn with_untracked(self, files: &[&str]) -> Self {
        self.untracked
            .borrow_mut()
            .extend(files.iter().map(ToString::to_string));
        *self.is_clean.borrow_mut() = files.is_empty();
        self
    }

    pub fn with_stash(self, message: &str) -> Self {
        self.stash_messages.borrow_mut().push(message.to_string());
        self
    }
}

impl GitOps for MockGitOps {
    fn undo_last_commit(&self) -> GitResult<CommitInfo> {
        let mut commits = self.commits.borrow_mut();
        if commits.len() < 2 {
            return Err(GitError::NoCommitToUndo);
        }
        commits.pop().ok_or(GitError::NoCommitToUndo)
    }

    fn untracked_files(&self) -> GitResult<Vec<String>> {
        Ok(self.untracked.borrow().clone())
    }

    fn add_paths(&self, paths: &[String]) -> GitResult<()> {
        let mut untracked = self.untracked.borrow_mut();
        for path in paths {
            let Some(pos) = untracked.iter().position(|p| p == path) else {
                return Err(GitError::CommandFailed {
                    command: format!("add {path}"),
                    stderr: format!("pathspec '{path}' did not match any files"),
                });
            };
            untracked.remove(pos);
            self.staged.borrow_mut().push(path.clone());
        }
        Ok(())
    }

    fn clean_candidates(&self, directories: bool) -> GitResult<Vec<String>> {
        let mut paths: Vec<String> = Vec::new();
        for path in self.untracked.borrow().iter() {
            let candidate = match path.split_once('/') {
                None => path.clone(),
                Some((dir, _)) if directories => format!("{dir}/"),
                Some(_) => continue,
            };
            if !paths.contains(&candidate) {
                paths.push(candidate);
            }
        }
        Ok(paths)
    }

    fn clean_untracked(&self, directories: bool) -> GitResult<Vec<String>> {
        let removed = self.clean_candidates(directories)?;
        self.untracked
            .borrow_mut()
            .retain(|path| !directories && path.contains('/'));
        *self.cleaned.borrow_mut() = Some(directories);
        Ok(removed)
    }

    fn stash_push(&self, message: Option<&str>) -> GitResult<()> {
        if *self.is_clean.borrow() {
            return Err(GitError::NothingToStash);
        }
        let message = message.map_or_else(
            || "WIP on main: 0000000 Initial commit".to_string(),
            ToString::to_string,
        );
        self.stash_messages.borrow_mut().insert(0, message);
        *self.is_clean.borrow_mut() = true;
        Ok(())
    }

    fn stash_list(&self) -> GitResult<Vec<StashEntry>> {
        Ok(self
            .stash_messages
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, message)| StashEntry {
                id: format!("stash@{{{i}}}"),
                message: message.clone(),
            })
            .collect())
    }

    fn stash_apply(&self, id: &str) -> GitResult<()> {
        if !self.stash_list()?.iter().any(|s| s.id == id) {
            return Err(GitError::StashNotFound(id.to_string()));
        }
        self.applied.borrow_mut().push(id.to_string());
        Ok(())
    }
}
