//! Repository wrapper providing high-level git operations.

use std::path::Path;
use std::process::Command;

use git2::{Oid, ResetType, Status, StatusOptions};
use tracing::debug;

use crate::error::{Error, Result};

/// A commit's id and the first line of its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Commit id.
    pub oid: Oid,
    /// First line of the commit message.
    pub summary: String,
}

impl CommitInfo {
    /// The first eight characters of the commit id.
    #[must_use]
    pub fn short_id(&self) -> String {
        let id = self.oid.to_string();
        id[..8.min(id.len())].to_string()
    }
}

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open a repository at the given path.
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path)?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    // === Commit operations ===

    /// Move HEAD back one commit, keeping its changes staged.
    ///
    /// Equivalent to `git reset --soft HEAD~1`. Returns the commit that was
    /// undone.
    ///
    /// # Errors
    /// Returns `NoCommitToUndo` if HEAD is unborn or is a root commit.
    pub fn undo_last_commit(&self) -> Result<CommitInfo> {
        let head = self
            .inner
            .head()
            .and_then(|h| h.peel_to_commit())
            .map_err(|_| Error::NoCommitToUndo)?;
        let parent = head.parent(0).map_err(|_| Error::NoCommitToUndo)?;

        self.inner.reset(parent.as_object(), ResetType::Soft, None)?;
        debug!(undone = %head.id(), head = %parent.id(), "soft reset to parent");

        Ok(CommitInfo {
            oid: head.id(),
            summary: head.summary().unwrap_or_default().to_string(),
        })
    }

    // === Working directory state ===

    /// List untracked files, relative to the repository root.
    ///
    /// Ignored files are not included.
    ///
    /// # Errors
    /// Returns error if status check fails.
    pub fn untracked_files(&self) -> Result<Vec<String>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.inner.statuses(Some(&mut opts))?;
        let mut files: Vec<String> = statuses
            .iter()
            .filter(|entry| entry.status().contains(Status::WT_NEW))
            .filter_map(|entry| entry.path().map(String::from))
            .collect();
        files.sort();

        Ok(files)
    }

    /// Add paths (relative to the repository root) to the index.
    ///
    /// # Errors
    /// Returns error if a path can't be added or the index can't be written.
    pub fn add_paths(&self, paths: &[String]) -> Result<()> {
        let mut index = self.inner.index()?;
        for path in paths {
            index.add_path(Path::new(path))?;
        }
        index.write()?;
        debug!(count = paths.len(), "added paths to index");
        Ok(())
    }

    // === Command execution ===

    /// Run git with the given arguments in the working directory.
    ///
    /// Returns stdout on success.
    pub(crate) fn run_git(&self, args: &[&str]) -> Result<String> {
        let workdir = self.workdir().ok_or(Error::NotARepository)?;
        let command = args.join(" ");
        debug!(%command, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| Error::CommandFailed {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::CommandFailed { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    pub fn init_test_repo() -> (TempDir, Repository) {
        let temp = TempDir::new().unwrap();
        let repo = git2::Repository::init(temp.path()).unwrap();

        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }

        let wrapped = Repository { inner: repo };
        commit_file(&wrapped, "README.md", "# Test\n", "Initial commit");
        (temp, wrapped)
    }

    pub fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) -> Oid {
        let workdir = repo.workdir().unwrap();
        fs::write(workdir.join(name), content).unwrap();

        let inner = &repo.inner;
        let mut index = inner.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = inner.find_tree(tree_id).unwrap();
        let sig = inner.signature().unwrap();
        let parents: Vec<git2::Commit<'_>> = inner
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    fn head_oid(repo: &Repository) -> Oid {
        repo.inner.head().unwrap().peel_to_commit().unwrap().id()
    }

    #[test]
    fn test_undo_last_commit_keeps_changes_staged() {
        let (_temp, repo) = init_test_repo();
        let first = head_oid(&repo);
        let second = commit_file(&repo, "feature.txt", "feature\n", "Add feature");

        let undone = repo.undo_last_commit().unwrap();
        assert_eq!(undone.oid, second);
        assert_eq!(undone.summary, "Add feature");
        assert_eq!(undone.short_id(), second.to_string()[..8]);
        assert_eq!(head_oid(&repo), first);

        let status = repo.inner.status_file(Path::new("feature.txt")).unwrap();
        assert!(status.contains(Status::INDEX_NEW));
    }

    #[test]
    fn test_undo_root_commit_fails() {
        let (_temp, repo) = init_test_repo();
        let err = repo.undo_last_commit().unwrap_err();
        assert!(matches!(err, Error::NoCommitToUndo));
    }

    #[test]
    fn test_untracked_files() {
        let (temp, repo) = init_test_repo();
        assert!(repo.untracked_files().unwrap().is_empty());

        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();
        fs::write(temp.path().join("dir/a.txt"), "a").unwrap();

        let files = repo.untracked_files().unwrap();
        assert_eq!(files, vec!["b.txt".to_string(), "dir/a.txt".to_string()]);
    }

    #[test]
    fn test_untracked_files_skips_modified_tracked() {
        let (temp, repo) = init_test_repo();
        fs::write(temp.path().join("README.md"), "changed\n").unwrap();
        assert!(repo.untracked_files().unwrap().is_empty());
    }

    #[test]
    fn test_add_paths() {
        let (temp, repo) = init_test_repo();
        fs::write(temp.path().join("one.txt"), "1").unwrap();
        fs::write(temp.path().join("two.txt"), "2").unwrap();

        repo.add_paths(&["one.txt".to_string()]).unwrap();

        assert_eq!(repo.untracked_files().unwrap(), vec!["two.txt".to_string()]);
        let status = repo.inner.status_file(Path::new("one.txt")).unwrap();
        assert!(status.contains(Status::INDEX_NEW));
    }

    #[test]
    fn test_add_missing_path_fails() {
        let (_temp, repo) = init_test_repo();
        assert!(repo.add_paths(&["missing.txt".to_string()]).is_err());
    }
}
