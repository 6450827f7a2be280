//! Error types for mend-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository, or the repository has no working tree.
    #[error("not a git repository")]
    NotARepository,

    /// HEAD has no parent commit to reset to.
    #[error("no commit to undo - HEAD has no parent")]
    NoCommitToUndo,

    /// There were no local changes to stash.
    #[error("no local changes to stash")]
    NothingToStash,

    /// Stash not found in the stash list.
    #[error("stash not found: {0}")]
    StashNotFound(String),

    /// A git command exited unsuccessfully.
    #[error("`git {command}` failed: {stderr}")]
    CommandFailed {
        /// The arguments passed to git.
        command: String,
        /// What git printed on stderr.
        stderr: String,
    },

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
