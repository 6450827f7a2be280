//! # mend-git
//!
//! Git operations for Mend, built on git2-rs. Covers the routine
//! maintenance chores around conflict resolution: undoing the last commit,
//! stashing, tracking untracked files and cleaning the working directory.

mod clean;
mod error;
mod repository;
mod stash;
mod traits;

pub use clean::parse_clean_output;
pub use error::{Error, Result};
pub use git2::Oid;
pub use repository::{CommitInfo, Repository};
pub use stash::{StashEntry, parse_stash_list};
pub use traits::GitOps;
