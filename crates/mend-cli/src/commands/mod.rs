//! Command definitions and dispatch targets.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use mend_core::Resolution;

pub mod clean;
pub mod completions;
pub mod fix;
pub mod stash;
pub mod track;
pub mod undo;
pub mod utils;

/// Mend - resolve merge conflicts and tidy up a git working tree.
#[derive(Debug, Parser)]
#[command(name = "mend", version, about, propagate_version = true)]
pub struct Cli {
    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve merge conflict markers in a file.
    Fix {
        /// File containing conflict markers.
        file: PathBuf,

        /// Resolve every conflict the same way instead of prompting.
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        /// Print the resolved file instead of writing it.
        #[arg(long)]
        dry_run: bool,

        /// List conflict regions as JSON without changing the file.
        #[arg(long, conflicts_with_all = ["strategy", "dry_run"])]
        json: bool,
    },

    /// Undo the last commit, keeping its changes staged.
    Undo,

    /// Stash working tree changes.
    Stash {
        /// Stash message.
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Apply a stash, choosing from the stash list.
    #[command(name = "apply-stash")]
    ApplyStash {
        /// Stash to apply, e.g. `stash@{1}`.
        stash: Option<String>,
    },

    /// Add untracked files to the index.
    Track {
        /// Add every untracked file without prompting.
        #[arg(long)]
        all: bool,
    },

    /// Remove untracked files from the working directory.
    Clean {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Commands {
    /// Command name, as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fix { .. } => "fix",
            Self::Undo => "undo",
            Self::Stash { .. } => "stash",
            Self::ApplyStash { .. } => "apply-stash",
            Self::Track { .. } => "track",
            Self::Clean { .. } => "clean",
            Self::Completions { .. } => "completions",
        }
    }
}

/// Resolution strategy accepted by `mend fix --strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Keep the current (ours) side.
    Current,
    /// Keep the incoming (theirs) side.
    Incoming,
    /// Keep both sides, current first.
    Both,
}

impl From<Strategy> for Resolution {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Current => Self::KeepCurrent,
            Strategy::Incoming => Self::KeepIncoming,
            Strategy::Both => Self::KeepBoth,
        }
    }
}
