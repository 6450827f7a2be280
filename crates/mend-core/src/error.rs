//! Error types for mend-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mend-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no document to operate on.
    #[error("no active document: {} is not a readable file", .0.display())]
    NoActiveDocument(PathBuf),

    /// An edit could not be applied to the document.
    #[error("cannot edit document: {0}")]
    EditorState(String),

    /// A choice source failed for a reason other than cancellation.
    #[error("failed to choose a resolution: {0}")]
    Prompt(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
