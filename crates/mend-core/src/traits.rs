//! Trait abstractions for the host side of conflict resolution.
//!
//! The resolver never owns the text it edits or decides which side to keep.
//! The host supplies a [`Document`] to edit and a [`ChoiceSource`] to ask,
//! allowing for:
//! - An editor buffer or a file on disk as the document
//! - Interactive prompts, a fixed strategy, or a scripted sequence of choices
//! - Headless testing with in-memory implementations

use crate::Result;
use crate::resolver::Resolution;
use crate::scanner::ConflictRegion;

/// A mutable text buffer that conflict resolution edits in place.
#[allow(clippy::missing_errors_doc)]
pub trait Document {
    /// Full current text of the document.
    fn text(&self) -> &str;

    /// Replace lines `start..=end` with `replacement`.
    ///
    /// The span runs from the beginning of line `start` to the end of line
    /// `end`, so the line break after `end` is kept. Fails with
    /// [`Error::EditorState`](crate::Error::EditorState) when the range does
    /// not exist in the current text.
    fn replace_lines(&mut self, start: usize, end: usize, replacement: &str) -> Result<()>;

    /// Durably save the document.
    fn persist(&mut self) -> Result<()>;
}

/// Source of a resolution for each conflict region.
#[allow(clippy::missing_errors_doc)]
pub trait ChoiceSource {
    /// Choose how to resolve `region`, the `index`-th of `total` regions.
    ///
    /// Returns `Ok(None)` when the user declined to choose; the region is
    /// then skipped and resolution continues with the next one.
    fn choose(
        &mut self,
        region: &ConflictRegion,
        index: usize,
        total: usize,
    ) -> Result<Option<Resolution>>;
}
