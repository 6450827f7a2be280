//! Document implementations: an in-memory buffer and a file on disk.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::Document;

/// Byte range covering lines `start..=end`, excluding the final line break.
fn line_range(text: &str, start: usize, end: usize) -> Option<Range<usize>> {
    if start > end {
        return None;
    }

    let mut offset = 0;
    let mut from = None;
    for (i, line) in text.split('\n').enumerate() {
        if i == start {
            from = Some(offset);
        }
        if i == end {
            return from.map(|from| from..offset + line.len());
        }
        offset += line.len() + 1;
    }

    None
}

fn replace_in(text: &mut String, start: usize, end: usize, replacement: &str) -> Result<()> {
    let range = line_range(text, start, end).ok_or_else(|| {
        Error::EditorState(format!(
            "lines {start}..={end} are outside the document ({} lines)",
            text.split('\n').count()
        ))
    })?;
    text.replace_range(range, replacement);
    Ok(())
}

/// A document held entirely in memory.
///
/// Used for dry runs and tests; `persist` only counts how often it was
/// called.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    text: String,
    persist_count: usize,
}

impl MemoryDocument {
    /// Create a document with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            persist_count: 0,
        }
    }

    /// Number of times the document was persisted.
    #[must_use]
    pub const fn persist_count(&self) -> usize {
        self.persist_count
    }

    /// Consume the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Document for MemoryDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace_lines(&mut self, start: usize, end: usize, replacement: &str) -> Result<()> {
        replace_in(&mut self.text, start, end, replacement)
    }

    fn persist(&mut self) -> Result<()> {
        self.persist_count += 1;
        Ok(())
    }
}

/// A file on disk, read once on open and written back on persist.
#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    original: String,
    text: String,
    backup: bool,
}

impl FileDocument {
    /// Open a file as a document.
    ///
    /// # Errors
    /// Returns `NoActiveDocument` if the path is not a regular file, or an
    /// IO error if it can't be read as UTF-8 text.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NoActiveDocument(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            original: text.clone(),
            text,
            backup: false,
        })
    }

    /// Keep a copy of the original contents next to the file on persist.
    #[must_use]
    pub const fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the backup copy is written to.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".orig");
        PathBuf::from(name)
    }

    /// Whether the buffer differs from the file as it was opened.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }
}

impl Document for FileDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace_lines(&mut self, start: usize, end: usize, replacement: &str) -> Result<()> {
        replace_in(&mut self.text, start, end, replacement)
    }

    fn persist(&mut self) -> Result<()> {
        if self.backup && self.is_modified() {
            let backup = self.backup_path();
            fs::write(&backup, &self.original)?;
            debug!(path = %backup.display(), "wrote backup");
        }

        fs::write(&self.path, &self.text).map_err(|e| {
            Error::EditorState(format!("cannot write {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), bytes = self.text.len(), "persisted document");
        Ok(())
    }
}
