//! Conflict marker scanning.
//!
//! Finds `<<<<<<<` / `=======` / `>>>>>>>` blocks left in a file by a
//! three-way merge. Markers are matched with a literal prefix check at the
//! start of a line. Nested conflicts are not recognized: a start marker
//! inside an open region is kept as ordinary content of that region.

use serde::Serialize;
use tracing::{debug, trace};

/// Marker opening a conflict region (current side follows).
pub const START_MARKER: &str = "<<<<<<<";

/// Marker separating the current side from the incoming side.
pub const MIDDLE_MARKER: &str = "=======";

/// Marker closing a conflict region.
pub const END_MARKER: &str = ">>>>>>>";

/// A single conflict block found in a document.
///
/// Line indices are 0-based and refer to the text the region was scanned
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictRegion {
    /// Line of the `<<<<<<<` marker.
    pub start_line: usize,
    /// Line of the `=======` marker.
    pub middle_line: usize,
    /// Line of the `>>>>>>>` marker.
    pub end_line: usize,
    /// Lines between the start and middle markers, joined with `\n`.
    pub current_text: String,
    /// Lines between the middle and end markers, joined with `\n`.
    pub incoming_text: String,
    /// Text after the start marker, e.g. `HEAD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_label: Option<String>,
    /// Text after the end marker, e.g. a branch name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_label: Option<String>,
}

impl ConflictRegion {
    /// Number of lines the block occupies, markers included.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Display name for the current side.
    #[must_use]
    pub fn current_name(&self) -> &str {
        self.current_label.as_deref().unwrap_or("current")
    }

    /// Display name for the incoming side.
    #[must_use]
    pub fn incoming_name(&self) -> &str {
        self.incoming_label.as_deref().unwrap_or("incoming")
    }
}

/// Scan text for conflict regions.
///
/// Regions are returned in the order they appear. A start marker without
/// a following separator and end marker is dropped silently, and scanning
/// resumes on the line after it. After a complete region, scanning resumes
/// after its end marker.
#[must_use]
pub fn scan(text: &str) -> Vec<ConflictRegion> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut regions = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].starts_with(START_MARKER) {
            i += 1;
            continue;
        }

        if let Some(region) = close_region(&lines, i) {
            i = region.end_line + 1;
            regions.push(region);
        } else {
            trace!(line = i, "dropping unterminated conflict marker");
            i += 1;
        }
    }

    debug!(count = regions.len(), "scanned for conflict regions");
    regions
}

/// Search forward from a start marker for its separator and end marker.
///
/// The first separator wins and the first end marker after it closes the
/// region.
fn close_region(lines: &[&str], start: usize) -> Option<ConflictRegion> {
    let mut middle = None;

    for (j, line) in lines.iter().enumerate().skip(start + 1) {
        if middle.is_none() && line.starts_with(MIDDLE_MARKER) {
            middle = Some(j);
        } else if line.starts_with(END_MARKER) {
            let middle = middle?;
            return Some(ConflictRegion {
                start_line: start,
                middle_line: middle,
                end_line: j,
                current_text: lines[start + 1..middle].join("\n"),
                incoming_text: lines[middle + 1..j].join("\n"),
                current_label: marker_label(lines[start], START_MARKER),
                incoming_label: marker_label(line, END_MARKER),
            });
        }
    }

    None
}

fn marker_label(line: &str, marker: &str) -> Option<String> {
    let label = line.strip_prefix(marker)?.trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
