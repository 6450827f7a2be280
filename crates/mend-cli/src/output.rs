//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use mend_core::ConflictRegion;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Lines of each side shown before a conflict prompt.
const PREVIEW_LINES: usize = 6;

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print a detail line without prefix (suppressed in quiet mode).
///
/// Use for indented detail lines that accompany info or warn messages.
pub fn detail(msg: &str) {
    if !is_quiet() {
        println!("{msg}");
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like a dry-run
/// document or JSON.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}

/// Heading shown above a conflict prompt, e.g. `Conflict 1/3 at line 12`.
///
/// Line numbers are shown 1-based.
#[must_use]
pub fn conflict_heading(region: &ConflictRegion, index: usize, total: usize) -> String {
    format!(
        "Conflict {}/{} at line {} ({} ↔ {})",
        index + 1,
        total,
        region.start_line + 1,
        region.current_name().green(),
        region.incoming_name().cyan()
    )
}

/// Indented, truncated preview of one side of a conflict.
#[must_use]
pub fn side_preview(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![format!("    {}", "(empty)".dimmed())];
    }

    let total = text.split('\n').count();
    let mut lines: Vec<String> = text
        .split('\n')
        .take(PREVIEW_LINES)
        .map(|line| format!("    {line}"))
        .collect();

    if total > PREVIEW_LINES {
        let more = format!("… {} more line(s)", total - PREVIEW_LINES);
        lines.push(format!("    {}", more.dimmed()));
    }

    lines
}

/// Print both sides of a conflict (suppressed in quiet mode).
pub fn conflict_preview(region: &ConflictRegion, index: usize, total: usize) {
    if is_quiet() {
        return;
    }

    hr();
    println!("{}", conflict_heading(region, index, total));
    println!("  {}", region.current_name().green().bold());
    for line in side_preview(&region.current_text) {
        println!("{line}");
    }
    println!("  {}", region.incoming_name().cyan().bold());
    for line in side_preview(&region.incoming_text) {
        println!("{line}");
    }
}
