//! Conflict service for resolving merge-conflict markers in a file.
//!
//! This module decides where choices come from, opens the document with the
//! configured options and runs the resolution pass, separated from CLI
//! presentation concerns.

use std::path::Path;

use anyhow::{Context, Result};
use mend_core::resolver::{self, Resolution, ResolveSummary};
use mend_core::{ChoiceSource, Config, ConflictRegion, Document, FileDocument, MemoryDocument};
use serde::Serialize;

/// Conflict regions found in one file, for `--json` output.
#[derive(Debug, Serialize)]
pub struct FixReport {
    /// The file that was scanned.
    pub file: String,
    /// Regions in document order.
    pub regions: Vec<ConflictRegion>,
}

/// Service for conflict resolution.
pub struct ConflictService<'a> {
    config: &'a Config,
}

impl<'a> ConflictService<'a> {
    /// Create a new conflict service.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// The resolution to apply to every region, if prompting is skipped.
    ///
    /// An explicit request wins over the configured default.
    #[must_use]
    pub fn strategy(&self, requested: Option<Resolution>) -> Option<Resolution> {
        requested.or(self.config.conflicts.default_strategy)
    }

    /// Open a file as a document, with backups if configured.
    pub fn open(&self, path: &Path) -> Result<FileDocument> {
        let document = FileDocument::open(path)
            .with_context(|| format!("Cannot open {}", path.display()))?;
        Ok(document.with_backup(self.config.conflicts.backup))
    }

    /// List the conflict regions of a document without changing it.
    #[allow(clippy::unused_self)]
    pub fn report<D: Document + ?Sized>(&self, path: &Path, document: &D) -> FixReport {
        FixReport {
            file: path.display().to_string(),
            regions: mend_core::scan(document.text()),
        }
    }

    /// Resolve every conflict region of a document and persist it.
    #[allow(clippy::unused_self)]
    pub fn resolve<D, C>(&self, document: &mut D, source: &mut C) -> Result<ResolveSummary>
    where
        D: Document + ?Sized,
        C: ChoiceSource + ?Sized,
    {
        resolver::resolve_document(document, source).context("Failed to resolve conflicts")
    }

    /// Resolve conflicts in a copy of `text`, returning the would-be result.
    pub fn preview<C: ChoiceSource + ?Sized>(
        &self,
        text: &str,
        source: &mut C,
    ) -> Result<(String, ResolveSummary)> {
        let mut document = MemoryDocument::new(text);
        let summary = self.resolve(&mut document, source)?;
        Ok((document.into_text(), summary))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mend_core::config::ConflictsConfig;
    use mend_core::{FixedChoice, ScriptedChoices};
    use std::fs;
    use tempfile::TempDir;

    const CONFLICTED: &str = "\
fn main() {
<<<<<<< HEAD
    println!(\"ours\");
=======
    println!(\"theirs\");
>>>>>>> feature
}
";

    fn config_with(default_strategy: Option<Resolution>, backup: bool) -> Config {
        Config {
            conflicts: ConflictsConfig {
                default_strategy,
                backup,
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_strategy_prefers_request() {
        let config = config_with(Some(Resolution::KeepBoth), false);
        let service = ConflictService::new(&config);

        assert_eq!(
            service.strategy(Some(Resolution::KeepCurrent)),
            Some(Resolution::KeepCurrent)
        );
        assert_eq!(service.strategy(None), Some(Resolution::KeepBoth));
    }

    #[test]
    fn test_strategy_none_means_prompt() {
        let config = Config::default();
        let service = ConflictService::new(&config);
        assert_eq!(service.strategy(None), None);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();
        let service = ConflictService::new(&config);

        let err = service.open(&temp.path().join("gone.rs")).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.contains("no active document"), "{root}");
    }

    #[test]
    fn test_resolve_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.rs");
        fs::write(&path, CONFLICTED).unwrap();

        let config = Config::default();
        let service = ConflictService::new(&config);
        let mut document = service.open(&path).unwrap();
        let summary = service
            .resolve(&mut document, &mut FixedChoice(Resolution::KeepIncoming))
            .unwrap();

        assert_eq!(summary.resolved, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "fn main() {\n    println!(\"theirs\");\n}\n"
        );
    }

    #[test]
    fn test_resolve_file_with_backup() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.rs");
        fs::write(&path, CONFLICTED).unwrap();

        let config = config_with(None, true);
        let service = ConflictService::new(&config);
        let mut document = service.open(&path).unwrap();
        service
            .resolve(&mut document, &mut FixedChoice(Resolution::KeepCurrent))
            .unwrap();

        let backup = temp.path().join("main.rs.orig");
        assert_eq!(fs::read_to_string(backup).unwrap(), CONFLICTED);
    }

    #[test]
    fn test_preview_leaves_file_alone() {
        let config = Config::default();
        let service = ConflictService::new(&config);

        let (text, summary) = service
            .preview(CONFLICTED, &mut ScriptedChoices::new([Some(Resolution::KeepBoth)]))
            .unwrap();

        assert_eq!(summary.found, 1);
        assert_eq!(
            text,
            "fn main() {\n    println!(\"ours\");\n    println!(\"theirs\");\n}\n"
        );
    }

    #[test]
    fn test_report_lists_regions() {
        let config = Config::default();
        let service = ConflictService::new(&config);
        let document = MemoryDocument::new(CONFLICTED);

        let report = service.report(Path::new("src/main.rs"), &document);
        assert_eq!(report.file, "src/main.rs");
        assert_eq!(report.regions.len(), 1);
        assert_eq!(report.regions[0].incoming_label.as_deref(), Some("feature"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["regions"][0]["start_line"], 1);
        assert_eq!(json["regions"][0]["current_label"], "HEAD");
    }
}
