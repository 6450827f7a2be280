//! `mend fix` command - Resolve merge conflict markers in a file.

use std::path::Path;

use anyhow::{Context, Result, bail};
use inquire::{InquireError, Select};
use mend_core::resolver::FixedChoice;
use mend_core::{ChoiceSource, ConflictRegion, Document, Resolution, ResolveSummary};
use tracing::debug;

use crate::commands::utils;
use crate::output;
use crate::services::ConflictService;

/// Asks the user to pick a side for each conflict.
struct PromptChoices;

impl ChoiceSource for PromptChoices {
    fn choose(
        &mut self,
        region: &ConflictRegion,
        index: usize,
        total: usize,
    ) -> mend_core::Result<Option<Resolution>> {
        output::conflict_preview(region, index, total);

        match Select::new("Choose which changes to keep:", Resolution::CHOICES.to_vec())
            .with_help_message("↑↓ to move, enter to select, esc to skip this conflict")
            .prompt()
        {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled) => {
                debug!(line = region.start_line, "conflict skipped");
                Ok(None)
            }
            Err(e) => Err(mend_core::Error::Prompt(e.to_string())),
        }
    }
}

/// Run the fix command.
pub fn run(file: &Path, strategy: Option<Resolution>, dry_run: bool, json: bool) -> Result<()> {
    let config = utils::load_config_for(file)?;
    let service = ConflictService::new(&config);
    let mut document = service.open(file)?;

    if json {
        let report = service.report(file, &document);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize regions")?;
        output::essential(&json);
        return Ok(());
    }

    if mend_core::scan(document.text()).is_empty() {
        output::info("No merge conflicts found in this file.");
        return Ok(());
    }

    let strategy = service.strategy(strategy);
    if strategy.is_none() && !utils::is_interactive() {
        bail!("No terminal to prompt on - pass --strategy current|incoming|both");
    }

    let mut source: Box<dyn ChoiceSource> = match strategy {
        Some(resolution) => {
            output::info(&format!("Resolving every conflict with: {resolution}"));
            Box::new(FixedChoice(resolution))
        }
        None => Box::new(PromptChoices),
    };

    if dry_run {
        let (text, summary) = service.preview(document.text(), source.as_mut())?;
        output::hr();
        output::essential(text.strip_suffix('\n').unwrap_or(&text));
        output::hr();
        report(&summary, file);
        output::info("Dry run - no changes made");
        return Ok(());
    }

    let summary = service.resolve(&mut document, source.as_mut())?;
    report(&summary, file);

    if config.conflicts.backup && document.is_modified() {
        output::detail(&format!(
            "  Original saved to {}",
            document.backup_path().display()
        ));
    }

    Ok(())
}

fn report(summary: &ResolveSummary, file: &Path) {
    if summary.resolved > 0 {
        output::success(&format!(
            "Resolved {} of {} conflict(s) in {}",
            summary.resolved,
            summary.found,
            file.display()
        ));
    }

    if summary.skipped > 0 {
        output::warn(&format!(
            "{} conflict(s) left unresolved in {}",
            summary.skipped,
            file.display()
        ));
    }
}
