//! `mend track` command - Add untracked files to the index.

use anyhow::{Context, Result};
use inquire::MultiSelect;

use crate::commands::utils;
use crate::output;
use crate::services::MaintenanceService;

/// Run the track command.
pub fn run(all: bool) -> Result<()> {
    let repo = utils::open_repo()?;
    let service = MaintenanceService::new(&repo);

    let untracked = service.untracked_files()?;
    if untracked.is_empty() {
        output::info("No untracked files found.");
        return Ok(());
    }

    let selected = if all {
        untracked
    } else {
        MultiSelect::new("Select files to track:", untracked)
            .with_help_message("space to toggle, → to select all, enter to confirm")
            .prompt_skippable()
            .context("Failed to get file selection")?
            .unwrap_or_default()
    };

    let added = service.track(&selected)?;
    if added == 0 {
        output::info("No files selected");
    } else {
        output::success(&format!("Added {added} file(s) to git"));
        for path in &selected {
            output::detail(&format!("  {path}"));
        }
    }

    Ok(())
}
