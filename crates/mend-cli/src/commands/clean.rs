//! `mend clean` command - Remove untracked files from the working directory.

use anyhow::{Context, Result};
use inquire::Confirm;

use crate::commands::utils;
use crate::output;
use crate::services::MaintenanceService;

/// Run the clean command.
pub fn run(yes: bool) -> Result<()> {
    let repo = utils::open_repo()?;
    let config = utils::load_config(&repo)?;
    let service = MaintenanceService::new(&repo);

    let directories = config.clean.directories;
    let candidates = service.clean_candidates(directories)?;
    if candidates.is_empty() {
        output::info("No untracked files to clean.");
        return Ok(());
    }

    if !yes {
        output::warn(&format!(
            "This will remove {} untracked path(s):",
            candidates.len()
        ));
        for path in &candidates {
            output::detail(&format!("  {path}"));
        }
        let confirmed = Confirm::new("Are you sure?")
            .with_default(false)
            .prompt_skippable()
            .context("Failed to get confirmation")?
            .unwrap_or(false);

        if !confirmed {
            output::info("Aborted - nothing removed");
            return Ok(());
        }
    }

    let removed = service.clean(directories)?;
    output::success(&format!("Cleaned working directory ({removed} path(s) removed)"));

    Ok(())
}
