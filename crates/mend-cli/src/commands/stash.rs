//! `mend stash` and `mend apply-stash` commands.

use anyhow::{Context, Result};
use inquire::{Select, Text};

use crate::commands::utils;
use crate::output;
use crate::services::MaintenanceService;

/// Run the stash command.
pub fn run(message: Option<&str>) -> Result<()> {
    let repo = utils::open_repo()?;
    let service = MaintenanceService::new(&repo);

    let prompted;
    let message = match message {
        Some(m) => Some(m),
        None if utils::is_interactive() => {
            prompted = Text::new("Stash message (optional):")
                .with_help_message("enter to stash without a message")
                .prompt_skippable()
                .context("Failed to read stash message")?;
            prompted.as_deref()
        }
        None => None,
    };

    service.stash(message)?;
    output::success("Stashed changes");

    Ok(())
}

/// Run the apply-stash command.
pub fn run_apply(stash: Option<&str>) -> Result<()> {
    let repo = utils::open_repo()?;
    let service = MaintenanceService::new(&repo);

    let id = if let Some(id) = stash {
        id.to_string()
    } else {
        let stashes = service.stashes()?;
        if stashes.is_empty() {
            output::info("No stashes found.");
            return Ok(());
        }

        let Some(selected) = Select::new("Select stash to apply:", stashes)
            .prompt_skippable()
            .context("Failed to get stash selection")?
        else {
            return Ok(());
        };
        selected.id
    };

    service.apply_stash(&id)?;
    output::success(&format!("Applied {id}"));

    Ok(())
}
