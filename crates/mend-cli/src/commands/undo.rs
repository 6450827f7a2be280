//! `mend undo` command - Undo the last commit.

use anyhow::Result;

use crate::commands::utils;
use crate::output;
use crate::services::MaintenanceService;

/// Run the undo command.
pub fn run() -> Result<()> {
    let repo = utils::open_repo()?;
    let service = MaintenanceService::new(&repo);

    let undone = service.undo_last_commit()?;

    output::success(&format!(
        "Undid commit {} {}",
        undone.short_id(),
        undone.summary
    ));
    output::info("Changes are now staged");

    Ok(())
}
