use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use mend_core::Config;
use mend_git::Repository;

/// Helper to open the repository containing the current directory.
pub fn open_repo() -> Result<Repository> {
    let repo = Repository::open_current().context("Not inside a git repository")?;
    repo.workdir().context("Cannot run in bare repository")?;
    Ok(repo)
}

/// Load the config of the repository containing `path`.
///
/// Files outside any repository get the default config.
pub fn load_config_for(path: &Path) -> Result<Config> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match Repository::open(dir) {
        Ok(repo) => Config::load_from_git_dir(repo.git_dir()).context("Failed to load mend.toml"),
        Err(_) => Ok(Config::default()),
    }
}

/// Load the config of an open repository.
pub fn load_config(repo: &Repository) -> Result<Config> {
    Config::load_from_git_dir(repo.git_dir()).context("Failed to load mend.toml")
}

/// Whether prompts can be shown.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
