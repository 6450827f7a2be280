//! Configuration management for Mend.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolver::Resolution;

/// Mend configuration loaded from .git/mend.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Conflict resolution settings.
    #[serde(default)]
    pub conflicts: ConflictsConfig,

    /// Working directory cleaning settings.
    #[serde(default)]
    pub clean: CleanConfig,
}

impl Config {
    /// File name of the config within the git directory.
    pub const FILE_NAME: &'static str = "mend.toml";

    /// Load config from a TOML file.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from the `mend.toml` file inside a git directory.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load_from_git_dir(git_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(git_dir.as_ref().join(Self::FILE_NAME))
    }

    /// Save config to a TOML file.
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Conflict resolution settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictsConfig {
    /// Resolution applied to every region instead of prompting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_strategy: Option<Resolution>,

    /// Write `<file>.orig` with the original contents before saving.
    #[serde(default)]
    pub backup: bool,
}

/// Working directory cleaning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Also remove untracked directories.
    #[serde(default = "default_true")]
    pub directories: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self { directories: true }
    }
}

const fn default_true() -> bool {
    true
}
