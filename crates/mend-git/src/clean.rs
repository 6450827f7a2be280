//! Working-directory cleaning through `git clean`.
//!
//! libgit2 has no clean operation, so both the preview and the removal
//! shell out to git and read back the paths it reports.

use tracing::debug;

use crate::Repository;
use crate::error::Result;

impl Repository {
    /// Paths `git clean` would remove, relative to the repository root.
    ///
    /// With `directories`, a wholly untracked directory is reported once,
    /// with a trailing `/`. Without it, files inside untracked directories
    /// are left out, since git leaves them in place.
    ///
    /// # Errors
    /// Returns error if git clean fails.
    pub fn clean_candidates(&self, directories: bool) -> Result<Vec<String>> {
        let stdout = self.run_git(&clean_args("-n", directories))?;
        Ok(parse_clean_output(&stdout))
    }

    /// Remove untracked files, and untracked directories if asked.
    ///
    /// Returns the paths git reported as removed.
    ///
    /// # Errors
    /// Returns error if git clean fails.
    pub fn clean_untracked(&self, directories: bool) -> Result<Vec<String>> {
        let stdout = self.run_git(&clean_args("-f", directories))?;
        let removed = parse_clean_output(&stdout);
        debug!(count = removed.len(), directories, "cleaned working directory");
        Ok(removed)
    }
}

fn clean_args(mode: &'static str, directories: bool) -> Vec<&'static str> {
    let mut args = vec!["clean", mode];
    if directories {
        args.push("-d");
    }
    args
}

/// Parse the output of `git clean -n` or `git clean -f`.
///
/// Only `Would remove <path>` and `Removing <path>` lines count; anything
/// else git prints (such as `Would skip repository`) is ignored.
#[must_use]
pub fn parse_clean_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            line.strip_prefix("Would remove ")
                .or_else(|| line.strip_prefix("Removing "))
        })
        .filter(|path| !path.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::repository::tests::init_test_repo;
    use std::fs;

    #[test]
    fn test_parse_clean_output() {
        let output = "Would remove build/\nWould remove junk.txt\n";
        assert_eq!(parse_clean_output(output), vec!["build/", "junk.txt"]);

        let output = "Removing junk.txt\nWould skip repository vendor/lib\n";
        assert_eq!(parse_clean_output(output), vec!["junk.txt"]);

        assert!(parse_clean_output("").is_empty());
    }

    #[test]
    fn test_clean_candidates_respect_directories() {
        let (temp, repo) = init_test_repo();
        fs::write(temp.path().join("junk.txt"), "junk").unwrap();
        fs::create_dir(temp.path().join("build")).unwrap();
        fs::write(temp.path().join("build/a.o"), "a").unwrap();
        fs::write(temp.path().join("build/b.o"), "b").unwrap();

        assert_eq!(repo.clean_candidates(false).unwrap(), vec!["junk.txt"]);
        assert_eq!(
            repo.clean_candidates(true).unwrap(),
            vec!["build/", "junk.txt"]
        );

        // Preview only.
        assert!(temp.path().join("junk.txt").exists());
    }

    #[test]
    fn test_clean_untracked_reports_removed_paths() {
        let (temp, repo) = init_test_repo();
        fs::write(temp.path().join("junk.txt"), "junk").unwrap();
        fs::create_dir(temp.path().join("build")).unwrap();
        fs::write(temp.path().join("build/a.o"), "a").unwrap();
        fs::write(temp.path().join("build/b.o"), "b").unwrap();

        let removed = repo.clean_untracked(false).unwrap();
        assert_eq!(removed, vec!["junk.txt"]);
        assert!(!temp.path().join("junk.txt").exists());
        assert!(temp.path().join("build/a.o").exists());

        let removed = repo.clean_untracked(true).unwrap();
        assert_eq!(removed, vec!["build/"]);
        assert!(!temp.path().join("build").exists());
        assert!(temp.path().join("README.md").exists());
    }

    #[test]
    fn test_clean_nothing_untracked() {
        let (_temp, repo) = init_test_repo();
        assert!(repo.clean_candidates(true).unwrap().is_empty());
        assert!(repo.clean_untracked(true).unwrap().is_empty());
    }
}
