// cpr-core/src/command.rs
use std::path::PathBuf;

use cpr_common::config::Config;
use cpr_common::error::{CprError, Result};
use lazy_static::lazy_static;
use tracing::debug;

const MVN: &str = "mvn";

lazy_static! {
    // Located once per process and never re-validated.
    static ref MVN_COMMAND: Result<PathBuf> = locate_command(MVN);
}

/// Searches `PATH` for an executable called `name`.
pub fn find_command_on_path(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            debug!("Found '{}' on PATH: {}", name, path.display());
            Some(path)
        }
        Err(e) => {
            debug!("'{}' not found on PATH: {}", name, e);
            None
        }
    }
}

/// Like [`find_command_on_path`], but a missing command is an error.
pub fn locate_command(name: &str) -> Result<PathBuf> {
    find_command_on_path(name).ok_or_else(|| CprError::CommandNotFound(name.to_string()))
}

/// The process-wide `mvn` executable.
pub fn mvn_command() -> Result<PathBuf> {
    MVN_COMMAND.clone()
}

/// The `mvn` executable to use under `config`, preferring an explicit override.
pub fn mvn_command_for(config: &Config) -> Result<PathBuf> {
    if let Some(path) = config.mvn_override() {
        debug!("Using mvn from configuration: {}", path.display());
        return Ok(path.to_path_buf());
    }
    mvn_command()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_command_is_reported_by_name() {
        let err = locate_command("cpr-no-such-command-on-any-path").unwrap_err();
        match err {
            CprError::CommandNotFound(name) => assert_eq!(name, "cpr-no-such-command-on-any-path"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn finds_shell_on_path() {
        let sh = find_command_on_path("sh").expect("sh should be on PATH");
        assert!(sh.is_absolute());
    }

    #[test]
    fn existing_override_wins_over_path_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let fake_mvn = dir.path().join("mvn");
        fs::write(&fake_mvn, "").unwrap();
        let config = Config {
            cpr_home: dir.path().to_path_buf(),
            mvn_command: Some(fake_mvn.clone()),
        };

        assert_eq!(mvn_command_for(&config).unwrap(), fake_mvn);
    }

    #[test]
    fn cached_lookup_is_stable() {
        let first = mvn_command().map_err(|e| e.to_string());
        let second = mvn_command().map_err(|e| e.to_string());
        assert_eq!(first, second);
    }
}
