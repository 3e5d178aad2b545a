// cpr-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use tracing::debug;

use super::error::Result;

const CPR_HOME_ENV: &str = "CPR_HOME";
const CPR_MVN_ENV: &str = "CPR_MVN";
const FALLBACK_HOME_DIRNAME: &str = ".cpr";

#[derive(Debug, Clone)]
pub struct Config {
    pub cpr_home: PathBuf,
    /// Explicit `mvn` executable; `None` means search `PATH`.
    pub mvn_command: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading cpr configuration");

        let cpr_home = env::var(CPR_HOME_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let default_home = default_cpr_home();
                debug!(
                    "{} not set or empty, falling back to default: {}",
                    CPR_HOME_ENV,
                    default_home.display()
                );
                default_home
            });
        debug!("Effective CPR_HOME set to: {}", cpr_home.display());

        let mvn_command = env::var(CPR_MVN_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| PathBuf::from(s.trim()));
        if let Some(mvn) = &mvn_command {
            debug!("mvn command overridden via {}: {}", CPR_MVN_ENV, mvn.display());
        }

        debug!("Configuration loaded successfully.");
        Ok(Self {
            cpr_home,
            mvn_command,
        })
    }

    pub fn cpr_home(&self) -> &Path {
        &self.cpr_home
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.cpr_home.join("logs")
    }

    /// The overriding `mvn` executable, if it points at an existing file.
    pub fn mvn_override(&self) -> Option<&Path> {
        match self.mvn_command.as_deref() {
            Some(path) if path.is_file() => Some(path),
            Some(path) => {
                debug!(
                    "{} points to non-existent file: {}, ignoring",
                    CPR_MVN_ENV,
                    path.display()
                );
                None
            }
            None => None,
        }
    }
}

fn default_cpr_home() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", "cpr") {
        return dirs.data_local_dir().to_path_buf();
    }
    UserDirs::new().map_or_else(
        || env::temp_dir().join("cpr"),
        |ud| ud.home_dir().join(FALLBACK_HOME_DIRNAME),
    )
}
