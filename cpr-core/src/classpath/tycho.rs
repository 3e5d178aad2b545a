// cpr-core/src/classpath/tycho.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cpr_common::error::{CprError, Result};
use tracing::{debug, info, warn};

use super::dependency::{TychoDependency, OUTPUT_DIR};
use super::ClassPathResolver;
use crate::command::mvn_command;

pub const POM_FILE_NAME: &str = "pom.xml";
pub const BUILD_DIR: &str = "target";
pub const DEPENDENCY_LIST_FILE: &str = "dependencies-list.txt";
pub const LIST_DEPENDENCIES_GOAL: &str =
    "org.eclipse.tycho.extras:tycho-dependency-tools-plugin:list-dependencies";
pub const BUILD_FAILURE_MARKER: &str = "BUILD FAILURE";

/// Whether `file` is a build descriptor this resolver applies to.
pub fn matches(file: &Path) -> bool {
    file.file_name().is_some_and(|name| name == POM_FILE_NAME)
}

/// Whether the captured output of a Maven run reports a failed build.
pub fn is_build_failure(stdout: &str, stderr: &str) -> bool {
    stderr.contains(BUILD_FAILURE_MARKER) || stdout.contains(BUILD_FAILURE_MARKER)
}

/// The first line of whichever stream (stderr first) carries the failure marker.
fn failure_line<'a>(stdout: &'a str, stderr: &'a str) -> Option<&'a str> {
    [stderr, stdout]
        .into_iter()
        .find(|output| output.contains(BUILD_FAILURE_MARKER))
        .map(|output| output.lines().next().unwrap_or_default())
}

/// Where the list-dependencies goal writes its output for `pom`.
pub fn dependency_list_path(module_dir: &Path) -> PathBuf {
    module_dir.join(BUILD_DIR).join(DEPENDENCY_LIST_FILE)
}

fn module_dir(pom: &Path) -> Result<&Path> {
    pom.parent().ok_or_else(|| {
        CprError::NotFound(format!("No parent directory for {}", pom.display()))
    })
}

/// Runs the list-dependencies goal next to `pom` and returns where its output
/// is expected.
///
/// A failing Maven run is only logged. The returned path may point at a stale
/// or missing file.
pub fn generate_dependency_list(pom: &Path, mvn: &Path) -> Result<PathBuf> {
    let pom = std::path::absolute(pom)?;
    let working_directory = module_dir(&pom)?;
    let tycho_output = dependency_list_path(working_directory);

    info!(
        "Run {} {} in {}",
        mvn.display(),
        LIST_DEPENDENCIES_GOAL,
        working_directory.display()
    );
    let (result, errors) = cpr_aio::exec_and_read_stdout_and_stderr(
        mvn,
        &[LIST_DEPENDENCIES_GOAL],
        working_directory,
    )?;
    debug!("{}", result);
    if is_build_failure(&result, &errors) {
        warn!(
            "Maven task failed: {}",
            failure_line(&result, &errors).unwrap_or_default()
        );
    }

    Ok(tycho_output)
}

/// Reads the generated list; every non-empty line is one dependency.
pub fn read_dependency_list(
    tycho_output: &Path,
    base_path_projects: &Path,
) -> Result<HashSet<TychoDependency>> {
    let lines = cpr_aio::read_lines(tycho_output)?;
    Ok(lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| TychoDependency::new(line, base_path_projects))
        .collect())
}

/// Classpath resolver for Eclipse Tycho builds.
#[derive(Debug, Clone)]
pub struct TychoClassPathResolver {
    pom: PathBuf,
    mvn: Option<PathBuf>,
}

impl TychoClassPathResolver {
    /// Creates a resolver if `file` is a `pom.xml`.
    pub fn maybe_create(file: &Path) -> Option<Self> {
        matches(file).then(|| Self {
            pom: file.to_path_buf(),
            mvn: None,
        })
    }

    /// Uses `mvn` instead of the executable found on `PATH`.
    pub fn with_command(mut self, mvn: impl Into<PathBuf>) -> Self {
        self.mvn = Some(mvn.into());
        self
    }

    pub fn pom(&self) -> &Path {
        &self.pom
    }

    fn command(&self) -> Result<PathBuf> {
        match &self.mvn {
            Some(mvn) => Ok(mvn.clone()),
            None => mvn_command(),
        }
    }

    /// Generates and reads the dependency list of this module.
    pub fn dependencies(&self) -> Result<HashSet<TychoDependency>> {
        let pom = std::path::absolute(&self.pom)?;
        let module_dir = module_dir(&pom)?;
        let base_path_projects = module_dir.parent().unwrap_or(module_dir);

        let tycho_output = generate_dependency_list(&pom, &self.command()?)?;
        read_dependency_list(&tycho_output, base_path_projects)
    }
}

impl ClassPathResolver for TychoClassPathResolver {
    fn resolver_type(&self) -> &str {
        "Tycho"
    }

    fn classpath(&self) -> Result<HashSet<PathBuf>> {
        let artifacts = self.dependencies()?;

        match artifacts.len() {
            0 => warn!("No artifacts found in {}", self.pom.display()),
            n if n < 5 => info!(
                "Found [{}] in {}",
                artifacts
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                self.pom.display()
            ),
            n => info!("Found {} artifacts in {}", n, self.pom.display()),
        }

        let pom = std::path::absolute(&self.pom)?;
        let mut classpath: HashSet<PathBuf> = artifacts
            .iter()
            .flat_map(TychoDependency::list_dependencies)
            .collect();
        classpath.insert(module_dir(&pom)?.join(OUTPUT_DIR));
        Ok(classpath)
    }
}
