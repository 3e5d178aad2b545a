// cpr-core/src/classpath/dependency.rs
//! Classification of the entries of a Tycho dependency list.
//!
//! An entry whose file name carries a `-X.Y.Z-SNAPSHOT` suffix may refer to a
//! sibling project checked out next to the module being resolved. When that
//! project's directory exists, its compiled output folders are used instead of
//! the packaged artifact.

use std::fmt;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

/// Compiled output of a source project.
pub const OUTPUT_DIR: &str = "bin";
/// Output folder written by the Kotlin Eclipse builder.
pub const KOTLIN_ECLIPSE_DIR: &str = ".kotlin-eclipse";
pub const CLASSES_DIR: &str = "classes";

lazy_static! {
    static ref SNAPSHOT_SUFFIX_RE: Regex = Regex::new(r"-(\d+\.\d+\.\d+)-SNAPSHOT").unwrap();
}

/// Splits a SNAPSHOT-versioned file stem into `(project, version)`.
///
/// `"mod-b-1.0.0-SNAPSHOT"` yields `("mod-b", "1.0.0")`. Every occurrence of
/// the suffix is stripped from the project name; the version is taken from
/// the first one. A name made only of the suffix yields an empty project.
pub fn parse_snapshot_name(name: &str) -> Option<(String, String)> {
    let caps = SNAPSHOT_SUFFIX_RE.captures(name)?;
    let version = caps[1].to_string();
    let project = SNAPSHOT_SUFFIX_RE.replace_all(name, "").into_owned();
    Some((project, version))
}

/// How a dependency entry ends up on the classpath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyKind {
    /// A sibling project found on disk.
    Source {
        project: String,
        version: String,
        source_path: PathBuf,
    },
    /// An opaque packaged artifact, used as listed.
    Artifact,
}

/// One line of the generated dependency list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TychoDependency {
    pub path: PathBuf,
    pub base_path_projects: PathBuf,
}

impl TychoDependency {
    pub fn new(path: impl Into<PathBuf>, base_path_projects: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_path_projects: base_path_projects.into(),
        }
    }

    fn name_without_extension(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn classify(&self) -> DependencyKind {
        let name = self.name_without_extension();
        if let Some((project, version)) = parse_snapshot_name(&name) {
            let source_path = self.base_path_projects.join(&project);
            if cpr_aio::is_directory(&source_path) {
                return DependencyKind::Source {
                    project,
                    version,
                    source_path,
                };
            }
        }
        DependencyKind::Artifact
    }

    /// The classpath entries contributed by this dependency.
    pub fn list_dependencies(&self) -> Vec<PathBuf> {
        match self.classify() {
            DependencyKind::Source { source_path, .. } => {
                info!("found source entry {}", source_path.display());
                source_output_dirs(&source_path)
            }
            DependencyKind::Artifact => {
                info!("found jar entry {}", self.path.display());
                vec![self.path.clone()]
            }
        }
    }
}

fn source_output_dirs(source_path: &Path) -> Vec<PathBuf> {
    vec![
        source_path.join(OUTPUT_DIR),
        source_path.join(KOTLIN_ECLIPSE_DIR).join(CLASSES_DIR),
    ]
}

impl fmt::Display for TychoDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            DependencyKind::Source {
                project,
                source_path,
                ..
            } => write!(f, "{} (source: {})", project, source_path.display()),
            DependencyKind::Artifact => write!(f, "{}", self.path.display()),
        }
    }
}
