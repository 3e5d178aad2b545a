// cpr-core/src/classpath/mod.rs
use std::collections::HashSet;
use std::path::PathBuf;

use cpr_common::error::Result;

pub mod dependency;
pub mod tycho;

pub use dependency::{parse_snapshot_name, DependencyKind, TychoDependency};
pub use tycho::TychoClassPathResolver;

/// A strategy for computing the classpath of one build module.
pub trait ClassPathResolver {
    /// Short human readable name, used in logs.
    fn resolver_type(&self) -> &str;

    /// The files and directories to scan for this module.
    fn classpath(&self) -> Result<HashSet<PathBuf>>;
}
