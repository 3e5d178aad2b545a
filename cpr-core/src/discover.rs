// cpr-core/src/discover.rs
use std::path::{Path, PathBuf};

use cpr_common::error::{CprError, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::classpath::tycho::{matches, BUILD_DIR, POM_FILE_NAME};

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == BUILD_DIR
}

/// Every build descriptor below `root`, sorted.
///
/// Hidden directories and build output folders are not descended into.
pub fn discover_descriptors(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Discovering build descriptors under {}", root.display());
    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && matches(entry.path()) {
            debug!("Found descriptor: {}", entry.path().display());
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

/// Accepts either a descriptor or a module directory containing one.
pub fn find_descriptor(path: &Path) -> Result<PathBuf> {
    if cpr_aio::is_file(path) && matches(path) {
        return Ok(path.to_path_buf());
    }
    if cpr_aio::is_directory(path) {
        let candidate = path.join(POM_FILE_NAME);
        if cpr_aio::is_file(&candidate) {
            return Ok(candidate);
        }
    }
    Err(CprError::NotFound(format!(
        "No {} at {}",
        POM_FILE_NAME,
        path.display()
    )))
}
