// cpr-aio/src/fs.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cpr_common::error::{CprError, Result};
use tracing::{debug, error};

/// Checks if a path points to a directory (resolving symlinks).
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Checks if a path points to a regular file (resolving symlinks).
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Reads a text file into its lines, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    debug!("Reading lines from: {}", path.display());
    let file = File::open(path).map_err(|e| {
        error!("Failed to open {}: {}", path.display(), e);
        CprError::from(e)
    })?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| {
            error!("Failed to read {}: {}", path.display(), e);
            CprError::from(e)
        })
}
