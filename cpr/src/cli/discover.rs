// cpr/src/cli/discover.rs
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use cpr_common::config::Config;
use cpr_common::error::Result;
use cpr_core::discover_descriptors;

/// List every Maven module below a workspace root
#[derive(Args, Debug)]
pub struct Discover {
    /// Workspace root to search
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl Discover {
    pub fn run(&self, _config: &Config) -> Result<()> {
        let descriptors = discover_descriptors(&self.root)?;
        if descriptors.is_empty() {
            println!("{}", "No modules found".yellow());
            return Ok(());
        }
        for pom in &descriptors {
            println!("{}", pom.display());
        }
        Ok(())
    }
}
