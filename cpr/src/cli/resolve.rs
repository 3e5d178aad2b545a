// cpr/src/cli/resolve.rs
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use cpr_common::config::Config;
use cpr_common::error::{CprError, Result};
use cpr_core::{find_descriptor, mvn_command_for, ClassPathResolver, TychoClassPathResolver};
use serde::Serialize;
use tracing::debug;

/// Run Maven for a module and print its classpath
#[derive(Args, Debug)]
pub struct Resolve {
    /// A pom.xml, or a directory containing one
    pub path: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    resolver: &'a str,
    descriptor: &'a PathBuf,
    classpath: &'a [PathBuf],
}

impl Resolve {
    pub fn run(&self, config: &Config) -> Result<()> {
        let pom = find_descriptor(&self.path)?;
        let resolver = TychoClassPathResolver::maybe_create(&pom)
            .ok_or_else(|| CprError::NotFound(format!("{} is not a pom.xml", pom.display())))?
            .with_command(mvn_command_for(config)?);
        debug!(
            "Resolving {} with the {} resolver",
            pom.display(),
            resolver.resolver_type()
        );

        let mut classpath: Vec<PathBuf> = resolver.classpath()?.into_iter().collect();
        classpath.sort();

        if self.json {
            let report = ResolveReport {
                resolver: resolver.resolver_type(),
                descriptor: &pom,
                classpath: &classpath,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        for path in &classpath {
            if path.exists() {
                println!("{}", path.display());
            } else {
                println!("{} {}", path.display(), "(missing)".dimmed());
            }
        }
        Ok(())
    }
}
