// cpr/src/cli/entries.rs
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use cpr_common::config::Config;
use cpr_common::error::{CprError, Result};
use cpr_core::classpath::tycho::{dependency_list_path, read_dependency_list};
use cpr_core::{find_descriptor, DependencyKind};
use prettytable::{format, Cell, Row, Table};

/// Classify the entries of an existing dependency list without running Maven
#[derive(Args, Debug)]
pub struct Entries {
    /// A pom.xml, or a directory containing one
    pub path: PathBuf,
}

impl Entries {
    pub fn run(&self, _config: &Config) -> Result<()> {
        let pom = std::path::absolute(find_descriptor(&self.path)?)?;
        let module_dir = pom.parent().ok_or_else(|| {
            CprError::NotFound(format!("No parent directory for {}", pom.display()))
        })?;
        let base_path_projects = module_dir.parent().unwrap_or(module_dir);

        let mut entries: Vec<_> =
            read_dependency_list(&dependency_list_path(module_dir), base_path_projects)?
                .into_iter()
                .collect();
        if entries.is_empty() {
            println!("{}", "0 dependency entries listed".yellow());
            return Ok(());
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.add_row(Row::new(vec![
            Cell::new("Entry").style_spec("b"),
            Cell::new("Kind").style_spec("b"),
            Cell::new("Classpath").style_spec("b"),
        ]));
        let mut source_count = 0;
        for entry in &entries {
            let kind = match entry.classify() {
                DependencyKind::Source {
                    project, version, ..
                } => {
                    source_count += 1;
                    Cell::new(&format!("source {project} {version}")).style_spec("Fg")
                }
                DependencyKind::Artifact => Cell::new("jar").style_spec("Fy"),
            };
            let resolved = entry
                .list_dependencies()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(Row::new(vec![
                Cell::new(&entry.path.display().to_string()),
                kind,
                Cell::new(&resolved),
            ]));
        }
        table.printstd();
        println!(
            "{} entries, {} from workspace sources",
            entries.len().to_string().bold(),
            source_count.to_string().bold()
        );
        Ok(())
    }
}
