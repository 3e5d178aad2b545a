// cpr/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser, Subcommand};
use cpr_common::error::Result;
use cpr_common::Config;

pub mod discover;
pub mod entries;
pub mod resolve;

use crate::cli::discover::Discover;
use crate::cli::entries::Entries;
use crate::cli::resolve::Resolve;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "cpr", bin_name = "cpr")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Resolve(Resolve),
    Entries(Entries),
    Discover(Discover),
}

impl Command {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Resolve(command) => command.run(config),
            Self::Entries(command) => command.run(config),
            Self::Discover(command) => command.run(config),
        }
    }
}
