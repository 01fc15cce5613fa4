use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{check_command, select_command};

#[derive(Parser, Debug)]
#[command(name = "instantiator")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a version map file and list its redirects
    #[command(visible_alias = "c")]
    Check {
        /// Path to the version map (defaults to the nearest .instantiator.json)
        path: Option<PathBuf>,

        /// Print the map as normalized JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show what an identifier is selected as under a version map
    #[command(visible_alias = "s")]
    Select {
        /// Class identifier to look up
        identifier: String,

        /// Version token passed to the selector
        #[arg(short, long)]
        version: Option<String>,

        /// Path to the version map (defaults to the nearest .instantiator.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Check { path, json } => check_command(path.as_deref(), json),
            Commands::Select {
                identifier,
                version,
                config,
            } => select_command(&identifier, version.as_deref(), config.as_deref()),
        }
    }
}
