#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use skillpath::agents::AgentRegistry;
use skillpath::cli::{Cli, Commands};
use skillpath::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let registry = match &cli.definitions {
        Some(path) => AgentRegistry::load_from_path(path)?,
        None => AgentRegistry::load()?,
    };

    match &cli.command {
        Commands::List { detected, json } => {
            commands::list::execute(&registry, *detected, *json)?;
        }
        Commands::Info { agent, json } => {
            commands::info::execute(&registry, agent, *json)?;
        }
    }

    Ok(())
}
