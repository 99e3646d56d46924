use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skillpath")]
#[command(about = "Resolve skill directories for AI coding agents", long_about = None)]
#[command(version = env!("SKILLPATH_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Definition table to use instead of the built-in one
    #[arg(long, global = true, env = "SKILLPATH_DEFINITIONS")]
    pub definitions: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known agents and their skill directories
    List {
        /// Show only agents that look installed
        #[arg(long)]
        detected: bool,

        /// Emit JSON instead of columns
        #[arg(long)]
        json: bool,
    },

    /// Show resolved paths for a single agent
    Info {
        /// Agent name (e.g. "claude")
        agent: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
