use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::session::Operation;

#[derive(Parser)]
#[command(name = "collabnet", version, about = "Co-authorship graph analysis")]
pub struct Cli {
    /// Dataset file (JSON nodes and edges)
    #[arg(long, short, global = true, value_name = "FILE", default_value = "graph.json")]
    pub data: PathBuf,
    /// Config file (defaults to ./collabnet.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one analysis by number (1-7) or name
    Run {
        operation: Operation,
        /// Author ids, one per prompt of the operation
        ids: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Also print the commands sent to the graph renderer
        #[arg(long)]
        canvas: bool,
    },
    /// Interactive menu; highlights carry over between operations
    Shell {
        #[arg(long)]
        canvas: bool,
    },
    /// Show an author's details
    Info {
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the available operations
    Ops,
    /// Print the effective config, or write a default one
    Config {
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
