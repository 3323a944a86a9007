// src/bin/collabnet.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use collabnet_core::cli::handlers;
use collabnet_core::cli::{Cli, Commands};
use collabnet_core::config::Config;
use collabnet_core::exit::CollabExit;

fn main() -> CollabExit {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            CollabExit::Error
        }
    }
}

fn run(cli: &Cli) -> Result<CollabExit> {
    let config = handlers::load_config(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);
    dispatch(cli, config)
}

fn dispatch(cli: &Cli, config: Config) -> Result<CollabExit> {
    match &cli.command {
        Commands::Ops => Ok(handlers::handle_ops()),
        Commands::Config { init } => handlers::handle_config(&config, *init),
        Commands::Run {
            operation,
            ids,
            format,
            canvas,
        } => {
            let mut session = handlers::load_session(&cli.data, config)?;
            handlers::handle_run(&mut session, *operation, ids, *format, *canvas)
        }
        Commands::Shell { canvas } => {
            let mut session = handlers::load_session(&cli.data, config)?;
            handlers::handle_shell(&mut session, *canvas)
        }
        Commands::Info { id, format } => {
            let session = handlers::load_session(&cli.data, config)?;
            handlers::handle_info(&session, id, *format)
        }
    }
}

/// `RUST_LOG` wins over the config's `log_level`; `--verbose` wins over both.
fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
