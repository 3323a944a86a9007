// src/cli/handlers.rs
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::OutputFormat;
use super::shell;
use crate::config::{Config, CONFIG_FILE};
use crate::exit::CollabExit;
use crate::graph::dataset;
use crate::ports::{CommandLog, Panel};
use crate::reporting::{self, JsonPanel, TerminalPanel};
use crate::session::{Operation, Session};

/// Loads the config from `explicit`, else `./collabnet.toml`, else defaults.
///
/// # Errors
/// Returns error if a config file exists but is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// # Errors
/// Returns error if the dataset cannot be read or parsed.
pub fn load_session(data: &Path, config: Config) -> Result<Session> {
    let graph = dataset::load(data, &config)
        .with_context(|| format!("Failed to load dataset {}", data.display()))?;
    tracing::info!(authors = graph.len(), collaborations = graph.edges().len(), "graph ready");
    Ok(Session::new(graph, config))
}

fn panel_for(format: OutputFormat, config: &Config) -> Box<dyn Panel> {
    match format {
        OutputFormat::Text => Box::new(TerminalPanel::new(config.display.tree_width)),
        OutputFormat::Json => Box::new(JsonPanel {
            final_only: !config.display.live_table,
        }),
    }
}

/// Handles `collabnet run`.
///
/// # Errors
/// Never for analysis failures; those become exit codes.
pub fn handle_run(
    session: &mut Session,
    op: Operation,
    ids: &[String],
    format: OutputFormat,
    show_canvas: bool,
) -> Result<CollabExit> {
    let inputs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut canvas = CommandLog::new();
    let mut panel = panel_for(format, session.config());

    let exit = match session.run(op, &inputs, &mut canvas, panel.as_mut()) {
        Ok(view) => {
            if no_result(&view) {
                CollabExit::NoResult
            } else {
                CollabExit::Success
            }
        }
        Err(e) => CollabExit::from(&e),
    };

    if show_canvas {
        match format {
            OutputFormat::Text => reporting::print_commands(&canvas.commands),
            OutputFormat::Json => reporting::print_json(&canvas.commands),
        }
    }
    Ok(exit)
}

fn no_result(view: &crate::present::View) -> bool {
    matches!(view, crate::present::View::ShortestPath(s) if s.route.is_none())
}

/// Handles `collabnet info`.
///
/// # Errors
/// Never for unknown ids; those become exit codes.
pub fn handle_info(session: &Session, id: &str, format: OutputFormat) -> Result<CollabExit> {
    let mut panel = panel_for(format, session.config());
    match session.describe(id) {
        Ok(view) => {
            panel.show(&view);
            Ok(CollabExit::Success)
        }
        Err(e) => {
            panel.notify(&e.to_string());
            Ok(CollabExit::from(&e))
        }
    }
}

/// Handles `collabnet shell`.
///
/// # Errors
/// Returns error if reading stdin or writing prompts fails.
pub fn handle_shell(session: &mut Session, show_canvas: bool) -> Result<CollabExit> {
    let mut panel = TerminalPanel::new(session.config().display.tree_width);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(session, stdin.lock(), stdout.lock(), &mut panel, show_canvas)?;
    Ok(CollabExit::Success)
}

pub fn handle_ops() -> CollabExit {
    println!("{}", "Operations".cyan().bold());
    for op in Operation::ALL {
        let inputs = op.prompts().len();
        println!(
            "  {} {:<18} {} {}",
            format!("{}.", op.number()).bold(),
            op.name(),
            op.title(),
            format!("({inputs} id)").dimmed()
        );
    }
    CollabExit::Success
}

/// Handles `collabnet config`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn handle_config(config: &Config, init: bool) -> Result<CollabExit> {
    if init {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            println!("{} already exists", CONFIG_FILE);
            return Ok(CollabExit::Success);
        }
        Config::default().save(path)?;
        println!("{}", format!("Created {CONFIG_FILE}").green());
        return Ok(CollabExit::Success);
    }
    print!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
    Ok(CollabExit::Success)
}
