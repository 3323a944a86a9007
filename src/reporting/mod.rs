// src/reporting/mod.rs
//! Display surfaces for the terminal.

pub mod console;
pub(crate) mod shared;

pub use console::TerminalPanel;

use colored::Colorize;
use serde::Serialize;

use crate::ports::{CanvasCommand, Panel};
use crate::present::View;

/// Writes every view as one JSON line on stdout. Messages go to stderr.
#[derive(Debug, Clone, Default)]
pub struct JsonPanel {
    /// Skip intermediate distance tables.
    pub final_only: bool,
}

impl Panel for JsonPanel {
    fn show(&mut self, view: &View) {
        if self.final_only && matches!(view, View::TableFrame(_)) {
            return;
        }
        print_json(view);
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Prints a value as compact JSON, logging instead of failing on error.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => tracing::error!("failed to serialize output: {e}"),
    }
}

/// Lists canvas commands in a dimmed, one-per-line form.
pub fn print_commands(commands: &[CanvasCommand]) {
    if commands.is_empty() {
        return;
    }
    println!("{}", "canvas:".dimmed());
    for command in commands {
        let line = match command {
            CanvasCommand::RecolorNode { id, color } => format!("recolor node {id} {color}"),
            CanvasCommand::RecolorEdge { edge, color } => format!("recolor edge #{edge} {color}"),
            CanvasCommand::Focus { id, options } => {
                format!("focus {id} x{} ({} ms)", options.scale, options.animation.duration_ms)
            }
            CanvasCommand::Fit { ids, options } => format!(
                "fit {} node(s) ({} ms)",
                ids.len(),
                options.animation.duration_ms
            ),
        };
        println!("  {}", line.dimmed());
    }
}
