// src/ports.rs
//! Boundaries to the rendering engine and the display surface.
//!
//! The analysis core never draws. It emits `CanvasCommand`s for whatever
//! renders the network and `View`s for whatever shows results.

use serde::Serialize;

use crate::graph::EdgeId;
use crate::present::View;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration_ms: u64,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusOptions {
    pub scale: f64,
    pub animation: Animation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitOptions {
    pub animation: Animation,
}

/// One instruction for the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CanvasCommand {
    RecolorNode { id: String, color: String },
    RecolorEdge { edge: EdgeId, color: String },
    Focus { id: String, options: FocusOptions },
    Fit { ids: Vec<String>, options: FitOptions },
}

/// The graph-rendering collaborator.
pub trait Canvas {
    fn recolor_node(&mut self, id: &str, color: &str);
    fn recolor_edge(&mut self, edge: EdgeId, color: &str);
    fn focus(&mut self, id: &str, options: &FocusOptions);
    fn fit(&mut self, ids: &[String], options: &FitOptions);

    fn apply(&mut self, command: &CanvasCommand) {
        match command {
            CanvasCommand::RecolorNode { id, color } => self.recolor_node(id, color),
            CanvasCommand::RecolorEdge { edge, color } => self.recolor_edge(*edge, color),
            CanvasCommand::Focus { id, options } => self.focus(id, options),
            CanvasCommand::Fit { ids, options } => self.fit(ids, options),
        }
    }
}

/// The surface results are shown on.
pub trait Panel {
    fn show(&mut self, view: &View);
    /// A user-facing message, e.g. why an operation was aborted.
    fn notify(&mut self, message: &str);
}

/// Canvas that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    pub commands: Vec<CanvasCommand>,
}

impl CommandLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drains recorded commands.
    pub fn take(&mut self) -> Vec<CanvasCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for CommandLog {
    fn recolor_node(&mut self, id: &str, color: &str) {
        self.commands.push(CanvasCommand::RecolorNode {
            id: id.to_string(),
            color: color.to_string(),
        });
    }

    fn recolor_edge(&mut self, edge: EdgeId, color: &str) {
        self.commands.push(CanvasCommand::RecolorEdge {
            edge,
            color: color.to_string(),
        });
    }

    fn focus(&mut self, id: &str, options: &FocusOptions) {
        self.commands.push(CanvasCommand::Focus {
            id: id.to_string(),
            options: options.clone(),
        });
    }

    fn fit(&mut self, ids: &[String], options: &FitOptions) {
        self.commands.push(CanvasCommand::Fit {
            ids: ids.to_vec(),
            options: options.clone(),
        });
    }
}

/// Panel that records views and messages.
#[derive(Debug, Clone, Default)]
pub struct ViewLog {
    pub views: Vec<View>,
    pub messages: Vec<String>,
}

impl ViewLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Panel for ViewLog {
    fn show(&mut self, view: &View) {
        self.views.push(view.clone());
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
