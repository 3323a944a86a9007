// src/present/highlight.rs
//! Canvas commands for path and node highlights.

use crate::config::{CameraConfig, Palette};
use crate::graph::GraphStore;
use crate::ports::{Animation, CanvasCommand, FitOptions, FocusOptions};

/// Resets every edge, recolors the edges along `path`, then fits the camera
/// over the path's authors.
#[must_use]
pub fn path_commands(
    graph: &GraphStore,
    path: &[String],
    palette: &Palette,
    camera: &CameraConfig,
) -> Vec<CanvasCommand> {
    let mut commands: Vec<CanvasCommand> = graph
        .edges()
        .iter()
        .map(|e| CanvasCommand::RecolorEdge {
            edge: e.id,
            color: palette.default_edge.clone(),
        })
        .collect();

    for pair in path.windows(2) {
        let [a, b] = pair else { continue };
        if let Some(edge) = graph.edge_between(a, b) {
            commands.push(CanvasCommand::RecolorEdge {
                edge: edge.id,
                color: palette.path_edge.clone(),
            });
        }
    }

    commands.push(CanvasCommand::Fit {
        ids: path.to_vec(),
        options: FitOptions {
            animation: animation(camera.fit_duration_ms, camera),
        },
    });
    commands
}

/// Restores the previously highlighted author to its base color, highlights
/// `id` and focuses the camera on it. The caller records `id` as the new
/// last-highlighted author.
#[must_use]
pub fn node_commands(
    graph: &GraphStore,
    last_highlighted: Option<&str>,
    id: &str,
    palette: &Palette,
    camera: &CameraConfig,
) -> Vec<CanvasCommand> {
    let mut commands = Vec::with_capacity(3);
    if let Some(previous) = last_highlighted.and_then(|p| graph.find_node(p)) {
        commands.push(CanvasCommand::RecolorNode {
            id: previous.id.clone(),
            color: previous.color.clone(),
        });
    }
    commands.push(CanvasCommand::RecolorNode {
        id: id.to_string(),
        color: palette.highlight_node.clone(),
    });
    commands.push(CanvasCommand::Focus {
        id: id.to_string(),
        options: FocusOptions {
            scale: camera.focus_scale,
            animation: animation(camera.focus_duration_ms, camera),
        },
    });
    commands
}

fn animation(duration_ms: u64, camera: &CameraConfig) -> Animation {
    Animation {
        duration_ms,
        easing: camera.easing.clone(),
    }
}
