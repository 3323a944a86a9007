// src/graph/style.rs
//! Base color and size assignment by paper count.

use super::types::Node;
use crate::config::{Palette, StyleConfig};

/// Paper-count bounds derived from the dataset average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub average: f64,
    pub high: f64,
    pub low: f64,
}

/// Averages paper counts over real authors only; placeholder ids are skipped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn thresholds(nodes: &[Node], style: &StyleConfig) -> Thresholds {
    let counts: Vec<usize> = nodes
        .iter()
        .filter(|n| !is_generated(n, style))
        .map(Node::paper_count)
        .collect();

    if counts.is_empty() {
        return Thresholds { average: 0.0, high: 0.0, low: 0.0 };
    }

    let average = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
    Thresholds {
        average,
        high: average * style.high_factor,
        low: average * style.low_factor,
    }
}

/// Assigns every node its base color and size.
pub fn apply<'a, I>(nodes: I, bounds: Thresholds, style: &StyleConfig, palette: &Palette)
where
    I: IntoIterator<Item = &'a mut Node>,
{
    for node in nodes {
        let (color, size) = classify(node, bounds, style, palette);
        node.color = color;
        node.size = size;
    }
}

#[allow(clippy::cast_precision_loss)]
fn classify(node: &Node, bounds: Thresholds, style: &StyleConfig, palette: &Palette) -> (String, u32) {
    if is_generated(node, style) {
        return (palette.generated_node.clone(), style.small_size);
    }
    let count = node.paper_count() as f64;
    let size = if count > bounds.high {
        style.large_size
    } else if count < bounds.low {
        style.small_size
    } else {
        style.medium_size
    };
    (palette.node.clone(), size)
}

fn is_generated(node: &Node, style: &StyleConfig) -> bool {
    node.id.starts_with(&style.generated_prefix)
}
