// src/present/mod.rs
//! Turns analysis results into views and canvas commands. No decisions about
//! the graph are made here.

pub mod highlight;
pub mod tree;
pub mod views;

pub use views::{
    AuthorCard, DegreeReport, LongestPathSummary, PathSummary, QueueEntry, QueueTrace, TraceStep,
    TreeLayout, View,
};

use crate::graph::Node;
use crate::paths::PathResult;
use crate::queue::CooperationQueue;

#[must_use]
pub fn shortest_path_view(source: &str, target: &str, route: Option<PathResult>) -> View {
    View::ShortestPath(PathSummary {
        source: source.to_string(),
        target: target.to_string(),
        route,
    })
}

#[must_use]
pub fn queue_view(author: &Node, queue: &CooperationQueue<'_>) -> View {
    let steps = queue
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| TraceStep {
            index: i + 1,
            state: step.queue_state.iter().map(QueueEntry::from).collect(),
            inserted: QueueEntry::from(&step.new_item),
        })
        .collect();

    View::CooperationQueue(QueueTrace {
        author: author.label.clone(),
        steps,
        final_order: queue.items().iter().map(QueueEntry::from).collect(),
    })
}

#[must_use]
pub fn tree_view(author: &Node, labels: &[String]) -> View {
    View::CollaboratorTree(TreeLayout::from_labels(author.label.clone(), labels))
}

#[must_use]
pub fn degree_report(node: &Node, connections: usize) -> DegreeReport {
    DegreeReport {
        id: node.id.clone(),
        label: node.label.clone(),
        connections,
    }
}

#[must_use]
pub fn longest_path_view(source: &str, path: Vec<String>) -> View {
    View::LongestPath(LongestPathSummary {
        source: source.to_string(),
        length: path.len(),
        path,
    })
}
