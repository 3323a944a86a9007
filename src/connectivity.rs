// src/connectivity.rs
//! Degree queries.

use crate::graph::{GraphStore, Node};

/// Number of collaborators of `id`. Unknown ids have degree 0.
#[must_use]
pub fn degree(graph: &GraphStore, id: &str) -> usize {
    graph.index_of(id).map_or(0, |i| graph.adjacent(i).len())
}

/// The author with the most collaborators. Ties go to the author loaded
/// first. `None` when no author has any collaborator.
#[must_use]
pub fn max_degree_node(graph: &GraphStore) -> Option<(&Node, usize)> {
    let mut best: Option<(&Node, usize)> = None;
    for (i, node) in graph.nodes().iter().enumerate() {
        let count = graph.adjacent(i).len();
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((node, count));
        }
    }
    best
}
