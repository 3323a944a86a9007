// src/paths/longest.rs
//! Longest simple path from a fixed start, by exhaustive DFS.
//!
//! Every simple path starting at the source is enumerated through
//! backtracking: a node joins the visited set when the walk enters it and
//! leaves it again on the way back, so other branches may reuse it. The cost
//! is exponential in the worst case; recursion depth equals the path length.

use crate::graph::GraphStore;

struct DfsState {
    visited: Vec<bool>,
    path_stack: Vec<usize>,
    best: Vec<usize>,
}

/// Returns the longest simple path starting at `source`, measured in nodes.
/// The first path reaching a given length wins over later ones of the same
/// length. Returns `None` for an unknown source.
#[must_use]
pub fn longest_simple_path(graph: &GraphStore, source: &str) -> Option<Vec<String>> {
    let start = graph.index_of(source)?;

    let mut state = DfsState {
        visited: vec![false; graph.len()],
        path_stack: Vec::new(),
        best: Vec::new(),
    };
    dfs(start, graph, &mut state);

    tracing::debug!(source, length = state.best.len(), "longest path search exhausted");
    Some(
        state
            .best
            .into_iter()
            .map(|i| graph.node_at(i).id.clone())
            .collect(),
    )
}

fn dfs(node: usize, graph: &GraphStore, state: &mut DfsState) {
    set_visited(state, node, true);
    state.path_stack.push(node);

    for &(next, _) in graph.adjacent(node) {
        if !state.visited.get(next).copied().unwrap_or(true) {
            dfs(next, graph, state);
        }
    }

    if state.path_stack.len() > state.best.len() {
        state.best.clone_from(&state.path_stack);
    }

    state.path_stack.pop();
    set_visited(state, node, false);
}

fn set_visited(state: &mut DfsState, node: usize, value: bool) {
    if let Some(slot) = state.visited.get_mut(node) {
        *slot = value;
    }
}
