// src/paths/mod.rs
//! Path searches over the author graph.

pub mod dijkstra;
pub mod longest;
pub mod table;

pub use dijkstra::{shortest_path, PathResult};
pub use longest::longest_simple_path;
pub use table::{progressive_distances, DistanceRow, DistanceTable};

use std::collections::VecDeque;

use crate::graph::GraphStore;

/// Node indices reachable from `start`, in breadth-first discovery order.
/// `start` comes first.
pub(crate) fn reachable(graph: &GraphStore, start: usize) -> Vec<usize> {
    let mut seen = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    if let Some(slot) = seen.get_mut(start) {
        *slot = true;
    }

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &(next, _) in graph.adjacent(current) {
            if let Some(slot) = seen.get_mut(next) {
                if !*slot {
                    *slot = true;
                    queue.push_back(next);
                }
            }
        }
    }
    order
}

/// Number of authors in the connected component containing `id`.
#[must_use]
pub fn component_size(graph: &GraphStore, id: &str) -> usize {
    graph.index_of(id).map_or(0, |i| reachable(graph, i).len())
}
