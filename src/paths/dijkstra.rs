// src/paths/dijkstra.rs
//! Single-pair shortest path with a lazy-deletion frontier.

use serde::Serialize;

use crate::error::Result;
use crate::graph::GraphStore;
use crate::queue::{Entry, PriorityQueue};

/// A route between two authors, both ends included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub total_weight: u64,
}

impl PathResult {
    /// Number of edges on the route.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Finds the minimum-weight route from `source` to `target`.
///
/// Returns `Ok(None)` when either id is unknown or `target` is unreachable.
/// Stale frontier entries are skipped through the visited set instead of
/// being updated in place.
///
/// # Errors
/// Returns `GraphError::EmptyQueue` if the frontier breaks its own length
/// invariant. Correct queues never do.
#[allow(clippy::indexing_slicing)] // All indices come from the graph's own adjacency.
pub fn shortest_path(graph: &GraphStore, source: &str, target: &str) -> Result<Option<PathResult>> {
    let (Some(src), Some(dst)) = (graph.index_of(source), graph.index_of(target)) else {
        return Ok(None);
    };

    let n = graph.len();
    let mut distances = vec![u64::MAX; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = PriorityQueue::new();

    distances[src] = 0;
    frontier.enqueue(src, 0u64);

    let mut settled = 0usize;
    while !frontier.is_empty() {
        let Entry { element: current, .. } = frontier.dequeue()?;
        if visited[current] {
            continue;
        }
        visited[current] = true;
        settled += 1;

        if current == dst {
            tracing::debug!(settled, "shortest path found");
            return Ok(Some(PathResult {
                path: walk_back(graph, &previous, dst),
                total_weight: distances[dst],
            }));
        }

        for &(next, edge) in graph.adjacent(current) {
            if visited[next] {
                continue;
            }
            let candidate = distances[current].saturating_add(graph.edge(edge).weight);
            if candidate < distances[next] {
                distances[next] = candidate;
                previous[next] = Some(current);
                frontier.enqueue(next, candidate);
            }
        }
    }

    tracing::debug!(settled, "target unreachable");
    Ok(None)
}

fn walk_back(graph: &GraphStore, previous: &[Option<usize>], end: usize) -> Vec<String> {
    let mut path = vec![graph.node_at(end).id.clone()];
    let mut cursor = previous.get(end).copied().flatten();
    while let Some(node) = cursor {
        path.push(graph.node_at(node).id.clone());
        cursor = previous.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn diamond() -> GraphStore {
        let mut b = GraphStore::builder();
        for id in ["A", "B", "C", "D", "E"] {
            b.add_node(Node::new(id, id));
        }
        b.add_edge("A", "B", 1).unwrap();
        b.add_edge("B", "C", 2).unwrap();
        b.add_edge("A", "C", 5).unwrap();
        b.add_edge("C", "D", 1).unwrap();
        b.build()
    }

    #[test]
    fn test_prefers_lighter_detour() {
        let r = shortest_path(&diamond(), "A", "D").unwrap().unwrap();
        assert_eq!(r.path, vec!["A", "B", "C", "D"]);
        assert_eq!(r.total_weight, 4);
        assert_eq!(r.hops(), 3);
    }

    #[test]
    fn test_same_source_and_target() {
        let r = shortest_path(&diamond(), "C", "C").unwrap().unwrap();
        assert_eq!(r.path, vec!["C"]);
        assert_eq!(r.total_weight, 0);
    }

    #[test]
    fn test_unreachable_and_unknown() {
        let g = diamond();
        assert_eq!(shortest_path(&g, "A", "E").unwrap(), None);
        assert_eq!(shortest_path(&g, "A", "nobody").unwrap(), None);
        assert_eq!(shortest_path(&g, "nobody", "A").unwrap(), None);
    }
}
