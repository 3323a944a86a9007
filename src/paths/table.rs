// src/paths/table.rs
//! Single-source distances with a table snapshot after every settled node.
//!
//! Selection is a linear scan over the unsettled set, so a full run is
//! quadratic in the size of the source's component. Each settle produces one
//! frame for the caller to display.

use serde::Serialize;

use super::reachable;
use crate::error::{GraphError, Result};
use crate::graph::GraphStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceRow {
    pub node: String,
    /// `None` is an infinite distance.
    pub distance: Option<u64>,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    pub source: String,
    /// The node whose settling produced this snapshot.
    pub settled: Option<String>,
    /// One row per node of the source's component, in discovery order.
    pub rows: Vec<DistanceRow>,
}

impl DistanceTable {
    #[must_use]
    pub fn distance_to(&self, id: &str) -> Option<u64> {
        self.rows.iter().find(|r| r.node == id).and_then(|r| r.distance)
    }
}

/// Computes distances from `source` to every author it can reach, calling
/// `on_frame` once per settled node with the whole table.
///
/// # Errors
/// Returns `GraphError::IdentifierNotFound` if `source` is not in the graph.
#[allow(clippy::indexing_slicing)] // Local indices are bounded by `members.len()`.
pub fn progressive_distances<F>(graph: &GraphStore, source: &str, mut on_frame: F) -> Result<DistanceTable>
where
    F: FnMut(&DistanceTable),
{
    let src = graph
        .index_of(source)
        .ok_or_else(|| GraphError::IdentifierNotFound(source.to_string()))?;

    let members = reachable(graph, src);
    let mut local = vec![None; graph.len()];
    for (i, &m) in members.iter().enumerate() {
        local[m] = Some(i);
    }

    let size = members.len();
    let mut distances = vec![u64::MAX; size];
    let mut previous: Vec<Option<usize>> = vec![None; size];
    let mut settled = vec![false; size];
    distances[0] = 0;

    let mut table = snapshot(graph, source, &members, &distances, &previous, None);
    for _ in 0..size {
        let Some(current) = closest_unsettled(&distances, &settled) else {
            break;
        };
        settled[current] = true;

        for &(next, edge) in graph.adjacent(members[current]) {
            let Some(next) = local[next] else { continue };
            if settled[next] {
                continue;
            }
            let candidate = distances[current].saturating_add(graph.edge(edge).weight);
            if candidate < distances[next] {
                distances[next] = candidate;
                previous[next] = Some(current);
            }
        }

        table = snapshot(graph, source, &members, &distances, &previous, Some(members[current]));
        on_frame(&table);
    }

    tracing::debug!(source, component = size, "distance table complete");
    Ok(table)
}

/// First unsettled node with the smallest finite distance.
fn closest_unsettled(distances: &[u64], settled: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, (&d, &done)) in distances.iter().zip(settled).enumerate() {
        if done || d == u64::MAX {
            continue;
        }
        match best {
            Some(b) if distances.get(b).is_some_and(|&bd| bd <= d) => {}
            _ => best = Some(i),
        }
    }
    best
}

fn snapshot(
    graph: &GraphStore,
    source: &str,
    members: &[usize],
    distances: &[u64],
    previous: &[Option<usize>],
    settled: Option<usize>,
) -> DistanceTable {
    let id_of = |local: usize| members.get(local).map(|&g| graph.node_at(g).id.clone());
    let rows = members
        .iter()
        .zip(distances.iter().zip(previous))
        .map(|(&g, (&d, p))| DistanceRow {
            node: graph.node_at(g).id.clone(),
            distance: (d != u64::MAX).then_some(d),
            previous: p.and_then(id_of),
        })
        .collect();

    DistanceTable {
        source: source.to_string(),
        settled: settled.map(|g| graph.node_at(g).id.clone()),
        rows,
    }
}
