// src/graph/store.rs
//! The read-only author graph and its query interface.

use std::collections::HashMap;

use super::types::{Edge, EdgeId, Node};
use crate::error::{GraphError, Result};

/// Immutable co-authorship graph. Every analysis reads from here.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
    /// Per node: `(neighbor index, edge id)` in edge load order.
    adjacency: Vec<Vec<(usize, EdgeId)>>,
}

impl GraphStore {
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| self.node_at(i))
    }

    /// Ids of the authors sharing an edge with `id`. Empty for unknown ids.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.index_of(id)
            .map(|i| {
                self.adjacent(i)
                    .iter()
                    .map(|&(n, _)| self.node_at(n).id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn incident_edges(&self, id: &str) -> Vec<&Edge> {
        self.index_of(id)
            .map(|i| self.adjacent(i).iter().map(|&(_, e)| self.edge(e)).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.adjacent(ia)
            .iter()
            .find(|&&(n, _)| n == ib)
            .map(|&(_, e)| self.edge(e))
    }

    /// All authors in load order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[allow(clippy::indexing_slicing)] // Indices only come from `index` or `adjacency`.
    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, EdgeId)] {
        self.adjacency.get(idx).map_or(&[][..], Vec::as_slice)
    }

    #[allow(clippy::indexing_slicing)] // Edge ids are positions in `edges`.
    pub(crate) fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }
}

/// Collects nodes and edges, enforcing the graph invariants as it goes.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: GraphStore,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Returns false and keeps the first one if the id is taken.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.graph.index.contains_key(&node.id) {
            return false;
        }
        let idx = self.graph.nodes.len();
        self.graph.index.insert(node.id.clone(), idx);
        self.graph.nodes.push(node);
        self.graph.adjacency.push(Vec::new());
        true
    }

    /// Adds an undirected edge. A weight of 0 is stored as 1.
    ///
    /// # Errors
    /// Returns `GraphError::Dataset` for an unknown endpoint, a self-loop, or a
    /// pair that is already connected.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<EdgeId> {
        let a = self.endpoint(from)?;
        let b = self.endpoint(to)?;
        if a == b {
            return Err(GraphError::Dataset(format!("self-loop on '{from}'")));
        }
        if self.graph.adjacent(a).iter().any(|&(n, _)| n == b) {
            return Err(GraphError::Dataset(format!(
                "duplicate edge between '{from}' and '{to}'"
            )));
        }

        let id = self.graph.edges.len();
        self.graph.edges.push(Edge {
            id,
            from: from.to_string(),
            to: to.to_string(),
            weight: weight.max(1),
        });
        if let Some(list) = self.graph.adjacency.get_mut(a) {
            list.push((b, id));
        }
        if let Some(list) = self.graph.adjacency.get_mut(b) {
            list.push((a, id));
        }
        Ok(id)
    }

    #[must_use]
    pub fn build(self) -> GraphStore {
        self.graph
    }

    fn endpoint(&self, id: &str) -> Result<usize> {
        self.graph
            .index_of(id)
            .ok_or_else(|| GraphError::Dataset(format!("edge endpoint '{id}' is not a known author")))
    }
}
