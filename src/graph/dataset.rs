// src/graph/dataset.rs
//! Dataset ingestion: JSON nodes and edges into a styled `GraphStore`.
//!
//! Two shapes are accepted for each record:
//! - nodes: `{id, label, paperTitles, papers}` or `{orcid, name, papers: [..]}`
//! - edges: `{from, to, weight}` or `{edge: [a, b], weight}`

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::store::GraphStore;
use super::style;
use super::types::Node;
use crate::config::Config;
use crate::error::{GraphError, Result};

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    nodes: Vec<RawNode>,
    /// Kept raw so one bad record is skipped instead of failing the load.
    #[serde(default)]
    edges: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(alias = "orcid")]
    id: String,
    #[serde(alias = "name", default)]
    label: Option<String>,
    #[serde(rename = "paperTitles", default)]
    paper_titles: Option<Vec<String>>,
    #[serde(default)]
    papers: Option<Papers>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Papers {
    Titles(Vec<String>),
    Count(usize),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Pair {
        edge: (String, String),
        #[serde(default)]
        weight: Option<u64>,
    },
    Endpoints {
        from: String,
        to: String,
        #[serde(default)]
        weight: Option<u64>,
    },
}

impl RawEdge {
    fn into_parts(self) -> (String, String, u64) {
        match self {
            Self::Pair { edge: (a, b), weight } | Self::Endpoints { from: a, to: b, weight } => {
                (a, b, weight.unwrap_or(1))
            }
        }
    }
}

impl RawNode {
    fn into_node(self) -> Node {
        let label = self.label.unwrap_or_else(|| self.id.clone());
        let node = Node::new(self.id, label);
        match (self.paper_titles, self.papers) {
            (Some(titles), Some(Papers::Count(count))) => {
                let node = node.with_papers(titles);
                let count = count.max(node.papers);
                node.with_paper_count(count)
            }
            (Some(titles), _) | (None, Some(Papers::Titles(titles))) => node.with_papers(titles),
            (None, Some(Papers::Count(count))) => node.with_paper_count(count),
            (None, None) => node,
        }
    }
}

/// Reads and ingests a dataset file.
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid dataset.
pub fn load(path: &Path, config: &Config) -> Result<GraphStore> {
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse(&content, config)
}

/// Ingests a dataset from JSON text.
///
/// Repeated node ids keep their first record. Edge records that match
/// neither shape (including non-integer or negative weights), edges with
/// unknown endpoints, self-loops and repeated pairs are dropped with a
/// warning.
///
/// # Errors
/// Returns error if the JSON is not an object of node and edge lists.
pub fn parse(json: &str, config: &Config) -> Result<GraphStore> {
    let raw: RawDataset = serde_json::from_str(json)?;

    let mut nodes: Vec<Node> = raw.nodes.into_iter().map(RawNode::into_node).collect();
    let bounds = style::thresholds(&nodes, &config.style);
    style::apply(nodes.iter_mut(), bounds, &config.style, &config.palette);

    let mut builder = GraphStore::builder();
    let mut duplicates = 0usize;
    for node in nodes {
        if !builder.add_node(node) {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        tracing::warn!(duplicates, "repeated author ids ignored");
    }

    let mut skipped = 0usize;
    for (position, value) in raw.edges.into_iter().enumerate() {
        let edge = match serde_json::from_value::<RawEdge>(value) {
            Ok(edge) => edge,
            Err(e) => {
                tracing::warn!("skipping edge record #{position}: {e}");
                skipped += 1;
                continue;
            }
        };
        let (from, to, weight) = edge.into_parts();
        if let Err(e) = builder.add_edge(&from, &to, weight) {
            tracing::warn!("skipping edge {from} -- {to}: {e}");
            skipped += 1;
        }
    }

    let graph = builder.build();
    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edges().len(),
        skipped,
        average_papers = bounds.average,
        "dataset loaded"
    );
    Ok(graph)
}
