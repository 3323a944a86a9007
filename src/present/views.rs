// src/present/views.rs
//! Typed results handed to the display surface.

use serde::Serialize;

use crate::graph::Node;
use crate::paths::{DistanceTable, PathResult};
use crate::queue::QueueItem;

/// Everything an operation can put on the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    ShortestPath(PathSummary),
    CooperationQueue(QueueTrace),
    CollaboratorTree(TreeLayout),
    /// Intermediate distance table, shown while the computation runs.
    TableFrame(DistanceTable),
    DistanceTable(DistanceTable),
    ConnectionCount(DegreeReport),
    MostConnected(DegreeReport),
    LongestPath(LongestPathSummary),
    AuthorCard(AuthorCard),
}

impl View {
    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShortestPath(_) => "shortest_path",
            Self::CooperationQueue(_) => "cooperation_queue",
            Self::CollaboratorTree(_) => "collaborator_tree",
            Self::TableFrame(_) => "table_frame",
            Self::DistanceTable(_) => "distance_table",
            Self::ConnectionCount(_) => "connection_count",
            Self::MostConnected(_) => "most_connected",
            Self::LongestPath(_) => "longest_path",
            Self::AuthorCard(_) => "author_card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    pub source: String,
    pub target: String,
    /// `None` when no path exists.
    pub route: Option<PathResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    pub id: String,
    pub label: String,
    pub papers: usize,
}

impl From<&QueueItem<'_>> for QueueEntry {
    fn from(item: &QueueItem<'_>) -> Self {
        Self {
            id: item.author.id.clone(),
            label: item.author.label.clone(),
            papers: item.paper_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// 1-based step number.
    pub index: usize,
    pub state: Vec<QueueEntry>,
    pub inserted: QueueEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueTrace {
    pub author: String,
    pub steps: Vec<TraceStep>,
    pub final_order: Vec<QueueEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLayout {
    pub author: String,
    /// Level k holds up to 2^k labels.
    pub levels: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeReport {
    pub id: String,
    pub label: String,
    pub connections: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestPathSummary {
    pub source: String,
    pub path: Vec<String>,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCard {
    pub id: String,
    pub label: String,
    pub connections: usize,
    pub paper_count: usize,
    pub papers: Vec<String>,
}

impl AuthorCard {
    #[must_use]
    pub fn new(node: &Node, connections: usize) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            connections,
            paper_count: node.paper_count(),
            papers: node.paper_titles.clone(),
        }
    }
}
