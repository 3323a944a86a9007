// src/graph/types.rs
use serde::Serialize;

/// Stable edge handle: the edge's position in load order.
pub type EdgeId = usize;

pub const DEFAULT_NODE_COLOR: &str = "#00ff00";
pub const DEFAULT_NODE_SIZE: u32 = 40;

/// An author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub paper_titles: Vec<String>,
    /// Derived at ingestion; equals `paper_titles.len()` unless the dataset
    /// only carried a count.
    pub papers: usize,
    /// Base color assigned at ingestion. Highlights never overwrite it.
    pub color: String,
    pub size: u32,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            paper_titles: Vec::new(),
            papers: 0,
            color: DEFAULT_NODE_COLOR.to_string(),
            size: DEFAULT_NODE_SIZE,
        }
    }

    #[must_use]
    pub fn with_papers<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paper_titles = titles.into_iter().map(Into::into).collect();
        self.papers = self.paper_titles.len();
        self
    }

    /// Sets the count without titles, for datasets that only carry a number.
    #[must_use]
    pub fn with_paper_count(mut self, count: usize) -> Self {
        self.papers = count;
        self
    }

    #[must_use]
    pub fn paper_count(&self) -> usize {
        self.papers
    }
}

/// A collaboration between two authors. Endpoint order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: String,
    pub to: String,
    pub weight: u64,
}

impl Edge {
    /// The endpoint opposite `id`, if `id` is an endpoint at all.
    #[must_use]
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(self.to.as_str())
        } else if self.to == id {
            Some(self.from.as_str())
        } else {
            None
        }
    }
}
