// src/session/operation.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GraphError;

/// The seven user-triggered analyses, numbered as on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ShortestPath = 1,
    CooperationQueue = 2,
    CollaboratorTree = 3,
    DistanceTable = 4,
    ConnectionCount = 5,
    MostConnected = 6,
    LongestPath = 7,
}

impl Operation {
    pub const ALL: [Self; 7] = [
        Self::ShortestPath,
        Self::CooperationQueue,
        Self::CollaboratorTree,
        Self::DistanceTable,
        Self::ConnectionCount,
        Self::MostConnected,
        Self::LongestPath,
    ];

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ShortestPath => "shortest-path",
            Self::CooperationQueue => "cooperation-queue",
            Self::CollaboratorTree => "collaborator-tree",
            Self::DistanceTable => "distance-table",
            Self::ConnectionCount => "connection-count",
            Self::MostConnected => "most-connected",
            Self::LongestPath => "longest-path",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ShortestPath => "Shortest path between two authors",
            Self::CooperationQueue => "Cooperation queue by paper count",
            Self::CollaboratorTree => "Collaborator tree",
            Self::DistanceTable => "Shortest distances from an author",
            Self::ConnectionCount => "Connection count",
            Self::MostConnected => "Most connected author",
            Self::LongestPath => "Longest path from an author",
        }
    }

    /// One prompt per author id the operation needs.
    #[must_use]
    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            Self::ShortestPath => &["Source author id", "Target author id"],
            Self::MostConnected => &[],
            Self::CooperationQueue
            | Self::CollaboratorTree
            | Self::DistanceTable
            | Self::ConnectionCount
            | Self::LongestPath => &["Author id"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.name())
    }
}

impl TryFrom<u8> for Operation {
    type Error = GraphError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.number() == n)
            .ok_or_else(|| GraphError::InputInvalid(format!("no operation numbered {n}")))
    }
}

impl FromStr for Operation {
    type Err = GraphError;

    /// Accepts the menu number or the kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::try_from(n);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| GraphError::InputInvalid(format!("unknown operation '{s}'")))
    }
}

/// What the controller needs before it can run an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRequest {
    pub operation: Operation,
    pub prompts: Vec<&'static str>,
}
