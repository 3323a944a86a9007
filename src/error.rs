// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A prompt was left empty or the input count does not match the operation.
    #[error("Invalid input: {0}")]
    InputInvalid(String),

    #[error("No author found with id '{0}'")]
    IdentifierNotFound(String),

    #[error("Author '{0}' has no collaborators")]
    NoConnections(String),

    /// No author has a single collaborator, so there is no maximum to report.
    #[error("No author has any collaborator")]
    EmptyGraph,

    /// Dequeue on an empty priority queue. Correct callers never hit this.
    #[error("Dequeue on an empty priority queue")]
    EmptyQueue,

    #[error("No operation is awaiting input")]
    NoPendingOperation,

    #[error("Longest path search refused: component of '{id}' has {size} authors (limit {limit})")]
    SearchTooLarge { id: String, size: usize, limit: usize },

    #[error("Invalid dataset: {0}")]
    Dataset(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl GraphError {
    /// True for failures caused by what the user typed, as opposed to broken
    /// data or broken callers.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InputInvalid(_)
                | Self::IdentifierNotFound(_)
                | Self::NoConnections(_)
                | Self::EmptyGraph
                | Self::SearchTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Dataset(e.to_string())
    }
}
