// src/exit.rs
//! Process exit codes for `collabnet`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CollabExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, unreadable dataset or config).
    Error = 1,
    /// Missing or malformed input.
    InvalidInput = 2,
    /// An author id is not in the dataset.
    NotFound = 3,
    /// The operation ran but had nothing to report (no path, no collaborators).
    NoResult = 4,
}

impl CollabExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CollabExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&GraphError> for CollabExit {
    fn from(e: &GraphError) -> Self {
        match e {
            GraphError::InputInvalid(_) | GraphError::NoPendingOperation => Self::InvalidInput,
            GraphError::IdentifierNotFound(_) => Self::NotFound,
            GraphError::NoConnections(_)
            | GraphError::EmptyGraph
            | GraphError::SearchTooLarge { .. } => Self::NoResult,
            GraphError::EmptyQueue | GraphError::Dataset(_) | GraphError::Io { .. } => Self::Error,
        }
    }
}
