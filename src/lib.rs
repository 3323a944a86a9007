pub mod cli;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod exit;
pub mod graph;
pub mod paths;
pub mod ports;
pub mod present;
pub mod queue;
pub mod reporting;
pub mod session;

pub use error::{GraphError, Result};
pub use graph::{GraphStore, Node};
pub use session::{Operation, Session};
