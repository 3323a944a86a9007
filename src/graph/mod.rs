// src/graph/mod.rs
pub mod dataset;
pub mod store;
pub mod style;
pub mod types;

pub use store::{GraphBuilder, GraphStore};
pub use types::{Edge, EdgeId, Node};
