// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;
pub mod shell;

pub use args::{Cli, Commands, OutputFormat};
