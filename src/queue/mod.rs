// src/queue/mod.rs
pub mod cooperation;
pub mod priority;

pub use cooperation::{CooperationQueue, QueueItem, Step};
pub use priority::{Entry, PriorityQueue};
