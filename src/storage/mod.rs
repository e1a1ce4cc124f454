//! Storage layer for the draft helper
//!
//! This module owns everything that touches disk:
//! - `models`: the dataset row and persisted view-state records
//! - `persist`: versioned state files (drafted set, filters, dataset)

pub mod models;
pub mod persist;

// Re-export the main types for easy access
pub use models::{FilterState, PlayerRow};
pub use persist::StateFiles;
