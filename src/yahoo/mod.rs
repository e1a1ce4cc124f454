//! Yahoo Fantasy Sports integration
//!
//! The provider does not pin its payload shapes per field, so everything in
//! here reads `serde_json::Value` through the tolerant deep scan in [`scan`]
//! instead of fixed-path accessors:
//! - `http`: thin read-only API client
//! - `scan`: the shared traversal primitive
//! - `settings`: stat label and weight resolution from league settings
//! - `settings_cache`: disk cache for settings payloads
//! - `project`: raw player records → normalized stat rows
//! - `roster`: roster identity matching against the local dataset
//! - `league`: league/team discovery and selection

pub mod http;
pub mod league;
pub mod project;
pub mod roster;
pub mod scan;
pub mod settings;
pub mod settings_cache;
