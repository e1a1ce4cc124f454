//! View state over the local dataset
//!
//! - `store`: the owned state record (players, drafted set, roster match,
//!   filters) and the visible-rows computation
//! - `totals`: per-category aggregation over a subset of players

pub mod store;
pub mod totals;

pub use store::{Counts, FilterChange, ViewState};
pub use totals::{totals, RosterTotals};
