//! Data models for the dataset and the persisted view state

use crate::cli::types::sort::{SortDir, SortKey};
use serde::{Deserialize, Serialize};

/// One player's normalized season statistics.
///
/// This is both the in-memory row the table renders and the on-disk shape of
/// the dataset file: a plain ordered sequence of these flat objects. Every
/// numeric field defaults to 0 when missing so partial records load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(rename = "pos", default)]
    pub position: String,
    #[serde(rename = "gp", default)]
    pub games_played: f64,
    #[serde(rename = "min", default)]
    pub minutes: f64,
    #[serde(rename = "fpts", default)]
    pub fantasy_points: f64,
    #[serde(rename = "pts", default)]
    pub points: f64,
    #[serde(rename = "reb", default)]
    pub rebounds: f64,
    #[serde(rename = "ast", default)]
    pub assists: f64,
    #[serde(rename = "stl", default)]
    pub steals: f64,
    #[serde(rename = "blk", default)]
    pub blocks: f64,
}

/// The filter and sort configuration of the player table.
///
/// Persisted as a whole on every change. The struct-level `default` means a
/// record written by an older schema merges over the defaults instead of
/// failing to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring match on player name or team.
    pub query: String,
    /// Case-insensitive substring match on position, e.g. `PG`.
    #[serde(rename = "pos")]
    pub position: String,
    /// Drop drafted players from the visible rows.
    pub hide_drafted: bool,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    /// Mark players on the loaded roster in the table.
    pub highlight_roster: bool,
    /// Show only players on the loaded roster.
    pub only_roster: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            position: String::new(),
            hide_drafted: false,
            sort_key: SortKey::FantasyPoints,
            sort_dir: SortDir::Descending,
            highlight_roster: true,
            only_roster: false,
        }
    }
}
