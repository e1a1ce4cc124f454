//! The owned view state: dataset, drafted set, roster match, filters.
//!
//! All mutation goes through the methods here. The drafted set and the
//! filter configuration write through to their state files after every
//! change; the roster match is ephemeral per run. Persistence failures are
//! logged and swallowed so a read-only disk never breaks the table.

use log::warn;
use std::collections::BTreeSet;

use crate::cli::types::sort::{SortDir, SortKey};
use crate::storage::models::{FilterState, PlayerRow};
use crate::storage::persist::StateFiles;

/// One field update for the persisted filter configuration.
#[derive(Debug, Clone)]
pub enum FilterChange {
    Query(String),
    Position(String),
    HideDrafted(bool),
    Sort(SortKey),
    Direction(SortDir),
    HighlightRoster(bool),
    OnlyRoster(bool),
}

/// Derived dataset counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub drafted: usize,
    pub remaining: usize,
}

pub struct ViewState {
    players: Vec<PlayerRow>,
    drafted: BTreeSet<String>,
    my_roster: BTreeSet<String>,
    filters: FilterState,
    files: StateFiles,
}

impl ViewState {
    /// Initialize from the persisted drafted set and filter configuration.
    /// The player collection starts empty; load it with [`load_players`].
    ///
    /// [`load_players`]: ViewState::load_players
    pub fn load(files: StateFiles) -> Self {
        let drafted = files.load_drafted();
        let filters = files.load_filters();
        Self {
            players: Vec::new(),
            drafted,
            my_roster: BTreeSet::new(),
            filters,
            files,
        }
    }

    pub fn files(&self) -> &StateFiles {
        &self.files
    }

    pub fn players(&self) -> &[PlayerRow] {
        &self.players
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn drafted(&self) -> &BTreeSet<String> {
        &self.drafted
    }

    pub fn my_roster(&self) -> &BTreeSet<String> {
        &self.my_roster
    }

    pub fn is_drafted(&self, id: &str) -> bool {
        self.drafted.contains(id)
    }

    /// Replace the player collection wholesale. Drafted ids and filters are
    /// untouched; stale drafted ids simply match nothing.
    pub fn load_players(&mut self, rows: Vec<PlayerRow>) {
        self.players = rows;
    }

    /// Flip drafted membership for `id` and persist. Returns whether the
    /// player is drafted afterwards.
    pub fn toggle_drafted(&mut self, id: &str) -> bool {
        let now_drafted = if self.drafted.remove(id) {
            false
        } else {
            self.drafted.insert(id.to_string());
            true
        };
        self.persist_drafted();
        now_drafted
    }

    /// Empty the drafted set and persist. Callers are responsible for having
    /// confirmed this with the user.
    pub fn clear_drafted(&mut self) {
        self.drafted.clear();
        self.persist_drafted();
    }

    /// Replace the roster match wholesale. Not persisted.
    pub fn set_roster(&mut self, ids: BTreeSet<String>) {
        self.my_roster = ids;
    }

    /// Update one filter field and persist the whole configuration.
    pub fn set_filter(&mut self, change: FilterChange) {
        match change {
            FilterChange::Query(q) => self.filters.query = q,
            FilterChange::Position(p) => self.filters.position = p,
            FilterChange::HideDrafted(v) => self.filters.hide_drafted = v,
            FilterChange::Sort(key) => self.filters.sort_key = key,
            FilterChange::Direction(dir) => self.filters.sort_dir = dir,
            FilterChange::HighlightRoster(v) => self.filters.highlight_roster = v,
            FilterChange::OnlyRoster(v) => self.filters.only_roster = v,
        }
        self.persist_filters();
    }

    /// The rows the table shows: every active predicate applied, then a
    /// stable sort on the configured key. Pure with respect to the current
    /// state; calling it twice yields the same sequence.
    pub fn visible_rows(&self) -> Vec<&PlayerRow> {
        let query = self.filters.query.trim().to_lowercase();
        let position = self.filters.position.trim().to_lowercase();

        let mut rows: Vec<&PlayerRow> = self
            .players
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.team.to_lowercase().contains(&query)
            })
            .filter(|p| position.is_empty() || p.position.to_lowercase().contains(&position))
            .filter(|p| !self.filters.hide_drafted || !self.drafted.contains(&p.player_id))
            .filter(|p| !self.filters.only_roster || self.my_roster.contains(&p.player_id))
            .collect();

        let key = self.filters.sort_key;
        let dir = self.filters.sort_dir;
        rows.sort_by(|a, b| {
            let ord = key.compare(a, b);
            match dir {
                SortDir::Ascending => ord,
                SortDir::Descending => ord.reverse(),
            }
        });
        rows
    }

    pub fn counts(&self) -> Counts {
        let total = self.players.len();
        let drafted = self.drafted.len();
        Counts {
            total,
            drafted,
            remaining: total.saturating_sub(drafted),
        }
    }

    fn persist_drafted(&self) {
        if let Err(err) = self.files.save_drafted(&self.drafted) {
            warn!("could not persist drafted set: {}", err);
        }
    }

    fn persist_filters(&self) {
        if let Err(err) = self.files.save_filters(&self.filters) {
            warn!("could not persist filters: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn row(id: &str, name: &str, team: &str, pos: &str, fpts: f64) -> PlayerRow {
        PlayerRow {
            player_id: id.to_string(),
            name: name.to_string(),
            team: team.to_string(),
            position: pos.to_string(),
            fantasy_points: fpts,
            ..PlayerRow::default()
        }
    }

    fn sample_rows() -> Vec<PlayerRow> {
        vec![
            row("1", "Jayson Tatum", "BOS", "SF,PF", 52.3),
            row("2", "Stephen Curry", "GSW", "PG", 48.9),
            row("3", "Jaylen Brown", "BOS", "SG,SF", 41.0),
            row("4", "Rudy Gobert", "MIN", "C", 38.2),
        ]
    }

    fn fresh_state(dir: &std::path::Path) -> ViewState {
        let mut state = ViewState::load(StateFiles::with_dir(dir));
        state.load_players(sample_rows());
        state
    }

    #[test]
    fn test_default_sort_is_fpts_descending() {
        let dir = tempdir().unwrap();
        let state = fresh_state(dir.path());

        let ids: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_query_matches_name_or_team() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        state.set_filter(FilterChange::Query("bos".to_string()));
        let ids: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        state.set_filter(FilterChange::Query("curry".to_string()));
        let ids: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_position_filter_is_substring() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        state.set_filter(FilterChange::Position("SF".to_string()));
        let ids: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_hide_drafted() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        state.toggle_drafted("1");
        assert_eq!(state.visible_rows().len(), 4);

        state.set_filter(FilterChange::HideDrafted(true));
        let ids: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_all_predicates_apply_simultaneously() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        state.set_filter(FilterChange::Query("bos".to_string()));
        state.set_filter(FilterChange::Position("sg".to_string()));
        state.toggle_drafted("3");
        state.set_filter(FilterChange::HideDrafted(true));

        // "3" passes query and position but is drafted
        assert!(state.visible_rows().is_empty());
    }

    #[test]
    fn test_only_roster_with_unmatched_ids_is_empty() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        let ids: BTreeSet<String> = ["1001", "1002"].iter().map(|s| s.to_string()).collect();
        state.set_roster(ids);
        state.set_filter(FilterChange::OnlyRoster(true));

        assert!(state.visible_rows().is_empty());
    }

    #[test]
    fn test_only_roster_keeps_members() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        let ids: BTreeSet<String> = ["2", "4"].iter().map(|s| s.to_string()).collect();
        state.set_roster(ids);
        state.set_filter(FilterChange::OnlyRoster(true));

        let ids: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_sort_is_stable_and_reversible() {
        let dir = tempdir().unwrap();
        let mut state = ViewState::load(StateFiles::with_dir(dir.path()));
        state.load_players(vec![
            row("a", "First Equal", "AAA", "PG", 30.0),
            row("b", "Second Equal", "BBB", "SG", 30.0),
            row("c", "Lowest", "CCC", "SF", 10.0),
            row("d", "Highest", "DDD", "C", 50.0),
        ]);

        let desc: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        // Equal keys keep dataset order
        assert_eq!(desc, vec!["d", "a", "b", "c"]);

        state.set_filter(FilterChange::Direction(SortDir::Ascending));
        let asc: Vec<&str> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        // Differing keys reverse; equal keys still keep dataset order
        assert_eq!(asc, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_visible_rows_is_deterministic() {
        let dir = tempdir().unwrap();
        let state = fresh_state(dir.path());

        let first: Vec<String> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.clone())
            .collect();
        let second: Vec<String> = state
            .visible_rows()
            .iter()
            .map(|p| p.player_id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_drafted_is_idempotent_in_pairs() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        let before = state.drafted().clone();
        let persisted_before =
            std::fs::read_to_string(state.files().drafted_path()).unwrap_or_default();

        assert!(state.toggle_drafted("2"));
        assert!(!state.toggle_drafted("2"));

        assert_eq!(state.drafted(), &before);
        let persisted_after = std::fs::read_to_string(state.files().drafted_path()).unwrap();
        // An empty set was never persisted before the first toggle
        if !persisted_before.is_empty() {
            assert_eq!(persisted_after, persisted_before);
        } else {
            assert_eq!(persisted_after.trim(), "[]");
        }
    }

    #[test]
    fn test_counts() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        state.toggle_drafted("1");
        state.toggle_drafted("9999"); // stale id still counts as drafted

        let c = state.counts();
        assert_eq!(c.total, 4);
        assert_eq!(c.drafted, 2);
        assert_eq!(c.remaining, 2);
    }

    #[test]
    fn test_load_players_preserves_drafted_and_filters() {
        let dir = tempdir().unwrap();
        let mut state = fresh_state(dir.path());

        state.toggle_drafted("1");
        state.set_filter(FilterChange::Query("x".to_string()));
        state.load_players(vec![row("9", "New Guy", "LAL", "PF", 20.0)]);

        assert!(state.is_drafted("1"));
        assert_eq!(state.filters().query, "x");
        assert_eq!(state.players().len(), 1);
    }

    #[test]
    fn test_state_survives_reload() {
        let dir = tempdir().unwrap();
        {
            let mut state = fresh_state(dir.path());
            state.toggle_drafted("2");
            state.set_filter(FilterChange::Sort(SortKey::Rebounds));
            state.set_filter(FilterChange::HideDrafted(true));
        }

        let reloaded = ViewState::load(StateFiles::with_dir(dir.path()));
        assert!(reloaded.is_drafted("2"));
        assert_eq!(reloaded.filters().sort_key, SortKey::Rebounds);
        assert!(reloaded.filters().hide_drafted);
        // The roster match is ephemeral and must not survive
        assert!(reloaded.my_roster().is_empty());
    }
}
