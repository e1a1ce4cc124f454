//! The player table command: render visible rows with the persisted filters.
//!
//! Every filter flag passed on the command line updates that field of the
//! persisted filter configuration before rendering, matching the draft-board
//! behavior of keeping the view across sessions. Rendering itself is a thin
//! boundary: the visible-row computation lives in [`crate::view::store`].

use std::path::{Path, PathBuf};

use crate::{
    cli::types::sort::{SortDir, SortKey},
    error::FbbError,
    storage::models::PlayerRow,
    storage::persist::StateFiles,
    view::store::{FilterChange, ViewState},
    Result,
};

/// Configuration parameters for the players table.
#[derive(Debug, Default)]
pub struct PlayersParams {
    pub data: Option<PathBuf>,
    pub query: Option<String>,
    pub pos: Option<String>,
    pub hide_drafted: Option<bool>,
    pub sort: Option<SortKey>,
    pub direction: Option<SortDir>,
    pub only_roster: Option<bool>,
    pub highlight_roster: Option<bool>,
    pub as_json: bool,
}

/// Render the player table.
///
/// # Errors
///
/// Returns an error if no dataset has been synced or imported yet, or if an
/// explicit `--data` file cannot be read.
pub fn handle_players(params: PlayersParams) -> Result<()> {
    let files = StateFiles::open();
    let mut state = ViewState::load(files);

    apply_filter_flags(&mut state, &params);

    let rows = load_rows(state.files(), params.data.as_deref())?;
    state.load_players(rows);

    if params.as_json {
        let visible: Vec<PlayerRow> = state.visible_rows().into_iter().cloned().collect();
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        render_table(&state);
    }

    Ok(())
}

fn apply_filter_flags(state: &mut ViewState, params: &PlayersParams) {
    if let Some(query) = &params.query {
        state.set_filter(FilterChange::Query(query.clone()));
    }
    if let Some(pos) = &params.pos {
        state.set_filter(FilterChange::Position(pos.clone()));
    }
    if let Some(hide) = params.hide_drafted {
        state.set_filter(FilterChange::HideDrafted(hide));
    }
    if let Some(sort) = params.sort {
        state.set_filter(FilterChange::Sort(sort));
    }
    if let Some(direction) = params.direction {
        state.set_filter(FilterChange::Direction(direction));
    }
    if let Some(only) = params.only_roster {
        state.set_filter(FilterChange::OnlyRoster(only));
    }
    if let Some(highlight) = params.highlight_roster {
        state.set_filter(FilterChange::HighlightRoster(highlight));
    }
}

/// The dataset to render: an explicit file when given, the stored one
/// otherwise.
pub(crate) fn load_rows(files: &StateFiles, data: Option<&Path>) -> Result<Vec<PlayerRow>> {
    match data {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        None => files.load_dataset().ok_or(FbbError::NoData),
    }
}

/// Print the visible rows and the dataset counters.
pub(crate) fn render_table(state: &ViewState) {
    let rows = state.visible_rows();

    if rows.is_empty() {
        println!("No players match the current filters.");
    } else {
        println!(
            "{:2} {:<26} {:<5} {:<8} {:>5} {:>7} {:>7} {:>6} {:>6} {:>6} {:>5} {:>5}",
            "", "Player", "Team", "Pos", "GP", "MIN", "FPTS", "PTS", "REB", "AST", "STL", "BLK"
        );
        for p in rows {
            let drafted = state.is_drafted(&p.player_id);
            let mine =
                state.filters().highlight_roster && state.my_roster().contains(&p.player_id);
            let mark = format!(
                "{}{}",
                if drafted { "x" } else { " " },
                if mine { "*" } else { " " }
            );
            println!(
                "{:2} {:<26} {:<5} {:<8} {:>5} {:>7} {:>7} {:>6} {:>6} {:>6} {:>5} {:>5}",
                mark,
                p.name,
                p.team,
                p.position,
                fmt_num(p.games_played),
                fmt_num(p.minutes),
                fmt_num(p.fantasy_points),
                fmt_num(p.points),
                fmt_num(p.rebounds),
                fmt_num(p.assists),
                fmt_num(p.steals),
                fmt_num(p.blocks),
            );
        }
    }

    let c = state.counts();
    println!(
        "Drafted: {}  Remaining: {}  Total: {}",
        c.drafted, c.remaining, c.total
    );
}

/// Two decimal places with a trailing `.00` trimmed, so whole numbers read
/// like whole numbers.
pub(crate) fn fmt_num(n: f64) -> String {
    let s = format!("{:.2}", n);
    s.strip_suffix(".00").map(str::to_owned).unwrap_or(s)
}
