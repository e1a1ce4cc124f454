//! Roster command: fetch a team's roster, match it against the dataset, and
//! show the matched players with their aggregate totals.

use serde_json::json;

use crate::{
    cli::types::keys::TeamKey,
    cli::LeagueSelect,
    commands::players::render_table,
    commands::resolve_league,
    error::FbbError,
    storage::models::PlayerRow,
    storage::persist::StateFiles,
    view::store::{FilterChange, ViewState},
    view::totals::totals,
    yahoo::http::YahooClient,
    yahoo::league::{extract_teams, filter_teams},
    yahoo::roster::match_roster,
    Result,
};

/// Configuration parameters for the roster command.
#[derive(Debug)]
pub struct RosterParams {
    pub select: LeagueSelect,
    pub team: Option<TeamKey>,
    pub team_name: Option<String>,
    pub only_roster: Option<bool>,
    pub highlight_roster: Option<bool>,
    pub as_json: bool,
}

/// Handle the roster command.
///
/// The roster match is ephemeral: it lives for this run only and is never
/// persisted. The only/highlight flags, in contrast, are regular persisted
/// filter fields.
pub async fn handle_roster(params: RosterParams) -> Result<()> {
    let client = YahooClient::from_env()?;

    let team_key = match params.team {
        Some(key) => key,
        None => {
            let Some(name) = params.team_name else {
                println!("Provide --team or --team-name to pick a roster.");
                return Ok(());
            };
            let league = resolve_league(&client, &params.select).await?;
            let teams_payload = client.get_teams(&league).await?;
            let teams = extract_teams(&teams_payload);
            let matched = filter_teams(&teams, &[name.clone()], &[]);
            let Some(first) = matched.first() else {
                return Err(FbbError::TeamNotFound { query: name });
            };
            println!("Using team {} ({})", first.nickname, first.team_key);
            first.team_key.clone()
        }
    };

    let roster_payload = client.get_team_roster(&team_key).await?;

    let files = StateFiles::open();
    let mut state = ViewState::load(files);
    if let Some(only) = params.only_roster {
        state.set_filter(FilterChange::OnlyRoster(only));
    }
    if let Some(highlight) = params.highlight_roster {
        state.set_filter(FilterChange::HighlightRoster(highlight));
    }

    let rows = state.files().load_dataset().unwrap_or_default();
    if rows.is_empty() {
        println!("⚠ No local dataset; run `sync` or `import` to see matched stats.");
    }
    state.load_players(rows);

    let ids = match_roster(&roster_payload, state.players());
    println!("Matched {} roster players", ids.len());
    state.set_roster(ids);

    let t = totals(state.players(), state.my_roster());
    if params.as_json {
        let visible: Vec<PlayerRow> = state.visible_rows().into_iter().cloned().collect();
        let out = json!({ "rows": visible, "totals": t });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        render_table(&state);
        println!(
            "My roster totals: players {}, FPTS {:.2}, PTS {:.2}, REB {:.2}, AST {:.2}, STL {:.2}, BLK {:.2}, MIN {:.2}",
            t.count, t.fantasy_points, t.points, t.rebounds, t.assists, t.steals, t.blocks, t.minutes
        );
    }

    Ok(())
}
