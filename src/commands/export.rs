//! CSV export of reconciled team rosters.
//!
//! Projects the whole league player list once, indexes it by id and by
//! normalized name, then walks each selected team's roster and resolves
//! every roster entry against that index. A roster entry missing from the
//! index is projected from the roster object itself as a last resort.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use crate::{
    cli::types::keys::TeamKey,
    cli::LeagueSelect,
    commands::resolve_league,
    error::FbbError,
    storage::models::PlayerRow,
    yahoo::http::YahooClient,
    yahoo::league::{extract_teams, filter_teams},
    yahoo::project::{extract_players, project_player},
    yahoo::roster::normalize_name,
    yahoo::settings::{StatLabelMap, StatWeightMap},
    yahoo::settings_cache::load_or_fetch_league_settings,
    Result,
};

/// Configuration parameters for the export command.
#[derive(Debug)]
pub struct ExportParams {
    pub select: LeagueSelect,
    pub team_names: Vec<String>,
    pub team_keys: Vec<TeamKey>,
    pub limit: usize,
    pub budget: Option<f64>,
    pub metric: String,
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportRow {
    team: String,
    team_key: String,
    player_id: String,
    name: String,
    pos: String,
    team_abbr: String,
    gp: String,
    fpts_total: String,
    fpts_avg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

/// Handle the export command.
pub async fn handle_export(params: ExportParams) -> Result<()> {
    let limit = params.limit.clamp(1, 20);
    let client = YahooClient::from_env()?;
    let league = resolve_league(&client, &params.select).await?;

    println!("Loading league scoring settings...");
    let settings = load_or_fetch_league_settings(&client, &league, false).await?;
    let labels = StatLabelMap::resolve(&settings);
    let weights = StatWeightMap::resolve(&settings);

    println!("Fetching players for {}...", league);
    let players_payload = client.get_league_players(&league, None, None).await?;
    let league_rows: Vec<PlayerRow> = extract_players(&players_payload)
        .into_iter()
        .map(|p| project_player(p, &labels, &weights))
        .collect();

    let mut by_id: HashMap<&str, &PlayerRow> = HashMap::new();
    let mut by_name: HashMap<String, &PlayerRow> = HashMap::new();
    for row in &league_rows {
        if !row.player_id.is_empty() {
            by_id.insert(row.player_id.as_str(), row);
        }
        let key = normalize_name(&row.name);
        if !key.is_empty() {
            by_name.insert(key, row);
        }
    }

    let teams_payload = client.get_teams(&league).await?;
    let teams = extract_teams(&teams_payload);
    let mut selected = filter_teams(&teams, &params.team_names, &params.team_keys);
    selected.truncate(limit);
    if selected.is_empty() {
        return Err(FbbError::TeamNotFound {
            query: params.team_names.join(", "),
        });
    }

    // Rosters are fetched strictly sequentially; later requests depend on
    // nothing, but the provider rate-limits bursts.
    let mut resolved: Vec<(String, String, PlayerRow)> = Vec::new();
    for team in &selected {
        let roster = client.get_team_roster(&team.team_key).await?;
        for player in extract_players(&roster) {
            let row = lookup(player, &by_id, &by_name)
                .cloned()
                .unwrap_or_else(|| project_player(player, &labels, &weights));
            resolved.push((team.nickname.clone(), team.team_key.to_string(), row));
        }
    }

    let values = budget_values(&resolved, params.budget, &params.metric);

    let export_rows: Vec<ExportRow> = resolved
        .iter()
        .zip(values.iter())
        .map(|((team, team_key, row), value)| ExportRow {
            team: team.clone(),
            team_key: team_key.clone(),
            player_id: row.player_id.clone(),
            name: row.name.clone(),
            pos: row.position.clone(),
            team_abbr: row.team.clone(),
            gp: format!("{}", row.games_played),
            fpts_total: format!("{:.2}", row.fantasy_points),
            fpts_avg: format!("{:.2}", fpts_avg(row)),
            value: value.map(|v| format!("{:.2}", v)),
        })
        .collect();

    let mut writer: csv::Writer<Box<dyn Write>> = match &params.out {
        Some(path) => csv::Writer::from_writer(Box::new(std::fs::File::create(path)?)),
        None => csv::Writer::from_writer(Box::new(std::io::stdout())),
    };
    for row in &export_rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    if let Some(path) = &params.out {
        println!("✓ Exported {} players to {}", export_rows.len(), path.display());
    }

    Ok(())
}

fn lookup<'a>(
    player: &serde_json::Value,
    by_id: &HashMap<&str, &'a PlayerRow>,
    by_name: &HashMap<String, &'a PlayerRow>,
) -> Option<&'a PlayerRow> {
    use crate::yahoo::scan::scalar_string;

    let pid = ["player_id", "editorial_player_id"]
        .iter()
        .find_map(|key| {
            player
                .get(*key)
                .and_then(|v| scalar_string(v))
                .filter(|s| !s.is_empty())
        });
    if let Some(pid) = pid {
        if let Some(row) = by_id.get(pid.as_str()) {
            return Some(*row);
        }
    }

    let name = player
        .get("name")
        .and_then(|n| n.get("full"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or("");
    if name.is_empty() {
        return None;
    }
    by_name.get(&normalize_name(name)).copied()
}

/// Per-game average; when games played is missing the raw value already is
/// per-game.
fn fpts_avg(row: &PlayerRow) -> f64 {
    if row.games_played > 0.0 {
        row.fantasy_points / row.games_played
    } else {
        row.fantasy_points
    }
}

/// Distribute `budget` over the rows proportionally to the chosen metric.
/// `None` entries mean no value column.
fn budget_values(
    rows: &[(String, String, PlayerRow)],
    budget: Option<f64>,
    metric: &str,
) -> Vec<Option<f64>> {
    let Some(budget) = budget.filter(|b| b.is_finite() && *b > 0.0) else {
        return vec![None; rows.len()];
    };
    let use_total = metric.eq_ignore_ascii_case("total");
    let metric_of = |row: &PlayerRow| {
        if use_total {
            row.fantasy_points
        } else {
            fpts_avg(row)
        }
    };
    let sum: f64 = rows.iter().map(|(_, _, row)| metric_of(row)).sum();
    if sum <= 0.0 {
        return vec![None; rows.len()];
    }
    rows.iter()
        .map(|(_, _, row)| Some(budget * (metric_of(row) / sum)))
        .collect()
}
