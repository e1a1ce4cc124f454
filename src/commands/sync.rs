//! Dataset replacement: live sync from Yahoo, or import from a local file.
//!
//! Both paths replace the stored dataset wholesale. Nothing is written until
//! the new rows exist, so a failed fetch leaves the prior dataset untouched.

use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::{
    cli::LeagueSelect,
    commands::resolve_league,
    error::FbbError,
    storage::models::PlayerRow,
    storage::persist::StateFiles,
    yahoo::http::YahooClient,
    yahoo::project::{extract_players, project_player},
    yahoo::settings::{StatLabelMap, StatWeightMap},
    yahoo::settings_cache::load_or_fetch_league_settings,
    Result,
};

/// Handle the sync command: fetch settings and league players, project them
/// into rows, and store the result as the current dataset.
pub async fn handle_sync(
    select: LeagueSelect,
    sort_type: Option<String>,
    date: Option<String>,
    refresh: bool,
) -> Result<()> {
    let client = YahooClient::from_env()?;
    let league = resolve_league(&client, &select).await?;

    println!("Loading league scoring settings...");
    let settings = load_or_fetch_league_settings(&client, &league, refresh).await?;
    let labels = StatLabelMap::resolve(&settings);
    let weights = StatWeightMap::resolve(&settings);
    if labels.is_empty() && weights.is_empty() {
        println!("⚠ No stat labels or weights resolved; fantasy points will be 0");
    }

    println!("Fetching players for {}...", league);
    let payload = client
        .get_league_players(&league, sort_type.as_deref(), date.as_deref())
        .await?;
    let players = extract_players(&payload);
    if players.is_empty() {
        return Err(FbbError::NoData);
    }

    println!("Projecting {} players...", players.len());
    let projected: Vec<PlayerRow> = players
        .par_iter()
        .map(|p| project_player(p, &labels, &weights))
        .collect();
    let rows = dedup_rows(projected);

    let files = StateFiles::open();
    files.save_dataset(&rows)?;
    println!(
        "✓ Synced {} players to {}",
        rows.len(),
        files.dataset_path().display()
    );

    Ok(())
}

/// Handle the import command: replace the stored dataset from a local JSON
/// file of player rows.
pub fn handle_import(file: PathBuf) -> Result<()> {
    let contents = std::fs::read_to_string(&file)?;
    let rows: Vec<PlayerRow> = serde_json::from_str(&contents)?;
    let rows = dedup_rows(rows);

    let files = StateFiles::open();
    files.save_dataset(&rows)?;
    println!("✓ Imported {} players from {}", rows.len(), file.display());

    Ok(())
}

/// Enforce the unique-id invariant of the dataset: a repeated id keeps its
/// first position but the last projected values.
fn dedup_rows(rows: Vec<PlayerRow>) -> Vec<PlayerRow> {
    let total = rows.len();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<PlayerRow> = Vec::with_capacity(total);
    for row in rows {
        match index.get(&row.player_id) {
            Some(&i) => out[i] = row,
            None => {
                index.insert(row.player_id.clone(), out.len());
                out.push(row);
            }
        }
    }
    if out.len() < total {
        debug!("dropped {} duplicate player ids", total - out.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, fpts: f64) -> PlayerRow {
        PlayerRow {
            player_id: id.to_string(),
            fantasy_points: fpts,
            ..PlayerRow::default()
        }
    }

    #[test]
    fn test_dedup_keeps_first_position_last_value() {
        let rows = vec![row("1", 10.0), row("2", 20.0), row("1", 30.0)];
        let out = dedup_rows(rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].player_id, "1");
        assert_eq!(out[0].fantasy_points, 30.0);
        assert_eq!(out[1].player_id, "2");
    }

    #[test]
    fn test_dedup_no_duplicates_is_identity() {
        let rows = vec![row("1", 10.0), row("2", 20.0)];
        let out = dedup_rows(rows.clone());
        assert_eq!(out, rows);
    }
}
