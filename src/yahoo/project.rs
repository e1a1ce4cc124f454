//! Projection of raw Yahoo player records into normalized stat rows.
//!
//! Player payloads vary by endpoint: stats may sit directly under a `stats`
//! list or one level deeper under `stats.stats`, entries may or may not be
//! wrapped in a `stat` object, and values arrive as strings as often as
//! numbers. Nothing here raises on a malformed record; every missing or
//! non-numeric field degrades to 0 or an empty string.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::storage::models::PlayerRow;
use crate::yahoo::roster::normalize_name;
use crate::yahoo::scan::{collect, scalar_f64, scalar_string};
use crate::yahoo::settings::{StatCategory, StatLabelMap, StatWeightMap};

/// Every player record in a league-players or roster payload.
pub fn extract_players(payload: &Value) -> Vec<&Value> {
    collect(payload, |o| {
        o.get("player").map(player_like).unwrap_or(false)
    })
    .into_iter()
    .filter_map(|o| o.get("player"))
    .collect()
}

fn player_like(v: &Value) -> bool {
    let Some(p) = v.as_object() else {
        return false;
    };
    let has_id = p
        .get("player_id")
        .and_then(scalar_string)
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    let has_name = p
        .get("name")
        .and_then(|n| n.get("full"))
        .and_then(Value::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    has_id || has_name
}

/// Flatten every `(stat_id, value)` pair found in the record into one lookup
/// table. When the same stat id appears in multiple bins the last write wins.
pub fn flatten_stats(player: &Value) -> BTreeMap<String, f64> {
    let mut bins: Vec<&Vec<Value>> = Vec::new();
    for o in collect(player, |o| o.contains_key("stats")) {
        match o.get("stats") {
            Some(Value::Array(items)) => bins.push(items),
            Some(Value::Object(inner)) => {
                if let Some(Value::Array(items)) = inner.get("stats") {
                    bins.push(items);
                }
            }
            _ => {}
        }
    }

    let mut table = BTreeMap::new();
    for bin in bins {
        for item in bin {
            let entry = item.get("stat").unwrap_or(item);
            let Some(obj) = entry.as_object() else {
                continue;
            };
            let Some(id) = obj.get("stat_id").and_then(scalar_string) else {
                continue;
            };
            let value = obj.get("value").and_then(scalar_f64).unwrap_or(0.0);
            table.insert(id, value);
        }
    }
    table
}

/// Convert one raw player record into a [`PlayerRow`].
///
/// Identity falls back from the numeric player id to the editorial id to a
/// synthetic id derived from the normalized name; the last tier can collide
/// for two differently-spelled records of the same normalized name.
pub fn project_player(player: &Value, labels: &StatLabelMap, weights: &StatWeightMap) -> PlayerRow {
    let name = display_name(player);
    let player_id = ["player_id", "editorial_player_id"]
        .iter()
        .find_map(|key| {
            player
                .get(*key)
                .and_then(scalar_string)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| normalize_name(&name));

    let team = ["editorial_team_abbr", "editorial_team_full_name"]
        .iter()
        .filter_map(|key| player.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or("")
        .to_string();

    let position = match player.get("display_position").and_then(Value::as_str) {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => eligible_positions(player).join(","),
    };

    let stats = flatten_stats(player);
    let stat = |cat: StatCategory| -> f64 {
        labels
            .stat_id(cat)
            .and_then(|id| stats.get(id))
            .copied()
            .unwrap_or(0.0)
    };

    let fantasy_points = match labels
        .stat_id(StatCategory::FantasyPoints)
        .and_then(|id| stats.get(id))
    {
        Some(direct) => *direct,
        None if !weights.is_empty() => stats
            .iter()
            .filter_map(|(id, value)| weights.get(id).map(|w| w * value))
            .sum(),
        None => 0.0,
    };

    PlayerRow {
        games_played: stat(StatCategory::GamesPlayed),
        minutes: stat(StatCategory::Minutes),
        points: stat(StatCategory::Points),
        rebounds: stat(StatCategory::Rebounds),
        assists: stat(StatCategory::Assists),
        steals: stat(StatCategory::Steals),
        blocks: stat(StatCategory::Blocks),
        fantasy_points,
        player_id,
        name,
        team,
        position,
    }
}

fn display_name(player: &Value) -> String {
    match player.get("name") {
        Some(Value::Object(n)) => n
            .get("full")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn eligible_positions(player: &Value) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(Value::Array(items)) = player.get("eligible_positions") {
        for item in items {
            match item {
                Value::String(s) => out.push(s.clone()),
                Value::Object(o) => {
                    if let Some(p) = o.get("position").and_then(Value::as_str) {
                        out.push(p.to_string());
                    }
                }
                _ => {}
            }
        }
    }
    out
}
