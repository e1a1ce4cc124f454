//! Roster identity matching.
//!
//! Roster payloads usually carry numeric player ids, but some shapes come
//! back with bare display names only. Matching is therefore two-tier: ids
//! when any are present, otherwise normalized names against the local
//! dataset. Ids with no matching local row are kept anyway; they simply
//! never render.

use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::storage::models::PlayerRow;
use crate::yahoo::scan::{collect, scalar_string};

/// Canonical form used everywhere names are compared: lowercase, keep only
/// ASCII letters and whitespace, collapse whitespace runs, trim.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Every distinct numeric player id found anywhere in the payload, in
/// traversal order.
pub fn extract_roster_ids(payload: &Value) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for o in collect(payload, |o| o.contains_key("player_id")) {
        if let Some(id) = o.get("player_id").and_then(numeric_id) {
            if seen.insert(id.clone()) {
                out.push(id);
            }
        }
    }
    out
}

fn numeric_id(v: &Value) -> Option<String> {
    match v {
        Value::Number(_) => scalar_string(v),
        Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
            Some(s.clone())
        }
        _ => None,
    }
}

/// Every full-name string in the payload, from either known nesting shape:
/// a `name` object with a `full` field, or a bare `name` string.
pub fn extract_roster_names(payload: &Value) -> Vec<String> {
    collect(payload, |o| o.contains_key("name"))
        .into_iter()
        .filter_map(|o| match o.get("name") {
            Some(Value::Object(n)) => n.get("full").and_then(Value::as_str).map(str::to_owned),
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Determine which local rows belong to the fetched roster.
///
/// When the payload carries numeric ids, the result is exactly that id set;
/// otherwise names are normalized and looked up against the dataset, and a
/// name with no match is silently dropped.
pub fn match_roster(payload: &Value, rows: &[PlayerRow]) -> BTreeSet<String> {
    let ids = extract_roster_ids(payload);
    if !ids.is_empty() {
        return ids.into_iter().collect();
    }

    let mut by_name: HashMap<String, &str> = HashMap::new();
    for row in rows {
        let key = normalize_name(&row.name);
        if !key.is_empty() {
            by_name.insert(key, row.player_id.as_str());
        }
    }

    extract_roster_names(payload)
        .into_iter()
        .filter_map(|name| {
            by_name
                .get(&normalize_name(&name))
                .map(|id| (*id).to_string())
        })
        .collect()
}
