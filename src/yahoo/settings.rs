//! Stat label and weight resolution from a league settings payload.
//!
//! Yahoo identifies stats by opaque numeric ids; what those ids mean is only
//! recoverable from the human-readable labels in the league's settings. The
//! resolver scans the whole payload for `{stat_id, label}`-shaped objects and
//! assigns each of the eight fixed categories the first entry whose label
//! matches. Categories with no matching label stay unresolved and contribute
//! 0 downstream.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::yahoo::scan::{collect, scalar_f64, scalar_string};

/// The eight stat categories the table knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatCategory {
    GamesPlayed,
    Minutes,
    FantasyPoints,
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
}

impl StatCategory {
    pub const ALL: [StatCategory; 8] = [
        StatCategory::GamesPlayed,
        StatCategory::Minutes,
        StatCategory::FantasyPoints,
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Steals,
        StatCategory::Blocks,
    ];

    pub fn abbr(&self) -> &'static str {
        match self {
            StatCategory::GamesPlayed => "GP",
            StatCategory::Minutes => "MIN",
            StatCategory::FantasyPoints => "FPTS",
            StatCategory::Points => "PTS",
            StatCategory::Rebounds => "REB",
            StatCategory::Assists => "AST",
            StatCategory::Steals => "STL",
            StatCategory::Blocks => "BLK",
        }
    }

    /// Whether an uppercased label denotes this category. The plain-points
    /// rule excludes fantasy-point labels so it stays unambiguous regardless
    /// of traversal order.
    fn matches_label(&self, label: &str) -> bool {
        match self {
            StatCategory::GamesPlayed => label == "GP" || label.contains("GAMES PLAYED"),
            StatCategory::Minutes => label == "MIN" || label.contains("MINUTES"),
            StatCategory::FantasyPoints => label.contains("FANTASY") && label.contains("POINT"),
            StatCategory::Points => {
                label == "PTS" || (label.contains("POINTS") && !label.contains("FANTASY"))
            }
            StatCategory::Rebounds => label == "REB" || label.contains("REBOUNDS"),
            StatCategory::Assists => label == "AST" || label.contains("ASSISTS"),
            StatCategory::Steals => label == "STL" || label.contains("STEALS"),
            StatCategory::Blocks => label == "BLK" || label.contains("BLOCKS"),
        }
    }
}

/// Resolved stat ids per category; 0 to 8 entries.
#[derive(Debug, Clone, Default)]
pub struct StatLabelMap {
    ids: BTreeMap<StatCategory, String>,
}

impl StatLabelMap {
    /// Scan a settings payload and resolve each category to the first
    /// collected `(stat_id, label)` entry whose label matches it.
    pub fn resolve(settings: &Value) -> Self {
        let entries = collect_label_entries(settings);
        let mut ids = BTreeMap::new();
        for cat in StatCategory::ALL {
            if let Some((id, _)) = entries.iter().find(|(_, label)| cat.matches_label(label)) {
                ids.insert(cat, id.clone());
            }
        }
        Self { ids }
    }

    /// The stat id a category resolved to, if any.
    pub fn stat_id(&self, cat: StatCategory) -> Option<&str> {
        self.ids.get(&cat).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCategory, &str)> {
        self.ids.iter().map(|(cat, id)| (*cat, id.as_str()))
    }
}

/// Linear fantasy-point weights per stat id, used when the league exposes no
/// direct fantasy-points stat.
#[derive(Debug, Clone, Default)]
pub struct StatWeightMap {
    weights: BTreeMap<String, f64>,
}

impl StatWeightMap {
    /// Collect every scanned object exposing both a `stat_id` and a numeric
    /// `value` field (Yahoo serializes the value as a string).
    pub fn resolve(settings: &Value) -> Self {
        let mut weights = BTreeMap::new();
        let holders = collect(settings, |o| {
            o.contains_key("stat_id")
                && o.get("value").map(|v| scalar_f64(v).is_some()).unwrap_or(false)
        });
        for o in holders {
            let id = o.get("stat_id").and_then(scalar_string);
            let value = o.get("value").and_then(scalar_f64);
            if let (Some(id), Some(value)) = (id, value) {
                weights.insert(id, value);
            }
        }
        Self { weights }
    }

    pub fn get(&self, stat_id: &str) -> Option<f64> {
        self.weights.get(stat_id).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Every `(stat_id, uppercased label)` pair in the payload, in traversal
/// order. The label is taken from the display name, the primary name, or the
/// abbreviation, whichever appears first.
fn collect_label_entries(settings: &Value) -> Vec<(String, String)> {
    collect(settings, |o| o.contains_key("stat_id") && label_of(o).is_some())
        .into_iter()
        .filter_map(|o| {
            let id = o.get("stat_id").and_then(scalar_string)?;
            let label = label_of(o)?;
            Some((id, label.to_uppercase()))
        })
        .collect()
}

fn label_of(o: &Map<String, Value>) -> Option<String> {
    ["display_name", "name", "abbr"]
        .iter()
        .filter_map(|key| o.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}
