//! Sort configuration for the player table.

use crate::error::FbbError;
use crate::storage::models::PlayerRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The table column used for ordering visible rows.
///
/// Wire names match the dataset field names so a persisted filter record
/// reads naturally next to the dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "team")]
    Team,
    #[serde(rename = "pos")]
    Position,
    #[serde(rename = "gp")]
    GamesPlayed,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "fpts")]
    FantasyPoints,
    #[serde(rename = "pts")]
    Points,
    #[serde(rename = "reb")]
    Rebounds,
    #[serde(rename = "ast")]
    Assists,
    #[serde(rename = "stl")]
    Steals,
    #[serde(rename = "blk")]
    Blocks,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Team => "team",
            SortKey::Position => "pos",
            SortKey::GamesPlayed => "gp",
            SortKey::Minutes => "min",
            SortKey::FantasyPoints => "fpts",
            SortKey::Points => "pts",
            SortKey::Rebounds => "reb",
            SortKey::Assists => "ast",
            SortKey::Steals => "stl",
            SortKey::Blocks => "blk",
        }
    }

    /// Ascending comparison of two rows on this key. Numeric fields compare
    /// numerically with incomparable values treated as equal, so a stable
    /// sort keeps their original relative order.
    pub fn compare(&self, a: &PlayerRow, b: &PlayerRow) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Team => a.team.cmp(&b.team),
            SortKey::Position => a.position.cmp(&b.position),
            SortKey::GamesPlayed => cmp_f64(a.games_played, b.games_played),
            SortKey::Minutes => cmp_f64(a.minutes, b.minutes),
            SortKey::FantasyPoints => cmp_f64(a.fantasy_points, b.fantasy_points),
            SortKey::Points => cmp_f64(a.points, b.points),
            SortKey::Rebounds => cmp_f64(a.rebounds, b.rebounds),
            SortKey::Assists => cmp_f64(a.assists, b.assists),
            SortKey::Steals => cmp_f64(a.steals, b.steals),
            SortKey::Blocks => cmp_f64(a.blocks, b.blocks),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::FantasyPoints
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FbbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "player" => Ok(SortKey::Name),
            "team" => Ok(SortKey::Team),
            "pos" | "position" => Ok(SortKey::Position),
            "gp" => Ok(SortKey::GamesPlayed),
            "min" => Ok(SortKey::Minutes),
            "fpts" => Ok(SortKey::FantasyPoints),
            "pts" => Ok(SortKey::Points),
            "reb" => Ok(SortKey::Rebounds),
            "ast" => Ok(SortKey::Assists),
            "stl" => Ok(SortKey::Steals),
            "blk" => Ok(SortKey::Blocks),
            _ => Err(FbbError::UnknownSortKey { key: s.to_string() }),
        }
    }
}

/// Sort direction; descending is the draft-board default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Default for SortDir {
    fn default() -> Self {
        SortDir::Descending
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortDir::Ascending => "asc",
            SortDir::Descending => "desc",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortDir {
    type Err = FbbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDir::Ascending),
            "desc" | "descending" => Ok(SortDir::Descending),
            _ => Err(FbbError::UnknownSortDirection {
                value: s.to_string(),
            }),
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, fpts: f64) -> PlayerRow {
        PlayerRow {
            player_id: "1".to_string(),
            name: name.to_string(),
            fantasy_points: fpts,
            ..PlayerRow::default()
        }
    }

    #[test]
    fn test_sort_key_round_trip() {
        for token in [
            "name", "team", "pos", "gp", "min", "fpts", "pts", "reb", "ast", "stl", "blk",
        ] {
            let key: SortKey = token.parse().unwrap();
            assert_eq!(key.as_str(), token);
        }
        assert!("fieldgoals".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_dir_parsing() {
        assert_eq!("ASC".parse::<SortDir>().unwrap(), SortDir::Ascending);
        assert_eq!("desc".parse::<SortDir>().unwrap(), SortDir::Descending);
        assert!("sideways".parse::<SortDir>().is_err());
    }

    #[test]
    fn test_numeric_compare() {
        let a = row("A", 10.0);
        let b = row("B", 20.0);
        assert_eq!(SortKey::FantasyPoints.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::FantasyPoints.compare(&b, &a), Ordering::Greater);
        assert_eq!(SortKey::FantasyPoints.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_string_compare() {
        let a = row("Adams", 0.0);
        let b = row("Brown", 0.0);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortKey::FantasyPoints).unwrap(),
            "\"fpts\""
        );
        assert_eq!(
            serde_json::to_string(&SortDir::Descending).unwrap(),
            "\"desc\""
        );
        let key: SortKey = serde_json::from_str("\"reb\"").unwrap();
        assert_eq!(key, SortKey::Rebounds);
    }
}
