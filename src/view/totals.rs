//! Per-category totals over a subset of players.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::storage::models::PlayerRow;

/// Summed stat categories for a set of players, e.g. "my roster".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterTotals {
    pub count: usize,
    pub fantasy_points: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub minutes: f64,
}

/// Sum the stat categories of every row whose id is in `ids`. Ids with no
/// matching row are ignored; the empty set yields all-zero totals.
pub fn totals(rows: &[PlayerRow], ids: &BTreeSet<String>) -> RosterTotals {
    let mut t = RosterTotals::default();
    for row in rows {
        if !ids.contains(&row.player_id) {
            continue;
        }
        t.count += 1;
        t.fantasy_points += row.fantasy_points;
        t.points += row.points;
        t.rebounds += row.rebounds;
        t.assists += row.assists;
        t.steals += row.steals;
        t.blocks += row.blocks;
        t.minutes += row.minutes;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<PlayerRow> {
        vec![
            PlayerRow {
                player_id: "1".to_string(),
                fantasy_points: 50.0,
                points: 30.0,
                rebounds: 8.0,
                assists: 4.0,
                steals: 1.0,
                blocks: 0.5,
                minutes: 36.0,
                ..PlayerRow::default()
            },
            PlayerRow {
                player_id: "2".to_string(),
                fantasy_points: 40.0,
                points: 20.0,
                rebounds: 10.0,
                assists: 2.0,
                steals: 2.0,
                blocks: 1.5,
                minutes: 32.0,
                ..PlayerRow::default()
            },
        ]
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let t = totals(&rows(), &BTreeSet::new());
        assert_eq!(t, RosterTotals::default());
        assert_eq!(t.count, 0);
    }

    #[test]
    fn test_sums_over_members_only() {
        let ids: BTreeSet<String> = ["1"].iter().map(|s| s.to_string()).collect();
        let t = totals(&rows(), &ids);
        assert_eq!(t.count, 1);
        assert_eq!(t.fantasy_points, 50.0);
        assert_eq!(t.rebounds, 8.0);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let ids: BTreeSet<String> = ["1", "2", "404"].iter().map(|s| s.to_string()).collect();
        let t = totals(&rows(), &ids);
        assert_eq!(t.count, 2);
        assert_eq!(t.fantasy_points, 90.0);
        assert_eq!(t.points, 50.0);
        assert_eq!(t.rebounds, 18.0);
        assert_eq!(t.assists, 6.0);
        assert_eq!(t.steals, 3.0);
        assert_eq!(t.blocks, 2.0);
        assert_eq!(t.minutes, 68.0);
    }
}
