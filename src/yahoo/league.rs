//! League and team discovery over the provider's unstable listing shapes.

use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::cli::types::keys::{LeagueKey, TeamKey};
use crate::yahoo::scan::{collect, scalar_string};

#[derive(Debug, Clone)]
pub struct GameInfo {
    pub game_key: String,
    pub code: String,
    pub season: String,
}

#[derive(Debug, Clone)]
pub struct LeagueInfo {
    pub league_key: LeagueKey,
    pub name: String,
    pub league_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TeamInfo {
    pub team_key: TeamKey,
    pub name: String,
    pub nickname: String,
}

/// Every distinct game in a games listing, in traversal order.
pub fn extract_games(payload: &Value) -> Vec<GameInfo> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for o in collect(payload, |o| o.contains_key("game_key")) {
        let Some(game_key) = o.get("game_key").and_then(scalar_string).filter(|s| !s.is_empty())
        else {
            continue;
        };
        if !seen.insert(game_key.clone()) {
            continue;
        }
        out.push(GameInfo {
            code: o
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            season: o.get("season").and_then(scalar_string).unwrap_or_default(),
            game_key,
        });
    }
    out
}

pub fn extract_game_keys(payload: &Value) -> Vec<String> {
    extract_games(payload).into_iter().map(|g| g.game_key).collect()
}

/// Every distinct league in a leagues listing. Entries appear either as a
/// flat object with `league_key` or wrapped under a `league` field; a league
/// is kept only when it also carries a name or a league id.
pub fn extract_leagues(payload: &Value) -> Vec<LeagueInfo> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let holders = collect(payload, |o| {
        o.contains_key("league_key")
            || o.get("league")
                .and_then(Value::as_object)
                .map(|l| l.contains_key("league_key"))
                .unwrap_or(false)
    });
    for o in holders {
        let league: &Map<String, Value> = match o.get("league").and_then(Value::as_object) {
            Some(inner) => inner,
            None => o,
        };
        let Some(key) = league
            .get("league_key")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
        else {
            continue;
        };
        let name = league
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let league_id = league.get("league_id").and_then(scalar_string);
        if name.is_empty() && league_id.is_none() {
            continue;
        }
        if !seen.insert(key.to_string()) {
            continue;
        }
        out.push(LeagueInfo {
            league_key: LeagueKey::new(key),
            name,
            league_id,
        });
    }
    out
}

/// Every distinct team in a teams listing. Team names come back either as a
/// plain string or as an object with `full`/`nickname` fields.
pub fn extract_teams(payload: &Value) -> Vec<TeamInfo> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for o in collect(payload, |o| o.contains_key("team_key")) {
        let Some(key) = o
            .get("team_key")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
        else {
            continue;
        };
        if !seen.insert(key.to_string()) {
            continue;
        }

        let name_str = match o.get("name") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Object(n)) => n
                .get("full")
                .or_else(|| n.get("nickname"))
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            _ => String::new(),
        };
        let name_str = if name_str.is_empty() {
            o.get("team_name")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string()
        } else {
            name_str
        };

        let nick_str = o
            .get("team_name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| match o.get("name") {
                Some(Value::Object(n)) => n
                    .get("nickname")
                    .or_else(|| n.get("full"))
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                _ => None,
            })
            .or_else(|| {
                o.get("nickname")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| name_str.clone());

        out.push(TeamInfo {
            team_key: TeamKey::new(key),
            name: name_str,
            nickname: nick_str,
        });
    }
    out
}

/// The trailing numeric id in a league URL, e.g.
/// `https://basketball.fantasysports.yahoo.com/nba/12345` → `12345`.
pub fn league_id_from_url(url: &str) -> Option<String> {
    url.split('/')
        .map(|seg| seg.split(['?', '#']).next().unwrap_or(""))
        .find(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_owned)
}

/// Pick a league from a listing by URL id or by case-insensitive name.
pub fn find_league<'a>(
    leagues: &'a [LeagueInfo],
    name: Option<&str>,
    url: Option<&str>,
) -> Option<&'a LeagueInfo> {
    if let Some(url) = url {
        let id = league_id_from_url(url)?;
        let suffix = format!(".l.{}", id);
        return leagues.iter().find(|l| {
            l.league_id.as_deref() == Some(id.as_str())
                || l.league_key.as_str().ends_with(&suffix)
        });
    }
    if let Some(name) = name {
        let want = name.trim().to_lowercase();
        return leagues.iter().find(|l| l.name.trim().to_lowercase() == want);
    }
    None
}

/// Filter a teams listing by name (case-insensitive equality or substring on
/// name/nickname) or by exact team key. With no filters, everything passes.
pub fn filter_teams<'a>(
    teams: &'a [TeamInfo],
    names: &[String],
    keys: &[TeamKey],
) -> Vec<&'a TeamInfo> {
    if names.is_empty() && keys.is_empty() {
        return teams.iter().collect();
    }
    let wanted: Vec<String> = names.iter().map(|s| s.trim().to_lowercase()).collect();
    teams
        .iter()
        .filter(|t| {
            let n1 = t.nickname.to_lowercase();
            let n2 = t.name.to_lowercase();
            let hit_eq = wanted.iter().any(|w| *w == n1 || *w == n2);
            let hit_contains = wanted
                .iter()
                .any(|w| (!n1.is_empty() && n1.contains(w)) || (!n2.is_empty() && n2.contains(w)));
            let by_key = keys.iter().any(|k| k == &t.team_key);
            hit_eq || hit_contains || by_key
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_games_distinct() {
        let payload = json!({
            "users": [{"games": [
                {"game": {"game_key": "418", "code": "nba", "season": 2024}},
                {"game": {"game_key": "418", "code": "nba", "season": 2024}},
                {"game": {"game_key": "466", "code": "nba", "season": "2025"}}
            ]}]
        });

        let games = extract_games(&payload);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_key, "418");
        assert_eq!(games[1].season, "2025");
    }

    #[test]
    fn test_extract_leagues_wrapped_and_flat() {
        let payload = json!([
            {"league": {"league_key": "418.l.111", "name": "Main League", "league_id": 111}},
            {"league_key": "418.l.222", "league_id": "222"},
            {"league_key": "418.l.333"}
        ]);

        let leagues = extract_leagues(&payload);
        assert_eq!(leagues.len(), 2);
        assert_eq!(leagues[0].name, "Main League");
        assert_eq!(leagues[0].league_id.as_deref(), Some("111"));
        assert_eq!(leagues[1].league_key.as_str(), "418.l.222");
    }

    #[test]
    fn test_extract_teams_name_shapes() {
        let payload = json!([
            {"team_key": "418.l.111.t.1", "name": "Plain Name"},
            {"team_key": "418.l.111.t.2", "name": {"full": "Full Name", "nickname": "Nick"}},
            {"team_key": "418.l.111.t.3", "team_name": "From Team Name"}
        ]);

        let teams = extract_teams(&payload);
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].name, "Plain Name");
        assert_eq!(teams[0].nickname, "Plain Name");
        assert_eq!(teams[1].name, "Full Name");
        assert_eq!(teams[1].nickname, "Nick");
        assert_eq!(teams[2].nickname, "From Team Name");
    }

    #[test]
    fn test_league_id_from_url() {
        assert_eq!(
            league_id_from_url("https://basketball.fantasysports.yahoo.com/nba/12345"),
            Some("12345".to_string())
        );
        assert_eq!(
            league_id_from_url("https://example.com/nba/12345?mid=1"),
            Some("12345".to_string())
        );
        assert_eq!(league_id_from_url("https://example.com/nba/"), None);
    }

    #[test]
    fn test_find_league_by_url_and_name() {
        let leagues = vec![
            LeagueInfo {
                league_key: LeagueKey::new("418.l.111"),
                name: "Alpha".to_string(),
                league_id: Some("111".to_string()),
            },
            LeagueInfo {
                league_key: LeagueKey::new("418.l.222"),
                name: "Beta League".to_string(),
                league_id: None,
            },
        ];

        let by_url = find_league(&leagues, None, Some("https://x.com/nba/222")).unwrap();
        assert_eq!(by_url.league_key.as_str(), "418.l.222");

        let by_name = find_league(&leagues, Some("beta league"), None).unwrap();
        assert_eq!(by_name.league_key.as_str(), "418.l.222");

        assert!(find_league(&leagues, Some("gamma"), None).is_none());
    }

    #[test]
    fn test_filter_teams() {
        let teams = vec![
            TeamInfo {
                team_key: TeamKey::new("418.l.111.t.1"),
                name: "Ball Hogs".to_string(),
                nickname: "Hogs".to_string(),
            },
            TeamInfo {
                team_key: TeamKey::new("418.l.111.t.2"),
                name: "Dunk Squad".to_string(),
                nickname: "Squad".to_string(),
            },
        ];

        // No filters: everything
        assert_eq!(filter_teams(&teams, &[], &[]).len(), 2);

        // Substring match on name
        let hit = filter_teams(&teams, &["dunk".to_string()], &[]);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, "Dunk Squad");

        // Exact key match
        let hit = filter_teams(&teams, &[], &[TeamKey::new("418.l.111.t.1")]);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].nickname, "Hogs");

        // No match
        assert!(filter_teams(&teams, &["nobody".to_string()], &[]).is_empty());
    }
}
