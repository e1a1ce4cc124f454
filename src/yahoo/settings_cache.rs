// src/yahoo/settings_cache.rs
use log::debug;
use serde_json::Value;
use std::path::PathBuf;

use crate::cli::types::keys::LeagueKey;
use crate::error::Result;
use crate::storage::persist::{try_read_to_string, write_string};
use crate::yahoo::http::YahooClient;

/// Path: ~/.cache/yahoo-fbb/league-settings_{key}.json
pub fn league_settings_path(league: &LeagueKey) -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("yahoo-fbb")
        .join(format!("league-settings_{}.json", sanitize(league.as_str())))
}

fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Try to load league settings from the cache first. If missing, unreadable,
/// or `refresh == true`, fetch from Yahoo and re-write the cache.
pub async fn load_or_fetch_league_settings(
    client: &YahooClient,
    league: &LeagueKey,
    refresh: bool,
) -> Result<Value> {
    let path = league_settings_path(league);

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(&path) {
            if let Ok(cached) = serde_json::from_str::<Value>(&s) {
                debug!("league settings cache hit: {}", path.display());
                return Ok(cached);
            }
        }
    }

    // 2) Fetch the raw settings payload
    let payload = client.get_league_settings(league).await?;

    // 3) Write the cache so future reads skip the network
    if let Ok(json_str) = serde_json::to_string_pretty(&payload) {
        let _ = write_string(&path, &json_str);
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_settings_path() {
        let league = LeagueKey::new("nba.l.12345");
        let path = league_settings_path(&league);
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("yahoo-fbb"));
        assert!(path_str.contains("league-settings_nba.l.12345.json"));
    }

    #[test]
    fn test_sanitize_strips_path_characters() {
        assert_eq!(sanitize("nba.l.12345"), "nba.l.12345");
        assert_eq!(sanitize("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize("a b"), "a_b");
    }
}
