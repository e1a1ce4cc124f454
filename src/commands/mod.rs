//! Command implementations for the draft helper CLI

pub mod discover;
pub mod draft;
pub mod export;
pub mod league_data;
pub mod players;
pub mod roster;
pub mod sync;

use crate::{
    cli::types::keys::LeagueKey,
    cli::LeagueSelect,
    error::{FbbError, Result},
    yahoo::http::YahooClient,
    yahoo::league::{extract_game_keys, extract_leagues, find_league},
    LEAGUE_KEY_ENV_VAR,
};

/// Resolve the target league from an explicit key, the env var, or a
/// URL/name lookup against the user's leagues.
pub async fn resolve_league(client: &YahooClient, select: &LeagueSelect) -> Result<LeagueKey> {
    if let Some(key) = &select.league {
        return Ok(key.clone());
    }

    if select.league_url.is_some() || select.league_name.is_some() {
        let games = client.get_games().await?;
        let game_keys = extract_game_keys(&games);
        if game_keys.is_empty() {
            return Err(FbbError::LeagueNotFound {
                query: "no games for this account".to_string(),
            });
        }
        let leagues_payload = client.get_leagues(&game_keys).await?;
        let leagues = extract_leagues(&leagues_payload);
        let found = find_league(
            &leagues,
            select.league_name.as_deref(),
            select.league_url.as_deref(),
        );
        return match found {
            Some(league) => Ok(league.league_key.clone()),
            None => Err(FbbError::LeagueNotFound {
                query: select
                    .league_url
                    .clone()
                    .or_else(|| select.league_name.clone())
                    .unwrap_or_default(),
            }),
        };
    }

    match std::env::var(LEAGUE_KEY_ENV_VAR) {
        Ok(value) => value.parse(),
        Err(_) => Err(FbbError::MissingLeagueKey {
            env_var: LEAGUE_KEY_ENV_VAR.to_string(),
        }),
    }
}
