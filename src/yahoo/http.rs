//! Thin read-only client for the Yahoo Fantasy Sports v2 API.
//!
//! Authentication is out of scope here: the external OAuth helper performs
//! the code exchange and token refresh and hands this process a bearer token
//! through `YAHOO_FBB_ACCESS_TOKEN`.

use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::cli::types::keys::{LeagueKey, TeamKey};
use crate::error::{FbbError, Result};

/// Base path for the Yahoo Fantasy Sports v2 API.
pub const FANTASY_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

pub const ACCESS_TOKEN_ENV_VAR: &str = "YAHOO_FBB_ACCESS_TOKEN";

pub struct YahooClient {
    http: Client,
    token: String,
}

impl YahooClient {
    /// Build a client from the token exposed by the OAuth helper.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ACCESS_TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::with_token(token)),
            _ => Err(FbbError::NotConnected {
                env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
            }),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
        }
    }

    /// List the signed-in user's games.
    pub async fn get_games(&self) -> Result<Value> {
        self.get_json("/users;use_login=1/games").await
    }

    /// List leagues across a set of game keys.
    pub async fn get_leagues(&self, game_keys: &[String]) -> Result<Value> {
        let path = format!(
            "/users;use_login=1/games;game_keys={}/leagues",
            game_keys.join(",")
        );
        self.get_json(&path).await
    }

    /// List teams in a league.
    pub async fn get_teams(&self, league: &LeagueKey) -> Result<Value> {
        self.get_json(&format!("/league/{}/teams", league)).await
    }

    /// Fetch the league settings (stat categories and modifiers).
    pub async fn get_league_settings(&self, league: &LeagueKey) -> Result<Value> {
        self.get_json(&format!("/league/{}/settings", league)).await
    }

    /// Fetch league players with stats, optionally scoped by sort type
    /// (e.g. `season`, `lastmonth`) or date.
    pub async fn get_league_players(
        &self,
        league: &LeagueKey,
        sort_type: Option<&str>,
        date: Option<&str>,
    ) -> Result<Value> {
        let mut path = format!("/league/{}/players;out=stats", league);
        if let Some(sort_type) = sort_type {
            path.push_str(&format!(";sort_type={}", sort_type));
        }
        if let Some(date) = date {
            path.push_str(&format!(";date={}", date));
        }
        self.get_json(&path).await
    }

    /// Fetch a team's roster.
    pub async fn get_team_roster(&self, team: &TeamKey) -> Result<Value> {
        self.get_json(&format!("/team/{}/roster", team)).await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let sep = if path.contains('?') { '&' } else { '?' };
        let url = format!("{FANTASY_BASE_URL}{path}{sep}format=json");
        debug!("GET {}", url);

        let res = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(FbbError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json().await?)
    }
}
