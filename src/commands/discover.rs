//! Discovery listings: games, leagues, teams.

use crate::{
    cli::LeagueSelect,
    commands::resolve_league,
    yahoo::http::YahooClient,
    yahoo::league::{extract_game_keys, extract_games, extract_leagues, extract_teams},
    Result,
};

/// List the signed-in user's games.
pub async fn handle_games() -> Result<()> {
    let client = YahooClient::from_env()?;
    let payload = client.get_games().await?;
    let games = extract_games(&payload);

    if games.is_empty() {
        println!("No games found for this account.");
        return Ok(());
    }
    for g in games {
        println!("{:<8} {:<6} {}", g.game_key, g.code, g.season);
    }
    Ok(())
}

/// List leagues across the user's games (or an explicit set of game keys).
pub async fn handle_leagues(game_keys: Option<Vec<String>>) -> Result<()> {
    let client = YahooClient::from_env()?;
    let keys = match game_keys {
        Some(keys) if !keys.is_empty() => keys,
        _ => {
            let games = client.get_games().await?;
            extract_game_keys(&games)
        }
    };
    if keys.is_empty() {
        println!("No games found for this account.");
        return Ok(());
    }

    let payload = client.get_leagues(&keys).await?;
    let leagues = extract_leagues(&payload);

    if leagues.is_empty() {
        println!("No leagues found.");
        return Ok(());
    }
    for l in leagues {
        println!("{:<16} {}", l.league_key, l.name);
    }
    Ok(())
}

/// List teams in a league.
pub async fn handle_teams(select: LeagueSelect) -> Result<()> {
    let client = YahooClient::from_env()?;
    let league = resolve_league(&client, &select).await?;
    let payload = client.get_teams(&league).await?;
    let teams = extract_teams(&payload);

    if teams.is_empty() {
        println!("No teams found in {}.", league);
        return Ok(());
    }
    for t in teams {
        println!("{:<20} {}", t.team_key, t.nickname);
    }
    Ok(())
}
