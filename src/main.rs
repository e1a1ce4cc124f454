//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use yahoo_fbb::{
    cli::{Commands, Fbb},
    commands::{
        discover::{handle_games, handle_leagues, handle_teams},
        draft::handle_draft,
        export::{handle_export, ExportParams},
        league_data::handle_league_data,
        players::{handle_players, PlayersParams},
        roster::{handle_roster, RosterParams},
        sync::{handle_import, handle_sync},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    sensible_env_logger::init!();
    let app = Fbb::parse();

    match app.command {
        Commands::League {
            select,
            refresh,
            verbose,
        } => handle_league_data(select, refresh, verbose).await?,

        Commands::Sync {
            select,
            sort_type,
            date,
            refresh,
        } => handle_sync(select, sort_type, date, refresh).await?,

        Commands::Import { file } => handle_import(file)?,

        Commands::Players {
            data,
            query,
            pos,
            hide_drafted,
            sort,
            direction,
            only_roster,
            highlight_roster,
            json,
        } => handle_players(PlayersParams {
            data,
            query,
            pos,
            hide_drafted,
            sort,
            direction,
            only_roster,
            highlight_roster,
            as_json: json,
        })?,

        Commands::Draft { ids, clear, yes } => handle_draft(ids, clear, yes)?,

        Commands::Roster {
            select,
            team,
            team_name,
            only_roster,
            highlight_roster,
            json,
        } => {
            handle_roster(RosterParams {
                select,
                team,
                team_name,
                only_roster,
                highlight_roster,
                as_json: json,
            })
            .await?
        }

        Commands::Games => handle_games().await?,

        Commands::Leagues { game_keys } => handle_leagues(game_keys).await?,

        Commands::Teams { select } => handle_teams(select).await?,

        Commands::Export {
            select,
            team_name,
            team_key,
            limit,
            budget,
            metric,
            out,
        } => {
            handle_export(ExportParams {
                select,
                team_names: team_name.unwrap_or_default(),
                team_keys: team_key.unwrap_or_default(),
                limit,
                budget,
                metric,
                out,
            })
            .await?
        }
    }

    Ok(())
}
