//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::keys::{LeagueKey, TeamKey};
use types::sort::{SortDir, SortKey};

/// League selection arguments shared between commands
#[derive(Debug, Args)]
pub struct LeagueSelect {
    /// League key, e.g. `nba.l.12345` (or set `YAHOO_FBB_LEAGUE_KEY` env var).
    #[clap(long, short)]
    pub league: Option<LeagueKey>,

    /// Resolve the league by its public URL (trailing numeric id).
    #[clap(long)]
    pub league_url: Option<String>,

    /// Resolve the league by case-insensitive name.
    #[clap(long)]
    pub league_name: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-fbb", about = "Yahoo fantasy basketball draft helper")]
pub struct Fbb {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and cache league scoring settings
    League {
        #[clap(flatten)]
        select: LeagueSelect,

        /// Force refresh from Yahoo, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Print the cache path and the resolved stat categories when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Replace the local dataset with live league player averages.
    ///
    /// Fetches league settings and `/players;out=stats`, resolves stat
    /// labels, projects every player into a flat stat row, and stores the
    /// result as the current dataset.
    Sync {
        #[clap(flatten)]
        select: LeagueSelect,

        /// Yahoo stat scope, e.g. `season`, `average_season`, `lastmonth`.
        #[clap(long)]
        sort_type: Option<String>,

        /// Stat date (YYYY-MM-DD) for date-scoped stats.
        #[clap(long)]
        date: Option<String>,

        /// Force refresh of cached league settings.
        #[clap(long)]
        refresh: bool,
    },

    /// Replace the local dataset from a season-averages JSON file.
    Import {
        /// Path to a JSON array of player rows.
        file: PathBuf,
    },

    /// Show the player table with the persisted filters.
    ///
    /// Any filter flag given here updates the persisted configuration before
    /// rendering, so it sticks for future runs.
    Players {
        /// Read the dataset from this file instead of the stored one.
        #[clap(long)]
        data: Option<PathBuf>,

        /// Substring filter on player name or team (persisted).
        #[clap(long, short)]
        query: Option<String>,

        /// Substring filter on position, e.g. PG (persisted).
        #[clap(long, short)]
        pos: Option<String>,

        /// Hide drafted players: true or false (persisted).
        #[clap(long)]
        hide_drafted: Option<bool>,

        /// Sort column: name, team, pos, gp, min, fpts, pts, reb, ast, stl, blk (persisted).
        #[clap(long, short)]
        sort: Option<SortKey>,

        /// Sort direction: asc or desc (persisted).
        #[clap(long, short = 'd')]
        direction: Option<SortDir>,

        /// Show only players on the loaded roster: true or false (persisted).
        #[clap(long)]
        only_roster: Option<bool>,

        /// Mark roster players in the table: true or false (persisted).
        #[clap(long)]
        highlight_roster: Option<bool>,

        /// Output rows as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Toggle drafted status for player ids, or clear the whole set.
    Draft {
        /// Player ids to toggle.
        ids: Vec<String>,

        /// Clear the drafted set instead of toggling.
        #[clap(long)]
        clear: bool,

        /// Confirm clearing; without it `--clear` is a no-op.
        #[clap(long)]
        yes: bool,
    },

    /// Load a team roster, match it against the dataset, and show it.
    Roster {
        #[clap(flatten)]
        select: LeagueSelect,

        /// Team key, e.g. `nba.l.12345.t.3`.
        #[clap(long, short)]
        team: Option<TeamKey>,

        /// Pick the team by name or nickname (case-insensitive substring).
        #[clap(long)]
        team_name: Option<String>,

        /// Show only roster players: true or false (persisted).
        #[clap(long)]
        only_roster: Option<bool>,

        /// Mark roster players in the table: true or false (persisted).
        #[clap(long)]
        highlight_roster: Option<bool>,

        /// Output rows and totals as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// List the signed-in user's games.
    Games,

    /// List leagues across the user's games.
    Leagues {
        /// Restrict to these game keys; all games when omitted.
        #[clap(long)]
        game_keys: Option<Vec<String>>,
    },

    /// List teams in a league.
    Teams {
        #[clap(flatten)]
        select: LeagueSelect,
    },

    /// Export reconciled team rosters as CSV.
    Export {
        #[clap(flatten)]
        select: LeagueSelect,

        /// Keep teams whose name/nickname matches (repeatable).
        #[clap(long)]
        team_name: Option<Vec<String>>,

        /// Keep teams with these exact keys (repeatable).
        #[clap(long)]
        team_key: Option<Vec<TeamKey>>,

        /// Maximum number of teams to export (1-20).
        #[clap(long, default_value_t = 3)]
        limit: usize,

        /// Distribute this auction budget over the exported players.
        #[clap(long)]
        budget: Option<f64>,

        /// Value metric for the budget split: `avg` or `total`.
        #[clap(long, default_value = "avg")]
        metric: String,

        /// Write to this file instead of stdout.
        #[clap(long)]
        out: Option<PathBuf>,
    },
}
