//! Yahoo Fantasy Basketball Draft Helper
//!
//! A Rust library and CLI for running a fantasy basketball draft against a
//! Yahoo league: it keeps a local table of player season averages, reconciles
//! it with live per-league data from the Yahoo Fantasy Sports API, and tracks
//! draft picks and table filters across invocations.
//!
//! ## Features
//!
//! - **Stat Label Resolution**: Maps a league's opaque numeric stat ids to
//!   semantic categories (PTS, REB, AST, ...) by fuzzy label matching
//! - **Player Projection**: Normalizes schema-variable Yahoo player records
//!   into flat stat rows, computing fantasy points directly or from league
//!   stat weights
//! - **Roster Matching**: Reconciles a fetched team roster against the local
//!   dataset by player id, falling back to normalized-name matching
//! - **Persistent Draft State**: Drafted players and filter configuration
//!   survive across runs in versioned state files
//! - **CSV Export**: Dump reconciled team rosters with optional budget-based
//!   auction values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_fbb::commands::players::{handle_players, PlayersParams};
//!
//! # fn example() -> yahoo_fbb::Result<()> {
//! // Render the player table, sorting by points descending
//! let params = PlayersParams {
//!     sort: Some("pts".parse()?),
//!     direction: Some("desc".parse()?),
//!     // ... other parameters
//! #   data: None,
//! #   query: None,
//! #   pos: None,
//! #   hide_drafted: None,
//! #   only_roster: None,
//! #   highlight_roster: None,
//! #   as_json: false,
//! };
//!
//! handle_players(params)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Yahoo league key to avoid passing it in every command, and expose
//! the access token obtained by the external OAuth helper:
//! ```bash
//! export YAHOO_FBB_LEAGUE_KEY=nba.l.12345
//! export YAHOO_FBB_ACCESS_TOKEN=...
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;
pub mod view;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::keys::{LeagueKey, TeamKey};
pub use cli::types::sort::{SortDir, SortKey};
pub use error::{FbbError, Result};
pub use storage::models::{FilterState, PlayerRow};
pub use view::store::ViewState;

pub const LEAGUE_KEY_ENV_VAR: &str = "YAHOO_FBB_LEAGUE_KEY";
