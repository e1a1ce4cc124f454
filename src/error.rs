//! Error types for the Yahoo fantasy basketball draft helper

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FbbError>;

#[derive(Error, Debug)]
pub enum FbbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Not connected: set {env_var} with a token from the OAuth helper")]
    NotConnected { env_var: String },

    #[error("League key not provided and {env_var} environment variable not set")]
    MissingLeagueKey { env_var: String },

    #[error("Yahoo API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid {kind} key: {key}")]
    InvalidKey { kind: &'static str, key: String },

    #[error("Unknown sort key: {key}")]
    UnknownSortKey { key: String },

    #[error("Unknown sort direction: {value}")]
    UnknownSortDirection { value: String },

    #[error("No local dataset; run `sync` or `import` first")]
    NoData,

    #[error("League not found: {query}")]
    LeagueNotFound { query: String },

    #[error("Team not found: {query}")]
    TeamNotFound { query: String },

    #[error("State error: {message}")]
    State { message: String },
}

impl From<anyhow::Error> for FbbError {
    fn from(err: anyhow::Error) -> Self {
        FbbError::State {
            message: err.to_string(),
        }
    }
}
