//! Key types for Yahoo fantasy resources.

use crate::error::{FbbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo league keys.
///
/// Yahoo identifies a league as `<game>.l.<league_id>`, e.g. `nba.l.12345`.
/// Keeping the key wrapped prevents mixing it up with team keys or bare
/// league ids.
///
/// # Examples
///
/// ```rust
/// use yahoo_fbb::LeagueKey;
///
/// let key: LeagueKey = "nba.l.12345".parse().unwrap();
/// assert_eq!(key.as_str(), "nba.l.12345");
/// assert_eq!(key.league_id(), Some("12345"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueKey(String);

impl LeagueKey {
    /// Wrap a key without validation (for values taken from API payloads).
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric league id portion, when the key has the usual shape.
    pub fn league_id(&self) -> Option<&str> {
        self.0.split(".l.").nth(1)
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueKey {
    type Err = FbbError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.contains(".l.") {
            return Err(FbbError::InvalidKey {
                kind: "league",
                key: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for Yahoo team keys (`<game>.l.<league_id>.t.<team_id>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamKey(String);

impl TeamKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamKey {
    type Err = FbbError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.contains(".t.") {
            return Err(FbbError::InvalidKey {
                kind: "team",
                key: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_key_parsing() {
        let key: LeagueKey = " nba.l.12345 ".parse().unwrap();
        assert_eq!(key.as_str(), "nba.l.12345");
        assert_eq!(key.league_id(), Some("12345"));

        assert!("".parse::<LeagueKey>().is_err());
        assert!("12345".parse::<LeagueKey>().is_err());
    }

    #[test]
    fn test_team_key_parsing() {
        let key: TeamKey = "418.l.12345.t.3".parse().unwrap();
        assert_eq!(key.as_str(), "418.l.12345.t.3");

        // A bare league key is not a team key
        assert!("nba.l.12345".parse::<TeamKey>().is_err());
    }

    #[test]
    fn test_league_id_of_unusual_key() {
        let key = LeagueKey::new("weird-key");
        assert_eq!(key.league_id(), None);
    }
}
