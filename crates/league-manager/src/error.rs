//! League manager errors

use std::path::PathBuf;

use league_logic::{FixtureError, ScoreError};

use crate::division::Division;
use crate::repository::StorageKey;

#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("unknown division {0:?}")]
    UnknownDivision(String),

    #[error("team name is empty")]
    EmptyTeamName,

    #[error("{division} has no fixture #{index}")]
    FixtureNotFound { division: Division, index: usize },

    #[error("result already entered for {home} vs {away}")]
    ResultAlreadyEntered { home: String, away: String },

    #[error("no result entered for {home} vs {away}")]
    ResultNotEntered { home: String, away: String },

    #[error("invalid score: {0}")]
    InvalidScore(#[from] ScoreError),

    #[error("invalid backup file: {0}")]
    InvalidBackup(#[source] serde_json::Error),

    #[error("stored {key} is corrupt: {source}")]
    CorruptState {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<FixtureError> for LeagueError {
    fn from(err: FixtureError) -> Self {
        match err {
            FixtureError::AlreadyEntered { home, away } => {
                LeagueError::ResultAlreadyEntered { home, away }
            }
            FixtureError::NotEntered { home, away } => LeagueError::ResultNotEntered { home, away },
            FixtureError::InvalidScore(e) => LeagueError::InvalidScore(e),
        }
    }
}

pub type Result<T, E = LeagueError> = std::result::Result<T, E>;
