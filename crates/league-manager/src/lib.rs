//! League Manager
//!
//! Division state, persistence and backup on top of `league-logic`.
//! This crate is compiled to:
//! - Native (for the `league` CLI)
//! - WASM with the `wasm` feature (for the browser frontend, backed by
//!   `localStorage`)

mod division;
mod error;
mod manager;
mod repository;
mod state;

pub mod instructions;

#[cfg(feature = "wasm")]
mod wasm;

pub use division::Division;
pub use error::{LeagueError, Result};
pub use instructions::backup::BACKUP_FILE_NAME;
pub use manager::LeagueManager;
pub use repository::{FileRepository, MemoryRepository, Repository, StorageKey};
pub use state::{Fixtures, LeagueState, Standings, Teams};

pub use league_logic::{
    Decimal, Fixture, FixtureStatus, MatchScore, Outcome, ScoreError, StandingsEntry, StandingsRow,
    StandingsTable,
};
