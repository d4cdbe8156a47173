//! The league controller

use std::collections::BTreeMap;

use league_logic::{rank, Fixture, MatchScore, StandingsRow};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::division::Division;
use crate::error::{LeagueError, Result};
use crate::instructions::{backup, fixture, team};
use crate::repository::{Repository, StorageKey};
use crate::state::{divisions_from_value, LeagueState};

/// Owns the league state and writes every changed slice to a repository.
///
/// Mutations run against memory first and only then persist, one slice per
/// storage key. A failed instruction writes nothing.
pub struct LeagueManager<R: Repository> {
    state: LeagueState,
    repository: R,
}

impl<R: Repository> LeagueManager<R> {
    /// Load whatever the repository holds; missing slices start empty.
    pub fn open(repository: R) -> Result<Self> {
        let state = LeagueState {
            teams: load_slice(&repository, StorageKey::Teams)?,
            fixtures: load_slice(&repository, StorageKey::Fixtures)?,
            standings: load_slice(&repository, StorageKey::Standings)?,
        };
        debug!("opened league store (empty: {})", state.is_empty());
        Ok(Self { state, repository })
    }

    pub fn state(&self) -> &LeagueState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    // ── Teams ────────────────────────────────────────────────────────

    pub fn teams(&self, division: Division) -> &[String] {
        self.state.teams(division)
    }

    pub fn add_team(&mut self, division: Division, name: &str) -> Result<String> {
        let name = team::add_team(&mut self.state, division, name)?;
        self.persist(&[StorageKey::Teams])?;
        Ok(name)
    }

    pub fn remove_team(&mut self, division: Division, name: &str) -> Result<usize> {
        let removed = team::remove_team(&mut self.state, division, name);
        if removed > 0 {
            self.persist(&[StorageKey::Teams])?;
        }
        Ok(removed)
    }

    // ── Fixtures ─────────────────────────────────────────────────────

    pub fn fixtures(&self, division: Division) -> &[Fixture] {
        self.state.fixtures(division)
    }

    pub fn generate_fixtures(&mut self, division: Division) -> Result<usize> {
        let count = fixture::generate_fixtures(&mut self.state, division);
        self.persist(&[StorageKey::Fixtures])?;
        Ok(count)
    }

    pub fn set_scores(&mut self, division: Division, index: usize, home: &str, away: &str) -> Result<()> {
        fixture::set_scores(&mut self.state, division, index, home, away)?;
        self.persist(&[StorageKey::Fixtures])
    }

    pub fn record_result(&mut self, division: Division, index: usize) -> Result<MatchScore> {
        let score = fixture::record_result(&mut self.state, division, index)?;
        self.persist(&[StorageKey::Fixtures, StorageKey::Standings])?;
        Ok(score)
    }

    pub fn undo_result(&mut self, division: Division, index: usize) -> Result<MatchScore> {
        let score = fixture::undo_result(&mut self.state, division, index)?;
        self.persist(&[StorageKey::Fixtures, StorageKey::Standings])?;
        Ok(score)
    }

    // ── Standings ────────────────────────────────────────────────────

    /// Ranked table of a division's current teams.
    pub fn standings(&self, division: Division) -> Vec<StandingsRow> {
        let empty = Default::default();
        let table = self.state.standings(division).unwrap_or(&empty);
        rank(self.state.teams(division), table)
    }

    /// Ranked tables for all seven divisions, in division order.
    pub fn all_standings(&self) -> Vec<(Division, Vec<StandingsRow>)> {
        Division::ALL
            .iter()
            .map(|&division| (division, self.standings(division)))
            .collect()
    }

    // ── Backup ───────────────────────────────────────────────────────

    pub fn export_backup(&self) -> Result<String> {
        backup::export_backup(&self.state)
    }

    /// Replace everything with a backup; a malformed one changes nothing.
    pub fn import_backup(&mut self, json: &str) -> Result<()> {
        backup::import_backup(&mut self.state, json)?;
        self.persist(&StorageKey::ALL)
    }

    fn persist(&mut self, keys: &[StorageKey]) -> Result<()> {
        for &key in keys {
            let json = match key {
                StorageKey::Teams => to_json(&self.state.teams),
                StorageKey::Fixtures => to_json(&self.state.fixtures),
                StorageKey::Standings => to_json(&self.state.standings),
            }
            .map_err(|source| LeagueError::Serialize {
                what: key.as_str(),
                source,
            })?;
            self.repository.save(key, &json)?;
        }
        debug!("persisted {keys:?}");
        Ok(())
    }
}

fn load_slice<T: DeserializeOwned>(
    repository: &impl Repository,
    key: StorageKey,
) -> Result<BTreeMap<Division, T>> {
    let Some(json) = repository.load(key)? else {
        info!("no stored {key}, starting empty");
        return Ok(BTreeMap::new());
    };
    serde_json::from_str::<Value>(&json)
        .and_then(divisions_from_value::<T>)
        .map_err(|source| LeagueError::CorruptState { key, source })
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}
