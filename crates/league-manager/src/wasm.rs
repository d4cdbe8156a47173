//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use league_logic::{generate_fixtures as round_robin, MatchScore, StandingsEntry};

use crate::division::Division;
use crate::error::LeagueError;
use crate::manager::LeagueManager;
use crate::repository::{MemoryRepository, Repository, StorageKey};

/// A JS object with `getItem(key)` / `setItem(key, value)`, e.g.
/// `window.localStorage`.
struct JsStorage {
    storage: JsValue,
}

impl JsStorage {
    fn method(&self, name: &str) -> Result<Function, LeagueError> {
        Reflect::get(&self.storage, &JsValue::from_str(name))
            .map_err(storage_error)?
            .dyn_into::<Function>()
            .map_err(|_| LeagueError::Storage(format!("storage has no {name}() method")))
    }
}

impl Repository for JsStorage {
    fn load(&self, key: StorageKey) -> Result<Option<String>, LeagueError> {
        let value = self
            .method("getItem")?
            .call1(&self.storage, &JsValue::from_str(key.as_str()))
            .map_err(storage_error)?;
        Ok(value.as_string())
    }

    fn save(&mut self, key: StorageKey, value: &str) -> Result<(), LeagueError> {
        self.method("setItem")?
            .call2(
                &self.storage,
                &JsValue::from_str(key.as_str()),
                &JsValue::from_str(value),
            )
            .map_err(storage_error)?;
        Ok(())
    }
}

enum Backend {
    Js(LeagueManager<JsStorage>),
    Memory(LeagueManager<MemoryRepository>),
}

/// Run the same expression against whichever repository backs the league.
macro_rules! with_manager {
    (mut $league:expr, $m:ident => $body:expr) => {
        match &mut $league.backend {
            Backend::Js($m) => $body,
            Backend::Memory($m) => $body,
        }
    };
    ($league:expr, $m:ident => $body:expr) => {
        match &$league.backend {
            Backend::Js($m) => $body,
            Backend::Memory($m) => $body,
        }
    };
}

/// League handle exposed to the frontend.
#[wasm_bindgen]
pub struct WasmLeague {
    backend: Backend,
}

#[wasm_bindgen]
impl WasmLeague {
    /// Open a league persisted through `storage` (usually `window.localStorage`).
    #[wasm_bindgen(constructor)]
    pub fn new(storage: JsValue) -> Result<WasmLeague, JsError> {
        let manager = LeagueManager::open(JsStorage { storage }).map_err(to_js)?;
        Ok(Self { backend: Backend::Js(manager) })
    }

    /// A league that lives only as long as this handle.
    #[wasm_bindgen(js_name = inMemory)]
    pub fn in_memory() -> Result<WasmLeague, JsError> {
        let manager = LeagueManager::open(MemoryRepository::new()).map_err(to_js)?;
        Ok(Self { backend: Backend::Memory(manager) })
    }

    pub fn teams(&self, division: &str) -> Result<JsValue, JsError> {
        let division = parse_division(division)?;
        with_manager!(self, m => to_value(m.teams(division)))
    }

    #[wasm_bindgen(js_name = addTeam)]
    pub fn add_team(&mut self, division: &str, name: &str) -> Result<String, JsError> {
        let division = parse_division(division)?;
        with_manager!(mut self, m => m.add_team(division, name).map_err(to_js))
    }

    #[wasm_bindgen(js_name = removeTeam)]
    pub fn remove_team(&mut self, division: &str, name: &str) -> Result<u32, JsError> {
        let division = parse_division(division)?;
        let removed = with_manager!(mut self, m => m.remove_team(division, name).map_err(to_js))?;
        Ok(removed as u32)
    }

    pub fn fixtures(&self, division: &str) -> Result<JsValue, JsError> {
        let division = parse_division(division)?;
        with_manager!(self, m => to_value(m.fixtures(division)))
    }

    #[wasm_bindgen(js_name = generateFixtures)]
    pub fn generate_fixtures(&mut self, division: &str) -> Result<u32, JsError> {
        let division = parse_division(division)?;
        let count = with_manager!(mut self, m => m.generate_fixtures(division).map_err(to_js))?;
        Ok(count as u32)
    }

    #[wasm_bindgen(js_name = setScores)]
    pub fn set_scores(&mut self, division: &str, index: u32, home: &str, away: &str) -> Result<(), JsError> {
        let division = parse_division(division)?;
        with_manager!(mut self, m => m.set_scores(division, index as usize, home, away).map_err(to_js))
    }

    /// Commit the typed scores. Throws on invalid input; the frontend may
    /// ignore that error to keep the silent-reject behaviour.
    #[wasm_bindgen(js_name = recordResult)]
    pub fn record_result(&mut self, division: &str, index: u32) -> Result<JsValue, JsError> {
        let division = parse_division(division)?;
        let score = with_manager!(mut self, m => m.record_result(division, index as usize).map_err(to_js))?;
        to_value(&score)
    }

    #[wasm_bindgen(js_name = undoResult)]
    pub fn undo_result(&mut self, division: &str, index: u32) -> Result<JsValue, JsError> {
        let division = parse_division(division)?;
        let score = with_manager!(mut self, m => m.undo_result(division, index as usize).map_err(to_js))?;
        to_value(&score)
    }

    pub fn standings(&self, division: &str) -> Result<JsValue, JsError> {
        let division = parse_division(division)?;
        with_manager!(self, m => to_value(&m.standings(division)))
    }

    /// `[{ division, rows }]` for all seven divisions.
    #[wasm_bindgen(js_name = allStandings)]
    pub fn all_standings(&self) -> Result<JsValue, JsError> {
        #[derive(Serialize)]
        struct DivisionTable {
            division: Division,
            rows: Vec<league_logic::StandingsRow>,
        }
        let tables: Vec<DivisionTable> = with_manager!(self, m => m
            .all_standings()
            .into_iter()
            .map(|(division, rows)| DivisionTable { division, rows })
            .collect());
        to_value(&tables)
    }

    #[wasm_bindgen(js_name = exportBackup)]
    pub fn export_backup(&self) -> Result<String, JsError> {
        with_manager!(self, m => m.export_backup().map_err(to_js))
    }

    /// Throws on a malformed backup and keeps the store as it was.
    #[wasm_bindgen(js_name = importBackup)]
    pub fn import_backup(&mut self, json: &str) -> Result<(), JsError> {
        with_manager!(mut self, m => m.import_backup(json).map_err(to_js))
    }
}

/// Names of all divisions, in order
#[wasm_bindgen]
pub fn divisions() -> Vec<String> {
    Division::ALL.iter().map(Division::to_string).collect()
}

/// Double round-robin for an array of team names
#[wasm_bindgen(js_name = generateFixtures)]
pub fn generate_fixtures(teams: JsValue) -> Result<JsValue, JsError> {
    let teams: Vec<String> = serde_wasm_bindgen::from_value(teams)
        .map_err(|e| JsError::new(&format!("Invalid team list: {}", e)))?;
    to_value(&round_robin(&teams))
}

/// Apply a result to two standings entries
///
/// # Returns
/// `[home, away]` entries after the result
#[wasm_bindgen(js_name = applyResult)]
pub fn apply_result(
    home: JsValue,
    away: JsValue,
    home_score: &str,
    away_score: &str,
) -> Result<JsValue, JsError> {
    let (home, away, score) = entries_and_score(home, away, home_score, away_score)?;
    to_value(&league_logic::apply(home, away, &score))
}

/// Reverse `applyResult` for the same scores
#[wasm_bindgen(js_name = undoResult)]
pub fn undo_result(
    home: JsValue,
    away: JsValue,
    home_score: &str,
    away_score: &str,
) -> Result<JsValue, JsError> {
    let (home, away, score) = entries_and_score(home, away, home_score, away_score)?;
    to_value(&league_logic::undo(home, away, &score))
}

fn entries_and_score(
    home: JsValue,
    away: JsValue,
    home_score: &str,
    away_score: &str,
) -> Result<(StandingsEntry, StandingsEntry, MatchScore), JsError> {
    let score = MatchScore::parse(home_score, away_score).map_err(to_js)?;
    Ok((entry_or_default(home)?, entry_or_default(away)?, score))
}

/// `undefined`/`null` mean a team with no record yet.
fn entry_or_default(value: JsValue) -> Result<StandingsEntry, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(StandingsEntry::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid standings entry: {}", e)))
}

fn parse_division(name: &str) -> Result<Division, JsError> {
    name.parse().map_err(to_js)
}

/// Plain JS objects rather than `Map`s, matching what `JSON.parse` gives.
fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn to_js(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

fn storage_error(err: JsValue) -> LeagueError {
    LeagueError::Storage(format!("{:?}", err))
}
