//! In-memory league state

use std::collections::BTreeMap;

use league_logic::{Fixture, StandingsTable};
use log::warn;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::division::Division;

pub type Teams = BTreeMap<Division, Vec<String>>;
pub type Fixtures = BTreeMap<Division, Vec<Fixture>>;
pub type Standings = BTreeMap<Division, StandingsTable>;

/// Every division's teams, fixtures and standings.
///
/// Serializes to the backup document `{ teams, fixtures, standings }`. A
/// division with no entry in a map is simply empty, and a missing or `null`
/// map loads as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    #[serde(default, deserialize_with = "division_map")]
    pub teams: Teams,
    #[serde(default, deserialize_with = "division_map")]
    pub fixtures: Fixtures,
    #[serde(default, deserialize_with = "division_map")]
    pub standings: Standings,
}

impl LeagueState {
    pub fn teams(&self, division: Division) -> &[String] {
        self.teams.get(&division).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fixtures(&self, division: Division) -> &[Fixture] {
        self.fixtures.get(&division).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn standings(&self, division: Division) -> Option<&StandingsTable> {
        self.standings.get(&division)
    }

    pub fn is_empty(&self) -> bool {
        self.teams.values().all(Vec::is_empty)
            && self.fixtures.values().all(Vec::is_empty)
            && self.standings.values().all(StandingsTable::is_empty)
    }
}

/// Read a `{ "Division N": ... }` map.
///
/// `null` reads as empty. A value that is not an object, or a key that names
/// no division, is dropped with a warning. A known division whose contents do
/// not fit still fails.
pub(crate) fn divisions_from_value<T: DeserializeOwned>(
    value: Value,
) -> serde_json::Result<BTreeMap<Division, T>> {
    let entries = match value {
        Value::Object(entries) => entries,
        Value::Null => return Ok(BTreeMap::new()),
        _ => {
            warn!("expected a map of divisions, ignoring it");
            return Ok(BTreeMap::new());
        }
    };

    let mut map = BTreeMap::new();
    for (key, value) in entries {
        match key.parse::<Division>() {
            Ok(division) => {
                map.insert(division, serde_json::from_value(value)?);
            }
            Err(_) => warn!("ignoring unknown division {key:?}"),
        }
    }
    Ok(map)
}

fn division_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<Division, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    divisions_from_value(Value::deserialize(deserializer)?).map_err(de::Error::custom)
}
