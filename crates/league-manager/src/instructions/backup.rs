//! Backup export and import

use log::{info, warn};
use serde::de::Error as _;
use serde_json::Value;

use crate::error::{LeagueError, Result};
use crate::state::LeagueState;

/// Default file name offered for a downloaded backup.
pub const BACKUP_FILE_NAME: &str = "gwent-league-backup.json";

/// Snapshot the whole state as a pretty-printed JSON document.
pub fn export_backup(state: &LeagueState) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(|source| LeagueError::Serialize {
        what: "backup",
        source,
    })
}

/// Replace the whole state with the contents of a backup document.
///
/// The document is parsed in full before anything changes, so a malformed
/// file leaves `state` exactly as it was. Missing or `null` top-level keys
/// load as empty maps and unknown division names are skipped.
pub fn import_backup(state: &mut LeagueState, json: &str) -> Result<()> {
    let restored = parse_backup(json).map_err(|e| {
        warn!("rejected backup: {e}");
        LeagueError::InvalidBackup(e)
    })?;

    *state = restored;
    info!(
        "restored backup: {} divisions with teams, {} with fixtures, {} with standings",
        state.teams.len(),
        state.fixtures.len(),
        state.standings.len()
    );
    Ok(())
}

fn parse_backup(json: &str) -> serde_json::Result<LeagueState> {
    let document: Value = serde_json::from_str(json)?;
    if !document.is_object() {
        return Err(serde_json::Error::custom("backup is not a JSON object"));
    }
    serde_json::from_value(document)
}
