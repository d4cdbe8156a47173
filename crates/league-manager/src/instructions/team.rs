//! Team list instructions

use log::{debug, info, warn};

use crate::division::Division;
use crate::error::{LeagueError, Result};
use crate::state::LeagueState;

/// Append a team to a division. Returns the stored (trimmed) name.
///
/// Duplicate names are accepted; each copy gets its own fixtures but they
/// share a single standings entry.
pub fn add_team(state: &mut LeagueState, division: Division, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        debug!("{division}: ignoring empty team name");
        return Err(LeagueError::EmptyTeamName);
    }

    let teams = state.teams.entry(division).or_default();
    if teams.iter().any(|t| t == name) {
        warn!("{division}: team {name:?} is already listed, adding a duplicate");
    }
    teams.push(name.to_string());

    info!("{division}: added team {name:?} ({} teams)", teams.len());
    Ok(name.to_string())
}

/// Remove every team called `name` from a division. Returns how many went.
///
/// Fixtures and standings are left alone; regenerate fixtures to drop the
/// team's pairings.
pub fn remove_team(state: &mut LeagueState, division: Division, name: &str) -> usize {
    let Some(teams) = state.teams.get_mut(&division) else {
        return 0;
    };
    let before = teams.len();
    teams.retain(|t| t != name);
    let removed = before - teams.len();

    if removed > 0 {
        info!("{division}: removed team {name:?}");
    } else {
        debug!("{division}: no team {name:?} to remove");
    }
    removed
}
