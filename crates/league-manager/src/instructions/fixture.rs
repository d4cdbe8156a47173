//! Fixture and result instructions

use league_logic::{apply_to_table, generate_fixtures as round_robin, undo_on_table, Fixture, MatchScore};
use log::{debug, info, warn};

use crate::division::Division;
use crate::error::{LeagueError, Result};
use crate::state::LeagueState;

/// Replace a division's fixtures with a fresh double round-robin of its
/// current teams. Returns the number of fixtures created.
///
/// Standings are not reset: results already applied stay counted even though
/// their fixtures are discarded.
pub fn generate_fixtures(state: &mut LeagueState, division: Division) -> usize {
    let fixtures = round_robin(state.teams(division));
    let count = fixtures.len();

    let discarded = state.fixtures.insert(division, fixtures).unwrap_or_default();
    let entered = discarded.iter().filter(|f| f.is_entered()).count();
    if entered > 0 {
        warn!("{division}: discarding {entered} fixtures with entered results; standings keep them");
    }

    info!("{division}: generated {count} fixtures");
    count
}

/// Type the scores for an unentered fixture.
pub fn set_scores(
    state: &mut LeagueState,
    division: Division,
    index: usize,
    home: &str,
    away: &str,
) -> Result<()> {
    fixture_mut(state, division, index)?.set_scores(home, away)?;
    Ok(())
}

/// Commit a fixture's typed scores and add them to the standings.
///
/// Invalid scores leave both the fixture and the standings untouched.
pub fn record_result(state: &mut LeagueState, division: Division, index: usize) -> Result<MatchScore> {
    let fixture = fixture_mut(state, division, index)?;
    let score = fixture.enter_result().map_err(|e| {
        debug!("{division}: rejected result for fixture #{index}: {e}");
        LeagueError::from(e)
    })?;
    let (home, away) = (fixture.home.clone(), fixture.away.clone());

    let table = state.standings.entry(division).or_default();
    apply_to_table(table, &home, &away, &score);

    info!("{division}: {home} {} - {} {away}", score.home, score.away);
    Ok(score)
}

/// Revert a committed result and take it back out of the standings.
pub fn undo_result(state: &mut LeagueState, division: Division, index: usize) -> Result<MatchScore> {
    let fixture = fixture_mut(state, division, index)?;
    let score = fixture.clear_result()?;
    let (home, away) = (fixture.home.clone(), fixture.away.clone());

    let table = state.standings.entry(division).or_default();
    undo_on_table(table, &home, &away, &score);

    info!("{division}: undid {home} {} - {} {away}", score.home, score.away);
    Ok(score)
}

fn fixture_mut(state: &mut LeagueState, division: Division, index: usize) -> Result<&mut Fixture> {
    state
        .fixtures
        .get_mut(&division)
        .and_then(|fixtures| fixtures.get_mut(index))
        .ok_or(LeagueError::FixtureNotFound { division, index })
}
