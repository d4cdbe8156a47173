//! Per-team standings and the apply/undo of a result

use std::collections::BTreeMap;
use std::ops::{AddAssign, SubAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::score::MatchScore;
use crate::points;

/// Standings of one division, keyed by team name.
pub type StandingsTable = BTreeMap<String, StandingsEntry>;

/// Running statistics for one team in one division.
///
/// `Total` is never stored: it is always `game + match_points`. Fields are
/// exact decimals, so undoing a result restores them to the last digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRecord", into = "EntryRecord")]
pub struct StandingsEntry {
    /// Home wins (1) and draws (0.5)
    pub home: Decimal,
    /// Away wins (1) and draws (0.5)
    pub away: Decimal,
    /// Sum of the team's own raw scores
    pub game: Decimal,
    /// Win (2) and draw (0.5) points
    pub match_points: Decimal,
}

impl StandingsEntry {
    pub fn total(&self) -> Decimal {
        self.game + self.match_points
    }
}

impl AddAssign for StandingsEntry {
    fn add_assign(&mut self, rhs: Self) {
        self.home += rhs.home;
        self.away += rhs.away;
        self.game += rhs.game;
        self.match_points += rhs.match_points;
    }
}

impl SubAssign for StandingsEntry {
    fn sub_assign(&mut self, rhs: Self) {
        self.home -= rhs.home;
        self.away -= rhs.away;
        self.game -= rhs.game;
        self.match_points -= rhs.match_points;
    }
}

/// What one result adds to each side's entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultDelta {
    pub home: StandingsEntry,
    pub away: StandingsEntry,
}

impl ResultDelta {
    pub fn for_score(score: &MatchScore) -> Self {
        let ((home_tally, home_match), (away_tally, away_match)) = points(score.outcome());
        Self {
            home: StandingsEntry {
                home: home_tally,
                away: Decimal::ZERO,
                game: score.home,
                match_points: home_match,
            },
            away: StandingsEntry {
                home: Decimal::ZERO,
                away: away_tally,
                game: score.away,
                match_points: away_match,
            },
        }
    }
}

/// Add a result to both teams' entries.
pub fn apply(
    mut home: StandingsEntry,
    mut away: StandingsEntry,
    score: &MatchScore,
) -> (StandingsEntry, StandingsEntry) {
    let delta = ResultDelta::for_score(score);
    home += delta.home;
    away += delta.away;
    (home, away)
}

/// Remove a previously applied result from both teams' entries.
pub fn undo(
    mut home: StandingsEntry,
    mut away: StandingsEntry,
    score: &MatchScore,
) -> (StandingsEntry, StandingsEntry) {
    let delta = ResultDelta::for_score(score);
    home -= delta.home;
    away -= delta.away;
    (home, away)
}

/// Apply a result to a division table, creating zeroed entries as needed.
///
/// A team listed on both sides (duplicate names) receives both halves of
/// the delta.
pub fn apply_to_table(table: &mut StandingsTable, home: &str, away: &str, score: &MatchScore) {
    let delta = ResultDelta::for_score(score);
    *table.entry(home.to_string()).or_default() += delta.home;
    *table.entry(away.to_string()).or_default() += delta.away;
}

/// Undo a result on a division table.
///
/// Missing entries count as zero, so undoing against a wiped table leaves
/// negative tallies rather than failing.
pub fn undo_on_table(table: &mut StandingsTable, home: &str, away: &str, score: &MatchScore) {
    let delta = ResultDelta::for_score(score);
    *table.entry(home.to_string()).or_default() -= delta.home;
    *table.entry(away.to_string()).or_default() -= delta.away;
}

// ──────────────────────────── Stored form ────────────────────────────

#[derive(Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "H", default)]
    h: Decimal,
    #[serde(rename = "A", default)]
    a: Decimal,
    #[serde(rename = "Game", default)]
    game: Decimal,
    #[serde(rename = "Match", default)]
    match_points: Decimal,
    /// Written for readers of the backup file; recomputed on load.
    #[serde(rename = "Total", default)]
    total: Decimal,
}

impl From<EntryRecord> for StandingsEntry {
    fn from(record: EntryRecord) -> Self {
        Self {
            home: record.h,
            away: record.a,
            game: record.game,
            match_points: record.match_points,
        }
    }
}

impl From<StandingsEntry> for EntryRecord {
    fn from(entry: StandingsEntry) -> Self {
        Self {
            h: entry.home,
            a: entry.away,
            game: entry.game,
            match_points: entry.match_points,
            total: entry.total(),
        }
    }
}
