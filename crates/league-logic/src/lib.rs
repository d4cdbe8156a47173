//! League Logic
//!
//! Fixture generation and standings scoring for the league manager.
//! Everything here is pure and deterministic; state and persistence live
//! in `league-manager`.

mod fixture;
mod score;
mod standings;
mod table;

pub use rust_decimal::Decimal;

pub use fixture::{fixture_count, generate_fixtures, Fixture, FixtureError, FixtureStatus};
pub use score::{parse_score, MatchScore, Outcome, ScoreError};
pub use standings::{
    apply, apply_to_table, undo, undo_on_table, ResultDelta, StandingsEntry, StandingsTable,
};
pub use table::{rank, StandingsRow};

/// Tally and match points for a result
/// Returns ((home_tally, home_match), (away_tally, away_match))
///
/// The tally lands in the H column for the home side and the A column for
/// the away side.
pub fn points(outcome: Outcome) -> ((Decimal, Decimal), (Decimal, Decimal)) {
    let (zero, one, two, half) = (Decimal::ZERO, Decimal::ONE, Decimal::from(2), Decimal::new(5, 1));
    match outcome {
        Outcome::HomeWin => ((one, two), (zero, zero)),
        Outcome::AwayWin => ((zero, zero), (one, two)),
        Outcome::Draw => ((half, half), (half, half)),
    }
}
