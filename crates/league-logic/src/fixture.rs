//! Fixture list generation and the per-fixture result state machine
//!
//! Every team meets every other team twice, once at home and once away.
//! Pairings are taken by position, so a name listed twice plays itself
//! under each of its positions like any other pair.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::score::{MatchScore, ScoreError};

/// Errors from moving a fixture through its result states.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FixtureError {
    #[error("result already entered for {home} vs {away}")]
    AlreadyEntered { home: String, away: String },
    #[error("no result entered for {home} vs {away}")]
    NotEntered { home: String, away: String },
    #[error("invalid score: {0}")]
    InvalidScore(#[from] ScoreError),
}

/// Result state of a fixture.
///
/// `Entered` keeps the exact scores that were applied to the standings, so
/// undo always reverses what was committed and can only happen once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FixtureStatus {
    #[default]
    Unentered,
    Entered(MatchScore),
}

/// One scheduled home/away pairing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "FixtureRecord", into = "FixtureRecord")]
pub struct Fixture {
    pub home: String,
    pub away: String,
    home_score: String,
    away_score: String,
    status: FixtureStatus,
}

impl Fixture {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score: String::new(),
            away_score: String::new(),
            status: FixtureStatus::Unentered,
        }
    }

    /// Raw home score text as typed.
    pub fn home_score(&self) -> &str {
        &self.home_score
    }

    /// Raw away score text as typed.
    pub fn away_score(&self) -> &str {
        &self.away_score
    }

    pub fn status(&self) -> FixtureStatus {
        self.status
    }

    pub fn is_entered(&self) -> bool {
        matches!(self.status, FixtureStatus::Entered(_))
    }

    /// Overwrite the score inputs. Only allowed before a result is entered.
    pub fn set_scores(
        &mut self,
        home: impl Into<String>,
        away: impl Into<String>,
    ) -> Result<(), FixtureError> {
        if self.is_entered() {
            return Err(self.already_entered());
        }
        self.home_score = home.into();
        self.away_score = away.into();
        Ok(())
    }

    /// Commit the typed scores: `Unentered -> Entered`.
    ///
    /// The fixture is left untouched when either score is invalid.
    pub fn enter_result(&mut self) -> Result<MatchScore, FixtureError> {
        if self.is_entered() {
            return Err(self.already_entered());
        }
        let score = MatchScore::parse(&self.home_score, &self.away_score)?;
        self.status = FixtureStatus::Entered(score);
        Ok(score)
    }

    /// Revert a committed result: `Entered -> Unentered`, clearing both inputs.
    ///
    /// Returns the scores that had been committed.
    pub fn clear_result(&mut self) -> Result<MatchScore, FixtureError> {
        let FixtureStatus::Entered(score) = self.status else {
            return Err(FixtureError::NotEntered {
                home: self.home.clone(),
                away: self.away.clone(),
            });
        };
        self.status = FixtureStatus::Unentered;
        self.home_score.clear();
        self.away_score.clear();
        Ok(score)
    }

    fn already_entered(&self) -> FixtureError {
        FixtureError::AlreadyEntered {
            home: self.home.clone(),
            away: self.away.clone(),
        }
    }
}

/// Generate a full double round-robin for `teams`.
///
/// For n teams this yields n·(n−1) fixtures in row-major order: all of the
/// first team's home games, then the second team's, and so on.
/// Fewer than two teams produce an empty list.
pub fn generate_fixtures<T: AsRef<str>>(teams: &[T]) -> Vec<Fixture> {
    let n = teams.len();
    let mut fixtures = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate() {
            if i != j {
                fixtures.push(Fixture::new(home.as_ref(), away.as_ref()));
            }
        }
    }
    fixtures
}

/// Number of fixtures `generate_fixtures` produces for `team_count` teams.
pub fn fixture_count(team_count: usize) -> usize {
    team_count * team_count.saturating_sub(1)
}

// ──────────────────────────── Stored form ────────────────────────────

/// JSON shape of a fixture in the persisted store and backup files.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureRecord {
    home: String,
    away: String,
    #[serde(default, deserialize_with = "score_text")]
    home_score: String,
    #[serde(default, deserialize_with = "score_text")]
    away_score: String,
    #[serde(default)]
    result_entered: bool,
}

/// Score inputs are stored as text but older files may hold plain numbers.
fn score_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a score string or number, got {other}"
        ))),
    }
}

impl From<FixtureRecord> for Fixture {
    fn from(record: FixtureRecord) -> Self {
        // An entered flag whose scores no longer parse cannot be undone, so the
        // fixture reopens for editing instead.
        let status = if record.result_entered {
            MatchScore::parse(&record.home_score, &record.away_score)
                .map(FixtureStatus::Entered)
                .unwrap_or_default()
        } else {
            FixtureStatus::Unentered
        };
        Self {
            home: record.home,
            away: record.away,
            home_score: record.home_score,
            away_score: record.away_score,
            status,
        }
    }
}

impl From<Fixture> for FixtureRecord {
    fn from(fixture: Fixture) -> Self {
        let result_entered = fixture.is_entered();
        Self {
            home: fixture.home,
            away: fixture.away,
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            result_entered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_and_single_team() {
        let none: [&str; 0] = [];
        assert!(generate_fixtures(&none).is_empty());
        assert!(generate_fixtures(&["A"]).is_empty());
    }

    #[test]
    fn test_three_teams() {
        let fixtures = generate_fixtures(&["A", "B", "C"]);
        assert_eq!(fixtures.len(), 6);

        let pairs: Vec<(&str, &str)> = fixtures
            .iter()
            .map(|f| (f.home.as_str(), f.away.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A", "B"),
                ("A", "C"),
                ("B", "A"),
                ("B", "C"),
                ("C", "A"),
                ("C", "B"),
            ]
        );
    }

    #[test]
    fn test_generated_fixtures_are_blank() {
        for f in generate_fixtures(&["A", "B"]) {
            assert_eq!(f.home_score(), "");
            assert_eq!(f.away_score(), "");
            assert_eq!(f.status(), FixtureStatus::Unentered);
        }
    }

    #[test]
    fn test_duplicate_names_pair_by_position() {
        let fixtures = generate_fixtures(&["A", "A"]);
        assert_eq!(fixtures.len(), 2);
        assert!(fixtures.iter().all(|f| f.home == "A" && f.away == "A"));
    }

    #[test]
    fn test_state_machine() {
        let mut f = Fixture::new("A", "B");
        f.set_scores("2", "1").unwrap();

        let score = f.enter_result().unwrap();
        assert_eq!(score, MatchScore::parse("2", "1").unwrap());
        assert!(f.is_entered());

        // Editing and re-entering are blocked while entered
        assert!(matches!(
            f.set_scores("5", "5"),
            Err(FixtureError::AlreadyEntered { .. })
        ));
        assert!(matches!(
            f.enter_result(),
            Err(FixtureError::AlreadyEntered { .. })
        ));
        assert_eq!(f.home_score(), "2");

        assert_eq!(f.clear_result().unwrap(), score);
        assert_eq!(f.status(), FixtureStatus::Unentered);
        assert_eq!(f.home_score(), "");
        assert_eq!(f.away_score(), "");

        // Second undo has nothing to revert
        assert!(matches!(
            f.clear_result(),
            Err(FixtureError::NotEntered { .. })
        ));
    }

    #[test]
    fn test_invalid_score_leaves_fixture_unchanged() {
        let mut f = Fixture::new("A", "B");
        f.set_scores("3", "").unwrap();
        assert!(matches!(
            f.enter_result(),
            Err(FixtureError::InvalidScore(ScoreError::Empty))
        ));
        assert_eq!(f.status(), FixtureStatus::Unentered);
        assert_eq!(f.home_score(), "3");
    }

    #[test]
    fn test_json_shape() {
        let mut f = Fixture::new("A", "B");
        f.set_scores("3", "1").unwrap();
        f.enter_result().unwrap();

        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "home": "A",
                "away": "B",
                "homeScore": "3",
                "awayScore": "1",
                "resultEntered": true
            })
        );

        let back: Fixture = serde_json::from_value(json).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn test_json_accepts_numeric_scores() {
        let f: Fixture = serde_json::from_str(
            r#"{"home":"A","away":"B","homeScore":2,"awayScore":2.5,"resultEntered":true}"#,
        )
        .unwrap();
        assert_eq!(
            f.status(),
            FixtureStatus::Entered(MatchScore::parse("2", "2.5").unwrap())
        );
        assert_eq!(f.home_score(), "2");
    }

    #[test]
    fn test_json_entered_without_scores_reopens() {
        let f: Fixture = serde_json::from_str(
            r#"{"home":"A","away":"B","homeScore":"","awayScore":"","resultEntered":true}"#,
        )
        .unwrap();
        assert_eq!(f.status(), FixtureStatus::Unentered);
    }

    #[test]
    fn test_json_missing_scores_default_empty() {
        let f: Fixture = serde_json::from_str(r#"{"home":"A","away":"B"}"#).unwrap();
        assert_eq!(f, Fixture::new("A", "B"));
    }

    proptest! {
        #[test]
        fn prop_every_ordered_pair_once(n in 0usize..12) {
            let teams: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
            let fixtures = generate_fixtures(&teams);
            prop_assert_eq!(fixtures.len(), fixture_count(n));

            let mut counts: HashMap<(String, String), u32> = HashMap::new();
            for f in &fixtures {
                prop_assert_ne!(&f.home, &f.away);
                *counts.entry((f.home.clone(), f.away.clone())).or_insert(0) += 1;
            }
            prop_assert_eq!(counts.len(), fixture_count(n));
            prop_assert!(counts.values().all(|c| *c == 1));
        }
    }
}
