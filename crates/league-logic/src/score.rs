//! Match scores as typed into a fixture
//!
//! Scores are free-form numbers (not just goals), so fractional and negative
//! values are accepted. They are held as exact decimals so that undoing a
//! result takes the standings back to precisely where they were.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest absolute score accepted.
const MAX_SCORE: i64 = 1_000_000_000_000;
/// Most digits accepted after the decimal point.
const MAX_FRACTION_DIGITS: u32 = 10;

/// Errors raised while turning score text into a number.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("score is empty")]
    Empty,
    #[error("score {0:?} is not a number")]
    NotANumber(String),
    #[error("score {0} is out of range")]
    OutOfRange(Decimal),
}

/// Which side a result favours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// A validated pair of scores for one fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home: Decimal,
    pub away: Decimal,
}

impl MatchScore {
    /// Build a score pair, rejecting values too large or too finely divided
    /// to be summed exactly.
    pub fn new(home: Decimal, away: Decimal) -> Result<Self, ScoreError> {
        Ok(Self {
            home: check_range(home)?,
            away: check_range(away)?,
        })
    }

    /// Parse the raw text of both score inputs.
    pub fn parse(home: &str, away: &str) -> Result<Self, ScoreError> {
        Self::new(parse_score(home)?, parse_score(away)?)
    }

    pub fn outcome(&self) -> Outcome {
        if self.home > self.away {
            Outcome::HomeWin
        } else if self.away > self.home {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }
}

/// Parse one score input. Surrounding whitespace is ignored and exponent
/// notation (`1e3`) is accepted.
pub fn parse_score(text: &str) -> Result<Decimal, ScoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ScoreError::Empty);
    }
    let value = trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ScoreError::NotANumber(trimmed.to_string()))?;
    check_range(value)
}

fn check_range(value: Decimal) -> Result<Decimal, ScoreError> {
    let value = value.normalize();
    if value.abs() > Decimal::from(MAX_SCORE) || value.scale() > MAX_FRACTION_DIGITS {
        return Err(ScoreError::OutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_integers_and_fractions() {
        assert_eq!(parse_score("3"), Ok(d("3")));
        assert_eq!(parse_score(" 2.5 "), Ok(d("2.5")));
        assert_eq!(parse_score("-1"), Ok(d("-1")));
        assert_eq!(parse_score("1e3"), Ok(d("1000")));
    }

    #[test]
    fn test_parse_keeps_decimal_fractions_exact() {
        let sum = parse_score("0.1").unwrap() + parse_score("0.2").unwrap();
        assert_eq!(sum, d("0.3"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_score(""), Err(ScoreError::Empty));
        assert_eq!(parse_score("   "), Err(ScoreError::Empty));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_score("three"),
            Err(ScoreError::NotANumber("three".to_string()))
        );
        assert!(matches!(parse_score("NaN"), Err(ScoreError::NotANumber(_))));
        assert!(matches!(parse_score("inf"), Err(ScoreError::NotANumber(_))));
    }

    #[test]
    fn test_range_limits() {
        assert!(parse_score("1000000000000").is_ok());
        assert!(matches!(
            parse_score("1000000000001"),
            Err(ScoreError::OutOfRange(_))
        ));
        assert!(parse_score("0.0000000001").is_ok());
        assert!(matches!(
            parse_score("0.00000000001"),
            Err(ScoreError::OutOfRange(_))
        ));
        // Trailing zeros do not count against the fraction limit
        assert_eq!(parse_score("1.000000000000"), Ok(d("1")));
        assert!(MatchScore::new(d("1"), Decimal::MAX).is_err());
    }

    #[test]
    fn test_outcome() {
        assert_eq!(MatchScore::parse("3", "1").unwrap().outcome(), Outcome::HomeWin);
        assert_eq!(MatchScore::parse("0", "1.5").unwrap().outcome(), Outcome::AwayWin);
        assert_eq!(MatchScore::parse("2", "2.0").unwrap().outcome(), Outcome::Draw);
    }

    #[test]
    fn test_parse_pair_fails_on_either_side() {
        assert!(MatchScore::parse("1", "").is_err());
        assert!(MatchScore::parse("x", "1").is_err());
        assert_eq!(
            MatchScore::parse("4", "0"),
            Ok(MatchScore { home: d("4"), away: d("0") })
        );
    }

    #[test]
    fn test_json_carries_numbers() {
        let score = MatchScore::parse("2.5", "1").unwrap();
        assert_eq!(
            serde_json::to_value(score).unwrap(),
            serde_json::json!({"home": 2.5, "away": 1.0})
        );
    }
}
