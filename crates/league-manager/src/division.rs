//! The seven fixed divisions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeagueError;

/// A division bucket. Stored and displayed as `"Division N"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Division {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Division {
    pub const ALL: [Division; 7] = [
        Division::One,
        Division::Two,
        Division::Three,
        Division::Four,
        Division::Five,
        Division::Six,
        Division::Seven,
    ];

    /// 1-based division number.
    pub fn number(self) -> u8 {
        match self {
            Division::One => 1,
            Division::Two => 2,
            Division::Three => 3,
            Division::Four => 4,
            Division::Five => 5,
            Division::Six => 6,
            Division::Seven => 7,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Division {}", self.number())
    }
}

/// Accepts `"Division 3"` (any case, any spacing) or a bare `"3"`.
impl FromStr for Division {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..8) {
            Some(prefix) if prefix.eq_ignore_ascii_case("division") => trimmed[8..].trim(),
            _ => trimmed,
        };
        digits
            .parse::<u8>()
            .ok()
            .and_then(Division::from_number)
            .ok_or_else(|| LeagueError::UnknownDivision(s.to_string()))
    }
}

impl TryFrom<String> for Division {
    type Error = LeagueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Division> for String {
    fn from(division: Division) -> Self {
        division.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Division::One.to_string(), "Division 1");
        assert_eq!(Division::Seven.to_string(), "Division 7");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Division 4".parse::<Division>().unwrap(), Division::Four);
        assert_eq!("division  2".parse::<Division>().unwrap(), Division::Two);
        assert_eq!("7".parse::<Division>().unwrap(), Division::Seven);
        assert!("Division 8".parse::<Division>().is_err());
        assert!("0".parse::<Division>().is_err());
        assert!("Premier".parse::<Division>().is_err());
        assert!("".parse::<Division>().is_err());
    }

    #[test]
    fn test_all_round_trip_through_names() {
        for d in Division::ALL {
            assert_eq!(d.to_string().parse::<Division>().unwrap(), d);
            assert_eq!(Division::from_number(d.number()), Some(d));
        }
    }

    #[test]
    fn test_json_map_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Division::Three, 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Division 3":1}"#);
        let back: std::collections::BTreeMap<Division, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
