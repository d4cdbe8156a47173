//! Ranked standings table for display

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::standings::{StandingsEntry, StandingsTable};

/// One line of a ranked table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    #[serde(flatten)]
    pub entry: StandingsEntry,
}

/// Rank the teams of a division.
///
/// Rows come from the team list, not from the table, so teams without a
/// result show as zeros and stale table entries for removed teams are hidden.
/// Order is Total, then Match, then Game, all descending; ties keep team-list
/// order.
pub fn rank<T: AsRef<str>>(teams: &[T], table: &StandingsTable) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| {
            let team = team.as_ref();
            StandingsRow {
                team: team.to_string(),
                entry: table.get(team).copied().unwrap_or_default(),
            }
        })
        .collect();

    rows.sort_by(|a, b| compare(&b.entry, &a.entry));
    rows
}

fn compare(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    a.total()
        .cmp(&b.total())
        .then_with(|| a.match_points.cmp(&b.match_points))
        .then_with(|| a.game.cmp(&b.game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MatchScore;
    use crate::standings::apply_to_table;
    use rust_decimal::Decimal;

    fn d(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn score(home: &str, away: &str) -> MatchScore {
        MatchScore::parse(home, away).unwrap()
    }

    fn names(rows: &[StandingsRow]) -> Vec<&str> {
        rows.iter().map(|r| r.team.as_str()).collect()
    }

    #[test]
    fn test_rank_by_total() {
        let mut table = StandingsTable::new();
        apply_to_table(&mut table, "A", "B", &score("1", "3"));
        apply_to_table(&mut table, "C", "A", &score("0", "0"));

        let rows = rank(&["A", "B", "C"], &table);
        // B: 3 + 2 = 5, A: 1 + 0.5 = 1.5, C: 0 + 0.5 = 0.5
        assert_eq!(names(&rows), vec!["B", "A", "C"]);
        assert_eq!(rows[0].entry.total(), d("5"));
    }

    #[test]
    fn test_rank_tiebreak_match_then_game() {
        let mut table = StandingsTable::new();
        // X: total 4 from a 2-0 win (Match 2, Game 2)
        table.insert(
            "X".into(),
            StandingsEntry { home: d("1"), away: d("0"), game: d("2"), match_points: d("2") },
        );
        // Y: total 4 from scores alone (Match 0, Game 4)
        table.insert(
            "Y".into(),
            StandingsEntry { home: d("0"), away: d("0"), game: d("4"), match_points: d("0") },
        );
        let rows = rank(&["Y", "X"], &table);
        assert_eq!(names(&rows), vec!["X", "Y"]);
    }

    #[test]
    fn test_rank_ties_keep_list_order() {
        let rows = rank(&["C", "A", "B"], &StandingsTable::new());
        assert_eq!(names(&rows), vec!["C", "A", "B"]);
        assert!(rows.iter().all(|r| r.entry == StandingsEntry::default()));
    }

    #[test]
    fn test_rank_ignores_teams_not_listed() {
        let mut table = StandingsTable::new();
        apply_to_table(&mut table, "Gone", "A", &score("9", "0"));
        let rows = rank(&["A"], &table);
        assert_eq!(names(&rows), vec!["A"]);
    }

    #[test]
    fn test_row_json_is_flat() {
        let row = StandingsRow { team: "A".into(), entry: StandingsEntry::default() };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"team": "A", "H": 0.0, "A": 0.0, "Game": 0.0, "Match": 0.0, "Total": 0.0})
        );
    }
}
