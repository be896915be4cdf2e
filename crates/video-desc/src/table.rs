//! Flattening game records into one row per goal, for bulk analysis.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::GameRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalRow {
    pub date: NaiveDate,
    pub division: String,
    pub round: Option<String>,
    pub home_team: String,
    pub away_team: String,
    /// Full name of the team that scored.
    pub scoring_team: String,
    pub scoring_player: Option<String>,
    pub assist_player: Option<String>,
    pub timestamp: String,
    pub minute: Option<String>,
}

impl GoalRow {
    pub const HEADERS: [&'static str; 10] = [
        "date",
        "division",
        "round",
        "home_team",
        "away_team",
        "scoring_team",
        "scoring_player",
        "assist_player",
        "timestamp",
        "minute",
    ];

    /// Row cells in `HEADERS` order; absent values are empty strings.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.division.clone(),
            self.round.clone().unwrap_or_default(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.scoring_team.clone(),
            self.scoring_player.clone().unwrap_or_default(),
            self.assist_player.clone().unwrap_or_default(),
            self.timestamp.clone(),
            self.minute.clone().unwrap_or_default(),
        ]
    }
}

/// One row per goal of `record`, in goal order.
pub fn goal_rows(record: &GameRecord) -> Vec<GoalRow> {
    let game = &record.game;
    record
        .goals
        .iter()
        .map(|goal| GoalRow {
            date: game.date,
            division: game.division.clone(),
            round: game.round().map(str::to_string),
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            scoring_team: game.team_name(goal.scoring_team).to_string(),
            scoring_player: goal.scoring_player.as_cell(),
            assist_player: goal.assist_player.as_ref().and_then(|a| a.as_cell()),
            timestamp: goal.timestamp.normalize(),
            minute: goal.minute.as_ref().map(|m| m.to_string()),
        })
        .collect()
}

/// Rows of every record, records in the order given.
pub fn flatten<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Vec<GoalRow> {
    records.into_iter().flat_map(goal_rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Game, Goal, PlayerRef, Side};
    use crate::shorthand::Shorthand;

    fn record() -> GameRecord {
        let game = Game::new(
            NaiveDate::from_ymd_opt(2023, 10, 29).unwrap(),
            "LV Mayor's Cup U11 1st Div",
            "Bay Area Surf 13B Pre-MLS",
            "CV Futbol Academy 13B I",
        )
        .unwrap()
        .with_round("Final");
        let goals = vec![
            Goal::new("3:23", Side::Home, "Eli")
                .with_assist(Shorthand::FreeKick)
                .with_minute(13u32),
            Goal::new(603u32, Side::Away, 27u32).with_assist(70u32),
            Goal::new("11:32", Side::Home, PlayerRef::Unknown),
        ];
        GameRecord::new(game, goals)
    }

    #[test]
    fn test_goal_rows_resolve_team_names() {
        let rows = goal_rows(&record());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].scoring_team, "Bay Area Surf 13B Pre-MLS");
        assert_eq!(rows[1].scoring_team, "CV Futbol Academy 13B I");
        assert_eq!(rows[0].round.as_deref(), Some("Final"));
    }

    #[test]
    fn test_cells() {
        let rows = goal_rows(&record());
        assert_eq!(
            rows[0].cells(),
            vec![
                "2023-10-29",
                "LV Mayor's Cup U11 1st Div",
                "Final",
                "Bay Area Surf 13B Pre-MLS",
                "CV Futbol Academy 13B I",
                "Bay Area Surf 13B Pre-MLS",
                "Eli",
                "FK",
                "3:23",
                "13",
            ]
        );
        assert_eq!(rows[1].cells()[6..10], ["#27", "#70", "10:03", ""]);
        assert_eq!(rows[2].cells()[6..8], ["", ""]);
        assert_eq!(rows[0].cells().len(), GoalRow::HEADERS.len());
    }

    #[test]
    fn test_flatten_keeps_record_order() {
        let first = record();
        let mut second = record();
        second.game.division = "Second".into();
        second.goals.truncate(1);
        let empty = GameRecord::new(first.game.clone(), Vec::new());

        let rows = flatten([&first, &empty, &second]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].division, "Second");
    }
}
