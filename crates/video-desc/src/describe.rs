//! Game description formatter.
//!
//! Produces the text block posted with a game video: a `|`-delimited title,
//! a subtitle, the final scoreline and one line per goal with the running
//! score, e.g.
//!
//! ```text
//! Bay Area Surf 13B Pre-MLS 1-0 Palo Alto SC 12B Gold | Norcal U12 Premier | 2023-11-04
//!
//! 2023-11-04 Norcal U12 Premier
//!
//! Bay Area Surf 13B Pre-MLS 1-0 Palo Alto SC 12B Gold
//!
//! 3:27 Bay Area Surf [1]-0 Palo Alto SC - Dominic (assist from Ayden) 4'
//! ```

use std::fmt::{self, Write};

use crate::model::{Game, Goal, Side};

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;

const TITLE_DELIMITER: &str = " | ";

/// A title that stayed longer than allowed even after abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleOverflow {
    pub length: usize,
    pub max: usize,
}

/// Rendered description plus any non-fatal problem found while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    pub title_overflow: Option<TitleOverflow>,
}

impl Description {
    pub fn title(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.text
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Score {
    home: u32,
    away: u32,
}

impl Score {
    fn record(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    /// Score with the side that just scored in brackets: `[3]-2`, `3-[2]`.
    fn running(&self, scored: Side) -> String {
        match scored {
            Side::Home => format!("[{}]-{}", self.home, self.away),
            Side::Away => format!("{}-[{}]", self.home, self.away),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Render the description of `game`. Goals are taken in the order given.
pub fn describe(game: &Game, goals: &[Goal], max_title_length: usize) -> Description {
    let home_short = game.short_name(Side::Home);
    let away_short = game.short_name(Side::Away);

    let mut score = Score::default();
    let mut goal_lines = Vec::with_capacity(goals.len());
    for goal in goals {
        score.record(goal.scoring_team);
        goal_lines.push(goal_line(goal, &score, home_short, away_short));
    }

    let final_scoreline = format!("{} {} {}", game.home_team, score, game.away_team);
    let (title, title_overflow) = compose_title(game, &final_scoreline, max_title_length);

    let mut text = format!("{title}\n\n{}\n\n{final_scoreline}\n", subtitle(game));
    if !goal_lines.is_empty() {
        text.push('\n');
        text.push_str(&goal_lines.join("\n"));
    }

    Description {
        text,
        title_overflow,
    }
}

fn goal_line(goal: &Goal, score: &Score, home_short: &str, away_short: &str) -> String {
    let mut line = format!(
        "{} {} {} {} - {}",
        goal.timestamp.normalize(),
        home_short,
        score.running(goal.scoring_team),
        away_short,
        goal.scoring_player,
    );
    if let Some(assist) = &goal.assist_player {
        line.push(' ');
        line.push_str(&assist.annotation());
    }
    if let Some(minute) = &goal.minute {
        let _ = write!(line, " {minute}'");
    }
    line
}

fn subtitle(game: &Game) -> String {
    let mut subtitle = format!("{} {}", game.date, game.division);
    if let Some(round) = game.round() {
        let _ = write!(subtitle, " ({round})");
    }
    subtitle
}

fn compose_title(
    game: &Game,
    final_scoreline: &str,
    max_title_length: usize,
) -> (String, Option<TitleOverflow>) {
    let date = game.date.to_string();
    let mut segments = vec![final_scoreline, game.division.as_str()];
    if let Some(round) = game.round() {
        segments.push(round);
    }
    segments.push(&date);

    let title = segments.join(TITLE_DELIMITER);
    let length = title.chars().count();
    if length <= max_title_length {
        return (title, None);
    }

    tracing::warn!(length, max = max_title_length, "Title is too long");
    let abbreviated = abbreviate_title(&title, max_title_length);
    let abbreviated_length = abbreviated.chars().count();
    if abbreviated_length <= max_title_length {
        tracing::info!(
            length = abbreviated_length,
            max = max_title_length,
            "Abbreviated title to fit"
        );
        (abbreviated, None)
    } else {
        tracing::warn!(
            length,
            max = max_title_length,
            "Title does not fit even abbreviated; keeping it as is"
        );
        (
            title,
            Some(TitleOverflow {
                length,
                max: max_title_length,
            }),
        )
    }
}

/// Shorten a `|`-delimited title by dropping the spaces around delimiters,
/// rightmost delimiter first, until it fits in `max_title_length` characters.
/// Segments are never dropped or reordered.
pub fn abbreviate_title(title: &str, max_title_length: usize) -> String {
    let mut segments: Vec<&str> = title.split('|').collect();
    let mut abbreviated = title.to_string();

    for i in (1..segments.len()).rev() {
        if abbreviated.chars().count() <= max_title_length {
            break;
        }
        segments[i] = segments[i].trim();
        segments[i - 1] = segments[i - 1].trim_end();
        abbreviated = segments.join("|");
    }

    abbreviated
}
