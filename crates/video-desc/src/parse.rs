//! Game description parsing: free text back into a `GameRecord`.
//!
//! Two title shapes are accepted:
//!
//! ```text
//! 2022-09-10 Norcal U10B Region 1/2 Gold South
//!
//! Bay Area Surf 2 : 4 ECFC
//!
//! 4:11 ECFC - #8: 0-1
//! 10:31 Surf - Jamie (assist from Alex): 2-4
//! ```
//!
//! and the formatter's own output, whose first line is the `|`-delimited title.
//! Lines that do not start with a video time are ignored.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ParseError;
use crate::model::{Assist, Game, GameRecord, Goal, PlayerRef, Side};
use crate::shorthand::Shorthand;
use crate::team::resolve_side;
use crate::timestamp::Timestamp;

static GOAL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}").expect("valid goal-line pattern"));

static SCORE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\d{1,2}\s?[:-]\s?\d{1,2}\s").expect("valid score-separator pattern")
});

static RUNNING_SCORELINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<home>.+?) (?P<h>\[\d+\]|\d+)-(?P<a>\[\d+\]|\d+) (?P<away>.+?) - (?P<detail>.*)$")
        .expect("valid running-scoreline pattern")
});

static BARE_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}-\d{1,2}$").expect("valid bare-score pattern"));

static TRAILING_MINUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\d{1,3}(?:\+\d{1,2})?'$").expect("valid trailing-minute pattern")
});

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("valid parenthesized pattern"));

const ASSIST_MARKER: &str = "(assist from ";

/// Header information read from the first line(s).
struct Header {
    date: NaiveDate,
    division: String,
    round: Option<String>,
    home_team: String,
    away_team: String,
}

/// Parse a game description into a record.
///
/// Fails on a malformed title or scoreline and on a scoring team that matches
/// neither side. Any other unexpected line is skipped. Game minutes are never
/// recovered from the text.
pub fn parse(text: &str) -> Result<GameRecord, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let title = lines.first().ok_or(ParseError::MissingLine("title"))?;
    let (header, body_start) = match parse_piped_title(title)? {
        Some(header) => (header, 1),
        None => {
            let (date, division) = parse_title(title)?;
            let scoreline = lines.get(1).ok_or(ParseError::MissingLine("scoreline"))?;
            let (home_team, away_team) = split_scoreline(scoreline)?;
            let header = Header {
                date,
                division,
                round: None,
                home_team,
                away_team,
            };
            (header, 2)
        }
    };

    let mut game = Game::new(header.date, header.division, header.home_team, header.away_team)?;
    game.round = header.round;

    let mut goals = Vec::new();
    for line in &lines[body_start.min(lines.len())..] {
        if !GOAL_LINE.is_match(line) {
            tracing::trace!(line, "skipping non-goal line");
            continue;
        }
        match parse_goal(line, &game.home_team, &game.away_team)? {
            Some(goal) => goals.push(goal),
            None => tracing::debug!(line, "skipping goal line without a team"),
        }
    }

    Ok(GameRecord::new(game, goals))
}

/// `"<ISO date> <division>"`.
pub fn parse_title(line: &str) -> Result<(NaiveDate, String), ParseError> {
    let (date, division) = line
        .split_once(' ')
        .ok_or_else(|| ParseError::MalformedTitle {
            line: line.to_string(),
        })?;
    let date = parse_date(date).map_err(|source| ParseError::InvalidDate {
        line: line.to_string(),
        source,
    })?;
    Ok((date, division.to_string()))
}

fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
}

/// `"<scoreline> | <division> [| <round>] | <date>"`, as written by the formatter.
/// Returns `None` when the line is not shaped like that.
fn parse_piped_title(line: &str) -> Result<Option<Header>, ParseError> {
    let segments: Vec<&str> = line.split('|').map(str::trim).collect();
    let Some(date) = segments.last().and_then(|last| parse_date(last).ok()) else {
        return Ok(None);
    };
    if segments.len() < 2 {
        return Ok(None);
    }

    let round = match segments.len() {
        3 => None,
        4 => Some(segments[2].to_string()),
        count => {
            return Err(ParseError::MalformedTitleSegments {
                line: line.to_string(),
                count,
            })
        }
    };
    let (home_team, away_team) = split_scoreline(segments[0])?;

    Ok(Some(Header {
        date,
        division: segments[1].to_string(),
        round,
        home_team,
        away_team,
    }))
}

/// Split `"Bay Area Surf 2 : 4 ECFC"` or `"Surf 6-2 PASC"` into the two team names.
pub fn split_scoreline(line: &str) -> Result<(String, String), ParseError> {
    let separator = SCORE_SEPARATOR
        .find(line)
        .ok_or_else(|| ParseError::MalformedScoreline {
            line: line.to_string(),
        })?;
    Ok((
        line[..separator.start()].to_string(),
        line[separator.end()..].to_string(),
    ))
}

fn parse_goal(line: &str, home_team: &str, away_team: &str) -> Result<Option<Goal>, ParseError> {
    let Some((timestamp, rest)) = line.split_once(' ') else {
        return Ok(None);
    };

    let (scoring_team, detail) = match running_score_side(rest) {
        Some(parsed) => parsed,
        None => {
            let Some((token, detail)) = rest.split_once(" - ").or_else(|| rest.split_once(':'))
            else {
                return Ok(None);
            };
            (resolve_side(token, home_team, away_team)?, detail)
        }
    };

    let (scoring_player, assist_player) = scorer_and_assist(detail);

    Ok(Some(Goal {
        timestamp: Timestamp::Text(timestamp.to_string()),
        scoring_team,
        scoring_player,
        assist_player,
        minute: None,
    }))
}

/// Formatter-style goal body `"<home> [1]-0 <away> - <detail>"`: the
/// bracketed number marks the scoring side.
fn running_score_side(rest: &str) -> Option<(Side, &str)> {
    let caps = RUNNING_SCORELINE.captures(rest)?;
    let home_bracketed = caps["h"].starts_with('[');
    let away_bracketed = caps["a"].starts_with('[');
    let side = match (home_bracketed, away_bracketed) {
        (true, false) => Side::Home,
        (false, true) => Side::Away,
        _ => return None,
    };
    let detail = caps.name("detail")?.as_str();
    Some((side, detail))
}

/// Pull the scorer and the assist out of the text after the team.
fn scorer_and_assist(detail: &str) -> (PlayerRef, Option<Assist>) {
    let without_minute = TRAILING_MINUTE.replace(detail.trim(), "");
    let detail: &str = &without_minute;
    let lowered = detail.to_ascii_lowercase();

    if let Some(start) = lowered.find(ASSIST_MARKER) {
        let assist = &detail[start + ASSIST_MARKER.len()..];
        let assist = match assist.find(')') {
            Some(end) => &assist[..end],
            None => assist.trim_end_matches(|c: char| c == ')' || c == ':' || c.is_whitespace()),
        };
        return (scorer(&detail[..start]), Some(Assist::from_token(assist)));
    }

    for caps in PARENTHESIZED.captures_iter(detail) {
        let inner = &caps[1];
        if let Some(shorthand) = Shorthand::from_phrase(inner).or_else(|| Shorthand::from_code(inner)) {
            let start = caps.get(0).map_or(0, |m| m.start());
            return (scorer(&detail[..start]), Some(Assist::Shorthand(shorthand)));
        }
    }

    let before_colon = detail.split(':').next().unwrap_or_default();
    (scorer(before_colon), None)
}

fn scorer(token: &str) -> PlayerRef {
    let token = token.trim();
    if token == "None" || BARE_SCORE.is_match(token) {
        return PlayerRef::Unknown;
    }
    PlayerRef::from_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title() {
        let (date, division) = parse_title("2022-09-10 Norcal U10B Region 1/2 Gold South").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 9, 10).unwrap());
        assert_eq!(division, "Norcal U10B Region 1/2 Gold South");
    }

    #[test]
    fn test_parse_title_errors() {
        assert!(matches!(
            parse_title("2022-09-10"),
            Err(ParseError::MalformedTitle { .. })
        ));
        let err = parse_title("Sept-10 Norcal").unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { .. }));
        assert!(err.to_string().contains("Sept-10 Norcal"));
    }

    #[test]
    fn test_split_scoreline() {
        assert_eq!(
            split_scoreline("Bay Area Surf 2 : 4 ECFC").unwrap(),
            ("Bay Area Surf".to_string(), "ECFC".to_string())
        );
        assert_eq!(
            split_scoreline("Bay Area Surf 13B Pre-MLS 6-2 Palo Alto SC 12B Gold").unwrap(),
            (
                "Bay Area Surf 13B Pre-MLS".to_string(),
                "Palo Alto SC 12B Gold".to_string()
            )
        );
        assert_eq!(
            split_scoreline("Surf 10:0 ECFC").unwrap(),
            ("Surf".to_string(), "ECFC".to_string())
        );
        assert!(matches!(
            split_scoreline("Surf vs ECFC"),
            Err(ParseError::MalformedScoreline { .. })
        ));
    }

    #[test]
    fn test_scorer_and_assist_variants() {
        assert_eq!(
            scorer_and_assist("Jamie (assist from Alex): 2-4"),
            (PlayerRef::Name("Jamie".into()), Some(Assist::from_name("Alex")))
        );
        assert_eq!(
            scorer_and_assist("#6 (assist from #11) : 0-4"),
            (PlayerRef::JerseyNumber(6), Some(Assist::Player(PlayerRef::JerseyNumber(11))))
        );
        assert_eq!(
            scorer_and_assist("Eli (Free Kick)"),
            (PlayerRef::Name("Eli".into()), Some(Assist::Shorthand(Shorthand::FreeKick)))
        );
        assert_eq!(
            scorer_and_assist("Galvan (penalty kick) 5'"),
            (PlayerRef::Name("Galvan".into()), Some(Assist::Shorthand(Shorthand::PenaltyKick)))
        );
        assert_eq!(scorer_and_assist("#8: 0-1"), (PlayerRef::JerseyNumber(8), None));
        assert_eq!(scorer_and_assist(" 0-1"), (PlayerRef::Unknown, None));
        assert_eq!(
            scorer_and_assist("None (own goal) 13'"),
            (PlayerRef::Unknown, Some(Assist::Shorthand(Shorthand::OwnGoal)))
        );
        assert_eq!(
            scorer_and_assist("Dominic (assist from Alexander) 60+2'"),
            (PlayerRef::Name("Dominic".into()), Some(Assist::from_name("Alexander")))
        );
    }

    #[test]
    fn test_running_score_side() {
        assert_eq!(
            running_score_side("Surf [1]-0 CVFA - Eli (free kick) 13'"),
            Some((Side::Home, "Eli (free kick) 13'"))
        );
        assert_eq!(
            running_score_side("Bay Area Surf 5-[1] Palo Alto SC - #27 (assist from #70)"),
            Some((Side::Away, "#27 (assist from #70)"))
        );
        assert_eq!(running_score_side("ECFC - #8: 0-1"), None);
    }

    #[test]
    fn test_terse_team_colon_form() {
        let goal = parse_goal("4:11 ECFC: 0-1", "Bay Area Surf", "ECFC")
            .unwrap()
            .unwrap();
        assert_eq!(goal.scoring_team, Side::Away);
        assert_eq!(goal.scoring_player, PlayerRef::Unknown);
        assert_eq!(goal.timestamp, Timestamp::Text("4:11".into()));
    }

    #[test]
    fn test_goal_line_without_team_is_skipped() {
        assert!(parse_goal("4:11", "Surf", "ECFC").unwrap().is_none());
        assert!(parse_goal("4:11 kickoff", "Surf", "ECFC").unwrap().is_none());
    }
}
