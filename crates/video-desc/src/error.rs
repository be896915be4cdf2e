//! Error types for formatting and parsing game records.

use thiserror::Error;

/// Data-integrity failures in a structured record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("scoring team {0:?} is neither 'H' (home) nor 'A' (away)")]
    UnknownSide(String),
}

/// Violations of the `Game` invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} team name is empty")]
    EmptyTeam(&'static str),

    #[error("home and away team are both {0:?}")]
    SameTeams(String),
}

/// Fatal failures while reading a game description back into a record.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("missing {0} line")]
    MissingLine(&'static str),

    #[error("title line {line:?} must contain a date and a division")]
    MalformedTitle { line: String },

    #[error("title line {line:?} does not start with an ISO date: {source}")]
    InvalidDate {
        line: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("title line {line:?} has {count} '|' segments, expected 3 or 4")]
    MalformedTitleSegments { line: String, count: usize },

    #[error("scoreline {line:?} has no score separating the two teams")]
    MalformedScoreline { line: String },

    #[error("scoring team {token:?} is not one of the game teams: home={home:?}, away={away:?}")]
    UnresolvedTeam {
        token: String,
        home: String,
        away: String,
    },

    #[error("invalid game: {0}")]
    InvalidGame(#[from] GameError),
}

impl ParseError {
    /// True for failures caused by the title or scoreline line not having the expected shape.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ParseError::MissingLine(_)
                | ParseError::MalformedTitle { .. }
                | ParseError::InvalidDate { .. }
                | ParseError::MalformedTitleSegments { .. }
                | ParseError::MalformedScoreline { .. }
        )
    }
}
