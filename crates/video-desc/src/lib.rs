//! Youth-soccer game records and their video descriptions.
//!
//! `describe()` renders a `Game` and its goals as the text posted with a game
//! video; `parse()` reads such text (including older hand-written variants)
//! back into a `GameRecord`. Both are pure and stateless.

pub mod describe;
pub mod error;
pub mod model;
pub mod parse;
pub mod shorthand;
pub mod table;
pub mod team;
pub mod timestamp;

pub use describe::{abbreviate_title, describe, Description, TitleOverflow, DEFAULT_MAX_TITLE_LENGTH};
pub use error::{FormatError, GameError, ParseError};
pub use model::{Assist, Game, GameRecord, Goal, Minute, PlayerRef, Side};
pub use parse::parse;
pub use shorthand::Shorthand;
pub use table::{flatten, goal_rows, GoalRow};
pub use team::split_team_name;
pub use timestamp::{normalize_timestamp, Timestamp};
