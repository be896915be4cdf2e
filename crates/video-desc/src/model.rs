//! Game and goal records.
//!
//! Field names match the YAML interchange format exactly, so a `GameRecord`
//! round-trips through serde without renames.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FormatError, GameError};
use crate::shorthand::Shorthand;
use crate::team::split_team_name;
use crate::timestamp::Timestamp;

/// Which team scored. Serialized as `"H"` / `"A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Side {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
}

impl Side {
    pub fn code(self) -> &'static str {
        match self {
            Side::Home => "H",
            Side::Away => "A",
        }
    }
}

impl FromStr for Side {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Side::Home),
            "A" => Ok(Side::Away),
            other => Err(FormatError::UnknownSide(other.to_string())),
        }
    }
}

impl TryFrom<String> for Side {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A player as recorded by whoever logged the game: a name, a jersey number,
/// or nobody at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PlayerRef {
    Name(String),
    JerseyNumber(u32),
    #[default]
    Unknown,
}

impl PlayerRef {
    /// Read a player token from description text. `#27` is jersey 27.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            return PlayerRef::Unknown;
        }
        match token.strip_prefix('#').and_then(|n| n.trim().parse().ok()) {
            Some(number) => PlayerRef::JerseyNumber(number),
            None => PlayerRef::Name(token.to_string()),
        }
    }

    /// Table cell for this player, `None` when unknown.
    pub fn as_cell(&self) -> Option<String> {
        match self {
            PlayerRef::Unknown => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRef::Name(name) => f.write_str(name),
            PlayerRef::JerseyNumber(number) => write!(f, "#{number}"),
            PlayerRef::Unknown => f.write_str("None"),
        }
    }
}

impl From<u32> for PlayerRef {
    fn from(number: u32) -> Self {
        PlayerRef::JerseyNumber(number)
    }
}

impl From<&str> for PlayerRef {
    fn from(name: &str) -> Self {
        PlayerRef::Name(name.to_string())
    }
}

/// Raw YAML scalar for player-like fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlayer {
    Number(u32),
    Text(String),
}

impl Serialize for PlayerRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlayerRef::Name(name) => serializer.serialize_str(name),
            PlayerRef::JerseyNumber(number) => serializer.serialize_u32(*number),
            PlayerRef::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for PlayerRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawPlayer>::deserialize(deserializer)? {
            Some(RawPlayer::Number(number)) => PlayerRef::JerseyNumber(number),
            Some(RawPlayer::Text(name)) => PlayerRef::Name(name),
            None => PlayerRef::Unknown,
        })
    }
}

/// How a goal was set up: an assisting player or a set-piece/own-goal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Assist {
    Player(PlayerRef),
    Shorthand(Shorthand),
}

impl Assist {
    /// Resolve a free-text assist value. Shorthand codes match case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match Shorthand::from_code(name) {
            Some(shorthand) => Assist::Shorthand(shorthand),
            None => Assist::Player(PlayerRef::Name(name.to_string())),
        }
    }

    /// Like [`Assist::from_name`], but `#70` is read as a jersey number.
    pub fn from_token(token: &str) -> Self {
        match PlayerRef::from_token(token) {
            PlayerRef::Name(name) => Assist::from_name(&name),
            player => Assist::Player(player),
        }
    }

    /// The parenthesized annotation appended to a goal line.
    pub fn annotation(&self) -> String {
        match self {
            Assist::Player(player) => format!("(assist from {player})"),
            Assist::Shorthand(shorthand) => format!("({})", shorthand.phrase()),
        }
    }

    pub fn as_cell(&self) -> Option<String> {
        match self {
            Assist::Player(player) => player.as_cell(),
            Assist::Shorthand(shorthand) => Some(shorthand.code().to_string()),
        }
    }
}

impl From<PlayerRef> for Assist {
    fn from(player: PlayerRef) -> Self {
        Assist::Player(player)
    }
}

impl From<Shorthand> for Assist {
    fn from(shorthand: Shorthand) -> Self {
        Assist::Shorthand(shorthand)
    }
}

impl From<&str> for Assist {
    fn from(name: &str) -> Self {
        Assist::from_name(name)
    }
}

impl From<u32> for Assist {
    fn from(number: u32) -> Self {
        Assist::Player(PlayerRef::JerseyNumber(number))
    }
}

impl Serialize for Assist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Assist::Player(player) => player.serialize(serializer),
            Assist::Shorthand(shorthand) => serializer.serialize_str(shorthand.code()),
        }
    }
}

impl<'de> Deserialize<'de> for Assist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPlayer::deserialize(deserializer)? {
            RawPlayer::Number(number) => Assist::Player(PlayerRef::JerseyNumber(number)),
            RawPlayer::Text(name) => Assist::from_name(&name),
        })
    }
}

/// Game minute of a goal; text allows stoppage time such as `60+2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Minute {
    Number(u32),
    Text(String),
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Minute::Number(minute) => write!(f, "{minute}"),
            Minute::Text(minute) => f.write_str(minute),
        }
    }
}

impl From<u32> for Minute {
    fn from(minute: u32) -> Self {
        Minute::Number(minute)
    }
}

impl From<&str> for Minute {
    fn from(minute: &str) -> Self {
        Minute::Text(minute.to_string())
    }
}

/// One scoring event, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub timestamp: Timestamp,
    pub scoring_team: Side,
    pub scoring_player: PlayerRef,
    #[serde(default)]
    pub assist_player: Option<Assist>,
    #[serde(default)]
    pub minute: Option<Minute>,
}

impl Goal {
    pub fn new(
        timestamp: impl Into<Timestamp>,
        scoring_team: Side,
        scoring_player: impl Into<PlayerRef>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            scoring_team,
            scoring_player: scoring_player.into(),
            assist_player: None,
            minute: None,
        }
    }

    pub fn with_assist(mut self, assist: impl Into<Assist>) -> Self {
        self.assist_player = Some(assist.into());
        self
    }

    pub fn with_minute(mut self, minute: impl Into<Minute>) -> Self {
        self.minute = Some(minute.into());
        self
    }
}

/// One match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub date: NaiveDate,
    pub division: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub home_team_abbrev: Option<String>,
    #[serde(default)]
    pub away_team_abbrev: Option<String>,
}

impl Game {
    pub fn new(
        date: NaiveDate,
        division: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Result<Self, GameError> {
        let game = Self {
            date,
            division: division.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            round: None,
            home_team_abbrev: None,
            away_team_abbrev: None,
        };
        game.validate()?;
        Ok(game)
    }

    pub fn with_round(mut self, round: impl Into<String>) -> Self {
        self.round = Some(round.into());
        self
    }

    pub fn with_abbrevs(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_team_abbrev = Some(home.into());
        self.away_team_abbrev = Some(away.into());
        self
    }

    /// Team names must be non-empty and distinct.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.home_team.trim().is_empty() {
            return Err(GameError::EmptyTeam("home"));
        }
        if self.away_team.trim().is_empty() {
            return Err(GameError::EmptyTeam("away"));
        }
        if self.home_team == self.away_team {
            return Err(GameError::SameTeams(self.home_team.clone()));
        }
        Ok(())
    }

    /// Round label, if the game has one.
    pub fn round(&self) -> Option<&str> {
        self.round.as_deref().filter(|round| !round.is_empty())
    }

    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    /// Display name for goal lines: the explicit abbreviation if set,
    /// otherwise the full name with its age/year suffix stripped.
    pub fn short_name(&self, side: Side) -> &str {
        let abbrev = match side {
            Side::Home => self.home_team_abbrev.as_deref(),
            Side::Away => self.away_team_abbrev.as_deref(),
        };
        match abbrev.filter(|a| !a.is_empty()) {
            Some(abbrev) => abbrev,
            None => split_team_name(self.team_name(side)),
        }
    }
}

/// A game together with its goals, as stored in one YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(flatten)]
    pub game: Game,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goals: Vec<Goal>,
}

impl GameRecord {
    pub fn new(game: Game, goals: Vec<Goal>) -> Self {
        Self { game, goals }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.game.validate()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Goal>, D::Error> {
    Ok(Option::<Vec<Goal>>::deserialize(deserializer)?.unwrap_or_default())
}
