//! Video timestamps for goal lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a goal in the game video: either literal text (`"3:27"`)
/// or a count of elapsed seconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(u32),
    Text(String),
}

impl Timestamp {
    /// Display form. Text passes through untouched; seconds become `M:SS`.
    pub fn normalize(&self) -> String {
        match self {
            Timestamp::Text(text) => text.clone(),
            Timestamp::Seconds(seconds) => format_seconds(*seconds),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize())
    }
}

impl From<u32> for Timestamp {
    fn from(seconds: u32) -> Self {
        Timestamp::Seconds(seconds)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Text(text)
    }
}

/// Normalize any timestamp value to its display string.
pub fn normalize_timestamp(timestamp: impl Into<Timestamp>) -> String {
    timestamp.into().normalize()
}

/// Render seconds as `MM:SS` of an `H:MM:SS` clock, dropping the hours and
/// exactly one leading zero of the minutes (`45` -> `0:45`, `600` -> `10:00`).
fn format_seconds(total: u32) -> String {
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    let padded = format!("{minutes:02}:{seconds:02}");
    match padded.strip_prefix('0') {
        Some(stripped) => stripped.to_string(),
        None => padded,
    }
}
