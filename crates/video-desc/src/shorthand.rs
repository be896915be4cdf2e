//! Shorthand codes that stand in for an assisting player.

/// A set piece or own goal recorded in place of an assist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    PenaltyKick,
    FreeKick,
    OwnGoal,
    CornerKick,
}

/// Accepted spellings, matched case-insensitively.
const SHORTHAND_CODES: &[(&str, Shorthand)] = &[
    ("PK", Shorthand::PenaltyKick),
    ("Penalty", Shorthand::PenaltyKick),
    ("Penalty Kick", Shorthand::PenaltyKick),
    ("FK", Shorthand::FreeKick),
    ("Free Kick", Shorthand::FreeKick),
    ("OG", Shorthand::OwnGoal),
    ("Own Goal", Shorthand::OwnGoal),
    ("CK", Shorthand::CornerKick),
    ("Corner Kick", Shorthand::CornerKick),
];

impl Shorthand {
    pub const ALL: [Shorthand; 4] = [
        Shorthand::PenaltyKick,
        Shorthand::FreeKick,
        Shorthand::OwnGoal,
        Shorthand::CornerKick,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        SHORTHAND_CODES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, shorthand)| *shorthand)
    }

    /// Reverse of [`Shorthand::phrase`], case-insensitive.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let phrase = phrase.trim();
        Self::ALL
            .into_iter()
            .find(|shorthand| shorthand.phrase().eq_ignore_ascii_case(phrase))
    }

    /// Canonical two-letter code, used when writing records.
    pub fn code(self) -> &'static str {
        match self {
            Shorthand::PenaltyKick => "PK",
            Shorthand::FreeKick => "FK",
            Shorthand::OwnGoal => "OG",
            Shorthand::CornerKick => "CK",
        }
    }

    /// Phrase shown in goal descriptions.
    pub fn phrase(self) -> &'static str {
        match self {
            Shorthand::PenaltyKick => "penalty kick",
            Shorthand::FreeKick => "free kick",
            Shorthand::OwnGoal => "own goal",
            Shorthand::CornerKick => "corner kick",
        }
    }
}
