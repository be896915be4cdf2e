//! Team name helpers: suffix stripping for display, fuzzy matching for parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::model::Side;

/// Age group, birth year or gender marker: `13B`, `2013`, `G12`.
static NOISE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[BG]?\d{2,4}[BG]?\s*").expect("valid noise-suffix pattern"));

/// Minimum similarity for a scoring-team token to count as a team.
pub const TEAM_MATCH_CUTOFF: f64 = 0.2;

/// Cut a team name at its first age/year marker.
///
/// `"Bay Area Surf 13B Pre-MLS"` and `"Bay Area Surf 2013 Black"` both become
/// `"Bay Area Surf"`. Names without a marker come back unchanged, as do names
/// that start with one (there would be nothing left to show).
pub fn split_team_name(team_name: &str) -> &str {
    match NOISE_SUFFIX.find(team_name) {
        Some(m) => {
            let head = team_name[..m.start()].trim();
            if head.is_empty() {
                team_name.trim()
            } else {
                head
            }
        }
        None => team_name,
    }
}

/// Case-insensitive bigram (Sørensen–Dice) similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(&a.to_lowercase(), &b.to_lowercase())
}

fn team_score(token: &str, team_name: &str) -> f64 {
    similarity(token, split_team_name(team_name)).max(similarity(token, team_name))
}

/// Decide which team a free-text token like `"Surf"` or `"ECFC"` refers to.
pub fn resolve_side(token: &str, home_team: &str, away_team: &str) -> Result<Side, ParseError> {
    let token = token.trim();
    let home = team_score(token, home_team);
    let away = team_score(token, away_team);
    tracing::debug!(token, home, away, "scoring team similarity");

    if home.max(away) < TEAM_MATCH_CUTOFF || home == away {
        return Err(ParseError::UnresolvedTeam {
            token: token.to_string(),
            home: home_team.to_string(),
            away: away_team.to_string(),
        });
    }

    Ok(if home > away { Side::Home } else { Side::Away })
}
