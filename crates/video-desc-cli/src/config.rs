//! Tool configuration from environment variables (and `.env`).

use std::env;
use std::path::PathBuf;

use video_desc::DEFAULT_MAX_TITLE_LENGTH;

use crate::error::CliError;
use crate::output::TableFormat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Title length the formatter tries to stay within
    pub max_title_length: usize,

    /// Directory `desc-to-yaml` writes game logs into
    pub game_log_dir: PathBuf,

    /// Default output format of `goal-table`
    pub table_format: TableFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            game_log_dir: PathBuf::from("logs"),
            table_format: TableFormat::Csv,
        }
    }
}

impl CliConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys take their defaults;
    /// set but unparseable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let defaults = Self::default();

        let max_title_length = match lookup("MAX_TITLE_LENGTH") {
            Some(value) => value.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "MAX_TITLE_LENGTH must be a non-negative integer, got {value:?}"
                ))
            })?,
            None => defaults.max_title_length,
        };

        let game_log_dir = lookup("GAME_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.game_log_dir);

        let table_format = match lookup("TABLE_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.table_format,
        };

        Ok(Self {
            max_title_length,
            game_log_dir,
            table_format,
        })
    }
}
