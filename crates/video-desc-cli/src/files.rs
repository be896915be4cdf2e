//! Game log files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use video_desc::{Game, GameRecord};

use crate::error::CliError;

/// Read and validate one YAML game log.
pub fn load_record(path: &Path) -> Result<GameRecord, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let record: GameRecord = serde_yaml::from_str(&text).map_err(|e| CliError::yaml(path, e))?;
    record.validate().map_err(|source| CliError::Game {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(record)
}

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// `"<date> <home_team> vs <away_team>.yaml"`. Path separators in team names become `-`.
pub fn record_file_name(game: &Game) -> String {
    format!("{} {} vs {}.yaml", game.date, game.home_team, game.away_team)
        .replace(['/', '\\'], "-")
}

pub fn to_yaml(record: &GameRecord) -> Result<String, CliError> {
    serde_yaml::to_string(record).map_err(|e| CliError::yaml(record_file_name(&record.game), e))
}

/// Write `record` into `dir` (created if missing) and return the file's path.
pub fn save_record(record: &GameRecord, dir: &Path) -> Result<PathBuf, CliError> {
    fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;
    let path = dir.join(record_file_name(&record.game));
    fs::write(&path, to_yaml(record)?).map_err(|e| CliError::io(&path, e))?;
    info!(path = %path.display(), "Wrote game log");
    Ok(path)
}

/// Every `*.yaml` file directly inside `dir`, in lexicographic order.
pub fn discover_records(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let pattern = format!("{}/*.yaml", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every path. Bad files are logged and skipped, or abort the run when `strict`.
pub fn load_records(paths: &[PathBuf], strict: bool) -> Result<Vec<GameRecord>, CliError> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        match load_record(path) {
            Ok(record) => records.push(record),
            Err(e) if strict => return Err(e),
            Err(e) => warn!(error = %e, "Skipping game log"),
        }
    }
    Ok(records)
}
