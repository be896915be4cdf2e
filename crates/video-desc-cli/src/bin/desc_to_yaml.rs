//! Parse a video description back into a YAML game log.
//!
//! Usage: desc-to-yaml <text_file> [--out-dir DIR] [--stdout]
//!
//! Writes "<date> <home_team> vs <away_team>.yaml" into DIR (default: GAME_LOG_DIR or `logs`).

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;
use video_desc::parse;
use video_desc_cli::{files, flag_value, has_flag, init_tracing, CliConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    let Some(text_file) = args.get(1).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("Usage: {} <text_file> [--out-dir DIR] [--stdout]", args[0]);
        std::process::exit(1);
    };

    let config = CliConfig::from_env()?;
    let out_dir = flag_value(&args, "--out-dir")?
        .map(PathBuf::from)
        .unwrap_or(config.game_log_dir);

    let text = files::read_text(Path::new(text_file))?;
    let record = parse(&text)?;
    info!(
        home = %record.game.home_team,
        away = %record.game.away_team,
        goals = record.goals.len(),
        "Parsed game description"
    );

    if has_flag(&args, "--stdout") {
        print!("{}", files::to_yaml(&record)?);
    } else {
        let path = files::save_record(&record, &out_dir)?;
        println!("{}", path.display());
    }
    Ok(())
}
