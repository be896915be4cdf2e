//! Print the video description of one YAML game log.
//!
//! Usage: desc-from-yaml <yaml_file> [--max-title-length N]

use std::env;
use std::path::Path;

use tracing::{info, warn};
use video_desc::describe;
use video_desc_cli::{files, flag_value, init_tracing, CliConfig, CliError};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    let Some(yaml_file) = args.get(1).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("Usage: {} <yaml_file> [--max-title-length N]", args[0]);
        std::process::exit(1);
    };

    let mut config = CliConfig::from_env()?;
    if let Some(value) = flag_value(&args, "--max-title-length")? {
        config.max_title_length = value
            .parse()
            .map_err(|_| CliError::Usage(format!("--max-title-length must be an integer, got {value:?}")))?;
    }

    let record = files::load_record(Path::new(yaml_file))?;
    let description = describe(&record.game, &record.goals, config.max_title_length);

    let title_length = description.title().chars().count();
    match description.title_overflow {
        Some(overflow) => warn!(length = overflow.length, max = overflow.max, "Title exceeds maximum length"),
        None => info!(title_length, "Title length"),
    }

    println!("{description}");
    Ok(())
}
