//! Flatten a directory of YAML game logs into one goal per row.
//!
//! Usage: goal-table <yaml_dir> [--format csv|tsv|json] [--out FILE] [--strict]
//!
//! Files are read in lexicographic order. Unreadable logs are skipped with a
//! warning unless --strict is given.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::info;
use video_desc::flatten;
use video_desc_cli::{files, flag_value, has_flag, init_tracing, write_table, CliConfig, CliError, TableFormat};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    let Some(yaml_dir) = args.get(1).filter(|arg| !arg.starts_with("--")) else {
        eprintln!(
            "Usage: {} <yaml_dir> [--format csv|tsv|json] [--out FILE] [--strict]",
            args[0]
        );
        std::process::exit(1);
    };

    let config = CliConfig::from_env()?;
    let format = match flag_value(&args, "--format")? {
        Some(value) => value
            .parse::<TableFormat>()
            .map_err(|_| CliError::Usage(format!("--format must be csv, tsv or json, got {value:?}")))?,
        None => config.table_format,
    };
    let strict = has_flag(&args, "--strict");

    let paths = files::discover_records(Path::new(yaml_dir))?;
    let records = files::load_records(&paths, strict)?;
    let rows = flatten(&records);
    info!(
        files = paths.len(),
        games = records.len(),
        goals = rows.len(),
        %format,
        "Built goal table"
    );

    match flag_value(&args, "--out")? {
        Some(out) => {
            let file = File::create(out).map_err(|e| CliError::Io {
                path: out.into(),
                source: e,
            })?;
            write_table(BufWriter::new(file), &rows, format)?;
        }
        None => write_table(io::stdout().lock(), &rows, format)?,
    }
    Ok(())
}
