//! Command-line glue around `video_desc`: configuration, game log files and
//! goal table output shared by the `desc-from-yaml`, `desc-to-yaml` and
//! `goal-table` binaries.

pub mod config;
pub mod error;
pub mod files;
pub mod output;

pub use config::CliConfig;
pub use error::CliError;
pub use output::{write_table, TableFormat};

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `info`), so stdout carries only output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Value following `flag` in `args`, if the flag is present.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, CliError> {
    match args.iter().position(|arg| arg == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|value| Some(value.as_str()))
            .ok_or_else(|| CliError::Usage(format!("{flag} needs a value"))),
        None => Ok(None),
    }
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}
