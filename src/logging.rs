// File: src/logging.rs
// File logger setup. Stdout belongs to the chat, so log records go to
// `<data dir>/studybuddy.log` instead.
use crate::context::AppContext;
use anyhow::{Context, Result, anyhow};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

/// Installs the global file logger and returns the log file path.
///
/// An unknown level name falls back to `info`. Fails when the data directory
/// is unavailable, the file cannot be created, or a logger is already set.
pub fn init_file_logger(ctx: &dyn AppContext, level: &str) -> Result<PathBuf> {
    let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);
    let path = ctx
        .get_log_path()
        .ok_or_else(|| anyhow!("No data directory for the log file"))?;
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file '{}'", path.display()))?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("Failed to install the logger")?;
    Ok(path)
}
