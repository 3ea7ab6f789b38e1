// Loads the FAQ corpus: a JSON array of question/answer records.
//
// A corpus that is missing or malformed is fatal; there is no partial load.
use crate::model::FaqEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Corpus shipped with the binary, used when no path is configured.
pub const BUNDLED_FAQ: &str = include_str!("../data/faq.json");

pub fn parse_corpus(json: &str) -> Result<Vec<FaqEntry>> {
    let entries: Vec<FaqEntry> = serde_json::from_str(json)
        .context("FAQ corpus is not a JSON array of question/answer records")?;
    Ok(entries)
}

pub fn load_corpus(path: &Path) -> Result<Vec<FaqEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read FAQ corpus '{}'", path.display()))?;
    let entries = parse_corpus(&contents)
        .with_context(|| format!("Failed to parse FAQ corpus '{}'", path.display()))?;
    log::info!("Loaded {} FAQ entries from {}", entries.len(), path.display());
    Ok(entries)
}

pub fn bundled_corpus() -> Result<Vec<FaqEntry>> {
    parse_corpus(BUNDLED_FAQ).context("Bundled FAQ corpus is invalid")
}
