//! Loading of quote seed files.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::entities::Quote;

/// Reads a JSON array of quotes from `path`.
///
/// # Errors
///
/// Fails if the file cannot be read or any quote fails validation.
pub fn load_seed_file(path: &Path) -> Result<Vec<Quote>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    parse_seed(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
}

/// Parses a JSON array of quotes.
pub fn parse_seed(raw: &str) -> Result<Vec<Quote>> {
    serde_json::from_str(raw).context("Expected a JSON array of quotes")
}
