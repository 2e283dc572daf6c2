//! Loads known-answer suites from TOML files.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{KatError, Result};
use super::model::KatSuite;

/// Directory holding the suite files
pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("vectors")
}

/// Parses a suite from TOML text
pub fn parse_suite(text: &str) -> Result<KatSuite> {
    Ok(toml::from_str(text)?)
}

/// Loads `vectors/<name>.toml`
pub fn load_suite_by_name(name: &str) -> Result<KatSuite> {
    let path = vectors_dir().join(format!("{}.toml", name));
    let text = fs::read_to_string(&path).map_err(|source| KatError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_suite(&text)
}

/// Loads every suite in the vectors directory, sorted by file name
pub fn load_all_suites() -> Result<Vec<KatSuite>> {
    let dir = vectors_dir();
    let entries = fs::read_dir(&dir).map_err(|source| KatError::Read {
        path: dir.display().to_string(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => path.file_stem().and_then(|s| s.to_str()).map(String::from),
                _ => None,
            }
        })
        .collect();
    names.sort();

    names.iter().map(|name| load_suite_by_name(name)).collect()
}
