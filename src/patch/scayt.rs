//! Marker substitution over generated API data.
//!
//! The extractor copies `@@<key>` placeholders from the scayt plugin sources
//! into its JSON output. They are replaced literally with URLs from
//! `scayturls.json`.

use crate::error::{BuilderError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

/// Marker key to replacement text
pub type ReplacementMap = BTreeMap<String, String>;

/// Outcome of one substitution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Total markers replaced
    pub replaced: usize,
    /// Distinct markers still present after the pass, sorted
    pub leftover: Vec<String>,
}

/// Loads a JSON object of string values.
pub fn load_replacement_map(path: &Path) -> Result<ReplacementMap> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| BuilderError::file("reading replacement map", path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Replaces every `<prefix><key>` in the file at `path` and writes it back.
///
/// Longer keys are applied first so a key that is a prefix of another key
/// cannot split the longer marker. Markers without a mapping are left in
/// place and listed in the report.
pub fn apply_replacements(mapping: &ReplacementMap, prefix: &str, path: &Path) -> Result<SubstitutionReport> {
    let mut contents = std::fs::read_to_string(path)
        .map_err(|e| BuilderError::file("reading", path, e))?;

    let mut keys: Vec<&String> = mapping.keys().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut replaced = 0;
    for key in keys {
        let marker = format!("{}{}", prefix, key);
        let count = contents.matches(marker.as_str()).count();
        if count > 0 {
            contents = contents.replace(marker.as_str(), &mapping[key]);
            replaced += count;
        }
    }

    std::fs::write(path, &contents).map_err(|e| BuilderError::file("writing", path, e))?;

    Ok(SubstitutionReport {
        replaced,
        leftover: leftover_markers(&contents, prefix)?,
    })
}

fn leftover_markers(contents: &str, prefix: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(&format!(r"{}[A-Za-z0-9_]+", regex::escape(prefix)))
        .map_err(anyhow::Error::from)?;

    let mut found: Vec<String> = pattern
        .find_iter(contents)
        .map(|m| m.as_str().to_string())
        .collect();
    found.sort();
    found.dedup();
    Ok(found)
}
