//! Static seed data: the celebrity roster and per-year Oscar nominations.
//!
//! The bundled files are compiled in and handed to the workflows as values.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

const BUNDLED_ROSTER: &str = include_str!("../data/roster.txt");
const NOMINATIONS_2025: &str = include_str!("../data/nominations_2025.json");

/// All nominations of one ceremony, in display order.
#[derive(Debug, Clone, Deserialize)]
pub struct Nominations {
    pub year: i32,
    pub categories: Vec<CategoryNominations>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryNominations {
    pub category: String,
    pub nominees: Vec<NomineeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NomineeEntry {
    pub name: String,
    #[serde(default)]
    pub work_title: String,
    /// A person (linked to a celebrity) rather than a film or song.
    pub is_person: bool,
}

/// Parse roster text: one name per line, `#` comments and blank lines
/// skipped, case-insensitive duplicates dropped (first spelling kept).
pub fn parse_roster(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

pub fn bundled_roster() -> Vec<String> {
    parse_roster(BUNDLED_ROSTER)
}

pub fn load_roster(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    Ok(parse_roster(&text))
}

/// The bundled nominations for `year`.
pub fn bundled_nominations(year: i32) -> anyhow::Result<Nominations> {
    let raw = match year {
        2025 => NOMINATIONS_2025,
        _ => bail!("No nomination data available for {year}. Only 2025 is currently supported."),
    };
    let nominations: Nominations =
        serde_json::from_str(raw).with_context(|| format!("Malformed nominations for {year}"))?;
    if nominations.year != year {
        bail!(
            "Nomination data for {year} is labelled {}",
            nominations.year
        );
    }
    Ok(nominations)
}
