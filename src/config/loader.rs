//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DemoError, DemoResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `output.formatt`
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown config key '{}' in {}",
            self.key,
            self.file.display()
        )?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// An unknown key split into the table it sits in and its own name
#[derive(Debug, Clone, PartialEq, Eq)]
struct UnknownKey {
    table: Vec<String>,
    name: String,
}

impl UnknownKey {
    fn from_dotted(path: &str) -> Self {
        let mut segments: Vec<String> = path.split('.').map(str::to_string).collect();
        let name = segments.pop().unwrap_or_default();
        Self {
            table: segments,
            name,
        }
    }

    fn dotted(&self) -> String {
        self.table
            .iter()
            .chain(std::iter::once(&self.name))
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DemoResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(DemoError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;

    let mut unknown: Vec<UnknownKey> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |ignored| {
            unknown.push(UnknownKey::from_dotted(&ignored.to_string()));
        })
        .map_err(|e| DemoError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown
        .iter()
        .map(|key| ConfigWarning {
            key: key.dotted(),
            file: path.to_path_buf(),
            line: locate_key(&content, key),
            suggestion: suggest_key(key),
        })
        .collect();

    Ok((config, warnings))
}

/// Parse a `[table]` or `[[table]]` header into its dotted segments
fn table_header(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
        .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))?;
    Some(inner.split('.').map(|s| s.trim().to_string()).collect())
}

/// True when `line` assigns `name`, i.e. `name` then optional spaces then `=`
fn assigns(line: &str, name: &str) -> bool {
    line.trim_start()
        .strip_prefix(name)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// 1-based line where `key` is defined, honoring the enclosing table
fn locate_key(content: &str, key: &UnknownKey) -> Option<usize> {
    let mut current: Vec<String> = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if let Some(header) = table_header(line) {
            // A whole unknown table is reported at its header
            if header.len() == key.table.len() + 1
                && header[..key.table.len()] == key.table[..]
                && header[key.table.len()] == key.name
            {
                return Some(i + 1);
            }
            current = header;
            continue;
        }
        if current == key.table && assigns(line, &key.name) {
            return Some(i + 1);
        }
    }
    None
}

/// Keys accepted directly under `table`
fn known_keys(table: &[String]) -> &'static [&'static str] {
    match table {
        [] => &["formatter", "output"],
        [section] if section == "output" => &["format"],
        _ => &[],
    }
}

fn suggest_key(key: &UnknownKey) -> Option<String> {
    known_keys(&key.table)
        .iter()
        .map(|candidate| (*candidate, edit_distance(&key.name, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over chars, single rolling row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
