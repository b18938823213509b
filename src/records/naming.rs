use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::foundation::error::{PackError, PackResult};

/// Numeric rank encoded in a record identifier (`article12` has rank 12).
///
/// Kept as a digit string with leading zeros stripped, so ranks of any length compare
/// numerically without overflowing a fixed-width integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rank(String);

impl Rank {
    /// Parse a run of one or more ASCII digits.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }))
    }

    /// Canonical digits without leading zeros.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Naming convention of item record files: `<prefix><digits>.<extension>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordNaming {
    prefix: String,
    extension: String,
    catalog_file: String,
}

impl RecordNaming {
    /// Build a convention. `catalog_file` is never treated as a record even if it matches.
    pub fn new(
        prefix: impl Into<String>,
        extension: impl Into<String>,
        catalog_file: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
            catalog_file: catalog_file.into(),
        }
    }

    /// Identifier prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rank of an identifier of the form `<prefix><digits>`.
    pub fn rank_of_id(&self, id: &str) -> Option<Rank> {
        id.strip_prefix(self.prefix.as_str()).and_then(Rank::parse)
    }

    /// Rank of a record file name, or `None` if the name is not a record file.
    pub fn match_file_name(&self, name: &str) -> Option<Rank> {
        if name == self.catalog_file {
            return None;
        }
        let stem = name
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        self.rank_of_id(stem)
    }
}

impl Default for RecordNaming {
    fn default() -> Self {
        Self::new("article", "json", "articles.json")
    }
}

/// A record file found in the source directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFile {
    /// Full path of the file.
    pub path: PathBuf,
    /// File name as found on disk.
    pub file_name: String,
    /// Rank parsed from the file name.
    pub rank: Rank,
}

/// List the record files in `dir`, sorted by rank and then by file name.
///
/// Failing to read the directory itself is fatal; entries that are not regular files or whose
/// names do not match `naming` are ignored.
pub fn scan_record_files(dir: &Path, naming: &RecordNaming) -> PackResult<Vec<RecordFile>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        PackError::io(format!("read source directory '{}': {e}", dir.display()))
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PackError::io(format!("read source directory '{}': {e}", dir.display()))
        })?;
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        let Some(rank) = naming.match_file_name(&file_name) else {
            continue;
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        out.push(RecordFile {
            path,
            file_name,
            rank,
        });
    }

    out.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/records/naming.rs"]
mod tests;
