//! Lazy `.env` file parsing.
//!
//! This module converts a line-oriented env file into a sequence of
//! key/value pairs, one per qualifying line, in file order. Blank lines,
//! comment lines, and lines without `=` are skipped silently.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::errors::EnvFileError;

/// A key/value pair parsed from an env file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    /// The secret key/name.
    pub key: String,
    /// The secret value.
    pub value: String,
}

/// Lazy iterator over the entries of an env file.
///
/// Each call to [`EnvEntries::open`] restarts from the top of the file.
pub struct EnvEntries {
    lines: Lines<BufReader<File>>,
}

impl EnvEntries {
    /// Open an env file for iteration.
    ///
    /// # Errors
    ///
    /// Returns [`EnvFileError::Open`] if the file does not exist or cannot
    /// be opened. Callers use this as the signal to fall back to
    /// interactive input.
    pub fn open(path: &Path) -> Result<Self, EnvFileError> {
        let file = File::open(path).map_err(|source| EnvFileError::Open {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for EnvEntries {
    type Item = Result<EnvEntry, EnvFileError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(entry) = parse_line(&line) {
                        return Some(Ok(entry));
                    }
                }
                Err(err) => return Some(Err(EnvFileError::Read(err))),
            }
        }
        None
    }
}

/// Parse a single env file line into an entry.
///
/// Returns `None` for lines that carry no assignment: blank lines,
/// `#` comments, and lines without `=`. Otherwise splits on the first `=`
/// only, so the value may itself contain `=`.
///
/// The key has every occurrence of the substring `export ` removed, not
/// just a leading one. This matches the long-standing behavior of the
/// tool; do not narrow it to a prefix check.
pub fn parse_line(raw: &str) -> Option<EnvEntry> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(constants::env_file::COMMENT_PREFIX) {
        return None;
    }
    let (raw_key, raw_value) = line.split_once('=')?;

    let key = raw_key
        .replace(constants::env_file::EXPORT_MARKER, "")
        .trim()
        .to_string();
    let value = raw_value
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .to_string();

    Some(EnvEntry { key, value })
}
