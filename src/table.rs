// src/table.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};

static RENDERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+):(.*)$").expect("rendered line regex should compile"));

/// A kept country code: exactly two characters, none of them ASCII lowercase.
pub fn is_country_code(code: &str) -> bool {
    code.chars().count() == 2 && !code.bytes().any(|b| b.is_ascii_lowercase())
}

/// MCC → ISO 3166-1 alpha-2 country code. Keys are unique; a later insert wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: BTreeMap<i64, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the code previously held for `mcc`.
    pub fn insert(&mut self, mcc: i64, iso: impl Into<String>) -> Option<String> {
        self.entries.insert(mcc, iso.into())
    }

    pub fn get(&self, mcc: i64) -> Option<&str> {
        self.entries.get(&mcc).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending MCC order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.entries.iter().map(|(mcc, iso)| (*mcc, iso.as_str()))
    }

    /// One `<mcc>:<iso>` line per entry, each newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (mcc, iso) in self.iter() {
            writeln!(out, "{}:{}", mcc, iso)?;
        }
        Ok(())
    }

    /// Read back the output of [`CodeTable::render`]. Blank lines are ignored.
    pub fn parse_rendered(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for (idx, raw) in text.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || Error::Malformed {
                line: idx + 1,
                content: line.to_string(),
            };
            let caps = RENDERED_LINE.captures(line).ok_or_else(malformed)?;
            let mcc: i64 = caps[1].parse().map_err(|_| malformed())?;
            if !is_country_code(&caps[2]) {
                return Err(malformed());
            }
            table.insert(mcc, &caps[2]);
        }
        Ok(table)
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mcc, iso) in self.iter() {
            writeln!(f, "{}:{}", mcc, iso)?;
        }
        Ok(())
    }
}
