// SPDX-License-Identifier: PMPL-1.0-or-later

//! Conversions between display names and ISO codes.
//!
//! Both tables are tab-separated text with a header row, in the layout
//! published by ISO:
//!
//! | File | Columns |
//! |------|---------|
//! | `country-codes.txt` | Country, Alpha-2 code, Alpha-3 code, Numeric |
//! | `language-codes.txt` | ISO Language Names, ISO 639-1 Code |
//!
//! Codes are normalised with [`normalize_code`] on the way in and on every
//! lookup, so `"DEU"`, `" deu "` and `"deu"` are the same key.

mod country;
mod language;

pub use country::CountryCodeConverter;
pub use language::LanguageCodeConverter;

use crate::error::{LoadError, LoadResult};
use std::collections::HashMap;

/// Trim and lowercase a user or table supplied code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// Bidirectional name <-> code table shared by both converters.
#[derive(Debug, Clone, Default)]
struct CodeTable {
    names: HashMap<String, String>,
    codes: HashMap<String, String>,
}

impl CodeTable {
    fn insert(&mut self, code: &str, name: &str) {
        let code = normalize_code(code);
        self.codes.insert(name.to_string(), code.clone());
        self.names.insert(code, name.to_string());
    }

    fn name(&self, code: &str) -> Option<&str> {
        self.names.get(&normalize_code(code)).map(String::as_str)
    }

    /// Exact match first, then a case-insensitive scan.
    fn code(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if let Some(code) = self.codes.get(name) {
            return Some(code.as_str());
        }
        self.codes
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, code)| code.as_str())
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// Split a tab-separated table into rows of exactly `columns` non-empty
/// cells, skipping the header and blank lines.
fn parse_rows<'a>(
    resource: &str,
    text: &'a str,
    columns: usize,
) -> LoadResult<Vec<Vec<&'a str>>> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate().skip(1) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
        if cells.len() != columns || cells.iter().any(|cell| cell.is_empty()) {
            return Err(LoadError::MalformedTable {
                resource: resource.to_string(),
                line: index + 1,
            });
        }
        rows.push(cells);
    }
    Ok(rows)
}
