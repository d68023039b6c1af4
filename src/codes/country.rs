// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 country names and alpha-3 codes.
//!
//! Reference: <https://www.iso.org/iso-3166-country-codes.html>

use super::{parse_rows, CodeTable};
use crate::error::LoadResult;
use crate::resource::{Resource, DEFAULT_COUNTRY_CODES};
use tracing::debug;

const NAME_COLUMN: usize = 0;
const ALPHA3_COLUMN: usize = 2;
const COLUMNS: usize = 4;

/// Converts between country display names and alpha-3 codes.
#[derive(Debug, Clone, Default)]
pub struct CountryCodeConverter {
    table: CodeTable,
}

impl CountryCodeConverter {
    /// Converter over the bundled `country-codes.txt`.
    pub fn bundled() -> LoadResult<Self> {
        Self::load(&Resource::bundled(DEFAULT_COUNTRY_CODES)?)
    }

    pub fn load(resource: &Resource) -> LoadResult<Self> {
        let text = resource.read()?;
        let converter = Self::from_table(&resource.to_string(), &text)?;
        debug!(resource = %resource, countries = converter.len(), "loaded country codes");
        Ok(converter)
    }

    pub fn from_table(resource: &str, text: &str) -> LoadResult<Self> {
        let mut table = CodeTable::default();
        for row in parse_rows(resource, text, COLUMNS)? {
            table.insert(row[ALPHA3_COLUMN], row[NAME_COLUMN]);
        }
        Ok(Self { table })
    }

    /// Display name for an alpha-3 code, case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use country_translator::codes::CountryCodeConverter;
    /// let converter = CountryCodeConverter::bundled().unwrap();
    /// assert_eq!(converter.country_name("deu"), Some("Germany"));
    /// assert_eq!(converter.country_name("CAN"), Some("Canada"));
    /// assert_eq!(converter.country_name("zzz"), None);
    /// ```
    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.table.name(code)
    }

    /// Lowercase alpha-3 code for a display name.
    pub fn country_code(&self, name: &str) -> Option<&str> {
        self.table.code(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn bundled_table_resolves() {
        let converter = CountryCodeConverter::bundled().unwrap();
        assert_eq!(converter.country_name("jpn"), Some("Japan"));
        assert_eq!(converter.country_code("Sweden"), Some("swe"));
        assert_eq!(
            converter.country_code("united states of america"),
            Some("usa")
        );
        assert_eq!(converter.country_code("Atlantis"), None);
    }

    #[test]
    fn names_with_commas_survive() {
        let converter = CountryCodeConverter::bundled().unwrap();
        assert_eq!(converter.country_name("kor"), Some("Korea, Republic of"));
    }

    #[test]
    fn alpha2_is_not_a_key() {
        let converter = CountryCodeConverter::from_table(
            "test",
            "Country\tAlpha-2 code\tAlpha-3 code\tNumeric\nGermany\tDE\tDEU\t276\n",
        )
        .unwrap();
        assert_eq!(converter.country_name("de"), None);
        assert_eq!(converter.country_name("deu"), Some("Germany"));
    }

    #[test]
    fn wrong_column_count_fails() {
        let err = CountryCodeConverter::from_table(
            "test",
            "Country\tAlpha-2 code\tAlpha-3 code\tNumeric\nGermany\tDE\tDEU\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MalformedTable { line: 2, .. }));
    }
}
