// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language names and two-letter codes.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use super::{parse_rows, CodeTable};
use crate::error::LoadResult;
use crate::resource::{Resource, DEFAULT_LANGUAGE_CODES};
use tracing::debug;

/// Converts between language display names and ISO 639-1 codes.
#[derive(Debug, Clone, Default)]
pub struct LanguageCodeConverter {
    table: CodeTable,
}

impl LanguageCodeConverter {
    pub fn bundled() -> LoadResult<Self> {
        Self::load(&Resource::bundled(DEFAULT_LANGUAGE_CODES)?)
    }

    pub fn load(resource: &Resource) -> LoadResult<Self> {
        let text = resource.read()?;
        let converter = Self::from_table(&resource.to_string(), &text)?;
        debug!(resource = %resource, languages = converter.len(), "loaded language codes");
        Ok(converter)
    }

    pub fn from_table(resource: &str, text: &str) -> LoadResult<Self> {
        let mut table = CodeTable::default();
        for row in parse_rows(resource, text, 2)? {
            table.insert(row[1], row[0]);
        }
        Ok(Self { table })
    }

    /// English name of a language code.
    ///
    /// # Examples
    /// ```
    /// use country_translator::codes::LanguageCodeConverter;
    /// let converter = LanguageCodeConverter::bundled().unwrap();
    /// assert_eq!(converter.language_name("ja"), Some("Japanese"));
    /// assert_eq!(converter.language_name("xx"), None);
    /// ```
    pub fn language_name(&self, code: &str) -> Option<&str> {
        self.table.name(code)
    }

    pub fn language_code(&self, name: &str) -> Option<&str> {
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

    #[test]
    fn bundled_table_resolves() {
        let converter = LanguageCodeConverter::bundled().unwrap();
        assert_eq!(converter.language_name("de"), Some("German"));
        assert_eq!(converter.language_name("ZH"), Some("Chinese"));
        assert_eq!(converter.language_code("Swedish"), Some("sv"));
        assert_eq!(converter.language_code("spanish"), Some("es"));
        assert_eq!(converter.language_code("Klingon"), None);
    }

    #[test]
    fn bundled_table_covers_sample_languages() {
        let converter = LanguageCodeConverter::bundled().unwrap();
        for code in ["de", "en", "es", "fr", "it", "ja", "ko", "nl", "pt", "ru", "sv", "zh"] {
            assert!(
                converter.language_name(code).is_some(),
                "{} should have a name",
                code
            );
        }
    }

    #[test]
    fn header_only_table_is_empty() {
        let converter =
            LanguageCodeConverter::from_table("test", "ISO Language Names\tISO 639-1 Code\n")
                .unwrap();
        assert!(converter.is_empty());
    }
}
