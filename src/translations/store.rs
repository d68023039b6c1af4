// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory translation store, built once and read-only afterwards.

use super::parser::{parse_translations, CountryTranslations};
use super::Translator;
use crate::error::LoadResult;
use crate::resource::{Resource, DEFAULT_TRANSLATIONS};
use tracing::info;

/// Country code -> (language code -> translated name).
///
/// There are no mutating methods, so a constructed store can be shared by
/// reference across threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    countries: CountryTranslations,
}

impl TranslationStore {
    pub fn new(countries: CountryTranslations) -> Self {
        Self { countries }
    }

    /// Load the bundled sample dataset.
    pub fn bundled() -> LoadResult<Self> {
        Self::load(&Resource::bundled(DEFAULT_TRANSLATIONS)?)
    }

    /// Read and parse a dataset. Either every record loads or an error is
    /// returned; no partially filled store escapes.
    pub fn load(resource: &Resource) -> LoadResult<Self> {
        let text = resource.read()?;
        let store = Self::from_json(&text)?;
        info!(
            resource = %resource,
            countries = store.len(),
            "loaded translation data"
        );
        Ok(store)
    }

    pub fn from_json(text: &str) -> LoadResult<Self> {
        parse_translations(text).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Translator for TranslationStore {
    fn countries(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.countries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    fn country_languages(&self, country: &str) -> Option<Vec<&str>> {
        self.countries
            .get(country)
            .map(|languages| languages.keys().map(String::as_str).collect())
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.countries
            .get(country)?
            .get(language)
            .map(String::as_str)
    }
}
