// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country name translations keyed by ISO 3166-1 alpha-3 code.
//!
//! The dataset is loaded once into a [`TranslationStore`] and never changes
//! afterwards. Callers query it through the [`Translator`] trait:
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `countries()` | every country code, ascending |
//! | `country_languages(country)` | language codes for a country, unordered, `None` if unknown |
//! | `translate(country, language)` | translated name, `None` if either code is unknown |
//!
//! Lookups are by code only and match the dataset's spelling exactly.
//! Display names are resolved separately by [`crate::codes`].

mod parser;
mod store;

pub use parser::{
    is_reserved_field, parse_translations, CountryTranslations, LanguageTranslations,
};
pub use store::TranslationStore;

/// Read-only country translation lookups.
pub trait Translator {
    /// All known country codes in ascending order.
    fn countries(&self) -> Vec<&str>;

    /// Language codes available for `country`, in no particular order.
    ///
    /// Returns `None` when the country is unknown. A known country with no
    /// translations yields `Some` of an empty list.
    fn country_languages(&self, country: &str) -> Option<Vec<&str>>;

    /// The name of `country` in `language`, if the dataset has one.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}

/// Cross-check a translator's three lookups against each other.
///
/// Returns one message per inconsistency found; empty means consistent.
pub fn check_consistency(translator: &dyn Translator) -> Vec<String> {
    let mut problems = Vec::new();
    let countries = translator.countries();
    if countries.windows(2).any(|pair| pair[0] >= pair[1]) {
        problems.push("country codes are not strictly ascending".to_string());
    }
    for country in countries {
        match translator.country_languages(country) {
            None => problems.push(format!("{} is listed but has no record", country)),
            Some(languages) => {
                for language in languages {
                    if translator.translate(country, language).is_none() {
                        problems.push(format!(
                            "{} lists language {} without a translation",
                            country, language
                        ));
                    }
                }
            }
        }
    }
    problems
}
