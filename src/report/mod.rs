// SPDX-License-Identifier: PMPL-1.0-or-later

//! Result views for the non-interactive commands and their rendering.

pub mod formatter;
pub mod output;

pub use formatter::TextReport;
pub use output::OutputFormat;

use crate::codes::{normalize_code, CountryCodeConverter, LanguageCodeConverter};
use crate::translations::Translator;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryListing {
    pub countries: Vec<CountryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: Option<String>,
    pub translation: String,
}

/// Languages of one country. `languages` is `None` when the dataset has no
/// record for the country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageListing {
    pub country: String,
    pub country_name: Option<String>,
    pub languages: Option<Vec<LanguageEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationLookup {
    pub country: String,
    pub language: String,
    pub translation: Option<String>,
}

/// Map a command-line country argument to the dataset's own spelling of the
/// code.
///
/// Tries an exact code, then a display name, then a case-insensitive code.
/// An argument that matches nothing comes back normalised, so the lookup
/// reports no data.
pub fn resolve_country(
    translator: &dyn Translator,
    countries: &CountryCodeConverter,
    argument: &str,
) -> String {
    let known = translator.countries();
    resolve_code(&known, countries.country_code(argument), argument)
}

/// Like [`resolve_country`], among the languages of an already resolved
/// `country`.
pub fn resolve_language(
    translator: &dyn Translator,
    languages: &LanguageCodeConverter,
    country: &str,
    argument: &str,
) -> String {
    let known = translator.country_languages(country).unwrap_or_default();
    resolve_code(&known, languages.language_code(argument), argument)
}

fn resolve_code(known: &[&str], named: Option<&str>, argument: &str) -> String {
    let argument = argument.trim();
    if let Some(code) = known.iter().find(|code| **code == argument) {
        return code.to_string();
    }
    let wanted = normalize_code(named.unwrap_or(argument));
    known
        .iter()
        .find(|code| normalize_code(code) == wanted)
        .map(|code| code.to_string())
        .unwrap_or(wanted)
}

/// Every country in ascending code order.
pub fn list_countries(
    translator: &dyn Translator,
    countries: &CountryCodeConverter,
) -> CountryListing {
    CountryListing {
        countries: translator
            .countries()
            .into_iter()
            .map(|code| CountryEntry {
                code: code.to_string(),
                name: countries.country_name(code).map(str::to_string),
            })
            .collect(),
    }
}

/// A country's languages in ascending code order, with translations.
pub fn list_languages(
    translator: &dyn Translator,
    countries: &CountryCodeConverter,
    languages: &LanguageCodeConverter,
    country: &str,
) -> LanguageListing {
    let entries: Option<Vec<LanguageEntry>> =
        translator.country_languages(country).map(|mut codes| {
            codes.sort_unstable();
            codes
                .into_iter()
                .filter_map(|code| {
                    let translation = translator.translate(country, code)?;
                    Some(LanguageEntry {
                        code: code.to_string(),
                        name: languages.language_name(code).map(str::to_string),
                        translation: translation.to_string(),
                    })
                })
                .collect()
        });

    LanguageListing {
        country: country.to_string(),
        country_name: countries.country_name(country).map(str::to_string),
        languages: entries,
    }
}

pub fn lookup_translation(
    translator: &dyn Translator,
    country: &str,
    language: &str,
) -> TranslationLookup {
    TranslationLookup {
        country: country.to_string(),
        language: language.to_string(),
        translation: translator.translate(country, language).map(str::to_string),
    }
}
