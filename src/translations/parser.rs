// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parser for the country translation dataset.
//!
//! The dataset is a JSON array of flat objects:
//!
//! ```json
//! [{"id": 276, "alpha2": "de", "alpha3": "deu", "en": "Germany", "de": "Deutschland"}]
//! ```
//!
//! `alpha3` keys the record. `id` and `alpha2` are bookkeeping and are
//! dropped. Every remaining field is a language code mapped to the country
//! name in that language.

use crate::error::{LoadError, LoadResult};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

pub const ID_FIELD: &str = "id";
pub const ALPHA2_FIELD: &str = "alpha2";
pub const ALPHA3_FIELD: &str = "alpha3";

/// Language code -> translated country name, for a single country.
pub type LanguageTranslations = HashMap<String, String>;

/// Country code -> that country's translations.
pub type CountryTranslations = HashMap<String, LanguageTranslations>;

/// Fields that are never treated as translations.
pub fn is_reserved_field(field: &str) -> bool {
    matches!(field, ID_FIELD | ALPHA2_FIELD | ALPHA3_FIELD)
}

/// Parse the raw dataset text.
///
/// Any structural problem fails the whole parse. Duplicate `alpha3` codes
/// keep the record parsed last.
pub fn parse_translations(text: &str) -> LoadResult<CountryTranslations> {
    let root: Value = serde_json::from_str(text)?;
    let records = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut countries = CountryTranslations::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let (code, languages) = parse_record(index, record)?;
        if countries.insert(code.clone(), languages).is_some() {
            warn!(country = %code, index, "duplicate country code, keeping later record");
        }
    }
    Ok(countries)
}

fn parse_record(index: usize, record: &Value) -> LoadResult<(String, LanguageTranslations)> {
    let fields = record
        .as_object()
        .ok_or(LoadError::RecordNotObject { index })?;

    let code = fields
        .get(ALPHA3_FIELD)
        .and_then(Value::as_str)
        .ok_or(LoadError::MissingAlpha3 { index })?
        .to_string();

    let mut languages = LanguageTranslations::new();
    for (field, value) in fields {
        if is_reserved_field(field) {
            continue;
        }
        let name = value
            .as_str()
            .ok_or_else(|| LoadError::NonStringTranslation {
                index,
                field: field.clone(),
            })?;
        languages.insert(field.clone(), name.to_string());
    }

    Ok((code, languages))
}
