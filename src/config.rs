// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration: environment first, command-line flags on top.

use crate::resource::{
    Resource, DEFAULT_COUNTRY_CODES, DEFAULT_LANGUAGE_CODES, DEFAULT_TRANSLATIONS,
};
use std::env;

pub const DATA_ENV: &str = "COUNTRY_TRANSLATOR_DATA";
pub const COUNTRY_CODES_ENV: &str = "COUNTRY_TRANSLATOR_COUNTRY_CODES";
pub const LANGUAGE_CODES_ENV: &str = "COUNTRY_TRANSLATOR_LANGUAGE_CODES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: Resource,
    pub country_codes: Resource,
    pub language_codes: Resource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: Resource::parse(DEFAULT_TRANSLATIONS),
            country_codes: Resource::parse(DEFAULT_COUNTRY_CODES),
            language_codes: Resource::parse(DEFAULT_LANGUAGE_CODES),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables
    /// fall back to the bundled resources.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resource = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| Resource::parse(value.trim()))
                .unwrap_or_else(|| Resource::parse(default))
        };

        Self {
            data: resource(DATA_ENV, DEFAULT_TRANSLATIONS),
            country_codes: resource(COUNTRY_CODES_ENV, DEFAULT_COUNTRY_CODES),
            language_codes: resource(LANGUAGE_CODES_ENV, DEFAULT_LANGUAGE_CODES),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        data: Option<&str>,
        country_codes: Option<&str>,
        language_codes: Option<&str>,
    ) -> Self {
        if let Some(value) = data {
            self.data = Resource::parse(value);
        }
        if let Some(value) = country_codes {
            self.country_codes = Resource::parse(value);
        }
        if let Some(value) = language_codes {
            self.language_codes = Resource::parse(value);
        }
        self
    }
}
