// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: check that the configured datasets load and agree with each
//! other.

use crate::codes::{CountryCodeConverter, LanguageCodeConverter};
use crate::config::{Config, COUNTRY_CODES_ENV, DATA_ENV, LANGUAGE_CODES_ENV};
use crate::resource::Resource;
use crate::translations::{check_consistency, TranslationStore, Translator};
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::BTreeSet;
use std::env;

/// How many missing names to spell out before summarising.
const MISSING_SAMPLE: usize = 5;

pub fn run_self_diagnostics(config: &Config) -> Result<()> {
    println!("country-translator self-diagnostics");

    let checks = collect_diagnostics(config, |key| env::var(key).ok());

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub fn collect_diagnostics(
    config: &Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("country-translator {}", env!("CARGO_PKG_VERSION")),
    ));

    for (label, key) in [
        ("data setting", DATA_ENV),
        ("country table setting", COUNTRY_CODES_ENV),
        ("language table setting", LANGUAGE_CODES_ENV),
    ] {
        checks.push(check_setting(label, key, &lookup));
    }

    let store = match TranslationStore::load(&config.data) {
        Ok(store) => {
            checks.push(Diagnostic::ok(
                "translation data",
                format!("{} countries from {}", store.len(), config.data),
            ));
            Some(store)
        }
        Err(err) => {
            checks.push(Diagnostic::error("translation data", err.to_string()));
            None
        }
    };

    let countries = match CountryCodeConverter::load(&config.country_codes) {
        Ok(converter) => {
            checks.push(Diagnostic::ok(
                "country table",
                format!("{} names from {}", converter.len(), config.country_codes),
            ));
            Some(converter)
        }
        Err(err) => {
            checks.push(Diagnostic::error("country table", err.to_string()));
            None
        }
    };

    let languages = match LanguageCodeConverter::load(&config.language_codes) {
        Ok(converter) => {
            checks.push(Diagnostic::ok(
                "language table",
                format!("{} names from {}", converter.len(), config.language_codes),
            ));
            Some(converter)
        }
        Err(err) => {
            checks.push(Diagnostic::error("language table", err.to_string()));
            None
        }
    };

    let Some(store) = store else {
        return checks;
    };

    let problems = check_consistency(&store);
    if problems.is_empty() {
        checks.push(Diagnostic::ok(
            "lookup consistency",
            "all lookups agree".to_string(),
        ));
    } else {
        checks.push(Diagnostic::error("lookup consistency", problems.join("; ")));
    }

    if let Some(countries) = &countries {
        let missing: Vec<&str> = store
            .countries()
            .into_iter()
            .filter(|code| countries.country_name(code).is_none())
            .collect();
        checks.push(check_coverage("country names", missing));
    }

    if let Some(languages) = &languages {
        let codes: BTreeSet<&str> = store
            .countries()
            .into_iter()
            .filter_map(|country| store.country_languages(country))
            .flatten()
            .collect();
        let missing: Vec<&str> = codes
            .into_iter()
            .filter(|code| languages.language_name(code).is_none())
            .collect();
        checks.push(check_coverage("language names", missing));
    }

    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:24} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_setting(
    label: &'static str,
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Diagnostic {
    let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) else {
        return Diagnostic::ok(label, format!("bundled default ({} unset)", key));
    };
    let value = value.trim();
    match Resource::parse(value) {
        Resource::File(path) if !path.exists() => Diagnostic::warning(
            label,
            format!("{}={} does not exist", key, path.display()),
        ),
        _ => Diagnostic::ok(label, format!("{}={}", key, value)),
    }
}

fn check_coverage(label: &'static str, missing: Vec<&str>) -> Diagnostic {
    if missing.is_empty() {
        return Diagnostic::ok(label, "every code has a display name".to_string());
    }
    let mut sample = missing
        .iter()
        .take(MISSING_SAMPLE)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if missing.len() > MISSING_SAMPLE {
        sample.push_str(&format!(" and {} more", missing.len() - MISSING_SAMPLE));
    }
    Diagnostic::warning(label, format!("no display name for {}", sample))
}
