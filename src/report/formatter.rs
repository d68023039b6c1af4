// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human readable rendering of command results

use super::{CountryListing, LanguageListing, TranslationLookup};
use colored::*;

/// Plain terminal rendering, coloured where the terminal allows it.
pub trait TextReport {
    fn to_text(&self) -> String;
}

fn display_name(code: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} ({})", name, code),
        None => code.to_string(),
    }
}

impl TextReport for CountryListing {
    fn to_text(&self) -> String {
        let mut lines = vec![format!("{}", "COUNTRIES".bold().cyan())];
        for entry in &self.countries {
            let name = entry.name.as_deref().unwrap_or("-");
            lines.push(format!("  {}  {}", entry.code.bold(), name));
        }
        lines.push(format!("{} countries", self.countries.len()).dimmed().to_string());
        lines.join("\n")
    }
}

impl TextReport for LanguageListing {
    fn to_text(&self) -> String {
        let country = display_name(&self.country, self.country_name.as_deref());
        let Some(languages) = &self.languages else {
            return format!("{} {}", "No data for".yellow(), country);
        };

        let mut lines = vec![format!("{}", country.bold().cyan())];
        for entry in languages {
            let name = entry.name.as_deref().unwrap_or("-");
            lines.push(format!(
                "  {}  {:<12} {}",
                entry.code.bold(),
                name,
                entry.translation
            ));
        }
        if languages.is_empty() {
            lines.push("  (no translations)".dimmed().to_string());
        }
        lines.join("\n")
    }
}

impl TextReport for TranslationLookup {
    fn to_text(&self) -> String {
        match &self.translation {
            Some(translation) => translation.clone(),
            None => format!(
                "{} {} in {}",
                "No data for".yellow(),
                self.country,
                self.language
            ),
        }
    }
}
