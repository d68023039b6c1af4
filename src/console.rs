// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive prompt loop: pick a country, pick a language, read the
//! translation. Typing `quit` at any prompt leaves the loop.

use crate::codes::{normalize_code, CountryCodeConverter, LanguageCodeConverter};
use crate::translations::Translator;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

pub const QUIT: &str = "quit";

/// A code paired with the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<'a> {
    pub code: &'a str,
    pub label: &'a str,
}

pub struct Console<'a, T: Translator + ?Sized> {
    translator: &'a T,
    countries: &'a CountryCodeConverter,
    languages: &'a LanguageCodeConverter,
}

enum Answer {
    Quit,
    Text(String),
}

impl<'a, T: Translator + ?Sized> Console<'a, T> {
    pub fn new(
        translator: &'a T,
        countries: &'a CountryCodeConverter,
        languages: &'a LanguageCodeConverter,
    ) -> Self {
        Self {
            translator,
            countries,
            languages,
        }
    }

    /// Countries in the dataset, labelled with display names and sorted by
    /// label. Codes without a display name are labelled with the code.
    pub fn country_choices(&self) -> Vec<Choice<'a>> {
        let mut choices: Vec<Choice<'a>> = self
            .translator
            .countries()
            .into_iter()
            .map(|code| Choice {
                code,
                label: self.countries.country_name(code).unwrap_or(code),
            })
            .collect();
        choices.sort_by(|a, b| a.label.cmp(b.label).then(a.code.cmp(b.code)));
        choices
    }

    /// Languages available for `country`, labelled and sorted like
    /// [`Console::country_choices`]. Empty for an unknown country.
    pub fn language_choices(&self, country: &str) -> Vec<Choice<'a>> {
        let mut choices: Vec<Choice<'a>> = self
            .translator
            .country_languages(country)
            .unwrap_or_default()
            .into_iter()
            .map(|code| Choice {
                code,
                label: self.languages.language_name(code).unwrap_or(code),
            })
            .collect();
        choices.sort_by(|a, b| a.label.cmp(b.label).then(a.code.cmp(b.code)));
        choices
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            let countries = self.country_choices();
            for choice in &countries {
                writeln!(output, "{}", choice.label)?;
            }
            let country = match read_answer(input)? {
                Answer::Quit => break,
                Answer::Text(text) => text,
            };
            let Some(country) = find_choice(&countries, &country) else {
                writeln!(output, "No data for country \"{}\".", country)?;
                continue;
            };

            let languages = self.language_choices(country.code);
            for choice in &languages {
                writeln!(output, "{}", choice.label)?;
            }
            let language = match read_answer(input)? {
                Answer::Quit => break,
                Answer::Text(text) => text,
            };
            match find_choice(&languages, &language) {
                Some(language) => {
                    match self.translator.translate(country.code, language.code) {
                        Some(translation) => writeln!(
                            output,
                            "{} in {} is {}",
                            country.label, language.label, translation
                        )?,
                        None => writeln!(
                            output,
                            "{} in {} is not available",
                            country.label, language.label
                        )?,
                    }
                }
                None => writeln!(
                    output,
                    "{} in {} is not available",
                    country.label, language
                )?,
            }

            writeln!(output, "Press enter to continue or quit to exit.")?;
            output.flush()?;
            if let Answer::Quit = read_answer(input)? {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }
}

/// Match by label (exact, then case-insensitive), then by code.
pub fn find_choice<'c, 'a>(choices: &'c [Choice<'a>], answer: &str) -> Option<&'c Choice<'a>> {
    let answer = answer.trim();
    let code = normalize_code(answer);
    choices
        .iter()
        .find(|choice| choice.label == answer)
        .or_else(|| {
            choices
                .iter()
                .find(|choice| choice.label.eq_ignore_ascii_case(answer))
        })
        .or_else(|| {
            choices
                .iter()
                .find(|choice| normalize_code(choice.code) == code)
        })
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<Answer> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("input closed, leaving console");
        return Ok(Answer::Quit);
    }
    let line = line.trim();
    if line == QUIT {
        return Ok(Answer::Quit);
    }
    Ok(Answer::Text(line.to_string()))
}
