// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country-Translator: the name of a country in any language of a dataset.
//!
//! A JSON dataset of country records is loaded once into an immutable
//! [`translations::TranslationStore`] and queried by ISO codes.
//!
//! PIECES:
//! 1. **Translations**: dataset parser, the store, and the `Translator`
//!    lookup trait.
//! 2. **Codes**: display name <-> ISO code tables for countries and
//!    languages.
//! 3. **Console**: the interactive prompt loop built on the two above.
//! 4. **Report**: text/JSON/YAML views for the one-shot commands.

pub mod codes;
pub mod config;
pub mod console;
pub mod diagnostics;
pub mod error;
pub mod report;
pub mod resource;
pub mod translations;

pub use error::LoadError;
