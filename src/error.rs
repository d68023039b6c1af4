// SPDX-License-Identifier: PMPL-1.0-or-later

//! Load failures for the bundled and on-disk datasets.
//!
//! A load either yields a complete structure or one of these errors; nothing
//! is ever handed out half-populated. Lookup misses are not errors and never
//! appear here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no bundled resource named `{0}`")]
    ResourceNotFound(String),

    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("translation data is not valid JSON")]
    Malformed(#[from] serde_json::Error),

    #[error("translation data must be a JSON array of country records")]
    NotAnArray,

    #[error("record {index} is not a JSON object")]
    RecordNotObject { index: usize },

    #[error("record {index} has no string `alpha3` field")]
    MissingAlpha3 { index: usize },

    #[error("record {index} field `{field}` is not a string")]
    NonStringTranslation { index: usize, field: String },

    #[error("{resource}: malformed row on line {line}")]
    MalformedTable { resource: String, line: usize },
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
