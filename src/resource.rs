// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resource identifiers for datasets: bundled copies or files on disk.

use crate::error::{LoadError, LoadResult};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_TRANSLATIONS: &str = "sample.json";
pub const DEFAULT_COUNTRY_CODES: &str = "country-codes.txt";
pub const DEFAULT_LANGUAGE_CODES: &str = "language-codes.txt";

const BUNDLED: &[(&str, &str)] = &[
    (DEFAULT_TRANSLATIONS, include_str!("../data/sample.json")),
    (DEFAULT_COUNTRY_CODES, include_str!("../data/country-codes.txt")),
    (
        DEFAULT_LANGUAGE_CODES,
        include_str!("../data/language-codes.txt"),
    ),
];

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Bundled(&'static str),
    File(PathBuf),
}

impl Resource {
    /// Resolve a bundled resource by name.
    pub fn bundled(name: &str) -> LoadResult<Self> {
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(bundled, _)| Resource::Bundled(*bundled))
            .ok_or_else(|| LoadError::ResourceNotFound(name.to_string()))
    }

    /// Interpret a user supplied identifier.
    ///
    /// A bare name matching a bundled resource selects the embedded copy,
    /// unless a file of that name exists in the working directory.
    /// Everything else is a filesystem path.
    pub fn parse(identifier: &str) -> Self {
        let path = PathBuf::from(identifier);
        if path.components().count() == 1 && !path.exists() {
            if let Ok(resource) = Self::bundled(identifier) {
                return resource;
            }
        }
        Resource::File(path)
    }

    /// Read the full text of the resource.
    pub fn read(&self) -> LoadResult<Cow<'static, str>> {
        match self {
            Resource::Bundled(name) => {
                let (_, text) = BUNDLED
                    .iter()
                    .find(|(bundled, _)| bundled == name)
                    .ok_or_else(|| LoadError::ResourceNotFound(name.to_string()))?;
                debug!(resource = %name, "reading bundled resource");
                Ok(Cow::Borrowed(*text))
            }
            Resource::File(path) => {
                debug!(path = %path.display(), "reading resource from disk");
                fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Bundled(name) => write!(f, "bundled:{}", name),
            Resource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_names_resolve() {
        assert_eq!(
            Resource::bundled("sample.json").unwrap(),
            Resource::Bundled("sample.json")
        );
        assert!(matches!(
            Resource::bundled("missing.json"),
            Err(LoadError::ResourceNotFound(name)) if name == "missing.json"
        ));
    }

    #[test]
    fn parse_prefers_bundled_for_bare_names() {
        assert_eq!(
            Resource::parse(DEFAULT_COUNTRY_CODES),
            Resource::Bundled(DEFAULT_COUNTRY_CODES)
        );
        assert_eq!(
            Resource::parse("some/dir/data.json"),
            Resource::File(PathBuf::from("some/dir/data.json"))
        );
    }

    #[test]
    fn bundled_resources_are_not_empty() {
        for (name, _) in BUNDLED {
            let text = Resource::bundled(name).unwrap().read().unwrap();
            assert!(!text.trim().is_empty(), "{} should have content", name);
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let resource = Resource::File(PathBuf::from("/nonexistent/translations.json"));
        assert!(matches!(resource.read(), Err(LoadError::Io { .. })));
    }
}
