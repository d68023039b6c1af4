// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading translation datasets from disk and the lookup guarantees that
//! hold for any loaded store.

use country_translator::resource::Resource;
use country_translator::translations::{check_consistency, TranslationStore, Translator};
use country_translator::LoadError;
use std::fs;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir, name: &str, body: &str) -> Resource {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    Resource::File(path)
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let resource = write_dataset(
        &dir,
        "countries.json",
        r#"[
            {"id": 1, "alpha2": "de", "alpha3": "deu", "en": "Germany", "de": "Deutschland"},
            {"id": 2, "alpha2": "at", "alpha3": "aut", "en": "Austria", "de": "Österreich"}
        ]"#,
    );

    let store = TranslationStore::load(&resource).expect("dataset should load");
    assert_eq!(store.countries(), vec!["aut", "deu"]);
    assert_eq!(store.translate("aut", "de"), Some("Österreich"));
    assert_eq!(store.translate("deu", "fr"), None);
}

#[test]
fn test_sample_properties() {
    let store = TranslationStore::bundled().unwrap();
    let countries = store.countries();

    // Strictly ascending implies no duplicates
    assert!(countries.windows(2).all(|pair| pair[0] < pair[1]));

    for country in &countries {
        let languages = store
            .country_languages(country)
            .unwrap_or_else(|| panic!("{} should have a record", country));
        for language in &languages {
            assert!(store.translate(country, language).is_some());
        }
        // Bookkeeping fields never leak into the language list
        for reserved in ["id", "alpha2", "alpha3"] {
            assert!(!languages.contains(&reserved));
            assert_eq!(store.translate(country, reserved), None);
        }
    }

    assert!(check_consistency(&store).is_empty());
}

#[test]
fn test_translate_absent_for_unlisted_language() {
    let store = TranslationStore::bundled().unwrap();
    for country in store.countries() {
        let languages = store.country_languages(country).unwrap();
        for candidate in ["de", "en", "tr", "xx", "EN"] {
            assert_eq!(
                store.translate(country, candidate).is_some(),
                languages.contains(&candidate),
                "{} / {}",
                country,
                candidate
            );
        }
    }
}

#[test]
fn test_unknown_country() {
    let store = TranslationStore::bundled().unwrap();
    assert_eq!(store.translate("ZZZ", "en"), None);
    assert_eq!(store.country_languages("ZZZ"), None);
}

#[test]
fn test_reload_is_identical() {
    let dir = TempDir::new().unwrap();
    let body = Resource::bundled("sample.json").unwrap().read().unwrap();
    let resource = write_dataset(&dir, "copy.json", &body);

    let first = TranslationStore::load(&resource).unwrap();
    let second = TranslationStore::load(&resource).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.countries(), second.countries());

    for country in first.countries() {
        for language in first.country_languages(country).unwrap() {
            assert_eq!(
                first.translate(country, language),
                second.translate(country, language)
            );
        }
    }

    // The bundled copy and the on-disk copy agree too
    assert_eq!(first, TranslationStore::bundled().unwrap());
}

#[test]
fn test_truncated_file_fails() {
    let dir = TempDir::new().unwrap();
    let resource = write_dataset(
        &dir,
        "truncated.json",
        r#"[{"id": 1, "alpha2": "de", "alpha3": "deu", "en": "Germ"#,
    );
    let err = TranslationStore::load(&resource).unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)), "got {err}");
    // The parser message lives in the source chain, not in the headline
    assert_eq!(err.to_string(), "translation data is not valid JSON");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_non_array_file_fails() {
    let dir = TempDir::new().unwrap();
    let resource = write_dataset(
        &dir,
        "object.json",
        r#"{"deu": {"en": "Germany"}}"#,
    );
    let err = TranslationStore::load(&resource).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray), "got {err}");
}

#[test]
fn test_one_bad_record_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    let resource = write_dataset(
        &dir,
        "partial.json",
        r#"[{"alpha3": "deu", "en": "Germany"}, {"alpha3": "fra", "en": null}]"#,
    );
    let err = TranslationStore::load(&resource).unwrap_err();
    assert!(
        matches!(err, LoadError::NonStringTranslation { index: 1, ref field } if field == "en"),
        "got {err}"
    );
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let resource = Resource::File(dir.path().join("absent.json"));
    let err = TranslationStore::load(&resource).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got {err}");
    assert!(err.to_string().contains("absent.json"));
    let source = std::error::Error::source(&err).expect("io error should be the source");
    assert!(!err.to_string().contains(&source.to_string()));
}

#[test]
fn test_store_is_shareable_across_threads() {
    let store = TranslationStore::bundled().unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| store.translate("deu", "de").map(str::to_string)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("Deutschland"));
        }
    });
}
