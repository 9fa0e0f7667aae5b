use harvester_core::{SubstitutionTable, TableError, TranscriptError, TransliterationEngine};
use std::io::Write;
use std::sync::Arc;

fn synthetic_engine() -> TransliterationEngine {
    let table = SubstitutionTable::from_entries([('a', vec!["a", "b"]), ('b', vec!["c"])])
        .expect("synthetic table");
    TransliterationEngine::new(Arc::new(table))
}

#[test]
fn cartesian_expansion_of_synthetic_table() {
    let engine = synthetic_engine();
    let renderings = engine.expand("a b").unwrap();
    assert_eq!(renderings, vec!["a c", "b c"]);
}

#[test]
fn expansion_is_deterministic_across_calls() {
    let table = Arc::new(SubstitutionTable::builtin().unwrap());
    let first = TransliterationEngine::new(Arc::clone(&table))
        .expand("юлия хрущёва")
        .unwrap();
    let second = TransliterationEngine::new(table)
        .expand("юлия хрущёва")
        .unwrap();
    assert_eq!(first, second);
    // ю(3) × я(3) × х(3) × щ(2) × ё(3)
    assert_eq!(first.len(), 3 * 3 * 3 * 2 * 3);
    assert_eq!(first[0], "yuliya khrushcheva");
    assert_eq!(first[1], "yuliya khrushchyova");
}

#[test]
fn combination_count_bounds_work_without_expanding() {
    let engine = TransliterationEngine::new(Arc::new(SubstitutionTable::builtin().unwrap()));
    assert_eq!(engine.combination_count("иван петров").unwrap(), 2);
    assert_eq!(engine.combination_count("анна").unwrap(), 1);
}

#[test]
fn lazy_renderings_match_eager_expansion() {
    let engine = TransliterationEngine::new(Arc::new(SubstitutionTable::builtin().unwrap()));
    let eager = engine.expand("жанна лебедь").unwrap();
    let lazy: Vec<String> = engine.renderings("жанна лебедь").unwrap().take(3).collect();
    assert_eq!(lazy, eager[..3].to_vec());
}

#[test]
fn characters_outside_table_are_fatal() {
    let engine = TransliterationEngine::new(Arc::new(SubstitutionTable::builtin().unwrap()));
    let err = engine.expand("тарас ґонта").unwrap_err();
    assert_eq!(
        err,
        TranscriptError::UnknownCharacter {
            character: 'ґ',
            name: "тарас ґонта".to_string(),
        }
    );
    assert!(!err.is_skippable());
}

#[test]
fn table_file_loads_and_validates() {
    let builtin: serde_json::Value =
        serde_json::from_str(include_str!("../resources/patterns.json")).unwrap();

    let mut valid = tempfile::NamedTempFile::new().unwrap();
    write!(valid, "{builtin}").unwrap();
    let table = SubstitutionTable::from_path(valid.path()).unwrap();
    assert_eq!(table, SubstitutionTable::builtin().unwrap());

    let mut incomplete = builtin.clone();
    incomplete.as_object_mut().unwrap().remove("ё");
    let mut broken = tempfile::NamedTempFile::new().unwrap();
    write!(broken, "{incomplete}").unwrap();
    let err = SubstitutionTable::from_path(broken.path()).unwrap_err();
    assert!(matches!(err, TableError::MissingCharacter('ё')));
}

#[test]
fn missing_table_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patterns.json");
    let err = SubstitutionTable::from_path(&path).unwrap_err();
    match err {
        TableError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
