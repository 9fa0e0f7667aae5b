//! Cyrillic-to-Latin substitution table.
//!
//! # Responsibility
//! - Hold the ordered Latin alternatives for every source character.
//! - Reject malformed or incomplete table resources at load time.
//!
//! # Invariants
//! - A table is immutable once constructed; callers share it behind `Arc`.
//! - Alternatives keep their resource order, which drives rendering order.
//! - Tables loaded through the strict constructors cover `а`..`я`, `ё` and
//!   the space separator, and every alternative is lowercase ASCII.

use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BUILTIN_PATTERNS: &str = include_str!("../../resources/patterns.json");

/// Separator between the two name tokens. Always maps to itself.
pub const TOKEN_SEPARATOR: char = ' ';

pub type TableResult<T> = Result<T, TableError>;

/// Load/validation error for substitution table resources.
#[derive(Debug)]
pub enum TableError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    /// Key is not exactly one character.
    InvalidKey(String),
    EmptyAlternatives(char),
    /// Alternative is empty or contains non-lowercase-ASCII characters.
    InvalidAlternative {
        character: char,
        value: String,
    },
    DuplicateAlternative {
        character: char,
        value: String,
    },
    MissingCharacter(char),
    /// The separator entry must be exactly `[" "]`.
    InvalidSeparator(Vec<String>),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read substitution table `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "substitution table is not valid JSON: {err}"),
            Self::InvalidKey(key) => {
                write!(f, "substitution table key must be one character, got `{key}`")
            }
            Self::EmptyAlternatives(character) => {
                write!(f, "substitution table entry `{character}` has no alternatives")
            }
            Self::InvalidAlternative { character, value } => write!(
                f,
                "substitution `{value}` for `{character}` must be non-empty lowercase latin"
            ),
            Self::DuplicateAlternative { character, value } => {
                write!(f, "substitution `{value}` is listed twice for `{character}`")
            }
            Self::MissingCharacter(character) => {
                write!(f, "substitution table has no entry for `{character}`")
            }
            Self::InvalidSeparator(values) => write!(
                f,
                "separator entry must map to a single space, got {values:?}"
            ),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Read-only mapping from one source character to its Latin alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: BTreeMap<char, Vec<String>>,
}

impl SubstitutionTable {
    /// Returns the table embedded in the crate (`resources/patterns.json`).
    pub fn builtin() -> TableResult<Self> {
        Self::from_json_str(BUILTIN_PATTERNS)
    }

    /// Loads and strictly validates a table from a JSON file.
    ///
    /// The file shape is `{"а": ["a"], "ж": ["zh", "j"], ...}`.
    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&raw)?;
        info!(
            "event=table_load module=transliteration status=ok source={} entries={}",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Parses and strictly validates a table from JSON text.
    ///
    /// # Errors
    /// - Any structural problem (see [`TableError`]).
    /// - A missing Cyrillic letter or separator entry.
    pub fn from_json_str(raw: &str) -> TableResult<Self> {
        let parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)?;

        let mut entries = BTreeMap::new();
        for (key, alternatives) in parsed {
            let character =
                single_char(&key).ok_or_else(|| TableError::InvalidKey(key.clone()))?;
            entries.insert(character, alternatives);
        }

        let table = Self { entries };
        table.validate_strict()?;
        debug!(
            "event=table_parse module=transliteration status=ok entries={}",
            table.len()
        );
        Ok(table)
    }

    /// Builds a table from arbitrary entries, checking structure only.
    ///
    /// Coverage is not enforced here: characters absent from the table
    /// surface as `UnknownCharacter` when a name is expanded. The separator
    /// maps to itself unless an entry for it is given.
    pub fn from_entries<I, V, S>(entries: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (char, V)>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (character, alternatives) in entries {
            let alternatives: Vec<String> = alternatives.into_iter().map(Into::into).collect();
            if alternatives.is_empty() {
                return Err(TableError::EmptyAlternatives(character));
            }
            if let Some(empty) = alternatives.iter().find(|value| value.is_empty()) {
                return Err(TableError::InvalidAlternative {
                    character,
                    value: empty.clone(),
                });
            }
            map.insert(character, alternatives);
        }
        map.entry(TOKEN_SEPARATOR)
            .or_insert_with(|| vec![TOKEN_SEPARATOR.to_string()]);
        Ok(Self { entries: map })
    }

    /// Returns ordered alternatives for `character`, if present.
    pub fn get(&self, character: char) -> Option<&[String]> {
        self.entries.get(&character).map(Vec::as_slice)
    }

    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate_strict(&self) -> TableResult<()> {
        for (&character, alternatives) in &self.entries {
            if alternatives.is_empty() {
                return Err(TableError::EmptyAlternatives(character));
            }

            if character == TOKEN_SEPARATOR {
                if alternatives.len() != 1 || alternatives[0] != " " {
                    return Err(TableError::InvalidSeparator(alternatives.clone()));
                }
                continue;
            }

            let mut seen = BTreeSet::new();
            for value in alternatives {
                if !is_latin_alternative(value) {
                    return Err(TableError::InvalidAlternative {
                        character,
                        value: value.clone(),
                    });
                }
                if !seen.insert(value.as_str()) {
                    return Err(TableError::DuplicateAlternative {
                        character,
                        value: value.clone(),
                    });
                }
            }
        }

        for required in required_characters() {
            if !self.contains(required) {
                return Err(TableError::MissingCharacter(required));
            }
        }
        Ok(())
    }
}

/// Characters every strictly loaded table must cover.
pub fn required_characters() -> impl Iterator<Item = char> {
    ('а'..='я').chain(['ё', TOKEN_SEPARATOR])
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(first)
}

fn is_latin_alternative(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{required_characters, SubstitutionTable, TableError};

    fn builtin_json() -> serde_json::Value {
        serde_json::from_str(super::BUILTIN_PATTERNS).expect("builtin resource should be JSON")
    }

    #[test]
    fn builtin_table_covers_required_characters() {
        let table = SubstitutionTable::builtin().expect("builtin table should load");
        for character in required_characters() {
            assert!(table.contains(character), "missing `{character}`");
        }
        assert_eq!(table.get(' '), Some(&[" ".to_string()][..]));
    }

    #[test]
    fn required_characters_include_yo_and_separator() {
        let required: Vec<char> = required_characters().collect();
        assert_eq!(required.len(), 34);
        assert!(required.contains(&'ё'));
        assert!(required.contains(&' '));
    }

    #[test]
    fn strict_load_rejects_missing_letter() {
        let mut json = builtin_json();
        json.as_object_mut().expect("object").remove("щ");
        let err = SubstitutionTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, TableError::MissingCharacter('щ')));
    }

    #[test]
    fn strict_load_rejects_multi_char_key() {
        let mut json = builtin_json();
        json["аб"] = serde_json::json!(["ab"]);
        let err = SubstitutionTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, TableError::InvalidKey(key) if key == "аб"));
    }

    #[test]
    fn strict_load_rejects_non_latin_and_duplicate_alternatives() {
        let mut json = builtin_json();
        json["ж"] = serde_json::json!(["zh", "Ж"]);
        let err = SubstitutionTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, TableError::InvalidAlternative { character: 'ж', .. }));

        json["ж"] = serde_json::json!(["zh", "zh"]);
        let err = SubstitutionTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, TableError::DuplicateAlternative { character: 'ж', .. }));
    }

    #[test]
    fn strict_load_rejects_empty_alternatives_and_bad_separator() {
        let mut json = builtin_json();
        json["а"] = serde_json::json!([]);
        let err = SubstitutionTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, TableError::EmptyAlternatives('а')));

        let mut json = builtin_json();
        json[" "] = serde_json::json!(["_"]);
        let err = SubstitutionTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, TableError::InvalidSeparator(_)));
    }

    #[test]
    fn strict_load_reports_invalid_json() {
        let err = SubstitutionTable::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn from_entries_keeps_order_and_skips_coverage() {
        let table = SubstitutionTable::from_entries([('a', vec!["a", "b"]), ('b', vec!["c"])])
            .expect("synthetic table");
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get('a'),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert!(!table.contains('в'));
    }

    #[test]
    fn from_entries_maps_separator_to_itself() {
        let table = SubstitutionTable::from_entries([('a', vec!["a"])]).expect("synthetic table");
        assert_eq!(table.get(' '), Some(&[" ".to_string()][..]));

        let table = SubstitutionTable::from_entries([(' ', vec!["_"])]).expect("synthetic table");
        assert_eq!(table.get(' '), Some(&["_".to_string()][..]));
    }

    #[test]
    fn from_entries_rejects_empty_values() {
        let err = SubstitutionTable::from_entries([('a', Vec::<String>::new())]).unwrap_err();
        assert!(matches!(err, TableError::EmptyAlternatives('a')));

        let err = SubstitutionTable::from_entries([('a', vec![""])]).unwrap_err();
        assert!(matches!(err, TableError::InvalidAlternative { character: 'a', .. }));
    }
}
