//! Cartesian expansion of per-character substitutions.
//!
//! # Invariants
//! - Every character is resolved before the first rendering is produced.
//! - Renderings follow input character order; the last character varies
//!   fastest.
//! - Output is not deduplicated.

use crate::transcript::error::{TranscriptError, TranscriptResult};
use crate::transliteration::table::SubstitutionTable;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Expands lowered names through a shared substitution table.
#[derive(Debug, Clone)]
pub struct TransliterationEngine {
    table: Arc<SubstitutionTable>,
}

impl TransliterationEngine {
    pub fn new(table: Arc<SubstitutionTable>) -> Self {
        Self { table }
    }

    /// Returns a lazy iterator over all renderings of `name`.
    ///
    /// `name` is expected to be lowercase already.
    ///
    /// # Errors
    /// - `UnknownCharacter` for the first character missing from the table.
    pub fn renderings<'a>(&'a self, name: &str) -> TranscriptResult<Renderings<'a>> {
        let mut slots = Vec::with_capacity(name.len());
        for character in name.chars() {
            let alternatives = self.table.get(character).ok_or_else(|| {
                TranscriptError::UnknownCharacter {
                    character,
                    name: name.to_string(),
                }
            })?;
            slots.push(alternatives);
        }
        Ok(Renderings::new(slots))
    }

    /// Collects every rendering of `name` in deterministic order.
    pub fn expand(&self, name: &str) -> TranscriptResult<Vec<String>> {
        Ok(self.renderings(name)?.collect())
    }

    /// Number of renderings `name` expands to, saturating at `usize::MAX`.
    pub fn combination_count(&self, name: &str) -> TranscriptResult<usize> {
        Ok(self.renderings(name)?.total())
    }
}

/// Odometer over per-character alternative lists.
#[derive(Debug, Clone)]
pub struct Renderings<'a> {
    slots: Vec<&'a [String]>,
    cursor: Vec<usize>,
    remaining: usize,
    total: usize,
}

impl<'a> Renderings<'a> {
    fn new(slots: Vec<&'a [String]>) -> Self {
        // Table constructors reject empty alternative lists, so every slot
        // contributes at least one choice.
        let total = slots
            .iter()
            .fold(1usize, |acc, slot| acc.saturating_mul(slot.len()));
        let cursor = vec![0; slots.len()];
        Self {
            slots,
            cursor,
            remaining: total,
            total,
        }
    }

    /// Total number of renderings, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.total
    }

    fn current(&self) -> String {
        let mut rendering = String::new();
        for (slot, &index) in self.slots.iter().zip(&self.cursor) {
            rendering.push_str(&slot[index]);
        }
        rendering
    }

    fn advance(&mut self) {
        for position in (0..self.cursor.len()).rev() {
            self.cursor[position] += 1;
            if self.cursor[position] < self.slots[position].len() {
                return;
            }
            self.cursor[position] = 0;
        }
    }
}

impl Iterator for Renderings<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let rendering = self.current();
        self.remaining -= 1;
        self.advance();
        Some(rendering)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.total == usize::MAX {
            (self.remaining, None)
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}

impl FusedIterator for Renderings<'_> {}

#[cfg(test)]
mod tests {
    use super::TransliterationEngine;
    use crate::transcript::error::TranscriptError;
    use crate::transliteration::table::SubstitutionTable;
    use std::sync::Arc;

    fn engine(entries: Vec<(char, Vec<&str>)>) -> TransliterationEngine {
        let table = SubstitutionTable::from_entries(entries).expect("synthetic table");
        TransliterationEngine::new(Arc::new(table))
    }

    #[test]
    fn last_character_varies_fastest() {
        let engine = engine(vec![('x', vec!["1", "2"]), ('y', vec!["a", "b", "c"])]);
        let out = engine.expand("xy").expect("expand");
        assert_eq!(out, vec!["1a", "1b", "1c", "2a", "2b", "2c"]);
    }

    #[test]
    fn textually_equal_combinations_are_kept() {
        let engine = engine(vec![('x', vec!["a", "aa"]), ('y', vec!["aa", "a"])]);
        let out = engine.expand("xy").expect("expand");
        assert_eq!(out, vec!["aaa", "aa", "aaaa", "aaa"]);
    }

    #[test]
    fn unknown_character_fails_before_yielding() {
        let engine = engine(vec![('x', vec!["1"])]);
        let err = engine.renderings("xz").unwrap_err();
        assert_eq!(
            err,
            TranscriptError::UnknownCharacter {
                character: 'z',
                name: "xz".to_string(),
            }
        );
    }

    #[test]
    fn count_matches_product_and_size_hint() {
        let engine = engine(vec![('x', vec!["1", "2"]), ('y', vec!["a", "b", "c"])]);
        assert_eq!(engine.combination_count("xyx").expect("count"), 12);

        let mut renderings = engine.renderings("xyx").expect("renderings");
        assert_eq!(renderings.size_hint(), (12, Some(12)));
        renderings.next();
        assert_eq!(renderings.size_hint(), (11, Some(11)));
        assert_eq!(renderings.count(), 11);
    }

    #[test]
    fn empty_name_yields_single_empty_rendering() {
        let engine = engine(vec![('x', vec!["1"])]);
        assert_eq!(engine.expand("").expect("expand"), vec![String::new()]);
    }

    #[test]
    fn iterator_is_fused_after_exhaustion() {
        let engine = engine(vec![('x', vec!["1", "2"])]);
        let mut renderings = engine.renderings("x").expect("renderings");
        assert_eq!(renderings.next().as_deref(), Some("1"));
        assert_eq!(renderings.next().as_deref(), Some("2"));
        assert_eq!(renderings.next(), None);
        assert_eq!(renderings.next(), None);
    }
}
