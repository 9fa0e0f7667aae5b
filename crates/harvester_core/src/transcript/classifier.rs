//! Anchored pattern rules for raw person names.
//!
//! # Invariants
//! - Every pattern covers the full input; substring hits never classify.
//! - Tokens are separated by exactly one space.
//! - Rules are tried in order: Latin pair, Cyrillic pair, three tokens.

use crate::model::name::NameClass;
use once_cell::sync::Lazy;
use regex::Regex;

static LATIN_PAIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{2,} [a-zA-Z]{2,}$").expect("valid latin pair regex"));
static CYRILLIC_PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[а-яёА-ЯЁ]{2,} [а-яёА-ЯЁ]{2,}$").expect("valid cyrillic pair regex")
});
// Middle token may be a bare initial with one trailing ASCII punctuation mark.
static TRIPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Zа-яёА-ЯЁ]{2,} [a-zA-Zа-яёА-ЯЁ]+[[:punct:]]? [a-zA-Zа-яёА-ЯЁ]{2,}$")
        .expect("valid triple name regex")
});

/// Classifies a raw name string by shape.
///
/// Case is only relevant to the letter-class test; the input is not
/// modified.
pub fn classify(raw: &str) -> NameClass {
    if LATIN_PAIR_RE.is_match(raw) {
        NameClass::LatinPair
    } else if CYRILLIC_PAIR_RE.is_match(raw) {
        NameClass::CyrillicPair
    } else if TRIPLE_RE.is_match(raw) {
        NameClass::TriplePlus
    } else {
        NameClass::Unrecognized
    }
}
