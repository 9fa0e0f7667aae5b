//! Composed entry point from raw name to Latin renderings.
//!
//! # Contract
//! - Latin pairs pass through lowercased as a single rendering.
//! - Cyrillic pairs are lowercased and expanded by the engine.
//! - Three-token names fail with `Unsupported`; others with `NoPatternMatch`.

use crate::model::name::NameClass;
use crate::transcript::classifier::classify;
use crate::transcript::error::{TranscriptError, TranscriptResult};
use crate::transliteration::engine::TransliterationEngine;
use log::trace;

/// Stateless wrapper over classification and transliteration.
#[derive(Debug, Clone)]
pub struct Transcriptor {
    engine: TransliterationEngine,
}

impl Transcriptor {
    pub fn new(engine: TransliterationEngine) -> Self {
        Self { engine }
    }

    /// Returns every Latin rendering of `raw`.
    pub fn transcript(&self, raw: &str) -> TranscriptResult<Vec<String>> {
        let class = classify(raw);
        trace!(
            "event=name_classify module=transcript class={} supported={}",
            class.as_str(),
            class.is_supported()
        );
        match class {
            // A Latin name is taken as final; no reverse ambiguity is added.
            NameClass::LatinPair => Ok(vec![raw.to_lowercase()]),
            NameClass::CyrillicPair => self.engine.expand(&raw.to_lowercase()),
            NameClass::TriplePlus => Err(TranscriptError::Unsupported(raw.to_string())),
            NameClass::Unrecognized => Err(TranscriptError::NoPatternMatch(raw.to_string())),
        }
    }
}
