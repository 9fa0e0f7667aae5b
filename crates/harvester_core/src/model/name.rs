//! Name shape classification result.

use serde::{Deserialize, Serialize};

/// Shape of a raw person name as seen by the classifier.
///
/// Derived per call; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameClass {
    /// Two tokens of Latin letters, each at least two long.
    LatinPair,
    /// Two tokens of Cyrillic letters, each at least two long.
    CyrillicPair,
    /// Three tokens; the middle one may be an initial.
    TriplePlus,
    /// Anything else.
    Unrecognized,
}

impl NameClass {
    /// Returns whether names of this class can produce renderings.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::LatinPair | Self::CyrillicPair)
    }

    /// Stable lowercase label used in log events and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LatinPair => "latin_pair",
            Self::CyrillicPair => "cyrillic_pair",
            Self::TriplePlus => "triple_plus",
            Self::Unrecognized => "unrecognized",
        }
    }
}
