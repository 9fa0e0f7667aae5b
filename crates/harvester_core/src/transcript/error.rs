//! Typed failures for turning a raw name into renderings.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Failure kinds raised while transcribing one raw name.
///
/// `NoPatternMatch` and `Unsupported` concern a single person and are
/// skippable. `UnknownCharacter` means the substitution table is incomplete
/// and must stop the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// Raw name matched none of the recognized shapes.
    NoPatternMatch(String),
    /// Raw name is a recognized three-token shape that is not handled.
    Unsupported(String),
    /// Substitution table has no entry for a character of `name`.
    UnknownCharacter { character: char, name: String },
}

impl TranscriptError {
    /// Returns whether the caller may skip this name and continue.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::NoPatternMatch(_) | Self::Unsupported(_))
    }
}

impl Display for TranscriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPatternMatch(name) => {
                write!(f, "`{name}` did not match any supported name pattern")
            }
            Self::Unsupported(name) => {
                write!(f, "`{name}` looks like a three-part name, which is not supported")
            }
            Self::UnknownCharacter { character, name } => write!(
                f,
                "substitution table has no entry for `{character}` (U+{:04X}) in `{name}`",
                u32::from(*character)
            ),
        }
    }
}

impl Error for TranscriptError {}
