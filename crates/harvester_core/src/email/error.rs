//! Builder-level errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Configured domain does not match `label.tld`.
    InvalidDomain(String),
    /// Rendering does not split into exactly two tokens.
    ///
    /// Renderings come from the transcriptor, so this points at a broken
    /// caller rather than bad user input.
    MalformedRendering(String),
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDomain(value) => write!(
                f,
                "invalid email domain `{value}` (expected `label.tld` or `@label.tld`)"
            ),
            Self::MalformedRendering(value) => write!(
                f,
                "name rendering `{value}` must be exactly two space-separated tokens"
            ),
        }
    }
}

impl Error for BuilderError {}
