//! Normalized email domain.

use crate::email::error::{BuilderError, BuilderResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+\.[a-z]{2,10}$").expect("valid domain regex"));

/// Domain part of a candidate address, always `label.tld` in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(String);

impl Domain {
    /// Normalizes a configured domain.
    ///
    /// Surrounding whitespace and one leading `@` are dropped before the
    /// shape check. Case is not folded: uppercase letters are rejected.
    pub fn parse(raw: &str) -> BuilderResult<Self> {
        let trimmed = raw.trim();
        let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if !DOMAIN_RE.is_match(bare) {
            return Err(BuilderError::InvalidDomain(raw.to_string()));
        }
        Ok(Self(bare.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
