//! Local-part conventions and the rendering × domain product.

use crate::email::domain::Domain;
use crate::email::error::{BuilderError, BuilderResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Local-part convention applied to every rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameFormat {
    /// `first.last`
    FullName,
    /// `f.last`
    InitialAndLast,
}

impl NameFormat {
    /// Maps the `full_name` switch used by configuration and CLI.
    pub fn from_full_name(full_name: bool) -> Self {
        if full_name {
            Self::FullName
        } else {
            Self::InitialAndLast
        }
    }

    fn local_part(self, first: &str, last: &str) -> String {
        match self {
            Self::FullName => format!("{first}.{last}"),
            Self::InitialAndLast => {
                let mut local = String::with_capacity(last.len() + 5);
                // Tokens are checked non-empty before this point.
                local.extend(first.chars().next());
                local.push('.');
                local.push_str(last);
                local
            }
        }
    }
}

/// Builds candidate addresses for a fixed domain list and convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCandidateBuilder {
    domains: Vec<Domain>,
    format: NameFormat,
}

impl EmailCandidateBuilder {
    /// Creates a builder with the `first.last` (`full_name = true`) or
    /// `f.last` convention.
    ///
    /// # Errors
    /// - `InvalidDomain` for the first domain that fails normalization.
    pub fn new<S: AsRef<str>>(domains: &[S], full_name: bool) -> BuilderResult<Self> {
        Self::with_format(domains, NameFormat::from_full_name(full_name))
    }

    pub fn with_format<S: AsRef<str>>(domains: &[S], format: NameFormat) -> BuilderResult<Self> {
        let domains = domains
            .iter()
            .map(|raw| Domain::parse(raw.as_ref()))
            .collect::<BuilderResult<Vec<_>>>()?;
        debug!(
            "event=builder_init module=email status=ok domains={} format={:?}",
            domains.len(),
            format
        );
        Ok(Self { domains, format })
    }

    /// Normalized domains in construction order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn format(&self) -> NameFormat {
        self.format
    }

    /// Converts one `first last` rendering into a local-part.
    ///
    /// # Errors
    /// - `MalformedRendering` unless the rendering is exactly two non-empty
    ///   tokens separated by one space.
    pub fn local_part(&self, rendering: &str) -> BuilderResult<String> {
        let lowered = rendering.to_lowercase();
        let mut tokens = lowered.split(' ');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(first), Some(last), None) if !first.is_empty() && !last.is_empty() => {
                Ok(self.format.local_part(first, last))
            }
            _ => Err(BuilderError::MalformedRendering(rendering.to_string())),
        }
    }

    /// Returns every `localpart@domain` for `renderings`.
    ///
    /// All renderings are validated before the sequence is returned. Each
    /// call starts over; the returned iterator can also be cloned to replay
    /// the same sequence.
    pub fn build<S: AsRef<str>>(&self, renderings: &[S]) -> BuilderResult<Candidates<'_>> {
        let local_parts = renderings
            .iter()
            .map(|rendering| self.local_part(rendering.as_ref()))
            .collect::<BuilderResult<Vec<_>>>()?;
        Ok(Candidates::new(local_parts, &self.domains))
    }
}

/// Lazy local-part × domain sequence.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    local_parts: Vec<String>,
    domains: &'a [Domain],
    local_index: usize,
    domain_index: usize,
}

impl<'a> Candidates<'a> {
    fn new(local_parts: Vec<String>, domains: &'a [Domain]) -> Self {
        Self {
            local_parts,
            domains,
            local_index: 0,
            domain_index: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.domains.is_empty() || self.local_index >= self.local_parts.len() {
            return 0;
        }
        let rows_left = self.local_parts.len() - self.local_index;
        rows_left * self.domains.len() - self.domain_index
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.domains.is_empty() {
            return None;
        }
        let local = self.local_parts.get(self.local_index)?;
        let domain = &self.domains[self.domain_index];
        let candidate = format!("{local}@{domain}");

        self.domain_index += 1;
        if self.domain_index == self.domains.len() {
            self.domain_index = 0;
            self.local_index += 1;
        }
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates<'_> {}

impl FusedIterator for Candidates<'_> {}
