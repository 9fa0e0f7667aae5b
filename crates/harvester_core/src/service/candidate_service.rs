//! Candidate generation use-case service.
//!
//! # Responsibility
//! - Turn a batch of scraped names into candidate addresses.
//! - Report every skipped name with a reason a human can act on.
//!
//! # Invariants
//! - Names are processed independently, in input order.
//! - `NoPatternMatch`/`Unsupported` skip one name; every other failure
//!   aborts the batch and no report is returned.
//! - Without dedup, output equals the concatenation of per-name builds.

use crate::email::builder::EmailCandidateBuilder;
use crate::email::error::BuilderError;
use crate::transcript::error::TranscriptError;
use crate::transcript::transcriptor::Transcriptor;
use log::{error, info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Title the network shows instead of a name for hidden profiles.
pub const HIDDEN_MEMBER_PLACEHOLDER: &str = "LinkedIn Member";

/// Failure that stops candidate generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    Transcript(TranscriptError),
    Builder(BuilderError),
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transcript(err) => write!(f, "{err}"),
            Self::Builder(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transcript(err) => Some(err),
            Self::Builder(err) => Some(err),
        }
    }
}

impl From<TranscriptError> for GenerateError {
    fn from(value: TranscriptError) -> Self {
        Self::Transcript(value)
    }
}

impl From<BuilderError> for GenerateError {
    fn from(value: BuilderError) -> Self {
        Self::Builder(value)
    }
}

/// Why a name produced no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Blank entry or hidden-profile placeholder.
    Placeholder,
    /// Name shape was not recognized.
    NoPatternMatch,
    /// Name shape was recognized but is not handled (three tokens).
    Unsupported,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::NoPatternMatch => "no_pattern_match",
            Self::Unsupported => "unsupported",
        }
    }

    /// Human-readable reason shown to the operator.
    pub fn message(self) -> &'static str {
        match self {
            Self::Placeholder => "hidden profile, no name to work with",
            Self::NoPatternMatch => "did not suit any name pattern",
            Self::Unsupported => "three-part names are not supported, handle manually",
        }
    }
}

/// Per-name result inside a [`BatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NameOutcome {
    Generated { name: String, candidates: usize },
    Skipped { name: String, reason: SkipReason },
}

/// Batch-level switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Emit each candidate address once across the whole batch.
    pub dedup: bool,
}

/// Candidates and outcomes for one processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Candidate addresses in name order, then build order.
    pub candidates: Vec<String>,
    /// One entry per input name, in input order.
    pub outcomes: Vec<NameOutcome>,
}

impl BatchReport {
    /// Skipped names with their reasons.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, SkipReason)> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            NameOutcome::Skipped { name, reason } => Some((name.as_str(), *reason)),
            NameOutcome::Generated { .. } => None,
        })
    }

    /// Number of names that went through email building.
    pub fn generated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, NameOutcome::Generated { .. }))
            .count()
    }
}

/// Use-case wrapper combining transcription and email building.
#[derive(Debug, Clone)]
pub struct CandidateService {
    transcriptor: Transcriptor,
    builder: EmailCandidateBuilder,
}

impl CandidateService {
    pub fn new(transcriptor: Transcriptor, builder: EmailCandidateBuilder) -> Self {
        Self {
            transcriptor,
            builder,
        }
    }

    /// Returns every candidate address for one raw name.
    ///
    /// The name is used as given; see [`normalize_raw_name`] for the batch
    /// cleanup.
    pub fn candidates_for(&self, raw: &str) -> Result<Vec<String>, GenerateError> {
        let renderings = self.transcriptor.transcript(raw)?;
        Ok(self.builder.build(&renderings)?.collect())
    }

    /// Processes `names` in order under the skip/abort policy.
    ///
    /// # Errors
    /// - `UnknownCharacter` or `MalformedRendering`; the partial report is
    ///   discarded.
    pub fn generate<I, S>(
        &self,
        names: I,
        options: &BatchOptions,
    ) -> Result<BatchReport, GenerateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();
        let mut seen = HashSet::new();

        for raw in names {
            let name = normalize_raw_name(raw.as_ref());
            if name.is_empty() || name == HIDDEN_MEMBER_PLACEHOLDER {
                report.outcomes.push(skip(name, SkipReason::Placeholder));
                continue;
            }

            let candidates = match self.candidates_for(&name) {
                Ok(candidates) => candidates,
                Err(GenerateError::Transcript(TranscriptError::NoPatternMatch(_))) => {
                    report.outcomes.push(skip(name, SkipReason::NoPatternMatch));
                    continue;
                }
                Err(GenerateError::Transcript(TranscriptError::Unsupported(_))) => {
                    report.outcomes.push(skip(name, SkipReason::Unsupported));
                    continue;
                }
                Err(err) => {
                    error!(
                        "event=batch_abort module=candidates status=error processed={} error={}",
                        report.outcomes.len(),
                        err
                    );
                    return Err(err);
                }
            };

            let mut emitted = 0;
            for candidate in candidates {
                if options.dedup && !seen.insert(candidate.clone()) {
                    continue;
                }
                report.candidates.push(candidate);
                emitted += 1;
            }
            report.outcomes.push(NameOutcome::Generated {
                name,
                candidates: emitted,
            });
        }

        info!(
            "event=batch_done module=candidates status=ok names={} generated={} skipped={} candidates={} dedup={}",
            report.outcomes.len(),
            report.generated_count(),
            report.outcomes.len() - report.generated_count(),
            report.candidates.len(),
            options.dedup
        );
        Ok(report)
    }
}

/// Trims a scraped name and collapses inner whitespace runs to one space.
pub fn normalize_raw_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn skip(name: String, reason: SkipReason) -> NameOutcome {
    match reason {
        SkipReason::Unsupported | SkipReason::Placeholder => info!(
            "event=name_skip module=candidates status=skip reason={} chars={}",
            reason.as_str(),
            name.chars().count()
        ),
        SkipReason::NoPatternMatch => warn!(
            "event=name_skip module=candidates status=skip reason={} chars={}",
            reason.as_str(),
            name.chars().count()
        ),
    }
    NameOutcome::Skipped { name, reason }
}
