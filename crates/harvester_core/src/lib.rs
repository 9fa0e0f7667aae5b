//! Name-to-email candidate generation core.
//!
//! Classifies scraped person names, transliterates Cyrillic names into every
//! plausible Latin spelling, and crosses those spellings with corporate
//! address conventions and domains. Pure computation: no network access, and
//! disk access only for an optional substitution table file.

pub mod config;
pub mod email;
pub mod logging;
pub mod model;
pub mod service;
pub mod transcript;
pub mod transliteration;

pub use config::{ConfigError, GeneratorConfig, TableSource, PATTERNS_ENV_VAR};
pub use email::{
    BuilderError, BuilderResult, Candidates, Domain, EmailCandidateBuilder, NameFormat,
};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LogTarget};
pub use model::name::NameClass;
pub use service::candidate_service::{
    normalize_raw_name, BatchOptions, BatchReport, CandidateService, GenerateError, NameOutcome,
    SkipReason, HIDDEN_MEMBER_PLACEHOLDER,
};
pub use transcript::{classify, TranscriptError, TranscriptResult, Transcriptor};
pub use transliteration::{
    Renderings, SubstitutionTable, TableError, TableResult, TransliterationEngine,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
