//! Generator configuration and one-time service assembly.
//!
//! # Responsibility
//! - Resolve which substitution table to use and load it once.
//! - Validate domains before any name is processed.
//!
//! # Invariants
//! - `build_service` either returns a fully configured service or an error;
//!   no partially valid configuration escapes.
//! - Table source priority: explicit path, `HARVESTER_PATTERNS`, built-in.

use crate::email::builder::{EmailCandidateBuilder, NameFormat};
use crate::email::error::BuilderError;
use crate::service::candidate_service::CandidateService;
use crate::transcript::transcriptor::Transcriptor;
use crate::transliteration::engine::TransliterationEngine;
use crate::transliteration::table::{SubstitutionTable, TableError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable naming a substitution table file.
pub const PATTERNS_ENV_VAR: &str = "HARVESTER_PATTERNS";

/// Configuration-time failure; always fatal for a run.
#[derive(Debug)]
pub enum ConfigError {
    NoDomains,
    Table(TableError),
    Builder(BuilderError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDomains => write!(f, "at least one email domain is required"),
            Self::Table(err) => write!(f, "{err}"),
            Self::Builder(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoDomains => None,
            Self::Table(err) => Some(err),
            Self::Builder(err) => Some(err),
        }
    }
}

impl From<TableError> for ConfigError {
    fn from(value: TableError) -> Self {
        Self::Table(value)
    }
}

impl From<BuilderError> for ConfigError {
    fn from(value: BuilderError) -> Self {
        Self::Builder(value)
    }
}

/// Where the substitution table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    Builtin,
}

impl TableSource {
    /// Picks the table source from an explicit path or the environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path);
        }
        match std::env::var_os(PATTERNS_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::File(PathBuf::from(value)),
            _ => Self::Builtin,
        }
    }

    pub fn load(&self) -> Result<SubstitutionTable, TableError> {
        match self {
            Self::File(path) => SubstitutionTable::from_path(path),
            Self::Builtin => SubstitutionTable::builtin(),
        }
    }
}

/// Inputs needed to assemble a [`CandidateService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Raw domains, bare (`corp.com`) or `@`-prefixed.
    pub domains: Vec<String>,
    /// `true` for `first.last`, `false` for `f.last`.
    pub full_name: bool,
    /// Optional table file overriding the environment and built-in table.
    pub patterns_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Creates a `first.last` config over the built-in table resolution.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
            full_name: true,
            patterns_path: None,
        }
    }

    pub fn name_format(&self) -> NameFormat {
        NameFormat::from_full_name(self.full_name)
    }

    /// Loads the table and validates domains, then wires the service.
    pub fn build_service(&self) -> Result<CandidateService, ConfigError> {
        if self.domains.is_empty() {
            return Err(ConfigError::NoDomains);
        }
        let builder = EmailCandidateBuilder::with_format(&self.domains, self.name_format())?;

        let source = TableSource::resolve(self.patterns_path.clone());
        let table = Arc::new(source.load()?);
        info!(
            "event=config_load module=config status=ok table={} entries={} domains={} format={:?}",
            match &source {
                TableSource::File(_) => "file",
                TableSource::Builtin => "builtin",
            },
            table.len(),
            builder.domains().len(),
            builder.format()
        );

        let transcriptor = Transcriptor::new(TransliterationEngine::new(table));
        Ok(CandidateService::new(transcriptor, builder))
    }
}
