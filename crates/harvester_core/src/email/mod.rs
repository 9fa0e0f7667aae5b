//! Email candidate construction.
//!
//! # Responsibility
//! - Normalize and validate target domains once, at construction.
//! - Cross renderings with domains under one local-part convention.
//!
//! # Invariants
//! - A builder never holds a partially valid domain list.
//! - Candidate order is renderings (outer) by domains (inner).

pub mod builder;
pub mod domain;
pub mod error;

pub use builder::{Candidates, EmailCandidateBuilder, NameFormat};
pub use domain::Domain;
pub use error::{BuilderError, BuilderResult};
