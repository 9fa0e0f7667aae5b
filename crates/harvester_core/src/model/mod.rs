//! Shared value types for the candidate pipeline.
//!
//! # Responsibility
//! - Define shapes exchanged between classification, transliteration and
//!   email building.
//!
//! # Invariants
//! - Values here are derived per name and never persisted by core.

pub mod name;
