//! Cyrillic name transliteration.
//!
//! # Responsibility
//! - Load and validate the character substitution table.
//! - Expand a lowered Cyrillic name into every Latin rendering.
//!
//! # Invariants
//! - The table is shared read-only; nothing here mutates it after load.

pub mod engine;
pub mod table;

pub use engine::{Renderings, TransliterationEngine};
pub use table::{SubstitutionTable, TableError, TableResult};
