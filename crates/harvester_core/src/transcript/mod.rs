//! Raw name classification and Latin rendering.
//!
//! # Responsibility
//! - Decide which supported shape a scraped name has.
//! - Turn a supported name into one or more lowercase Latin renderings.
//!
//! # See also
//! - `crate::transliteration` for the Cyrillic expansion itself.

pub mod classifier;
pub mod error;
pub mod transcriptor;

pub use classifier::classify;
pub use error::{TranscriptError, TranscriptResult};
pub use transcriptor::Transcriptor;
