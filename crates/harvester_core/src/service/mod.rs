//! Core use-case services.
//!
//! # Responsibility
//! - Run raw names through transcription and email building.
//! - Apply the per-name skip versus whole-batch abort policy.

pub mod candidate_service;
