//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Builds candidate corporate email addresses from a list of person names.
#[derive(Debug, Parser)]
#[command(name = "harvester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate candidate email addresses from scraped employee names")]
pub struct Cli {
    /// Email domains, bare (`corp.com`) or `@`-prefixed (`@corp.com`).
    #[arg(required = true, value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// File with one raw name per line; reads stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// File to write candidates to, one per line; writes stdout when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Substitution table JSON; overrides `HARVESTER_PATTERNS` and the built-in table.
    #[arg(short, long, value_name = "FILE")]
    pub patterns: Option<PathBuf>,

    /// Use the `f.last` convention instead of `first.last`.
    #[arg(long)]
    pub initial_only: bool,

    /// Emit each candidate once across the whole batch.
    #[arg(long)]
    pub dedup: bool,

    /// Write a JSON report of per-name outcomes to this file.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when omitted.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,
}
