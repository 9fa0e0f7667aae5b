//! Candidate stage entry point.
//!
//! # Responsibility
//! - Read scraped names, run them through `harvester_core`, write candidates.
//! - Report skipped names on stderr with a reason per name.
//!
//! # Invariants
//! - Configuration errors exit before any name is read.
//! - A skipped name never changes the exit status.

mod args;

use args::Cli;
use clap::Parser;
use harvester_core::{
    default_log_level, flush_logging, init_logging, BatchOptions, BatchReport, ConfigError,
    GenerateError, GeneratorConfig, SkipReason,
};
use log::info;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

#[derive(Debug)]
enum RunError {
    Logging(String),
    Config(ConfigError),
    Input { source: String, err: io::Error },
    Generate(GenerateError),
    Output { target: String, err: io::Error },
    Report(serde_json::Error),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Logging(_) | Self::Config(_) => 2,
            Self::Input { .. } | Self::Output { .. } | Self::Report(_) => 3,
            Self::Generate(_) => 4,
        }
    }
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Input { source, err } => {
                write!(f, "failed to read names from {source}: {err}")
            }
            Self::Generate(err) => write!(f, "candidate generation aborted: {err}"),
            Self::Output { target, err } => write!(f, "failed to write {target}: {err}"),
            Self::Report(err) => write!(f, "failed to encode report: {err}"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = run(&cli);
    flush_logging();
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[x] {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(RunError::Logging)?;

    let config = GeneratorConfig {
        domains: cli.domains.clone(),
        full_name: !cli.initial_only,
        patterns_path: cli.patterns.clone(),
    };
    let service = config.build_service().map_err(RunError::Config)?;

    let names = read_names(cli.names.as_deref())?;
    let options = BatchOptions { dedup: cli.dedup };
    let report = service
        .generate(&names, &options)
        .map_err(RunError::Generate)?;

    for (name, reason) in report.skipped() {
        print_skip(name, reason);
    }
    write_candidates(cli.output.as_deref(), &report)?;
    if let Some(path) = cli.report.as_deref() {
        write_report(path, &report)?;
    }

    info!(
        "event=run_done module=cli status=ok names={} candidates={}",
        names.len(),
        report.candidates.len()
    );
    Ok(())
}

fn read_names(path: Option<&Path>) -> Result<Vec<String>, RunError> {
    let source = path.map_or_else(|| "stdin".to_string(), |path| path.display().to_string());
    let input_err = |err| RunError::Input {
        source: source.clone(),
        err,
    };

    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(input_err)?)),
        None => Box::new(io::stdin().lock()),
    };
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(input_err)
}

fn write_candidates(path: Option<&Path>, report: &BatchReport) -> Result<(), RunError> {
    let target = describe_target(path);
    let output_err = |err| RunError::Output {
        target: target.clone(),
        err,
    };

    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path).map_err(output_err)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);
    for candidate in &report.candidates {
        writeln!(writer, "{candidate}").map_err(output_err)?;
    }
    writer.flush().map_err(output_err)
}

fn write_report(path: &Path, report: &BatchReport) -> Result<(), RunError> {
    let encoded = serde_json::to_string_pretty(report).map_err(RunError::Report)?;
    std::fs::write(path, encoded).map_err(|err| RunError::Output {
        target: path.display().to_string(),
        err,
    })
}

fn describe_target(path: Option<&Path>) -> String {
    path.map_or_else(|| "stdout".to_string(), |path| path.display().to_string())
}

fn print_skip(name: &str, reason: SkipReason) {
    // Unrecognized shapes are input problems; the rest are informational.
    let marker = match reason {
        SkipReason::NoPatternMatch => "[x]",
        SkipReason::Unsupported | SkipReason::Placeholder => "[~]",
    };
    eprintln!("{marker} {name}: {}", reason.message());
}
