#![warn(missing_docs)]
//! Goudbench CLI Library
//!
//! Drives a full harness run: discover the file set, execute one
//! compress/decompress trial per file against the oracle, aggregate the
//! metrics, render the after-action report, and optionally persist results
//! and the debug transcript. Trials are strictly sequential; a file's
//! compress phase completes and is timed before its decompress phase starts.

mod capture;
mod config;
mod resolver;
mod summary;
mod trial;

pub use capture::RunLog;
pub use config::{FileSelection, HarnessConfig, InputConfig, Options, OutputConfig,
    DEFAULT_SAMPLE_FILES};
pub use resolver::resolve_file_set;
pub use summary::summarize;
pub use trial::run_trial;

use clap::Parser;
use goudbench_oracle::{CompressionOracle, GoudCompressor};
use goudbench_report::{format_summary, run_stamp, save_results, save_transcript, RunSummary,
    TrialRecord};
use std::path::PathBuf;

/// Goudbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "goudbench")]
#[command(author, version, about = "Round-trip verification and timing harness for the goud compressor")]
pub struct Cli {
    /// Log level: none, error, info, debug, performance
    #[arg(long = "log", default_value = "none")]
    pub log: String,

    /// Enable detailed performance logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to test: "all" or a path relative to the input root
    #[arg(long, default_value = "all")]
    pub files: String,

    /// Save test results, transcripts, and round-trip byte streams
    #[arg(long)]
    pub save: bool,

    /// Compression algorithm: lz, rle, delta, bwt, best
    #[arg(long, default_value = "best")]
    pub algorithm: String,
}

/// Everything a run produced, for callers that want more than the exit code.
#[derive(Debug)]
pub struct SuiteOutcome {
    /// Per-file records in trial order.
    pub records: Vec<TrialRecord>,
    /// Aggregate view recomputed from the records.
    pub summary: RunSummary,
    /// Where the results document landed, when `--save` was set.
    pub results_path: Option<PathBuf>,
    /// Where the debug transcript landed, when one was captured and saved.
    pub transcript_path: Option<PathBuf>,
}

/// Run the goudbench CLI. Main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("goudbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("goudbench=info")
            .init();
    }

    // Discover goudbench.toml configuration (CLI flags override)
    let config = HarnessConfig::discover().unwrap_or_default();
    let options = Options::from_cli(&cli, &config)?;

    // The oracle is fully initialized by construction, before any timing.
    let oracle = GoudCompressor::new();
    run_suite(&options, &oracle)?;

    Ok(())
}

/// Execute a full run against `oracle`.
///
/// Sequential by design: no parallel trials, no retries, no timeouts. The
/// only mutable state across trials is the accumulating record sequence and
/// the run log; an oracle error propagates immediately.
pub fn run_suite(
    options: &Options,
    oracle: &dyn CompressionOracle,
) -> anyhow::Result<SuiteOutcome> {
    let mut log = RunLog::new(options.log_level);

    let references: Vec<String> = match &options.files {
        FileSelection::All => options.default_files.clone(),
        FileSelection::One(reference) => vec![reference.clone()],
    };

    let paths = resolve_file_set(&references, &options.input_root, &options.extensions, &mut log);

    let mut records = Vec::new();
    for relative in &paths {
        if let Some(record) = run_trial(relative, options, oracle, &mut log)? {
            records.push(record);
        }
    }

    let summary = summarize(&records);
    log.block(&format_summary(&summary));

    let mut results_path = None;
    let mut transcript_path = None;
    if options.save {
        let stamp = run_stamp();
        let path = save_results(&options.results_dir, &stamp, &records)?;
        log.line(&format!("Results saved to {}", path.display()));
        results_path = Some(path);

        if log.is_capturing() && !log.captured().is_empty() {
            let path = save_transcript(&options.results_dir, &stamp, log.captured())?;
            println!("Debug logs saved to {}", path.display());
            transcript_path = Some(path);
        }
    }

    Ok(SuiteOutcome {
        records,
        summary,
        results_path,
        transcript_path,
    })
}
