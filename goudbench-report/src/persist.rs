//! Result Persistence
//!
//! Writes the results document and, when debug capture was active, the
//! transcript, both under a per-run timestamp so repeated runs never clobber
//! each other.

use crate::json::generate_results_json;
use crate::report::TrialRecord;
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};

/// Timestamp slug for this run: ISO-8601 UTC with `:` and `.` replaced by
/// `-` so it is valid in file names on every platform.
pub fn run_stamp() -> String {
    Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Write the results document to `<dir>/results-<stamp>.json`, creating the
/// directory if absent. Returns the written path.
pub fn save_results(
    dir: &Path,
    stamp: &str,
    records: &[TrialRecord],
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("results-{stamp}.json"));
    std::fs::write(&path, generate_results_json(records)?)?;
    Ok(path)
}

/// Write captured diagnostic lines to `<dir>/debug-<stamp>.log`, one per row.
pub fn save_transcript(dir: &Path, stamp: &str, lines: &[String]) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("debug-{stamp}.log"));
    std::fs::write(&path, lines.join("\n"))?;
    Ok(path)
}
