//! Trial Execution
//!
//! One compress/decompress round trip per file. Three monotonic timestamps
//! bracket the two phases; each phase is measured exactly once, with no
//! warm-up or repetition. A missing or undecodable file is a recoverable
//! skip; an oracle error aborts the whole run.

use crate::capture::RunLog;
use crate::config::Options;
use anyhow::Context;
use goudbench_oracle::{CompressionOracle, OracleOptions};
use goudbench_report::{format_trial, TrialRecord};
use std::path::Path;
use std::time::Instant;

/// Run one trial for `relative` under the input root.
///
/// Returns `Ok(None)` for a recoverable skip (file missing or not UTF-8).
/// Oracle failures propagate: the oracle is pure, so they are contract
/// violations, not conditions to retry.
pub fn run_trial(
    relative: &str,
    options: &Options,
    oracle: &dyn CompressionOracle,
    log: &mut RunLog,
) -> anyhow::Result<Option<TrialRecord>> {
    let full = options.input_root.join(relative);
    if !full.exists() {
        log.line(&format!("Skipping: {relative} (file not found)"));
        return Ok(None);
    }

    // Decode as UTF-8 and re-encode before any timing: losslessness is
    // defined over decoded text, so non-UTF-8 inputs are unsupported.
    let raw = std::fs::read(&full).with_context(|| format!("reading {}", full.display()))?;
    let original_text = match String::from_utf8(raw) {
        Ok(text) => text,
        Err(_) => {
            log.line(&format!("Skipping: {relative} (not valid UTF-8)"));
            return Ok(None);
        }
    };
    let input = original_text.as_bytes();

    let file_name = full
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative.to_string());

    let oracle_options = OracleOptions {
        log_level: options.log_level,
        algorithm: options.algorithm,
    };

    let t0 = Instant::now();
    let compressed = oracle
        .compress(input, &oracle_options)
        .with_context(|| format!("oracle failed to compress {file_name}"))?;
    let t1 = Instant::now();
    let decompressed = oracle
        .decompress(&compressed, &oracle_options)
        .with_context(|| format!("oracle failed to decompress {file_name}"))?;
    let t2 = Instant::now();

    let decompressed_text = String::from_utf8_lossy(&decompressed);
    let is_lossless = decompressed_text == original_text;
    let is_smaller = compressed.len() < input.len();

    // An empty input has no meaningful ratio; record zero instead of NaN.
    let compression_ratio_percent = if input.is_empty() {
        0.0
    } else {
        (input.len() as f64 - compressed.len() as f64) / input.len() as f64 * 100.0
    };

    let record = TrialRecord {
        file_name,
        input_size: input.len(),
        compressed_size: compressed.len(),
        decompressed_size: decompressed.len(),
        compression_ratio_percent,
        compression_time_ms: t1.duration_since(t0).as_secs_f64() * 1000.0,
        decompression_time_ms: t2.duration_since(t1).as_secs_f64() * 1000.0,
        is_lossless,
        is_smaller,
    };

    log.block(&format_trial(&record, options.verbose));
    if !is_lossless {
        log_line_diff(&original_text, &decompressed_text, log);
    }

    if options.save {
        save_round_trip(&full, &compressed, &decompressed)?;
    }

    Ok(Some(record))
}

/// Report every line index where the two texts differ, padding the shorter
/// side with empty strings. Diagnostic only; the verdict is already recorded.
fn log_line_diff(original: &str, decompressed: &str, log: &mut RunLog) {
    let original_lines: Vec<&str> = original.split('\n').collect();
    let decompressed_lines: Vec<&str> = decompressed.split('\n').collect();

    let count = original_lines.len().max(decompressed_lines.len());
    for i in 0..count {
        let left = original_lines.get(i).copied().unwrap_or("");
        let right = decompressed_lines.get(i).copied().unwrap_or("");
        if left != right {
            log.line(&format!("Line {i} differs:"));
            log.line(&format!("Input: {left}"));
            log.line(&format!("Output: {right}"));
        }
    }
}

/// Write the round-trip byte streams next to the input file.
fn save_round_trip(path: &Path, compressed: &[u8], decompressed: &[u8]) -> anyhow::Result<()> {
    let mut compressed_path = path.as_os_str().to_owned();
    compressed_path.push(".compressed");
    std::fs::write(&compressed_path, compressed)?;

    let mut decompressed_path = path.as_os_str().to_owned();
    decompressed_path.push(".decompressed");
    std::fs::write(&decompressed_path, decompressed)?;

    Ok(())
}
