//! Output Formatting
//!
//! Terminal-friendly rendering of per-trial results and the after-action
//! report. Timing lines are verbose-only; everything else always prints.

use crate::report::{RunSummary, TrialRecord};

/// Format one trial for terminal display.
pub fn format_trial(record: &TrialRecord, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Testing file: {} ===\n", record.file_name));
    output.push_str(&format!("Input size: {}\n", record.input_size));
    output.push_str(&format!("Compressed size: {}\n", record.compressed_size));
    output.push_str(&format!(
        "Decompressed size: {}\n",
        record.decompressed_size
    ));
    output.push_str(&format!(
        "Compressed is smaller than input: {}\n",
        record.is_smaller
    ));
    output.push_str(&format!(
        "Decompressed is lossless: {}\n",
        record.is_lossless
    ));
    output.push_str(&format!(
        "Compression ratio: {:.2}% smaller than the original.\n",
        record.compression_ratio_percent
    ));

    if verbose {
        output.push_str(&format!(
            "Compression time: {:.2} ms\n",
            record.compression_time_ms
        ));
        output.push_str(&format!(
            "Decompression time: {:.2} ms\n",
            record.decompression_time_ms
        ));
    }

    output
}

/// Format the after-action report.
pub fn format_summary(summary: &RunSummary) -> String {
    let mut output = String::new();

    output.push_str("\n=== After Action Report ===\n");
    output.push_str(&format!("Files tested: {}\n", summary.files_tested));
    output.push_str(&format!(
        "Average compression time: {:.2} ms\n",
        summary.avg_compression_time_ms
    ));
    output.push_str(&format!(
        "Average decompression time: {:.2} ms\n",
        summary.avg_decompression_time_ms
    ));
    output.push_str(&format!(
        "Average compression ratio: {:.2}%\n",
        summary.avg_compression_ratio_percent
    ));
    output.push_str(&format!(
        "Compression time outliers: {}\n",
        format_outliers(&summary.compression_time_outliers)
    ));
    output.push_str(&format!(
        "Decompression time outliers: {}\n",
        format_outliers(&summary.decompression_time_outliers)
    ));
    output.push_str(&format!(
        "Compression ratio outliers: {}\n",
        format_outliers(&summary.compression_ratio_outliers)
    ));
    output.push_str(&format!(
        "All compressions were lossless: {}\n",
        summary.all_lossless
    ));
    output.push_str(&format!(
        "All compressions were smaller than input: {}\n",
        summary.all_smaller
    ));
    if !summary.failed_files.is_empty() {
        output.push_str(&format!(
            "Failed files: {}\n",
            summary.failed_files.join(", ")
        ));
    }

    output
}

fn format_outliers(outliers: &[f64]) -> String {
    if outliers.is_empty() {
        return "None".to_string();
    }
    outliers
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrialRecord {
        TrialRecord {
            file_name: "sample.txt".to_string(),
            input_size: 200,
            compressed_size: 150,
            decompressed_size: 200,
            compression_ratio_percent: 25.0,
            compression_time_ms: 3.5,
            decompression_time_ms: 1.5,
            is_lossless: true,
            is_smaller: true,
        }
    }

    #[test]
    fn timing_lines_are_verbose_only() {
        let quiet = format_trial(&record(), false);
        assert!(!quiet.contains("Compression time"));

        let verbose = format_trial(&record(), true);
        assert!(verbose.contains("Compression time: 3.50 ms"));
        assert!(verbose.contains("Decompression time: 1.50 ms"));
    }

    #[test]
    fn trial_lines_always_present() {
        let out = format_trial(&record(), false);
        assert!(out.contains("=== Testing file: sample.txt ==="));
        assert!(out.contains("Compression ratio: 25.00% smaller than the original."));
        assert!(out.contains("Decompressed is lossless: true"));
    }

    #[test]
    fn empty_outlier_lists_print_none() {
        let summary = RunSummary {
            files_tested: 2,
            all_lossless: true,
            all_smaller: true,
            ..Default::default()
        };
        let out = format_summary(&summary);
        assert!(out.contains("Compression time outliers: None"));
        assert!(!out.contains("Failed files"));
    }

    #[test]
    fn failed_files_listed_when_present() {
        let summary = RunSummary {
            files_tested: 3,
            failed_files: vec!["a.txt".to_string(), "a.txt".to_string()],
            ..Default::default()
        };
        let out = format_summary(&summary);
        assert!(out.contains("Failed files: a.txt, a.txt"));
    }
}
