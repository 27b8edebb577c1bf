//! Run Aggregation
//!
//! Folds the trial sequence into the after-action summary: means, outlier
//! sets over the three metric series, the lossless/smaller conjunctions, and
//! the failed-files list.

use goudbench_report::{RunSummary, TrialRecord};
use goudbench_stats::{find_outliers, mean};

/// Compute the run summary from the trial sequence.
///
/// Derived data only: calling this twice on the same records gives the same
/// summary. Zero records yield zero means, not a division fault.
pub fn summarize(records: &[TrialRecord]) -> RunSummary {
    let compression_times: Vec<f64> = records.iter().map(|r| r.compression_time_ms).collect();
    let decompression_times: Vec<f64> = records.iter().map(|r| r.decompression_time_ms).collect();
    let ratios: Vec<f64> = records.iter().map(|r| r.compression_ratio_percent).collect();

    // One failed-files entry per failed check, smaller first, matching the
    // per-trial report order; a file failing both appears twice.
    let mut failed_files = Vec::new();
    for record in records {
        if !record.is_smaller {
            failed_files.push(record.file_name.clone());
        }
        if !record.is_lossless {
            failed_files.push(record.file_name.clone());
        }
    }

    RunSummary {
        files_tested: records.len(),
        avg_compression_time_ms: mean(&compression_times),
        avg_decompression_time_ms: mean(&decompression_times),
        avg_compression_ratio_percent: mean(&ratios),
        compression_time_outliers: find_outliers(&compression_times),
        decompression_time_outliers: find_outliers(&decompression_times),
        compression_ratio_outliers: find_outliers(&ratios),
        all_lossless: records.iter().all(|r| r.is_lossless),
        all_smaller: records.iter().all(|r| r.is_smaller),
        failed_files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lossless: bool, smaller: bool) -> TrialRecord {
        TrialRecord {
            file_name: name.to_string(),
            input_size: 100,
            compressed_size: if smaller { 50 } else { 100 },
            decompressed_size: 100,
            compression_ratio_percent: if smaller { 50.0 } else { 0.0 },
            compression_time_ms: 1.0,
            decompression_time_ms: 0.5,
            is_lossless: lossless,
            is_smaller: smaller,
        }
    }

    #[test]
    fn empty_run_has_zero_means_and_vacuous_conjunctions() {
        let summary = summarize(&[]);
        assert_eq!(summary.files_tested, 0);
        assert_eq!(summary.avg_compression_time_ms, 0.0);
        assert_eq!(summary.avg_compression_ratio_percent, 0.0);
        assert!(summary.all_lossless);
        assert!(summary.all_smaller);
        assert!(summary.failed_files.is_empty());
    }

    #[test]
    fn conjunctions_and_averages() {
        let records = vec![
            record("a.txt", true, true),
            record("b.txt", true, false),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.files_tested, 2);
        assert!(summary.all_lossless);
        assert!(!summary.all_smaller);
        assert!((summary.avg_compression_ratio_percent - 25.0).abs() < 1e-9);
        assert_eq!(summary.failed_files, ["b.txt"]);
    }

    #[test]
    fn file_failing_both_checks_appears_twice() {
        let summary = summarize(&[record("bad.txt", false, false)]);
        assert_eq!(summary.failed_files, ["bad.txt", "bad.txt"]);
    }

    #[test]
    fn too_few_trials_produce_no_outliers() {
        let records = vec![
            record("a.txt", true, true),
            record("b.txt", true, true),
            record("c.txt", true, true),
        ];
        let summary = summarize(&records);
        assert!(summary.compression_time_outliers.is_empty());
        assert!(summary.decompression_time_outliers.is_empty());
        assert!(summary.compression_ratio_outliers.is_empty());
    }

    #[test]
    fn slow_trial_surfaces_as_time_outlier() {
        // n = 8: with the index-based quartile rule, q3 at n = 7 would be the
        // maximum itself and mask the outlier.
        let mut records: Vec<TrialRecord> =
            (0..7).map(|i| record(&format!("f{i}.txt"), true, true)).collect();
        records.push(TrialRecord {
            compression_time_ms: 400.0,
            ..record("slow.txt", true, true)
        });

        let summary = summarize(&records);
        assert_eq!(summary.compression_time_outliers, [400.0]);
    }
}
