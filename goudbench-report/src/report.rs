//! Report Data Structures

use serde::{Deserialize, Serialize};

/// One compress/decompress round trip over a single file.
///
/// Immutable once created; the run holds these in trial order. Field names
/// serialize in camelCase to match the results document schema consumed by
/// downstream tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialRecord {
    /// Base name of the tested file.
    pub file_name: String,
    /// Size of the UTF-8 encoded input in bytes.
    pub input_size: usize,
    /// Size of the oracle's compressed output in bytes.
    pub compressed_size: usize,
    /// Size of the decompressed output in bytes.
    pub decompressed_size: usize,
    /// `(input_size - compressed_size) / input_size * 100`.
    pub compression_ratio_percent: f64,
    /// Wall-clock compress duration, single shot.
    pub compression_time_ms: f64,
    /// Wall-clock decompress duration, single shot.
    pub decompression_time_ms: f64,
    /// Whether the decompressed text equals the original text exactly.
    pub is_lossless: bool,
    /// Whether the compressed output is strictly smaller than the input.
    pub is_smaller: bool,
}

/// Aggregate view of a run, recomputed from the trial sequence at run end.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of files that produced a trial record.
    pub files_tested: usize,
    /// Mean compression time over tested files; zero when nothing was tested.
    pub avg_compression_time_ms: f64,
    /// Mean decompression time over tested files.
    pub avg_decompression_time_ms: f64,
    /// Mean compression ratio over tested files.
    pub avg_compression_ratio_percent: f64,
    /// Compression-time values outside the IQR fences, ascending.
    pub compression_time_outliers: Vec<f64>,
    /// Decompression-time values outside the IQR fences, ascending.
    pub decompression_time_outliers: Vec<f64>,
    /// Ratio values outside the IQR fences, ascending.
    pub compression_ratio_outliers: Vec<f64>,
    /// True when every trial was lossless.
    pub all_lossless: bool,
    /// True when every trial shrank its input.
    pub all_smaller: bool,
    /// File names that failed a check, one entry per failed check.
    /// A file failing both checks appears twice.
    pub failed_files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_in_camel_case() {
        let record = TrialRecord {
            file_name: "test.txt".to_string(),
            input_size: 100,
            compressed_size: 60,
            decompressed_size: 100,
            compression_ratio_percent: 40.0,
            compression_time_ms: 1.25,
            decompression_time_ms: 0.75,
            is_lossless: true,
            is_smaller: true,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fileName\":\"test.txt\""));
        assert!(json.contains("\"compressionRatioPercent\":40.0"));
        assert!(json.contains("\"isLossless\":true"));

        let back: TrialRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
