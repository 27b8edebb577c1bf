#![warn(missing_docs)]
//! Goudbench Statistical Engine
//!
//! Small, dependency-free statistics over per-file metric series:
//! - Means that tolerate empty series (a run can test zero files)
//! - Outlier detection via Tukey's 1.5×IQR rule with index-based quartiles

mod outliers;

pub use outliers::{Quartiles, find_outliers, quartiles};

/// Minimum series length for quartile-based outlier detection.
pub const MIN_OUTLIER_SAMPLES: usize = 4;

/// Multiplier applied to the IQR when computing outlier bounds.
pub const IQR_FENCE: f64 = 1.5;

/// Arithmetic mean of a series.
///
/// An empty series yields `0.0` rather than NaN: a run that tested no files
/// still produces a well-formed report.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_series_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_series() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < f64::EPSILON);
        assert!((mean(&[42.0]) - 42.0).abs() < f64::EPSILON);
    }
}
