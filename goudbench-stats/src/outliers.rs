//! Outlier Detection
//!
//! Tukey's 1.5×IQR rule over a metric series. Quartiles are picked by index
//! from the sorted series rather than interpolated: `q1 = sorted[floor(n/4)]`
//! and `q3 = sorted[ceil(3n/4)]` (0-indexed). This deliberately diverges from
//! the textbook interpolated definition at small sample counts; it is the
//! observed contract of the harness this crate replaces and is preserved
//! as-is.

use crate::{IQR_FENCE, MIN_OUTLIER_SAMPLES};

/// Index-based quartiles and the derived outlier fences for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// First quartile, `sorted[floor(n/4)]`.
    pub q1: f64,
    /// Third quartile, `sorted[ceil(3n/4)]`.
    pub q3: f64,
    /// Lower fence, `q1 - 1.5 * iqr`.
    pub lower_bound: f64,
    /// Upper fence, `q3 + 1.5 * iqr`.
    pub upper_bound: f64,
}

/// Compute index-based quartiles over a series.
///
/// Returns `None` for series shorter than [`MIN_OUTLIER_SAMPLES`]: with fewer
/// than four points the quartile indices collapse and the fences are
/// meaningless.
pub fn quartiles(values: &[f64]) -> Option<Quartiles> {
    let n = values.len();
    if n < MIN_OUTLIER_SAMPLES {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = sorted[n / 4];
    let q3 = sorted[(3 * n).div_ceil(4)];
    let iqr = q3 - q1;

    Some(Quartiles {
        q1,
        q3,
        lower_bound: q1 - IQR_FENCE * iqr,
        upper_bound: q3 + IQR_FENCE * iqr,
    })
}

/// Values strictly outside the 1.5×IQR fences, in ascending order.
///
/// Series with fewer than four points yield no outliers.
pub fn find_outliers(values: &[f64]) -> Vec<f64> {
    let Some(q) = quartiles(values) else {
        return Vec::new();
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    sorted
        .into_iter()
        .filter(|&v| v < q.lower_bound || v > q.upper_bound)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_yield_no_outliers() {
        assert!(find_outliers(&[]).is_empty());
        assert!(find_outliers(&[1.0, 2.0, 3.0]).is_empty());
        assert!(quartiles(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn uniform_series_has_no_outliers() {
        let series = vec![5.0; 10];
        assert!(find_outliers(&series).is_empty());
    }

    #[test]
    fn detects_high_outlier() {
        let series = vec![10.0, 11.0, 12.0, 10.5, 11.5, 12.5, 11.0, 500.0];
        let outliers = find_outliers(&series);
        assert_eq!(outliers, vec![500.0]);
    }

    #[test]
    fn detects_low_outlier() {
        let series = vec![100.0, 101.0, 99.0, 100.5, 98.5, 102.0, 0.5];
        let outliers = find_outliers(&series);
        assert_eq!(outliers, vec![0.5]);
    }

    #[test]
    fn outliers_are_sorted_ascending() {
        let series = vec![50.0, 51.0, 49.0, 50.5, 49.5, 51.5, 900.0, 0.1];
        let outliers = find_outliers(&series);
        assert_eq!(outliers, vec![0.1, 900.0]);
    }

    #[test]
    fn quartile_indices_match_index_rule() {
        // n = 8: q1 = sorted[2], q3 = sorted[6]
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let q = quartiles(&series).unwrap();
        assert_eq!(q.q1, 3.0);
        assert_eq!(q.q3, 7.0);
    }

    #[test]
    fn boundary_values_are_not_outliers() {
        // A value exactly on a fence is inside: the rule is strict.
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(find_outliers(&[1.0, 2.0, 3.0, 4.0, q.upper_bound]).is_empty());
    }
}
