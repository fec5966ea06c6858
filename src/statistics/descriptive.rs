//! Descriptive statistics: means, sample dispersion, and quantiles.
//!
//! All dispersion measures are Bessel-corrected (divisor N - 1), matching
//! the convention of the paired test these summaries sit next to.
//! Quantiles use the R-7 definition (linear interpolation between order
//! statistics), the default of most statistical environments.

use crate::error::AnalysisError;
use crate::result::{FiveNumberSummary, SummaryStats};
use crate::types::check_finite;

/// Arithmetic mean of a slice.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "cannot compute the mean of an empty slice");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with Bessel's correction (divisor N - 1).
///
/// Computed with the two-pass formula, which is numerically stable for
/// the in-memory datasets this crate handles.
///
/// # Panics
///
/// Panics if `values` has fewer than two elements.
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    assert!(n >= 2, "sample variance requires at least two values");

    let center = mean(values);
    let sum_squares: f64 = values.iter().map(|&v| (v - center).powi(2)).sum();
    sum_squares / (n - 1) as f64
}

/// Sample standard deviation (square root of [`sample_variance`]).
///
/// # Panics
///
/// Panics if `values` has fewer than two elements.
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Mean and sample standard deviation of a measurement sequence.
///
/// This is the validated entry point over raw slices; the panicking
/// helpers above assume their contracts instead.
///
/// # Errors
///
/// Returns [`AnalysisError::NonFiniteValue`] if any value is NaN or
/// infinite, and [`AnalysisError::InsufficientData`] for fewer than two
/// values, where the standard deviation is undefined.
pub fn summarize(values: &[f64]) -> Result<SummaryStats, AnalysisError> {
    check_finite(values, None)?;
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }
    Ok(SummaryStats {
        mean: mean(values),
        std: sample_std(values),
    })
}

/// Compute a single quantile from a mutable slice.
///
/// Uses `select_nth_unstable_by` for O(n) expected time; the slice is
/// partially reordered as a side effect. The quantile follows the R-7
/// definition with linear interpolation between order statistics.
///
/// # Arguments
///
/// * `data` - Mutable slice of measurements (will be partially reordered)
/// * `p` - Quantile probability in [0, 1]
///
/// # Panics
///
/// Panics if `data` is empty or `p` is outside [0, 1].
pub fn quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "cannot compute a quantile of an empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        let (_, &mut max, _) = data.select_nth_unstable_by(n - 1, |a, b| a.total_cmp(b));
        return max;
    }

    let (_, &mut lower, upper) = data.select_nth_unstable_by(h_floor, |a, b| a.total_cmp(b));
    if h_frac == 0.0 {
        return lower;
    }

    // The next order statistic is the minimum of the upper partition.
    let upper_min = upper
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(lower);

    lower + h_frac * (upper_min - lower)
}

/// Compute a quantile from data that is already sorted ascending.
///
/// Shares the R-7 definition with [`quantile`]; use this form when
/// several quantiles are read from one sorted buffer.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 1]. The caller must
/// ensure the data is sorted; no verification is performed.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "cannot compute a quantile of an empty slice"
    );
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

/// Minimum, quartiles, and maximum of a measurement sequence.
///
/// Sorts a scratch copy once and reads all five order statistics from it.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn five_number_summary(values: &[f64]) -> FiveNumberSummary {
    assert!(
        !values.is_empty(),
        "cannot summarize an empty slice"
    );

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    FiveNumberSummary {
        min: sorted[0],
        lower_quartile: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        upper_quartile: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}
