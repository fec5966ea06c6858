//! Paired (repeated-measures) Student's t-test.
//!
//! The test operates on within-pair differences, so per-trial noise that
//! hits both conditions equally (cache state, scheduler interference,
//! input difficulty) cancels before any statistic is computed. That is
//! what makes the paired design more sensitive than comparing the two
//! samples independently.

use crate::config::DegeneratePolicy;
use crate::error::AnalysisError;
use crate::result::TestResult;
use crate::statistics::distribution::two_tailed_p_value;
use crate::statistics::{mean, sample_std};
use crate::types::PairedDataset;

/// Run a paired t-test on two equal-length measurement slices.
///
/// For differences `d_i = baseline_i - treatment_i`:
///
/// ```text
/// t  = mean(d) / (std(d) / sqrt(N))      with std Bessel-corrected
/// df = N - 1
/// p  = P(|T_df| >= |t|)                  (two-tailed)
/// ```
///
/// A negative statistic means the baseline's measurements tended lower.
/// Zero-variance differences are handled under
/// [`DegeneratePolicy::Determinate`]; use [`paired_t_test_dataset`] to
/// choose the policy explicitly.
///
/// # Arguments
///
/// * `baseline` - Measurements of the first condition, in trial order
/// * `treatment` - Measurements of the second condition, same trial order
///
/// # Errors
///
/// Returns [`AnalysisError::LengthMismatch`],
/// [`AnalysisError::InsufficientData`] (fewer than two pairs),
/// [`AnalysisError::NonFiniteValue`], or
/// [`AnalysisError::DegenerateVariance`] for element-wise identical
/// samples.
pub fn paired_t_test(baseline: &[f64], treatment: &[f64]) -> Result<TestResult, AnalysisError> {
    let data = PairedDataset::from_slices(baseline, treatment)?;
    paired_t_test_dataset(&data, DegeneratePolicy::Determinate)
}

/// Run a paired t-test on a pre-validated dataset.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateVariance`] when the paired
/// differences have zero variance: always for element-wise identical
/// samples, and additionally for a constant nonzero difference under
/// [`DegeneratePolicy::Strict`]. Under
/// [`DegeneratePolicy::Determinate`] the constant nonzero case yields
/// `statistic = ±inf` and `p_value = 0.0` instead.
pub fn paired_t_test_dataset(
    data: &PairedDataset,
    policy: DegeneratePolicy,
) -> Result<TestResult, AnalysisError> {
    let differences = data.differences();
    let pairs = differences.len();
    let df = (pairs - 1) as f64;

    let mean_difference = mean(&differences);
    let std_difference = sample_std(&differences);

    if std_difference == 0.0 {
        if mean_difference == 0.0 {
            return Err(AnalysisError::DegenerateVariance { identical: true });
        }
        if policy == DegeneratePolicy::Strict {
            return Err(AnalysisError::DegenerateVariance { identical: false });
        }
        // Every pair differs by the same nonzero constant: the direction
        // is certain, the statistic unbounded.
        let statistic = if mean_difference > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
        return Ok(TestResult {
            statistic,
            p_value: 0.0,
            df,
            mean_difference,
            std_difference,
            standard_error: 0.0,
            pairs,
        });
    }

    let standard_error = std_difference / (pairs as f64).sqrt();
    let statistic = mean_difference / standard_error;
    let p_value = two_tailed_p_value(statistic, df);

    Ok(TestResult {
        statistic,
        p_value,
        df,
        mean_difference,
        std_difference,
        standard_error,
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        // d = [-1, -2, -3, -4, -5]: mean -3, variance 2.5, t = -3 sqrt(2),
        // and the df = 4 tail has the closed form 1 - 36 / 11^(3/2).
        let baseline = [1.0, 2.0, 3.0, 4.0, 5.0];
        let treatment = [2.0, 4.0, 6.0, 8.0, 10.0];

        let result = paired_t_test(&baseline, &treatment).unwrap();
        assert_eq!(result.pairs, 5);
        assert_eq!(result.df, 4.0);
        assert!((result.mean_difference + 3.0).abs() < 1e-12);
        assert!((result.std_difference - 2.5_f64.sqrt()).abs() < 1e-12);
        assert!((result.standard_error - 0.5_f64.sqrt()).abs() < 1e-12);
        assert!((result.statistic + 3.0 * 2.0_f64.sqrt()).abs() < 1e-12);

        let expected_p = 1.0 - 36.0 / (11.0 * 11.0_f64.sqrt());
        assert!((result.p_value - expected_p).abs() < 1e-12);
    }

    #[test]
    fn test_sign_follows_baseline_minus_treatment() {
        // Baseline lower by about 2 with per-pair jitter: negative t.
        let baseline = [10.1, 9.8, 10.3, 9.9, 10.0, 10.2];
        let treatment = [12.0, 11.9, 12.3, 12.1, 11.8, 12.4];

        let result = paired_t_test(&baseline, &treatment).unwrap();
        assert!(result.statistic < 0.0);
        assert!(result.mean_difference < 0.0);
    }

    #[test]
    fn test_swapping_inputs_negates_statistic() {
        let a = [5.2, 6.1, 4.9, 5.8, 6.4, 5.5];
        let b = [5.9, 6.0, 5.6, 6.3, 6.1, 6.2];

        let forward = paired_t_test(&a, &b).unwrap();
        let reverse = paired_t_test(&b, &a).unwrap();
        assert!((forward.statistic + reverse.statistic).abs() < 1e-12);
        assert_eq!(forward.p_value, reverse.p_value);
    }

    #[test]
    fn test_identical_samples_are_degenerate() {
        let values = [3.0, 4.0, 5.0, 6.0];
        let err = paired_t_test(&values, &values).unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateVariance { identical: true });
    }

    #[test]
    fn test_constant_offset_is_determinate_by_default() {
        let baseline = [5.0, 6.0, 7.0, 8.0];
        let treatment = [2.0, 3.0, 4.0, 5.0];

        let result = paired_t_test(&baseline, &treatment).unwrap();
        assert_eq!(result.statistic, f64::INFINITY);
        assert_eq!(result.p_value, 0.0);
        assert!((result.mean_difference - 3.0).abs() < 1e-12);
        assert_eq!(result.std_difference, 0.0);

        let reversed = paired_t_test(&treatment, &baseline).unwrap();
        assert_eq!(reversed.statistic, f64::NEG_INFINITY);
        assert_eq!(reversed.p_value, 0.0);
    }

    #[test]
    fn test_constant_offset_rejected_under_strict_policy() {
        let data =
            PairedDataset::from_slices(&[5.0, 6.0, 7.0], &[2.0, 3.0, 4.0]).unwrap();
        let err = paired_t_test_dataset(&data, DegeneratePolicy::Strict).unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateVariance { identical: false });
    }

    #[test]
    fn test_input_validation_propagates() {
        assert_eq!(
            paired_t_test(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err(),
            AnalysisError::LengthMismatch {
                baseline: 3,
                treatment: 2
            }
        );
        assert_eq!(
            paired_t_test(&[5.0], &[3.0]).unwrap_err(),
            AnalysisError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }
}
