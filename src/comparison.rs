//! Main `PairedComparison` entry point and builder.

use crate::config::{Config, DegeneratePolicy};
use crate::error::AnalysisError;
use crate::result::{Comparison, Significance};
use crate::statistics::paired_t_test_dataset;
use crate::types::{Condition, PairedDataset};

/// Main entry point for paired runtime comparison.
///
/// Use the builder pattern to configure and run comparisons.
///
/// # Example
///
/// ```
/// use benchpair::PairedComparison;
///
/// let baseline = [12.1, 11.8, 12.4, 11.9, 12.2, 12.0];
/// let treatment = [13.0, 12.7, 13.4, 12.8, 13.1, 12.9];
///
/// let comparison = PairedComparison::new()
///     .alpha(0.01)
///     .run(&baseline, &treatment)
///     .unwrap();
///
/// assert!(comparison.is_significant());
/// ```
#[derive(Debug, Clone)]
pub struct PairedComparison {
    config: Config,
}

impl Default for PairedComparison {
    fn default() -> Self {
        Self::new()
    }
}

impl PairedComparison {
    /// Create with default configuration.
    ///
    /// Uses `alpha = 0.05` and [`DegeneratePolicy::Determinate`], which
    /// resolves a constant nonzero difference to an infinite statistic
    /// rather than an error.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create with the strict degenerate-variance policy.
    ///
    /// Any zero-variance difference vector becomes an error, including
    /// the mathematically determinate constant-offset case. Use this
    /// when an infinite statistic would be awkward downstream, e.g. in
    /// records that must stay finite.
    pub fn strict() -> Self {
        Self {
            config: Config {
                degenerate_policy: DegeneratePolicy::Strict,
                ..Config::default()
            },
        }
    }

    /// Set the significance level for the verdict.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the zero-variance handling policy.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.config.degenerate_policy = policy;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a paired comparison on two equal-length measurement slices.
    ///
    /// Measurements must be index-aligned: `baseline[i]` and
    /// `treatment[i]` come from the same trial.
    ///
    /// # Arguments
    ///
    /// * `baseline` - Runtimes of the reference implementation
    /// * `treatment` - Runtimes of the candidate implementation
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`],
    /// [`AnalysisError::InsufficientData`],
    /// [`AnalysisError::NonFiniteValue`], or
    /// [`AnalysisError::DegenerateVariance`] per the configured policy.
    pub fn run(&self, baseline: &[f64], treatment: &[f64]) -> Result<Comparison, AnalysisError> {
        let data = PairedDataset::from_slices(baseline, treatment)?;
        self.analyze(&data)
    }

    /// Run a paired comparison on a pre-validated dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateVariance`] when the paired
    /// differences have zero variance and the configured policy rejects
    /// the case.
    pub fn analyze(&self, data: &PairedDataset) -> Result<Comparison, AnalysisError> {
        let baseline = data.baseline().summary()?;
        let treatment = data.treatment().summary()?;
        let test = paired_t_test_dataset(data, self.config.degenerate_policy)?;

        let significance = Significance::from_p_value(test.p_value);
        let faster = if test.p_value < self.config.alpha {
            if test.mean_difference < 0.0 {
                Some(Condition::Baseline)
            } else {
                Some(Condition::Treatment)
            }
        } else {
            None
        };

        Ok(Comparison {
            baseline,
            treatment,
            test,
            alpha: self.config.alpha,
            significance,
            faster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_default_config() {
        let comparison = PairedComparison::new();
        assert_eq!(comparison.config().alpha, 0.05);
        assert_eq!(
            comparison.config().degenerate_policy,
            DegeneratePolicy::Determinate
        );
    }

    #[test]
    fn test_comparison_builder() {
        let comparison = PairedComparison::new()
            .alpha(0.001)
            .degenerate_policy(DegeneratePolicy::Strict);

        assert_eq!(comparison.config().alpha, 0.001);
        assert_eq!(
            comparison.config().degenerate_policy,
            DegeneratePolicy::Strict
        );
    }

    #[test]
    fn test_run_assembles_full_report() {
        // p = 1 - 36 / 11^(3/2) here, a little over 0.013.
        let baseline = [1.0, 2.0, 3.0, 4.0, 5.0];
        let treatment = [2.0, 4.0, 6.0, 8.0, 10.0];

        let report = PairedComparison::new().run(&baseline, &treatment).unwrap();
        assert!((report.baseline.mean - 3.0).abs() < 1e-12);
        assert!((report.treatment.mean - 6.0).abs() < 1e-12);
        assert!((report.test.statistic + 3.0 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(report.alpha, 0.05);
        assert_eq!(report.significance, Significance::Weak);
        assert!(report.is_significant());
        assert_eq!(report.faster, Some(Condition::Baseline));
    }

    #[test]
    fn test_alpha_gates_the_verdict_not_the_grade() {
        let baseline = [1.0, 2.0, 3.0, 4.0, 5.0];
        let treatment = [2.0, 4.0, 6.0, 8.0, 10.0];

        let report = PairedComparison::new()
            .alpha(0.01)
            .run(&baseline, &treatment)
            .unwrap();
        assert!(!report.is_significant());
        assert_eq!(report.faster, None);
        // The graded strength ignores alpha.
        assert_eq!(report.significance, Significance::Weak);
    }

    #[test]
    fn test_treatment_can_be_the_faster_condition() {
        let baseline = [13.0, 12.7, 13.4, 12.8, 13.1, 12.9];
        let treatment = [12.1, 11.8, 12.4, 11.9, 12.2, 12.0];

        let report = PairedComparison::new().run(&baseline, &treatment).unwrap();
        assert!(report.test.statistic > 0.0);
        assert_eq!(report.faster, Some(Condition::Treatment));
    }

    #[test]
    fn test_analyze_accepts_prebuilt_dataset() {
        let data =
            PairedDataset::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0])
                .unwrap();
        let report = PairedComparison::new().analyze(&data).unwrap();
        assert_eq!(report.test.pairs, 5);
    }

    #[test]
    fn test_strict_preset_rejects_constant_offset() {
        let err = PairedComparison::strict()
            .run(&[5.0, 6.0, 7.0], &[2.0, 3.0, 4.0])
            .unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateVariance { identical: false });
    }

    #[test]
    fn test_determinate_offset_is_significant_and_directed() {
        let report = PairedComparison::new()
            .run(&[2.0, 3.0, 4.0], &[5.0, 6.0, 7.0])
            .unwrap();
        assert_eq!(report.test.statistic, f64::NEG_INFINITY);
        assert_eq!(report.test.p_value, 0.0);
        assert_eq!(report.significance, Significance::Strong);
        assert_eq!(report.faster, Some(Condition::Baseline));
    }
}
