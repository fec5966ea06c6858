//! Configuration for paired comparisons.

/// Configuration options for `PairedComparison`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Significance level for the comparison verdict (default: 0.05).
    ///
    /// A difference is reported as significant when the two-tailed p-value
    /// falls below this threshold. The graded significance label uses the
    /// conventional 0.001 / 0.01 / 0.05 cutoffs independently of `alpha`.
    pub alpha: f64,

    /// How to treat paired differences with zero variance (default:
    /// `Determinate`).
    pub degenerate_policy: DegeneratePolicy,
}

/// Policy for a difference vector whose sample variance is zero.
///
/// Element-wise identical samples are always rejected with
/// [`crate::AnalysisError::DegenerateVariance`]; this policy only governs
/// the case where every pair differs by the same nonzero constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Report the mathematically determinate outcome: a statistic of
    /// positive or negative infinity (following the sign of the mean
    /// difference) with a p-value of zero. The direction of the effect is
    /// certain even though the statistic is unbounded.
    Determinate,

    /// Reject the dataset instead. Useful when a perfectly constant
    /// difference is more plausibly a data-collection bug than a real
    /// effect.
    Strict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            degenerate_policy: DegeneratePolicy::Determinate,
        }
    }
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        Self::Determinate
    }
}
