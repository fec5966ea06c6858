//! Error types for paired comparisons.

use crate::types::Condition;

/// Error type for analysis failures.
///
/// Every operation in this crate validates its inputs up front and reports
/// the first violation it finds through one of these variants. No partial
/// results are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The two samples do not have the same number of measurements.
    LengthMismatch {
        /// Length of the baseline sample.
        baseline: usize,
        /// Length of the treatment sample.
        treatment: usize,
    },

    /// Fewer measurements than the operation requires.
    ///
    /// Paired tests and summary statistics need at least two values;
    /// constructing a [`crate::Sample`] needs at least one.
    InsufficientData {
        /// Minimum number of measurements the operation needs.
        required: usize,
        /// Number of measurements actually provided.
        actual: usize,
    },

    /// The paired differences have zero variance.
    ///
    /// `identical` is `true` when the two samples agree element-wise
    /// (there is no difference to test) and `false` when every pair
    /// differs by the same nonzero constant. The latter is only reported
    /// under [`crate::DegeneratePolicy::Strict`]; the default policy
    /// resolves it to an infinite statistic instead.
    DegenerateVariance {
        /// Whether the samples are element-wise identical.
        identical: bool,
    },

    /// A measurement was NaN or infinite.
    ///
    /// `condition` names the offending input for paired operations and is
    /// `None` for single-sample operations.
    NonFiniteValue {
        /// Which input sequence held the value, when known.
        condition: Option<Condition>,
        /// Zero-based position of the offending value.
        index: usize,
    },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::LengthMismatch {
                baseline,
                treatment,
            } => write!(
                f,
                "paired samples differ in length: baseline has {} measurements, treatment has {}",
                baseline, treatment
            ),
            AnalysisError::InsufficientData { required, actual } => write!(
                f,
                "not enough measurements: need at least {}, got {}",
                required, actual
            ),
            AnalysisError::DegenerateVariance { identical: true } => write!(
                f,
                "paired differences have zero variance: the samples are element-wise identical"
            ),
            AnalysisError::DegenerateVariance { identical: false } => write!(
                f,
                "paired differences have zero variance: every pair differs by the same constant"
            ),
            AnalysisError::NonFiniteValue {
                condition: Some(condition),
                index,
            } => write!(
                f,
                "non-finite measurement in the {} sample at index {}",
                condition, index
            ),
            AnalysisError::NonFiniteValue {
                condition: None,
                index,
            } => write!(f, "non-finite measurement at index {}", index),
        }
    }
}

impl std::error::Error for AnalysisError {}
