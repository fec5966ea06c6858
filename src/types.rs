//! Sample types and input validation.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::result::{FiveNumberSummary, SummaryStats};
use crate::statistics;

/// Condition label for the two sides of a paired comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// The reference implementation whose timings anchor the comparison.
    Baseline,
    /// The candidate implementation compared against the baseline.
    Treatment,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Baseline => write!(f, "baseline"),
            Condition::Treatment => write!(f, "treatment"),
        }
    }
}

/// A validated sequence of runtime measurements for one condition.
///
/// Construction enforces the invariants the numeric core relies on:
/// the sequence is non-empty and every value is finite. Ordering is
/// preserved because position carries meaning in paired data (the i-th
/// measurement of each condition comes from the same trial).
#[derive(Debug, Clone)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Create a sample from raw measurements.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NonFiniteValue`] if any measurement is NaN
    /// or infinite, and [`AnalysisError::InsufficientData`] if `values`
    /// is empty.
    pub fn new(values: Vec<f64>) -> Result<Self, AnalysisError> {
        check_finite(&values, None)?;
        if values.is_empty() {
            return Err(AnalysisError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        Ok(Self { values })
    }

    /// The measurements in trial order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample holds no measurements. Always `false` for a
    /// constructed sample; provided for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the measurements.
    pub fn mean(&self) -> f64 {
        statistics::mean(&self.values)
    }

    /// Mean and sample standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientData`] for a single-element
    /// sample, where the standard deviation is undefined.
    pub fn summary(&self) -> Result<SummaryStats, AnalysisError> {
        statistics::summarize(&self.values)
    }

    /// Minimum, quartiles, and maximum of the measurements.
    pub fn five_number_summary(&self) -> FiveNumberSummary {
        statistics::five_number_summary(&self.values)
    }
}

/// Two equal-length samples measured over the same trials.
///
/// The index-wise correspondence between the samples is the caller's
/// contract: `baseline.values()[i]` and `treatment.values()[i]` must come
/// from the same trial. The constructor enforces the shape invariants
/// (equal lengths, at least two pairs).
#[derive(Debug, Clone)]
pub struct PairedDataset {
    baseline: Sample,
    treatment: Sample,
}

impl PairedDataset {
    /// Pair two validated samples.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`] if the samples differ in
    /// length and [`AnalysisError::InsufficientData`] if fewer than two
    /// pairs are available.
    pub fn new(baseline: Sample, treatment: Sample) -> Result<Self, AnalysisError> {
        if baseline.len() != treatment.len() {
            return Err(AnalysisError::LengthMismatch {
                baseline: baseline.len(),
                treatment: treatment.len(),
            });
        }
        if baseline.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                required: 2,
                actual: baseline.len(),
            });
        }
        Ok(Self {
            baseline,
            treatment,
        })
    }

    /// Build a dataset directly from raw measurement slices.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`] for unequal lengths,
    /// [`AnalysisError::InsufficientData`] for fewer than two pairs, and
    /// [`AnalysisError::NonFiniteValue`] (tagged with the offending
    /// condition and index) for NaN or infinite measurements.
    pub fn from_slices(baseline: &[f64], treatment: &[f64]) -> Result<Self, AnalysisError> {
        if baseline.len() != treatment.len() {
            return Err(AnalysisError::LengthMismatch {
                baseline: baseline.len(),
                treatment: treatment.len(),
            });
        }
        if baseline.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                required: 2,
                actual: baseline.len(),
            });
        }
        check_finite(baseline, Some(Condition::Baseline))?;
        check_finite(treatment, Some(Condition::Treatment))?;
        Ok(Self {
            baseline: Sample {
                values: baseline.to_vec(),
            },
            treatment: Sample {
                values: treatment.to_vec(),
            },
        })
    }

    /// The baseline sample.
    pub fn baseline(&self) -> &Sample {
        &self.baseline
    }

    /// The treatment sample.
    pub fn treatment(&self) -> &Sample {
        &self.treatment
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.baseline.len()
    }

    /// Whether the dataset holds no pairs. Always `false` for a
    /// constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }

    /// Within-pair differences, `baseline[i] - treatment[i]`.
    pub fn differences(&self) -> Vec<f64> {
        self.baseline
            .values
            .iter()
            .zip(self.treatment.values.iter())
            .map(|(b, t)| b - t)
            .collect()
    }
}

/// Reject NaN and infinite values, reporting the first offender.
pub(crate) fn check_finite(
    values: &[f64],
    condition: Option<Condition>,
) -> Result<(), AnalysisError> {
    for (index, value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(AnalysisError::NonFiniteValue { condition, index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rejects_empty() {
        let err = Sample::new(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_sample_rejects_nan() {
        let err = Sample::new(vec![1.0, f64::NAN, 3.0]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NonFiniteValue {
                condition: None,
                index: 1
            }
        );
    }

    #[test]
    fn test_sample_rejects_infinity() {
        let err = Sample::new(vec![f64::INFINITY]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NonFiniteValue {
                condition: None,
                index: 0
            }
        );
    }

    #[test]
    fn test_sample_accessors() {
        let sample = Sample::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(sample.len(), 3);
        assert!(!sample.is_empty());
        assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
        assert!((sample.mean() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_dataset_rejects_length_mismatch() {
        let err = PairedDataset::from_slices(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::LengthMismatch {
                baseline: 3,
                treatment: 2
            }
        );
    }

    #[test]
    fn test_dataset_rejects_single_pair() {
        let err = PairedDataset::from_slices(&[5.0], &[3.0]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_dataset_tags_non_finite_condition() {
        let err =
            PairedDataset::from_slices(&[1.0, 2.0, 3.0], &[1.0, 2.0, f64::NEG_INFINITY])
                .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NonFiniteValue {
                condition: Some(Condition::Treatment),
                index: 2
            }
        );
    }

    #[test]
    fn test_differences_follow_baseline_minus_treatment() {
        let data = PairedDataset::from_slices(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(data.differences(), vec![-1.0, -2.0, -3.0]);
        assert_eq!(data.len(), 3);
    }
}
