//! Comparison result types and related structures.

use serde::{Deserialize, Serialize};

use crate::types::Condition;

/// Summary statistics for one condition's measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected, divisor N−1).
    pub std: f64,
}

/// Five-number summary of a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// Smallest measurement.
    pub min: f64,
    /// First quartile (R-7 linear interpolation).
    pub lower_quartile: f64,
    /// Median.
    pub median: f64,
    /// Third quartile (R-7 linear interpolation).
    pub upper_quartile: f64,
    /// Largest measurement.
    pub max: f64,
}

/// Outcome of a paired Student's t-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// The t-statistic. Negative when the baseline's measurements tended
    /// lower than the treatment's. Infinite when every pair differs by the
    /// same nonzero constant (determinate zero-variance case); JSON numbers
    /// cannot express that, so the JSON form is the string `"inf"` or
    /// `"-inf"`.
    #[serde(with = "non_finite_float")]
    pub statistic: f64,

    /// Two-tailed p-value (0.0 to 1.0).
    pub p_value: f64,

    /// Degrees of freedom (number of pairs minus one).
    pub df: f64,

    /// Mean of the within-pair differences, baseline − treatment.
    pub mean_difference: f64,

    /// Sample standard deviation of the within-pair differences.
    pub std_difference: f64,

    /// Standard error of the mean difference.
    pub standard_error: f64,

    /// Number of measurement pairs.
    pub pairs: usize,
}

/// Strength of the evidence against "no difference".
///
/// Grades use the conventional p-value cutoffs; the binding pass/fail
/// decision is made against the configured alpha, not these grades.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Significance {
    /// p < 0.001: very strong evidence of a real difference.
    Strong,
    /// 0.001 ≤ p < 0.01: strong evidence.
    Moderate,
    /// 0.01 ≤ p < 0.05: evidence at the conventional threshold.
    Weak,
    /// p ≥ 0.05: the data are compatible with no difference.
    NotSignificant,
}

impl Significance {
    /// Grade a two-tailed p-value.
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < 0.001 {
            Significance::Strong
        } else if p_value < 0.01 {
            Significance::Moderate
        } else if p_value < 0.05 {
            Significance::Weak
        } else {
            Significance::NotSignificant
        }
    }
}

/// Complete report from a paired comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Summary statistics for the baseline condition.
    pub baseline: SummaryStats,

    /// Summary statistics for the treatment condition.
    pub treatment: SummaryStats,

    /// The paired t-test on the within-pair differences.
    pub test: TestResult,

    /// Significance level the comparison was run at.
    pub alpha: f64,

    /// Graded strength of the evidence.
    pub significance: Significance,

    /// The condition with the lower mean runtime, reported only when the
    /// difference is significant at `alpha`.
    pub faster: Option<Condition>,
}

impl Comparison {
    /// Whether the difference is significant at the configured alpha.
    pub fn is_significant(&self) -> bool {
        self.test.p_value < self.alpha
    }
}

/// Serde adapter for a float that may be infinite.
///
/// serde_json writes non-finite floats as `null`, which would drop the
/// statistic of the determinate zero-variance outcome. Non-finite values
/// travel as the strings `"inf"`, `"-inf"` and `"nan"` instead; finite
/// values stay plain numbers.
mod non_finite_float {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number or one of \"inf\", \"-inf\" and \"nan\"",
                )),
            },
        }
    }
}
