//! JSON serialization for comparison reports.
//!
//! JSON has no literal for infinities, so an infinite test statistic (the
//! determinate zero-variance outcome) is written as the string `"inf"` or
//! `"-inf"` and restored on deserialization.

use crate::result::Comparison;

/// Serialize a Comparison to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// Comparison).
pub fn to_json(comparison: &Comparison) -> Result<String, serde_json::Error> {
    serde_json::to_string(comparison)
}

/// Serialize a Comparison to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// Comparison).
pub fn to_json_pretty(comparison: &Comparison) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::PairedComparison;
    use crate::types::Condition;

    fn make_comparison() -> Comparison {
        PairedComparison::new()
            .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0])
            .unwrap()
    }

    #[test]
    fn test_to_json() {
        let comparison = make_comparison();
        let json = to_json(&comparison).unwrap();
        assert!(json.contains("\"pairs\":5"));
        assert!(json.contains("\"alpha\":0.05"));
        assert!(json.contains("\"significance\":\"Weak\""));
        assert!(json.contains("\"faster\":\"Baseline\""));
    }

    #[test]
    fn test_to_json_pretty() {
        let comparison = make_comparison();
        let json = to_json_pretty(&comparison).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        assert!(json.contains("mean_difference"));
    }

    #[test]
    fn test_json_round_trip() {
        let comparison = make_comparison();
        let json = to_json(&comparison).unwrap();
        let parsed: Comparison = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.test.pairs, comparison.test.pairs);
        assert_eq!(parsed.test.statistic, comparison.test.statistic);
        assert_eq!(parsed.faster, Some(Condition::Baseline));
    }

    #[test]
    fn test_infinite_statistic_round_trips() {
        // A constant nonzero offset under the default policy yields an
        // infinite statistic, which JSON must carry rather than null.
        let comparison = PairedComparison::new()
            .run(&[5.0, 6.0, 7.0, 8.0], &[2.0, 3.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(comparison.test.statistic, f64::INFINITY);

        let json = to_json(&comparison).unwrap();
        assert!(json.contains("\"statistic\":\"inf\""));
        assert!(!json.contains("null"));

        let parsed: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.test.statistic, f64::INFINITY);
        assert_eq!(parsed.test.p_value, 0.0);
        assert_eq!(parsed.faster, Some(Condition::Treatment));

        let swapped = PairedComparison::new()
            .run(&[2.0, 3.0, 4.0, 5.0], &[5.0, 6.0, 7.0, 8.0])
            .unwrap();
        let json = to_json(&swapped).unwrap();
        assert!(json.contains("\"statistic\":\"-inf\""));
        let parsed: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.test.statistic, f64::NEG_INFINITY);
    }
}
