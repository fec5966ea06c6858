//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{Comparison, Significance};

/// Format a Comparison for human-readable terminal output.
///
/// Uses ANSI colors; the returned string ends with a trailing newline
/// and is meant to be printed as-is.
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("benchpair\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Pairs: {}\n", comparison.test.pairs));
    output.push_str(&format!(
        "  Baseline:  mean {:.4}, std {:.4}\n",
        comparison.baseline.mean, comparison.baseline.std
    ));
    output.push_str(&format!(
        "  Treatment: mean {:.4}, std {:.4}\n",
        comparison.treatment.mean, comparison.treatment.std
    ));
    output.push('\n');

    if comparison.is_significant() {
        output.push_str(&format!(
            "  {}\n\n",
            "\u{26A0} Significant runtime difference".yellow().bold()
        ));
    } else {
        output.push_str(&format!(
            "  {}\n\n",
            "\u{2713} No significant difference".green().bold()
        ));
    }

    output.push_str(&format!(
        "    Mean difference: {:+.4} (baseline - treatment)\n",
        comparison.test.mean_difference
    ));
    output.push_str(&format!(
        "    t = {:+.3}, df = {:.0}\n",
        comparison.test.statistic, comparison.test.df
    ));
    output.push_str(&format!(
        "    p = {} (alpha {})\n",
        format_p_value(comparison.test.p_value),
        comparison.alpha
    ));
    if !comparison.test.statistic.is_finite() {
        output.push_str("    (every pair differs by the same constant; direction is certain)\n");
    }
    output.push_str(&format!(
        "    Evidence: {}\n",
        format_significance(comparison.significance)
    ));
    if let Some(faster) = comparison.faster {
        output.push_str(&format!(
            "    Faster: {}\n",
            faster.to_string().green().bold()
        ));
    }
    output.push('\n');

    output.push_str(&sep);
    output.push('\n');

    output.push_str(
        "Note: Evidence grades use conventional cutoffs; the verdict uses the configured alpha.\n",
    );

    output
}

/// Format a p-value for display.
///
/// Very small values switch to scientific notation so they do not
/// round to a misleading 0.0000.
fn format_p_value(p_value: f64) -> String {
    if p_value == 0.0 {
        "0".to_string()
    } else if p_value < 1e-4 {
        format!("{:.2e}", p_value)
    } else {
        format!("{:.4}", p_value)
    }
}

/// Format a Significance grade for display.
fn format_significance(significance: Significance) -> String {
    match significance {
        Significance::Strong => "Strong (p < 0.001)".red().to_string(),
        Significance::Moderate => "Moderate (p < 0.01)".yellow().to_string(),
        Significance::Weak => "Weak (p < 0.05)".yellow().to_string(),
        Significance::NotSignificant => "Not significant".green().to_string(),
    }
}
