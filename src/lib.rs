//! # benchpair
//!
//! Paired statistical comparison of two algorithms' runtime measurements.
//!
//! Given two equal-length measurement sequences taken over the same trials
//! (same inputs, same order), this crate answers whether the observed
//! runtime difference is real or noise, outputting:
//! - Per-condition summary statistics (mean, standard deviation, quartiles)
//! - A paired Student's t-test on the within-pair differences
//! - A two-tailed p-value with a verdict at a configurable alpha
//! - Which condition was faster, when the difference is significant
//!
//! Pairing matters: per-trial noise that hits both conditions equally
//! (cache state, scheduler interference, input difficulty) cancels in the
//! differences, making the test far more sensitive than comparing the two
//! samples independently.
//!
//! ## Quick Start
//!
//! ```
//! use benchpair::compare;
//!
//! // Per-trial runtimes, index-aligned across the two implementations.
//! let quicksort = [12.1, 11.8, 12.4, 11.9, 12.2, 12.0];
//! let mergesort = [13.0, 12.7, 13.4, 12.8, 13.1, 12.9];
//!
//! let comparison = compare(&quicksort, &mergesort).unwrap();
//! println!("{}", benchpair::output::format_comparison(&comparison));
//! assert!(comparison.is_significant());
//! ```
//!
//! All operations are pure in-memory arithmetic: no global state, no I/O,
//! no threads. Every function is reentrant.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod comparison;
mod config;
mod error;
mod result;
mod types;

// Functional modules
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use comparison::PairedComparison;
pub use config::{Config, DegeneratePolicy};
pub use error::AnalysisError;
pub use result::{Comparison, FiveNumberSummary, Significance, SummaryStats, TestResult};
pub use statistics::{paired_t_test, summarize};
pub use types::{Condition, PairedDataset, Sample};

/// Convenience function for a paired comparison with default configuration.
///
/// Equivalent to `PairedComparison::new().run(baseline, treatment)`:
/// alpha 0.05, constant nonzero differences resolved to an infinite
/// statistic rather than an error.
///
/// # Arguments
///
/// * `baseline` - Runtimes of the reference implementation, in trial order
/// * `treatment` - Runtimes of the candidate implementation, same trial order
///
/// # Errors
///
/// Returns [`AnalysisError::LengthMismatch`],
/// [`AnalysisError::InsufficientData`], [`AnalysisError::NonFiniteValue`],
/// or [`AnalysisError::DegenerateVariance`] for element-wise identical
/// inputs.
pub fn compare(baseline: &[f64], treatment: &[f64]) -> Result<Comparison, AnalysisError> {
    PairedComparison::new().run(baseline, treatment)
}
