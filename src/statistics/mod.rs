//! Statistical methods for paired runtime comparison.
//!
//! This module provides the numerical core of the crate:
//! - Descriptive statistics and R-7 quantile computation
//! - The paired Student's t-test on within-pair differences
//! - Student's t distribution functions for two-tailed p-values

mod descriptive;
mod distribution;
mod ttest;

pub use descriptive::{
    five_number_summary, mean, quantile, quantile_sorted, sample_std, sample_variance, summarize,
};
pub use distribution::{ln_gamma, regularized_incomplete_beta, student_t_cdf, two_tailed_p_value};
pub use ttest::{paired_t_test, paired_t_test_dataset};
