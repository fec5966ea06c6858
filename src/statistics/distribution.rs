//! Student-t tail probabilities via the regularized incomplete beta function.
//!
//! The paired test needs one distributional capability: turning a
//! t-statistic and its degrees of freedom into a two-tailed p-value.
//! Everything here is plain `f64` arithmetic with no lookup tables:
//! - `ln_gamma` uses the Lanczos approximation (g = 7, 9 terms)
//! - `regularized_incomplete_beta` uses the continued fraction of
//!   Press et al., *Numerical Recipes* §6.4, evaluated with the modified
//!   Lentz algorithm
//!
//! The contract of each function is the mathematical quantity it names,
//! not the particular series used to reach it.

/// Lanczos coefficients for g = 7, as tabulated by Godfrey and used in
/// the GSL implementation. Relative error is below 1e-15 over the
/// positive reals.
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural logarithm of the gamma function for positive arguments.
///
/// Uses the Lanczos approximation directly for `x >= 0.5` and the
/// reflection formula `Γ(x)Γ(1-x) = π / sin(πx)` below that, where the
/// direct sum loses accuracy.
///
/// # Arguments
///
/// * `x` - Argument, must be strictly positive
///
/// # Returns
///
/// `ln Γ(x)` accurate to roughly 1e-14 relative error.
///
/// # Panics
///
/// Panics if `x` is not strictly positive.
pub fn ln_gamma(x: f64) -> f64 {
    assert!(x > 0.0, "ln_gamma requires a positive argument");

    if x < 0.5 {
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let mut acc = LANCZOS[0];
    for (i, &coefficient) in LANCZOS.iter().enumerate().skip(1) {
        acc += coefficient / (z + i as f64);
    }

    let t = z + 7.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (z + 0.5) * t.ln() - t + acc.ln()
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// `I_x(a, b)` is the CDF of the Beta(a, b) distribution evaluated at
/// `x`. The continued fraction converges fastest for
/// `x < (a + 1) / (a + b + 2)`; above that threshold the symmetry
/// `I_x(a, b) = 1 - I_{1-x}(b, a)` is applied first.
///
/// # Arguments
///
/// * `a` - First shape parameter, must be positive
/// * `b` - Second shape parameter, must be positive
/// * `x` - Evaluation point in [0, 1]
///
/// # Returns
///
/// `I_x(a, b)` in [0, 1].
///
/// # Panics
///
/// Panics if a shape parameter is not positive or `x` is outside [0, 1].
pub fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    assert!(
        a > 0.0 && b > 0.0,
        "incomplete beta shape parameters must be positive"
    );
    assert!(
        (0.0..=1.0).contains(&x),
        "incomplete beta argument must be in [0, 1]"
    );

    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }

    // Prefactor x^a (1-x)^b / B(a, b), computed in log space. It is
    // symmetric under (a, b, x) -> (b, a, 1-x), so both branches share it.
    let ln_front =
        ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();

    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued fraction for the incomplete beta function, evaluated with
/// the modified Lentz algorithm (Press et al., *Numerical Recipes* §6.4).
///
/// Callers must arrange `x < (a + 1) / (a + b + 2)`; in that region the
/// fraction converges well inside the iteration budget for every degrees
/// of freedom this crate produces. If the budget is ever exhausted the
/// best available approximant is returned.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITERATIONS: usize = 500;
    const EPS: f64 = 1e-15;
    // Floor to keep intermediate denominators away from zero.
    const FPMIN: f64 = 1e-300;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < FPMIN {
        d = FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m_f = m as f64;
        let m2 = 2.0 * m_f;

        // Even step of the recurrence.
        let numerator = m_f * (b - m_f) * x / ((qam + m2) * (a + m2));
        d = 1.0 + numerator * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + numerator / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step.
        let numerator = -(a + m_f) * (qab + m_f) * x / ((a + m2) * (qap + m2));
        d = 1.0 + numerator * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + numerator / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }

    h
}

/// Two-tailed p-value for a t-statistic.
///
/// Evaluates `P(|T| >= |t|)` for `T` following a Student-t distribution
/// with `df` degrees of freedom, using the standard tail identity
/// (Press et al., *Numerical Recipes* §6.4):
///
/// ```text
/// P(|T| >= |t|) = I_x(df / 2, 1 / 2)    with x = df / (df + t^2)
/// ```
///
/// # Arguments
///
/// * `t` - Observed t-statistic; infinite values yield a p-value of zero
/// * `df` - Degrees of freedom, must be positive
///
/// # Returns
///
/// The two-tailed tail probability in [0, 1].
///
/// # Panics
///
/// Panics if `df` is not strictly positive or `t` is NaN.
pub fn two_tailed_p_value(t: f64, df: f64) -> f64 {
    assert!(df > 0.0, "degrees of freedom must be positive");
    assert!(!t.is_nan(), "t-statistic must not be NaN");

    let x = df / (df + t * t);
    regularized_incomplete_beta(0.5 * df, 0.5, x)
}

/// Cumulative distribution function of the Student-t distribution.
///
/// # Arguments
///
/// * `t` - Evaluation point; infinite values yield exactly 0 or 1
/// * `df` - Degrees of freedom, must be positive
///
/// # Returns
///
/// `P(T <= t)` in [0, 1].
///
/// # Panics
///
/// Panics if `df` is not strictly positive or `t` is NaN.
pub fn student_t_cdf(t: f64, df: f64) -> f64 {
    let tail = two_tailed_p_value(t, df);
    if t >= 0.0 {
        1.0 - 0.5 * tail
    } else {
        0.5 * tail
    }
}
