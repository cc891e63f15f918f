//! Two-sample t-tests for comparing group means.
//!
//! [`student_t_test`] pools the two sample variances and is the classic
//! equal-variance test; [`welch_t_test`] drops that assumption and adjusts
//! the degrees of freedom with the Welch-Satterthwaite equation. Both are
//! two-sided.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{Error, Result};
use crate::stats::{ensure_finite, mean, sample_variance};

/// Result of a two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TTestResult {
    /// The t statistic; positive when the first sample's mean is larger.
    pub statistic: f64,
    /// Degrees of freedom of the reference distribution.
    pub df: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

/// Student's t-test with pooled variance.
///
/// # Errors
///
/// - [`Error::NonFinite`] if either sample contains NaN or infinities.
/// - [`Error::InsufficientData`] unless both samples have at least two
///   observations.
/// - [`Error::DegenerateSample`] when both samples have zero variance.
pub fn student_t_test(sample_a: &[f64], sample_b: &[f64]) -> Result<TTestResult> {
    validate(sample_a, sample_b, "Student's t-test")?;

    let n1 = sample_a.len() as f64;
    let n2 = sample_b.len() as f64;
    let v1 = sample_variance(sample_a);
    let v2 = sample_variance(sample_b);

    let df = n1 + n2 - 2.0;
    let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / df;
    let se = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    if se < f64::MIN_POSITIVE {
        return Err(Error::DegenerateSample {
            context: "both samples have zero variance",
        });
    }

    let statistic = (mean(sample_a) - mean(sample_b)) / se;
    Ok(TTestResult {
        statistic,
        df,
        p_value: two_sided_p(statistic, df),
    })
}

/// Welch's t-test for unequal variances.
///
/// Same error contract as [`student_t_test`].
pub fn welch_t_test(sample_a: &[f64], sample_b: &[f64]) -> Result<TTestResult> {
    validate(sample_a, sample_b, "Welch's t-test")?;

    let n1 = sample_a.len() as f64;
    let n2 = sample_b.len() as f64;
    let r1 = sample_variance(sample_a) / n1;
    let r2 = sample_variance(sample_b) / n2;

    let se = (r1 + r2).sqrt();
    if se < f64::MIN_POSITIVE {
        return Err(Error::DegenerateSample {
            context: "both samples have zero variance",
        });
    }

    // Welch-Satterthwaite approximation.
    let df = (r1 + r2) * (r1 + r2) / (r1 * r1 / (n1 - 1.0) + r2 * r2 / (n2 - 1.0));

    let statistic = (mean(sample_a) - mean(sample_b)) / se;
    Ok(TTestResult {
        statistic,
        df,
        p_value: two_sided_p(statistic, df),
    })
}

fn validate(sample_a: &[f64], sample_b: &[f64], test: &'static str) -> Result<()> {
    ensure_finite("sample_a", sample_a)?;
    ensure_finite("sample_b", sample_b)?;
    for sample in [sample_a, sample_b] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                test,
                required: 2,
                actual: sample.len(),
            });
        }
    }
    Ok(())
}

fn two_sided_p(statistic: f64, df: f64) -> f64 {
    let dist = StudentsT::new(0.0, 1.0, df).expect("degrees of freedom are positive");
    (2.0 * (1.0 - dist.cdf(statistic.abs()))).clamp(0.0, 1.0)
}
