//! Adaptive two-group comparison.
//!
//! [`compare`] checks each group for normality with the Shapiro-Wilk test
//! and then picks the comparison test to match: Student's t-test when both
//! groups look normal, the Mann-Whitney U test otherwise. The same `alpha`
//! drives the normality cut and the final significance verdict.

use tracing::debug;

use crate::error::{Error, Result};
use crate::stats::{
    ensure_alpha, ensure_finite, mann_whitney_u, mean, shapiro_wilk, student_t_test,
    NormalityVerdict,
};

/// Conventional significance level for both the normality screen and the
/// final verdict.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Samples smaller than this cannot be screened for normality.
const MIN_GROUP_SIZE: usize = 3;

/// Which family of test [`compare`] selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestChoice {
    /// Both groups passed the normality screen; Student's t-test was used.
    Parametric,
    /// At least one group failed the screen; Mann-Whitney U was used.
    Nonparametric,
}

impl TestChoice {
    /// Name of the underlying test.
    #[must_use]
    pub const fn test_name(self) -> &'static str {
        match self {
            Self::Parametric => "Student's t-test",
            Self::Nonparametric => "Mann-Whitney U",
        }
    }
}

impl std::fmt::Display for TestChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parametric => write!(f, "parametric"),
            Self::Nonparametric => write!(f, "nonparametric"),
        }
    }
}

/// Full outcome of an adaptive comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Which test family was selected.
    pub choice: TestChoice,
    /// Test statistic: t for parametric, U for nonparametric.
    pub statistic: f64,
    /// Two-sided p-value of the selected test.
    pub p_value: f64,
    /// True when `p_value < alpha`.
    pub significant: bool,
    /// Significance level the comparison was run at.
    pub alpha: f64,
    /// Normality screen of the first group.
    pub normality_a: NormalityVerdict,
    /// Normality screen of the second group.
    pub normality_b: NormalityVerdict,
    /// Arithmetic mean of the first group.
    pub mean_a: f64,
    /// Arithmetic mean of the second group.
    pub mean_b: f64,
}

impl Comparison {
    /// One-line human-readable account of the outcome.
    #[must_use]
    pub fn summary(&self) -> String {
        let test = self.choice.test_name();
        if self.significant {
            let direction = if self.mean_a > self.mean_b {
                "higher"
            } else {
                "lower"
            };
            format!(
                "{test}: significant difference (p = {:.4}, alpha = {}); \
                 first group mean {:.4} is {direction} than second group mean {:.4}",
                self.p_value, self.alpha, self.mean_a, self.mean_b
            )
        } else {
            format!(
                "{test}: no significant difference (p = {:.4}, alpha = {}); \
                 first group mean {:.4} vs second group mean {:.4}",
                self.p_value, self.alpha, self.mean_a, self.mean_b
            )
        }
    }
}

/// Compare two independent groups, choosing the test from the data.
///
/// Each group is screened with [`shapiro_wilk`] at `alpha`; a group counts
/// as normal only when its p-value strictly exceeds `alpha`. Both normal
/// selects [`student_t_test`], anything else [`mann_whitney_u`]. The call
/// is pure: the same inputs always produce the same [`Comparison`].
///
/// # Errors
///
/// - [`Error::InvalidAlpha`] unless `alpha` lies in (0, 1).
/// - [`Error::NonFinite`] if either group contains NaN or infinities.
/// - [`Error::InsufficientData`] unless both groups have at least three
///   observations.
/// - [`Error::SampleTooLarge`] when a group exceeds the Shapiro-Wilk
///   ceiling of 5000.
/// - [`Error::DegenerateSample`] when a group's observations are all
///   identical.
///
/// # Examples
///
/// ```
/// use sello_viz::stats::{compare, TestChoice, DEFAULT_ALPHA};
///
/// let light = [12.1, 11.8, 12.4, 12.0, 11.9, 12.2];
/// let heavy = [14.0, 13.8, 14.3, 14.1, 13.9, 14.2];
/// let result = compare(&light, &heavy, DEFAULT_ALPHA)?;
/// assert_eq!(result.choice, TestChoice::Parametric);
/// assert!(result.significant);
/// # Ok::<(), sello_viz::Error>(())
/// ```
pub fn compare(sample_a: &[f64], sample_b: &[f64], alpha: f64) -> Result<Comparison> {
    ensure_alpha(alpha)?;
    ensure_finite("sample_a", sample_a)?;
    ensure_finite("sample_b", sample_b)?;
    for sample in [sample_a, sample_b] {
        if sample.len() < MIN_GROUP_SIZE {
            return Err(Error::InsufficientData {
                test: "group comparison",
                required: MIN_GROUP_SIZE,
                actual: sample.len(),
            });
        }
    }

    let normality_a = shapiro_wilk(sample_a, alpha)?;
    let normality_b = shapiro_wilk(sample_b, alpha)?;

    let (choice, statistic, p_value) = if normality_a.normal && normality_b.normal {
        let t = student_t_test(sample_a, sample_b)?;
        (TestChoice::Parametric, t.statistic, t.p_value)
    } else {
        let u = mann_whitney_u(sample_a, sample_b)?;
        (TestChoice::Nonparametric, u.statistic, u.p_value)
    };

    debug!(
        choice = %choice,
        normal_a = normality_a.normal,
        normal_b = normality_b.normal,
        p_value,
        "selected comparison test"
    );

    Ok(Comparison {
        choice,
        statistic,
        p_value,
        significant: p_value < alpha,
        alpha,
        normality_a,
        normality_b,
        mean_a: mean(sample_a),
        mean_b: mean(sample_b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::standard_normal;
    use approx::assert_relative_eq;
    use statrs::distribution::ContinuousCDF;

    fn normal_quantiles(n: usize) -> Vec<f64> {
        let dist = standard_normal();
        (1..=n)
            .map(|i| dist.inverse_cdf((i as f64 - 0.5) / n as f64))
            .collect()
    }

    #[test]
    fn test_outlier_group_selects_nonparametric() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 2.0, 3.0, 4.0, 100.0];
        let r = compare(&a, &b, 0.05).unwrap();
        assert_eq!(r.choice, TestChoice::Nonparametric);
        assert!(r.normality_a.normal);
        assert!(!r.normality_b.normal);
        assert!(!r.significant);
    }

    #[test]
    fn test_normal_groups_select_parametric() {
        let a = normal_quantiles(20);
        let b: Vec<f64> = a.iter().map(|v| v + 5.0).collect();
        let r = compare(&a, &b, 0.05).unwrap();
        assert_eq!(r.choice, TestChoice::Parametric);
        assert!(r.significant);
        assert!(r.p_value < 0.01, "p = {}", r.p_value);
        assert!(r.mean_a < r.mean_b);
    }

    #[test]
    fn test_skewed_groups_select_nonparametric() {
        let a = [0.1, 0.2, 0.3, 0.5, 0.8, 1.3, 2.1, 3.4, 5.5, 8.9, 14.4, 23.3];
        let b: Vec<f64> = a.iter().map(|v| v * 2.0).collect();
        let r = compare(&a, &b, 0.05).unwrap();
        assert_eq!(r.choice, TestChoice::Nonparametric);
    }

    #[test]
    fn test_parametric_statistic_matches_t_test() {
        let a = normal_quantiles(15);
        let b: Vec<f64> = a.iter().map(|v| v + 1.0).collect();
        let r = compare(&a, &b, 0.05).unwrap();
        let t = student_t_test(&a, &b).unwrap();
        assert_relative_eq!(r.statistic, t.statistic);
        assert_relative_eq!(r.p_value, t.p_value);
        assert_relative_eq!(r.mean_a, mean(&a));
    }

    #[test]
    fn test_nonparametric_statistic_matches_u_test() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 2.0, 3.0, 4.0, 100.0];
        let r = compare(&a, &b, 0.05).unwrap();
        let u = mann_whitney_u(&a, &b).unwrap();
        assert_relative_eq!(r.statistic, u.statistic);
        assert_relative_eq!(r.p_value, u.p_value);
    }

    #[test]
    fn test_deterministic() {
        let a = [3.2, 1.4, 2.8, 4.4, 2.2, 3.9];
        let b = [5.1, 4.2, 6.3, 5.8, 4.9, 6.1];
        assert_eq!(
            compare(&a, &b, 0.05).unwrap(),
            compare(&a, &b, 0.05).unwrap()
        );
    }

    #[test]
    fn test_default_alpha_is_conventional() {
        assert_relative_eq!(DEFAULT_ALPHA, 0.05);
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(
            compare(&a, &b, DEFAULT_ALPHA).unwrap(),
            compare(&a, &b, 0.05).unwrap()
        );
    }

    #[test]
    fn test_two_observation_group_fails() {
        let err = compare(&[1.0, 2.0], &[1.0, 2.0, 3.0], 0.05).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                required: 3,
                actual: 2,
                ..
            }
        ));
        assert!(compare(&[1.0, 2.0, 3.0], &[], 0.05).is_err());
    }

    #[test]
    fn test_non_finite_group_fails() {
        let good = [1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            compare(&[1.0, f64::NAN, 3.0], &good, 0.05).unwrap_err(),
            Error::NonFinite {
                context: "sample_a",
                index: 1,
            }
        ));
        assert!(matches!(
            compare(&good, &[f64::NEG_INFINITY, 2.0, 3.0], 0.05).unwrap_err(),
            Error::NonFinite {
                context: "sample_b",
                index: 0,
            }
        ));
    }

    #[test]
    fn test_invalid_alpha_fails() {
        let a = [1.0, 2.0, 3.0, 4.0];
        for alpha in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            assert!(matches!(
                compare(&a, &a, alpha).unwrap_err(),
                Error::InvalidAlpha { .. }
            ));
        }
    }

    #[test]
    fn test_constant_group_fails() {
        let err = compare(&[7.0, 7.0, 7.0, 7.0], &[1.0, 2.0, 3.0], 0.05).unwrap_err();
        assert!(matches!(err, Error::DegenerateSample { .. }));
    }

    #[test]
    fn test_oversized_group_fails() {
        let big: Vec<f64> = (0..5001).map(f64::from).collect();
        let err = compare(&big, &[1.0, 2.0, 3.0], 0.05).unwrap_err();
        assert!(matches!(err, Error::SampleTooLarge { .. }));
    }

    #[test]
    fn test_summary_names_test_and_verdict() {
        let a = normal_quantiles(20);
        let b: Vec<f64> = a.iter().map(|v| v + 5.0).collect();
        let significant = compare(&a, &b, 0.05).unwrap().summary();
        assert!(significant.contains("Student's t-test"));
        assert!(significant.contains("significant difference"));
        assert!(significant.contains("lower"));

        let c = [1.0, 2.0, 3.0, 4.0, 5.0];
        let d = [1.0, 2.0, 3.0, 4.0, 100.0];
        let unchanged = compare(&c, &d, 0.05).unwrap().summary();
        assert!(unchanged.contains("Mann-Whitney U"));
        assert!(unchanged.contains("no significant difference"));
    }

    #[test]
    fn test_display_for_choice() {
        assert_eq!(TestChoice::Parametric.to_string(), "parametric");
        assert_eq!(TestChoice::Nonparametric.to_string(), "nonparametric");
        assert_eq!(TestChoice::Parametric.test_name(), "Student's t-test");
    }
}
