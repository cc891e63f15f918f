//! Shapiro-Wilk normality test.
//!
//! Royston's approximation to the Shapiro-Wilk W test (Algorithm AS R94),
//! valid for sample sizes 3 through 5000. W close to 1 is consistent with
//! normality; the p-value comes from Royston's normalizing transforms, with
//! the exact arcsine form for n = 3.
//!
//! # References
//!
//! - Shapiro, S. S., & Wilk, M. B. (1965). "An analysis of variance test for
//!   normality (complete samples)." Biometrika, 52(3-4), 591-611.
//! - Royston, P. (1995). "Remark AS R94: A remark on Algorithm AS 181: The
//!   W-test for normality." Applied Statistics, 44(4), 547-551.

use statrs::distribution::ContinuousCDF;
use tracing::trace;

use crate::error::{Error, Result};
use crate::stats::{ensure_alpha, ensure_finite, mean, standard_normal};

/// Smallest sample size accepted by [`shapiro_wilk`].
pub const SHAPIRO_WILK_MIN_N: usize = 3;

/// Largest sample size for which the AS R94 p-value transform is validated.
pub const SHAPIRO_WILK_MAX_N: usize = 5000;

// Royston (1995) polynomial coefficients, lowest order first.
const WEIGHT_POLY_1: [f64; 6] = [0.0, 0.221_157, -0.147_981, -2.071_19, 4.434_685, -2.706_056];
const WEIGHT_POLY_2: [f64; 6] = [0.0, 0.042_981, -0.293_762, -1.752_461, 5.682_633, -3.582_633];
const SMALL_N_MEAN: [f64; 4] = [0.544, -0.399_78, 0.025_054, -6.714e-4];
const SMALL_N_SPREAD: [f64; 4] = [1.382_2, -0.778_57, 0.062_767, -0.002_032_2];
const LARGE_N_MEAN: [f64; 4] = [-1.586_1, -0.310_82, -0.083_751, 0.003_891_5];
const LARGE_N_SPREAD: [f64; 3] = [-0.480_3, -0.082_676, 0.003_030_2];
const SMALL_N_GAMMA: [f64; 2] = [-2.273, 0.459];

/// Outcome of a normality check at a significance level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalityVerdict {
    /// The W statistic, in (0, 1].
    pub statistic: f64,
    /// Probability of a W at least this extreme under normality.
    pub p_value: f64,
    /// True when the sample is consistent with normality (`p_value > alpha`).
    pub normal: bool,
}

/// Run the Shapiro-Wilk W test and cut the verdict at `alpha`.
///
/// # Errors
///
/// - [`Error::InvalidAlpha`] unless `alpha` lies in (0, 1).
/// - [`Error::NonFinite`] if the sample contains NaN or infinities.
/// - [`Error::InsufficientData`] for n < 3, [`Error::SampleTooLarge`] for
///   n > 5000.
/// - [`Error::DegenerateSample`] when all observations are identical.
///
/// # Examples
///
/// ```
/// use sello_viz::stats::shapiro_wilk;
///
/// let verdict = shapiro_wilk(&[-1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5], 0.05)?;
/// assert!(verdict.normal);
/// # Ok::<(), sello_viz::Error>(())
/// ```
pub fn shapiro_wilk(data: &[f64], alpha: f64) -> Result<NormalityVerdict> {
    ensure_alpha(alpha)?;
    ensure_finite("sample", data)?;

    let n = data.len();
    if n < SHAPIRO_WILK_MIN_N {
        return Err(Error::InsufficientData {
            test: "Shapiro-Wilk",
            required: SHAPIRO_WILK_MIN_N,
            actual: n,
        });
    }
    if n > SHAPIRO_WILK_MAX_N {
        return Err(Error::SampleTooLarge {
            test: "Shapiro-Wilk",
            maximum: SHAPIRO_WILK_MAX_N,
            actual: n,
        });
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    if sorted[n - 1] - sorted[0] < f64::MIN_POSITIVE {
        return Err(Error::DegenerateSample {
            context: "all observations are identical",
        });
    }

    let (statistic, p_value) = if n == 3 {
        exact_n3(&sorted)?
    } else {
        let weights = royston_weights(n)?;
        let w = w_statistic(&sorted, &weights)?;
        (w, p_value_for(w, n))
    };
    trace!(n, w = statistic, p = p_value, "shapiro-wilk");

    Ok(NormalityVerdict {
        statistic,
        p_value,
        normal: p_value > alpha,
    })
}

/// Evaluate a polynomial with coefficients in ascending order.
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Exact W and p for n = 3. W lives in [3/4, 1] by construction.
fn exact_n3(sorted: &[f64]) -> Result<(f64, f64)> {
    let m = mean(sorted);
    let ss: f64 = sorted.iter().map(|&v| (v - m) * (v - m)).sum();
    if ss < f64::MIN_POSITIVE {
        return Err(Error::DegenerateSample {
            context: "zero sum of squares",
        });
    }

    let spread = std::f64::consts::FRAC_1_SQRT_2 * (sorted[2] - sorted[0]);
    let w = ((spread * spread) / ss).clamp(0.75, 1.0);
    let p = (1.0 - (6.0 / std::f64::consts::PI) * w.sqrt().acos()).clamp(0.0, 1.0);
    Ok((w, p))
}

/// Upper-half weights from Blom order-statistic scores with Royston's
/// endpoint corrections. For n <= 5 only the first weight is corrected;
/// above that the first two are.
fn royston_weights(n: usize) -> Result<Vec<f64>> {
    let half = n / 2;
    let normal = standard_normal();

    let mut scores = Vec::with_capacity(half);
    let mut sum_sq = 0.0;
    for rank in 1..=half {
        let p = (rank as f64 - 0.375) / (n as f64 + 0.25);
        let q = normal.inverse_cdf(p);
        sum_sq += q * q;
        scores.push(q);
    }
    // The lower half mirrors the upper; an odd middle score is zero.
    sum_sq *= 2.0;

    let root_sum = sum_sq.sqrt();
    let inv_root_n = 1.0 / (n as f64).sqrt();
    let first = polynomial(&WEIGHT_POLY_1, inv_root_n) - scores[0] / root_sum;

    let mut weights = vec![0.0; half];
    if n <= 5 {
        let tail_ss = sum_sq - 2.0 * scores[0] * scores[0];
        let tail_norm = 1.0 - 2.0 * first * first;
        if tail_ss <= 0.0 || tail_norm <= 0.0 {
            return Err(Error::DegenerateSample {
                context: "Shapiro-Wilk weight normalization collapsed",
            });
        }
        let scale = (tail_ss / tail_norm).sqrt();
        weights[0] = first;
        for (weight, &score) in weights.iter_mut().zip(scores.iter()).skip(1) {
            *weight = -score / scale;
        }
    } else {
        let second = polynomial(&WEIGHT_POLY_2, inv_root_n) - scores[1] / root_sum;
        let tail_ss =
            sum_sq - 2.0 * scores[0] * scores[0] - 2.0 * scores[1] * scores[1];
        let tail_norm = 1.0 - 2.0 * first * first - 2.0 * second * second;
        if tail_ss <= 0.0 || tail_norm <= 0.0 {
            return Err(Error::DegenerateSample {
                context: "Shapiro-Wilk weight normalization collapsed",
            });
        }
        let scale = (tail_ss / tail_norm).sqrt();
        weights[0] = first;
        weights[1] = second;
        for (weight, &score) in weights.iter_mut().zip(scores.iter()).skip(2) {
            *weight = -score / scale;
        }
    }

    Ok(weights)
}

/// W = (sum of weighted symmetric spreads)^2 / sum of squares about the mean.
fn w_statistic(sorted: &[f64], weights: &[f64]) -> Result<f64> {
    let n = sorted.len();
    let m = mean(sorted);
    let ss: f64 = sorted.iter().map(|&v| (v - m) * (v - m)).sum();
    if ss < f64::MIN_POSITIVE {
        return Err(Error::DegenerateSample {
            context: "zero sum of squares",
        });
    }

    let spread: f64 = weights
        .iter()
        .enumerate()
        .map(|(i, &a)| a * (sorted[n - 1 - i] - sorted[i]))
        .sum();

    Ok(((spread * spread) / ss).min(1.0))
}

/// Royston's normalizing transforms: a shifted double-log for n <= 11, a
/// log-normal form above.
fn p_value_for(w: f64, n: usize) -> f64 {
    let residual = 1.0 - w;
    if residual <= 0.0 {
        return 1.0;
    }
    let y = residual.ln();
    let nf = n as f64;

    let z = if n <= 11 {
        let gamma = polynomial(&SMALL_N_GAMMA, nf);
        if y >= gamma {
            return 0.0;
        }
        let shifted = -(gamma - y).ln();
        (shifted - polynomial(&SMALL_N_MEAN, nf)) / polynomial(&SMALL_N_SPREAD, nf).exp()
    } else {
        let log_n = nf.ln();
        (y - polynomial(&LARGE_N_MEAN, log_n)) / polynomial(&LARGE_N_SPREAD, log_n).exp()
    };

    (1.0 - standard_normal().cdf(z)).clamp(0.0, 1.0)
}
