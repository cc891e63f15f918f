//! Statistical procedures.
//!
//! Descriptive helpers, the Shapiro-Wilk normality test, two-sample location
//! tests, and the decision helper [`compare`] that picks between them based
//! on per-sample normality. All procedures are pure functions over `f64`
//! slices; distribution CDFs are delegated to `statrs`.

mod compare;
mod mannwhitney;
mod normality;
mod ttest;

pub use compare::{compare, Comparison, TestChoice, DEFAULT_ALPHA};
pub use mannwhitney::{mann_whitney_u, MannWhitneyResult};
pub use normality::{shapiro_wilk, NormalityVerdict, SHAPIRO_WILK_MAX_N, SHAPIRO_WILK_MIN_N};
pub use ttest::{student_t_test, welch_t_test, TTestResult};

use statrs::distribution::Normal;

use crate::error::{Error, Result};

/// Standard normal distribution for z-score p-values and quantiles.
pub(crate) fn standard_normal() -> Normal {
    // Unit parameters are always valid.
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

/// Reject samples containing NaN or infinite observations.
pub(crate) fn ensure_finite(context: &'static str, data: &[f64]) -> Result<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFinite { context, index }),
        None => Ok(()),
    }
}

/// Reject samples below a procedure's minimum size.
pub(crate) fn ensure_min_len(test: &'static str, required: usize, data: &[f64]) -> Result<()> {
    if data.len() < required {
        return Err(Error::InsufficientData {
            test,
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Reject significance levels outside the open interval (0, 1).
pub(crate) fn ensure_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(Error::InvalidAlpha { alpha });
    }
    Ok(())
}

/// Arithmetic mean. NaN for an empty slice.
#[must_use]
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (n - 1 denominator). NaN for fewer than two
/// observations.
#[must_use]
pub fn sample_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation. NaN for fewer than two observations.
#[must_use]
pub fn std_dev(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

/// Median of a sample. NaN for an empty slice.
#[must_use]
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_of_sorted(&sorted, 0.5)
}

/// Linear-interpolation percentile of pre-sorted data, `p` in [0, 1].
/// NaN for an empty slice.
#[must_use]
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    match n {
        0 => f64::NAN,
        1 => sorted[0],
        _ => {
            let idx = p.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = idx.floor() as usize;
            let upper = idx.ceil() as usize;
            if upper >= n {
                return sorted[n - 1];
            }
            let frac = idx - lower as f64;
            sorted[lower] * (1.0 - frac) + sorted[upper] * frac
        }
    }
}

/// Gaussian kernel density estimate over a uniform grid.
///
/// Bandwidth follows Silverman's rule of thumb, `1.06 * sd * n^(-1/5)`; the
/// grid spans the data range extended by three bandwidths on each side.
/// Returns `(x, density)` pairs.
///
/// # Errors
///
/// Non-finite observations, fewer than two observations, and constant
/// samples are rejected.
pub fn kde(data: &[f64], grid_points: usize) -> Result<Vec<(f64, f64)>> {
    ensure_finite("kde sample", data)?;
    ensure_min_len("kernel density estimation", 2, data)?;

    let sd = std_dev(data);
    if sd <= 0.0 {
        return Err(Error::DegenerateSample {
            context: "kernel density estimation requires non-constant data",
        });
    }

    let n = data.len() as f64;
    let bandwidth = 1.06 * sd * n.powf(-0.2);

    let lo = data.iter().copied().fold(f64::INFINITY, f64::min) - 3.0 * bandwidth;
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bandwidth;

    let points = grid_points.max(2);
    let step = (hi - lo) / (points - 1) as f64;
    let norm = n * bandwidth * (2.0 * std::f64::consts::PI).sqrt();

    Ok((0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = data
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                / norm;
            (x, density)
        })
        .collect())
}
