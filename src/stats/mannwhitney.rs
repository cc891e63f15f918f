//! Mann-Whitney U test (Wilcoxon rank-sum).
//!
//! Rank-based two-sample test that makes no normality assumption. Tied
//! observations receive their average rank and shrink the variance of U
//! through the standard tie correction. The p-value uses the normal
//! approximation with a continuity correction, two-sided.

use statrs::distribution::ContinuousCDF;

use crate::error::{Error, Result};
use crate::stats::{ensure_finite, standard_normal};

/// Values closer than this share a rank.
const TIE_TOLERANCE: f64 = 1e-12;

/// Result of a Mann-Whitney U test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MannWhitneyResult {
    /// The U statistic of the first sample, in [0, n1 * n2].
    pub statistic: f64,
    /// Continuity-corrected standard score of U.
    pub z: f64,
    /// Two-sided p-value from the normal approximation.
    pub p_value: f64,
}

/// Run the Mann-Whitney U test on two independent samples.
///
/// # Errors
///
/// - [`Error::NonFinite`] if either sample contains NaN or infinities.
/// - [`Error::InsufficientData`] unless both samples have at least two
///   observations.
/// - [`Error::DegenerateSample`] when every observation is tied, which
///   leaves U with zero variance.
pub fn mann_whitney_u(sample_a: &[f64], sample_b: &[f64]) -> Result<MannWhitneyResult> {
    ensure_finite("sample_a", sample_a)?;
    ensure_finite("sample_b", sample_b)?;
    for sample in [sample_a, sample_b] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                test: "Mann-Whitney U",
                required: 2,
                actual: sample.len(),
            });
        }
    }

    let n1 = sample_a.len();
    let n2 = sample_b.len();
    let n = n1 + n2;

    let mut pooled: Vec<(f64, bool)> = sample_a
        .iter()
        .map(|&v| (v, true))
        .chain(sample_b.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let values: Vec<f64> = pooled.iter().map(|&(v, _)| v).collect();
    let (ranks, tie_correction) = average_ranks(&values);

    let rank_sum_a: f64 = pooled
        .iter()
        .zip(ranks.iter())
        .filter(|((_, from_a), _)| *from_a)
        .map(|(_, &rank)| rank)
        .sum();

    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let nf = n as f64;
    let statistic = rank_sum_a - n1f * (n1f + 1.0) / 2.0;

    let mu = n1f * n2f / 2.0;
    let variance = n1f * n2f / 12.0 * ((nf + 1.0) - tie_correction / (nf * (nf - 1.0)));
    if variance < f64::MIN_POSITIVE {
        return Err(Error::DegenerateSample {
            context: "all observations are tied",
        });
    }

    let shift = statistic - mu;
    let corrected = shift.signum() * (shift.abs() - 0.5).max(0.0);
    let z = corrected / variance.sqrt();
    let p_value = (2.0 * (1.0 - standard_normal().cdf(z.abs()))).clamp(0.0, 1.0);

    Ok(MannWhitneyResult {
        statistic,
        z,
        p_value,
    })
}

/// Ranks of an ascending slice, averaging over tie runs, plus the tie
/// correction term `sum(t^3 - t)`.
fn average_ranks(sorted: &[f64]) -> (Vec<f64>, f64) {
    let mut ranks = vec![0.0; sorted.len()];
    let mut tie_correction = 0.0;

    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j + 1 < sorted.len() && (sorted[j + 1] - sorted[i]).abs() < TIE_TOLERANCE {
            j += 1;
        }
        // Positions i..=j share the average of ranks i+1 ..= j+1.
        let shared = (i + j + 2) as f64 / 2.0;
        for rank in &mut ranks[i..=j] {
            *rank = shared;
        }
        let run = (j - i + 1) as f64;
        tie_correction += run * (run * run - 1.0);
        i = j + 1;
    }

    (ranks, tie_correction)
}
