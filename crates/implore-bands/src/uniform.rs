//! Rank-based simultaneous bands
//!
//! Each replicate is summarized by its most extreme rank over all evaluation
//! points: the smallest lower-bound rank and the largest upper-bound rank.
//! Quantiles of those extremes select one order statistic per column, so the
//! band contains the true curve at every point at once with probability at
//! least `1 - alpha`.
//!
//! The band is always made of observed values; nothing is interpolated.

use ndarray::{ArrayView2, Axis};

use crate::bands::Bands;
use crate::config::QuantileRounding;
use crate::quantile::select_quantile;
use crate::rank::{rank_columns, sort_columns, TieBreak};

/// Compute a uniform band from validated replicate matrices.
///
/// Both matrices must share a non-empty `(n_sim, n_points)` shape and
/// `alpha` must lie in (0, 1]; use [`crate::get_bands`] for checked input.
pub fn uniform_bands(
    f_lo: ArrayView2<'_, f64>,
    f_hi: ArrayView2<'_, f64>,
    alpha: f64,
    rounding: QuantileRounding,
) -> Bands {
    let rank_lo = rank_columns(f_lo, TieBreak::Max);
    let rank_hi = rank_columns(f_hi, TieBreak::Min);

    let inf_z: Vec<usize> = rank_lo
        .axis_iter(Axis(0))
        .map(|row| row.iter().copied().min().unwrap_or(0))
        .collect();
    let sup_z: Vec<usize> = rank_hi
        .axis_iter(Axis(0))
        .map(|row| row.iter().copied().max().unwrap_or(0))
        .collect();

    let (lo_rule, hi_rule) = rounding.rules();
    let q_lo = select_quantile(&inf_z, alpha / 2.0, lo_rule);
    let q_hi = select_quantile(&sup_z, 1.0 - alpha / 2.0, hi_rule);

    tracing::trace!(q_lo, q_hi, %rounding, "uniform band order statistics");

    Bands {
        lower: sort_columns(f_lo).row(q_lo).to_vec(),
        upper: sort_columns(f_hi).row(q_hi).to_vec(),
    }
}
