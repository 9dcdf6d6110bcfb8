//! Standardized-deviation bands
//!
//! Replicates are standardized per point by the replicate mean and the
//! regularized standard deviation `std + eps`. The extreme standardized
//! deviation of each replicate is collected, and interpolated quantiles of
//! those extremes are mapped back through the same mean and scale.
//!
//! These bands are usually narrower than the uniform ones, but their
//! simultaneous coverage is only approximate.

use ndarray::{Array1, ArrayView2, Axis};

use crate::bands::Bands;
use crate::quantile::{quantile, QuantileRule};

/// Per-point location and regularized scale of a replicate matrix
#[derive(Debug, Clone)]
struct Standardizer {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl Standardizer {
    fn fit(f: ArrayView2<'_, f64>, eps: f64) -> Self {
        let mean = f
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(f.ncols()));
        let scale = f.std_axis(Axis(0), 0.0) + eps;
        Self { mean, scale }
    }

    /// Standardized deviations reduced to one value per replicate
    fn extremes(
        &self,
        f: ArrayView2<'_, f64>,
        reduce: fn(f64, f64) -> f64,
        init: f64,
    ) -> Vec<f64> {
        let t = (&f - &self.mean) / &self.scale;
        t.axis_iter(Axis(0))
            .map(|row| row.iter().copied().fold(init, reduce))
            .collect()
    }

    /// Map a standardized quantile back onto the data scale, clipped to the range
    fn reconstruct(&self, q: f64, min_val: f64, max_val: f64) -> Vec<f64> {
        self.mean
            .iter()
            .zip(self.scale.iter())
            .map(|(&m, &s)| (m + q * s).max(min_val).min(max_val))
            .collect()
    }
}

/// Compute a student band from validated replicate matrices.
///
/// Both matrices must share a non-empty `(n_sim, n_points)` shape, `alpha`
/// must lie in (0, 1] and `eps` must be positive; use [`crate::get_bands`]
/// for checked input.
pub fn student_bands(
    f_lo: ArrayView2<'_, f64>,
    f_hi: ArrayView2<'_, f64>,
    alpha: f64,
    eps: f64,
    min_val: f64,
    max_val: f64,
) -> Bands {
    let lo = Standardizer::fit(f_lo, eps);
    let hi = Standardizer::fit(f_hi, eps);

    let inf_t = lo.extremes(f_lo, f64::min, f64::INFINITY);
    let sup_t = hi.extremes(f_hi, f64::max, f64::NEG_INFINITY);

    let q_lo = quantile(&inf_t, alpha / 2.0, QuantileRule::Linear);
    let q_hi = quantile(&sup_t, 1.0 - alpha / 2.0, QuantileRule::Linear);

    tracing::trace!(q_lo, q_hi, "student band standardized quantiles");

    Bands {
        lower: lo.reconstruct(q_lo, min_val, max_val),
        upper: hi.reconstruct(q_hi, min_val, max_val),
    }
}
