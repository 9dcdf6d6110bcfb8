//! Band result type
//!
//! A band is a pair of curves over the evaluation points. Nothing forces
//! `lower[i] <= upper[i]`; for well-behaved replicates it holds with high
//! probability, and the helpers below do not assume it.

use ndarray::{ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Simultaneous confidence band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Bands {
    /// Lower envelope, one value per evaluation point
    pub lower: Vec<f64>,
    /// Upper envelope, one value per evaluation point
    pub upper: Vec<f64>,
}

impl Bands {
    /// Number of evaluation points
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Per-point width (`upper - lower`)
    pub fn widths(&self) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| hi - lo)
            .collect()
    }

    /// Average width over all evaluation points
    pub fn mean_width(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.widths().iter().sum::<f64>() / self.len() as f64
    }

    /// Whether `curve` lies inside the band at every evaluation point
    pub fn contains(&self, curve: &[f64]) -> bool {
        curve.len() == self.len()
            && curve
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&y, (&lo, &hi))| lo <= y && y <= hi)
    }

    /// Fraction of curves (rows) entirely contained in the band
    ///
    /// Useful for checking empirical coverage against `1 - alpha` on
    /// fresh replicates.
    pub fn coverage(&self, curves: ArrayView2<'_, f64>) -> f64 {
        if curves.nrows() == 0 {
            return 0.0;
        }
        let inside = curves
            .axis_iter(Axis(0))
            .filter(|row| self.contains(&row.to_vec()))
            .count();
        inside as f64 / curves.nrows() as f64
    }
}
