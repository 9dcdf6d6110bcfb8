//! Sample quantiles over a virtual index
//!
//! For a sorted sample x of size n at probability p the virtual index is
//! `h = (n - 1) * p`. The rules differ only in how h maps onto the sample:
//!
//! - **Lower**: `x[floor(h)]`
//! - **Higher**: `x[ceil(h)]`
//! - **Nearest**: `x[round(h)]`, halves rounded to the even index
//! - **Linear**: interpolate between `x[floor(h)]` and `x[ceil(h)]`
//!
//! The discrete rules always return an observed value.

/// Quantile estimation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantileRule {
    Lower,
    Higher,
    Nearest,
    Linear,
}

impl QuantileRule {
    /// Whether the rule always picks an existing sample
    pub fn is_discrete(&self) -> bool {
        !matches!(self, QuantileRule::Linear)
    }
}

fn virtual_index(len: usize, p: f64) -> f64 {
    (len - 1) as f64 * p
}

/// Index into a sorted sample of length `len` selected by `rule`.
///
/// For `Linear` this is the lower of the two interpolated positions.
///
/// # Panics
///
/// Panics if `len` is zero or `p` is outside [0, 1].
pub fn quantile_index(len: usize, p: f64, rule: QuantileRule) -> usize {
    assert!(len > 0, "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let h = virtual_index(len, p);
    let idx = match rule {
        QuantileRule::Lower | QuantileRule::Linear => h.floor(),
        QuantileRule::Higher => h.ceil(),
        QuantileRule::Nearest => h.round_ties_even(),
    };

    (idx as usize).min(len - 1)
}

/// Quantile of an already sorted sample.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64, rule: QuantileRule) -> f64 {
    let idx = quantile_index(sorted.len(), p, rule);
    if rule.is_discrete() || idx + 1 >= sorted.len() {
        return sorted[idx];
    }

    let t = virtual_index(sorted.len(), p) - idx as f64;
    let (a, b) = (sorted[idx], sorted[idx + 1]);
    // Interpolate from the nearer endpoint so t = 1 lands exactly on b
    if t >= 0.5 {
        b - (b - a) * (1.0 - t)
    } else {
        a + (b - a) * t
    }
}

/// Quantile of an unsorted sample. The input is copied and sorted.
pub fn quantile(values: &[f64], p: f64, rule: QuantileRule) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, p, rule)
}

/// Order statistic of an unsorted sample of integers.
///
/// `Linear` is treated as `Lower` since the result must be a sample value.
pub fn select_quantile<T: Copy + Ord>(values: &[T], p: f64, rule: QuantileRule) -> T {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted[quantile_index(sorted.len(), p, rule)]
}
