//! Flat-buffer entry point for foreign callers
//!
//! Replicate matrices cross the boundary as row-major `Vec<f64>` buffers
//! together with their shape.

use ndarray::ArrayView2;

use crate::bands::Bands;
use crate::config::BandConfig;
use crate::dispatch::get_bands;
use crate::error::{validation, BandError};

/// Compute a band from row-major buffers of shape `(n_sim, n_points)`.
///
/// `f_hi = None` makes the band symmetric, as with [`get_bands`].
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn compute_bands(
    f_lo: Vec<f64>,
    f_hi: Option<Vec<f64>>,
    n_sim: u32,
    n_points: u32,
    config: BandConfig,
) -> Result<Bands, BandError> {
    let shape = (n_sim as usize, n_points as usize);

    validation::validate_buffer_len(f_lo.len(), shape.0, shape.1)?;
    if let Some(hi) = &f_hi {
        validation::validate_buffer_len(hi.len(), shape.0, shape.1)?;
    }

    let lo = ArrayView2::from_shape(shape, f_lo.as_slice())?;
    let hi = match &f_hi {
        Some(hi) => Some(ArrayView2::from_shape(shape, hi.as_slice())?),
        None => None,
    };

    get_bands(lo, hi, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_matches_array_entry_point() {
        let m = Array2::from_shape_fn((20, 4), |(i, j)| ((i * 3 + j * 5) % 20) as f64 / 20.0);
        let flat = m.iter().copied().collect::<Vec<_>>();
        let config = BandConfig::uniform(0.1);

        let from_ffi = compute_bands(flat, None, 20, 4, config).unwrap();
        assert_eq!(from_ffi, get_bands(m.view(), None, &config).unwrap());
    }

    #[test]
    fn test_buffer_length_checked() {
        let err = compute_bands(vec![0.0; 7], None, 2, 4, BandConfig::default()).unwrap_err();
        assert!(err.to_string().contains("length 7"));

        let err = compute_bands(vec![0.0; 8], Some(vec![0.0; 6]), 2, 4, BandConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("length 6"));
    }
}
