//! Validating entry points
//!
//! All checks run before any numerical work, in a fixed order: shapes,
//! dimensionality, method, alpha, then the student-only parameters.

use ndarray::{ArrayView2, ArrayViewD, Ix2};

use crate::bands::Bands;
use crate::config::{BandConfig, BandMethod};
use crate::error::{validation, BandResult};
use crate::student::student_bands;
use crate::uniform::uniform_bands;

/// Compute a simultaneous confidence band.
///
/// `f_lo` and `f_hi` hold one replicate per row and one evaluation point per
/// column. When `f_hi` is `None` the band is symmetric and `f_lo` is used for
/// both bounds.
///
/// # Errors
///
/// Returns [`crate::BandError::InvalidInput`] when the shapes differ, a matrix
/// is empty, or `config` is rejected by [`BandConfig::validate`].
///
/// # Example
///
/// ```
/// use implore_bands::{get_bands, BandConfig};
/// use ndarray::array;
///
/// let f_lo = array![[0.1, 0.4], [0.2, 0.5], [0.3, 0.6]];
/// let bands = get_bands(f_lo.view(), None, &BandConfig::uniform(0.05))?;
/// assert_eq!(bands.len(), 2);
/// # Ok::<(), implore_bands::BandError>(())
/// ```
pub fn get_bands<'a>(
    f_lo: ArrayView2<'a, f64>,
    f_hi: Option<ArrayView2<'a, f64>>,
    config: &BandConfig,
) -> BandResult<Bands> {
    let f_hi = f_hi.unwrap_or(f_lo);

    validation::validate_same_shape(f_lo.shape(), f_hi.shape())?;
    let (n_sim, n_points) = f_lo.dim();
    validation::validate_not_empty(n_sim, n_points)?;
    config.validate()?;

    tracing::debug!(
        n_sim,
        n_points,
        method = %config.method,
        alpha = config.alpha,
        "computing simultaneous band"
    );

    let bands = match config.method {
        BandMethod::Uniform => uniform_bands(f_lo, f_hi, config.alpha, config.rounding),
        BandMethod::Student => student_bands(
            f_lo,
            f_hi,
            config.alpha,
            config.eps,
            config.min_val,
            config.max_val,
        ),
    };

    Ok(bands)
}

/// Like [`get_bands`], for arrays whose dimensionality is only known at runtime.
///
/// Inputs that are not exactly 2-dimensional are rejected.
pub fn get_bands_dyn<'a>(
    f_lo: ArrayViewD<'a, f64>,
    f_hi: Option<ArrayViewD<'a, f64>>,
    config: &BandConfig,
) -> BandResult<Bands> {
    let f_hi = f_hi.unwrap_or_else(|| f_lo.clone());

    validation::validate_same_shape(f_lo.shape(), f_hi.shape())?;
    validation::validate_matrix(f_lo.shape())?;

    let f_lo = f_lo.into_dimensionality::<Ix2>()?;
    let f_hi = f_hi.into_dimensionality::<Ix2>()?;
    get_bands(f_lo, Some(f_hi), config)
}

/// Compute a band selecting the method by name (`"uniform"` or `"student"`),
/// with default values for every other parameter.
pub fn get_bands_named<'a>(
    f_lo: ArrayView2<'a, f64>,
    f_hi: Option<ArrayView2<'a, f64>>,
    alpha: f64,
    method: &str,
) -> BandResult<Bands> {
    if let Some(f_hi) = &f_hi {
        validation::validate_same_shape(f_lo.shape(), f_hi.shape())?;
    }
    let method: BandMethod = method.parse()?;
    let config = BandConfig::default()
        .with_alpha(alpha)
        .with_method(method);
    get_bands(f_lo, f_hi, &config)
}
