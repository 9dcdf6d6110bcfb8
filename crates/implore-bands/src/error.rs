//! Error types for implore-bands
//!
//! Every failure is a caller error detected before any numerical work:
//! - Replicate matrix shape problems
//! - Out-of-range band parameters
//! - Unknown method names

use thiserror::Error;

/// Error type for band construction
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum BandError {
    /// Inputs or parameters rejected by validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BandError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        BandError::InvalidInput(message.into())
    }
}

impl From<ndarray::ShapeError> for BandError {
    fn from(err: ndarray::ShapeError) -> Self {
        BandError::InvalidInput(err.to_string())
    }
}

/// Result type alias for band operations
pub type BandResult<T> = Result<T, BandError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Validate that both replicate matrices have the same shape
    pub fn validate_same_shape(lo: &[usize], hi: &[usize]) -> BandResult<()> {
        if lo != hi {
            return Err(BandError::invalid(format!(
                "F_lo and F_hi shapes must be the same, got {:?} != {:?}",
                lo, hi
            )));
        }
        Ok(())
    }

    /// Validate that a shape describes a matrix
    pub fn validate_matrix(shape: &[usize]) -> BandResult<()> {
        if shape.len() != 2 {
            return Err(BandError::invalid(format!(
                "F_lo and F_hi must be matrices, got shape {:?}",
                shape
            )));
        }
        Ok(())
    }

    /// Validate that a matrix has at least one replicate and one evaluation point
    pub fn validate_not_empty(n_sim: usize, n_points: usize) -> BandResult<()> {
        if n_sim == 0 || n_points == 0 {
            return Err(BandError::invalid(format!(
                "replicate matrices must be non-empty, got shape [{}, {}]",
                n_sim, n_points
            )));
        }
        Ok(())
    }

    /// Validate the significance level, which must lie in (0, 1]
    pub fn validate_alpha(alpha: f64) -> BandResult<()> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(BandError::invalid(format!(
                "alpha must be in (0, 1], got {}",
                alpha
            )));
        }
        Ok(())
    }

    /// Validate the student denominator stabilizer
    pub fn validate_eps(eps: f64) -> BandResult<()> {
        if !(eps > 0.0) {
            return Err(BandError::invalid(format!(
                "eps must be strictly positive for the student method, got {}",
                eps
            )));
        }
        Ok(())
    }

    /// Validate the clipping range used by the student method
    pub fn validate_range(min_val: f64, max_val: f64) -> BandResult<()> {
        if !(min_val <= max_val) {
            return Err(BandError::invalid(format!(
                "min_val must not exceed max_val, got [{}, {}]",
                min_val, max_val
            )));
        }
        Ok(())
    }

    /// Validate a row-major buffer against its declared shape
    pub fn validate_buffer_len(len: usize, n_sim: usize, n_points: usize) -> BandResult<()> {
        let expected = n_sim.checked_mul(n_points);
        if expected != Some(len) {
            return Err(BandError::invalid(format!(
                "buffer of length {} does not match shape [{}, {}]",
                len, n_sim, n_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_error_display() {
        let err = BandError::invalid("alpha must be in (0, 1], got 0");
        assert!(err.to_string().starts_with("Invalid input"));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_validate_same_shape() {
        assert!(validation::validate_same_shape(&[10, 3], &[10, 3]).is_ok());
        let err = validation::validate_same_shape(&[10, 3], &[10, 4]).unwrap_err();
        assert!(err.to_string().contains("[10, 3] != [10, 4]"));
    }

    #[test]
    fn test_validate_matrix() {
        assert!(validation::validate_matrix(&[4, 2]).is_ok());
        assert!(validation::validate_matrix(&[8]).is_err());
        assert!(validation::validate_matrix(&[2, 2, 2]).is_err());
    }

    #[test]
    fn test_validate_alpha() {
        assert!(validation::validate_alpha(0.05).is_ok());
        assert!(validation::validate_alpha(1.0).is_ok());
        assert!(validation::validate_alpha(0.0).is_err());
        assert!(validation::validate_alpha(1.5).is_err());
        assert!(validation::validate_alpha(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_eps() {
        assert!(validation::validate_eps(1e-8).is_ok());
        assert!(validation::validate_eps(0.0).is_err());
        assert!(validation::validate_eps(-1.0).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validation::validate_range(0.0, 1.0).is_ok());
        assert!(validation::validate_range(0.5, 0.5).is_ok());
        assert!(validation::validate_range(1.0, 0.0).is_err());
        assert!(validation::validate_range(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_validate_buffer_len() {
        assert!(validation::validate_buffer_len(12, 4, 3).is_ok());
        assert!(validation::validate_buffer_len(11, 4, 3).is_err());
        assert!(validation::validate_buffer_len(0, usize::MAX, 2).is_err());
    }
}
