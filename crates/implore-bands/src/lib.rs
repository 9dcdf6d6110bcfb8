//! implore-bands - Simultaneous confidence bands for families of CDF estimates
//!
//! Given simulated replicates of lower and upper CDF bounds at fixed
//! evaluation points, this crate builds an envelope that contains the true
//! curve at all points at once with nominal probability `1 - alpha`:
//!
//! - **Uniform**: order statistics selected from per-replicate extreme ranks.
//!   Distribution-free, conservative, made of observed values only.
//! - **Student**: mean plus a quantile of per-replicate extreme standardized
//!   deviations, times the regularized standard deviation. Narrower, with
//!   approximate coverage, clipped to `[min_val, max_val]`.
//!
//! # Example
//!
//! ```
//! use implore_bands::{get_bands, BandConfig};
//! use ndarray::Array2;
//!
//! // 200 replicates of a curve evaluated at 5 points
//! let f_lo = Array2::from_shape_fn((200, 5), |(i, j)| ((i * 37 + j * 11) % 200) as f64 / 200.0);
//! let bands = get_bands(f_lo.view(), None, &BandConfig::student(0.05))?;
//! assert!(bands.lower.iter().all(|v| (0.0..=1.0).contains(v)));
//! # Ok::<(), implore_bands::BandError>(())
//! ```

pub mod bands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod ffi;
pub mod quantile;
pub mod rank;
pub mod student;
pub mod uniform;

pub use bands::Bands;
pub use config::{BandConfig, BandMethod, QuantileRounding, DEFAULT_ALPHA, DEFAULT_EPS};
pub use dispatch::{get_bands, get_bands_dyn, get_bands_named};
pub use error::{BandError, BandResult};
pub use ffi::compute_bands;
pub use student::student_bands;
pub use uniform::uniform_bands;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
