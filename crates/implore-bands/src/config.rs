//! Band construction parameters
//!
//! `BandConfig` carries everything besides the replicate matrices: the
//! significance level, the method, and the student-only stabilizer and
//! clipping range. Documents may be partial; missing fields take the defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{validation, BandError, BandResult};
use crate::quantile::QuantileRule;

/// Default significance level (95% simultaneous coverage)
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default denominator stabilizer for the student method
pub const DEFAULT_EPS: f64 = 1e-8;

/// Band construction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum BandMethod {
    /// Rank-based band built from order statistics of the replicates.
    /// Guarantees simultaneous coverage, at the cost of conservatism.
    #[default]
    Uniform,
    /// Band built from standardized deviations. Narrower, but coverage
    /// is only approximately simultaneous.
    Student,
}

impl BandMethod {
    /// All recognized methods
    pub fn all() -> &'static [BandMethod] {
        &[BandMethod::Uniform, BandMethod::Student]
    }

    /// Method name as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            BandMethod::Uniform => "uniform",
            BandMethod::Student => "student",
        }
    }
}

impl fmt::Display for BandMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandMethod {
    type Err = BandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(BandMethod::Uniform),
            "student" => Ok(BandMethod::Student),
            _ => {
                let names: Vec<&str> = Self::all().iter().map(|m| m.name()).collect();
                Err(BandError::InvalidInput(format!(
                    "Method should be in {:?}, got {}",
                    names, s
                )))
            }
        }
    }
}

/// How the uniform method snaps its rank quantiles onto observed ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum QuantileRounding {
    /// Round the lower quantile down and the upper quantile up
    #[default]
    Directional,
    /// Round both quantiles to the nearest observation, ties to even.
    ///
    /// Ranks stay zero-based, so this selects one sorted row below the
    /// historical one-based `nearest` variant, which used the rank itself
    /// as the row index.
    Nearest,
}

impl QuantileRounding {
    /// Rules applied to the lower and upper rank quantiles
    pub(crate) fn rules(&self) -> (QuantileRule, QuantileRule) {
        match self {
            QuantileRounding::Directional => (QuantileRule::Lower, QuantileRule::Higher),
            QuantileRounding::Nearest => (QuantileRule::Nearest, QuantileRule::Nearest),
        }
    }
}

impl fmt::Display for QuantileRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantileRounding::Directional => f.write_str("directional"),
            QuantileRounding::Nearest => f.write_str("nearest"),
        }
    }
}

impl FromStr for QuantileRounding {
    type Err = BandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directional" => Ok(QuantileRounding::Directional),
            "nearest" => Ok(QuantileRounding::Nearest),
            _ => Err(BandError::InvalidInput(format!(
                "Rounding should be in [\"directional\", \"nearest\"], got {}",
                s
            ))),
        }
    }
}

/// Parameters for a band computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct BandConfig {
    /// Significance level; bands have nominal `1 - alpha` coverage
    pub alpha: f64,
    /// Added to the standard deviations (student only)
    pub eps: f64,
    /// Construction method
    pub method: BandMethod,
    /// Lower clipping bound (student only)
    pub min_val: f64,
    /// Upper clipping bound (student only)
    pub max_val: f64,
    /// Quantile snapping rule (uniform only)
    pub rounding: QuantileRounding,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            eps: DEFAULT_EPS,
            method: BandMethod::Uniform,
            min_val: 0.0,
            max_val: 1.0,
            rounding: QuantileRounding::Directional,
        }
    }
}

impl BandConfig {
    /// Uniform method at the given significance level
    pub fn uniform(alpha: f64) -> Self {
        Self {
            alpha,
            method: BandMethod::Uniform,
            ..Default::default()
        }
    }

    /// Student method at the given significance level
    pub fn student(alpha: f64) -> Self {
        Self {
            alpha,
            method: BandMethod::Student,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_method(mut self, method: BandMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the clipping range applied to student bands
    pub fn with_range(mut self, min_val: f64, max_val: f64) -> Self {
        self.min_val = min_val;
        self.max_val = max_val;
        self
    }

    pub fn with_rounding(mut self, rounding: QuantileRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Check the parameters the selected method depends on.
    ///
    /// `eps` and the clipping range are only checked for the student method.
    pub fn validate(&self) -> BandResult<()> {
        validation::validate_alpha(self.alpha)?;
        if self.method == BandMethod::Student {
            validation::validate_eps(self.eps)?;
            validation::validate_range(self.min_val, self.max_val)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BandConfig::default();
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.eps, 1e-8);
        assert_eq!(config.method, BandMethod::Uniform);
        assert_eq!((config.min_val, config.max_val), (0.0, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("uniform".parse::<BandMethod>(), Ok(BandMethod::Uniform));
        assert_eq!("student".parse::<BandMethod>(), Ok(BandMethod::Student));

        let err = "bogus".parse::<BandMethod>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("uniform"));
    }

    #[test]
    fn test_method_display_matches_parse() {
        for method in BandMethod::all() {
            assert_eq!(method.to_string().parse::<BandMethod>(), Ok(*method));
        }
    }

    #[test]
    fn test_rounding_from_str() {
        assert_eq!(
            "nearest".parse::<QuantileRounding>(),
            Ok(QuantileRounding::Nearest)
        );
        assert!("ceil".parse::<QuantileRounding>().is_err());
    }

    #[test]
    fn test_rounding_rules() {
        assert_eq!(
            QuantileRounding::Directional.rules(),
            (QuantileRule::Lower, QuantileRule::Higher)
        );
        assert_eq!(
            QuantileRounding::Nearest.rules(),
            (QuantileRule::Nearest, QuantileRule::Nearest)
        );
    }

    #[test]
    fn test_uniform_ignores_student_parameters() {
        let config = BandConfig::uniform(0.1).with_eps(0.0).with_range(1.0, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_student_checks_eps_and_range() {
        assert!(BandConfig::student(0.1).validate().is_ok());
        assert!(BandConfig::student(0.1).with_eps(0.0).validate().is_err());
        assert!(BandConfig::student(0.1)
            .with_range(1.0, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(BandConfig::uniform(1.0).validate().is_ok());
        assert!(BandConfig::uniform(0.0).validate().is_err());
        assert!(BandConfig::uniform(1.5).validate().is_err());
    }
}
