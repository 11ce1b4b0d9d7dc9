//! Engine configuration
//!
//! Every tunable constant the statistics engine uses lives here. The defaults
//! reproduce the documented behavior exactly; a TOML file can override them:
//!
//! ```toml
//! default_quantile = 0.1
//! default_confidence = 0.95
//! fence_multiplier = 3.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Tunable constants of the statistics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Fraction used by `quantiles` when the requested one is invalid
    pub default_quantile: f64,
    /// Accepted fractions for `quantiles`, inclusive
    pub quantile_range: [f64; 2],
    /// Distance under which a quantile lands exactly on a grid point
    pub quantile_tolerance: f64,
    /// Confidence factor used when the requested one is NaN
    pub default_confidence: f64,
    /// Clamp range for confidence factors, inclusive
    pub confidence_range: [f64; 2],
    /// Magnitude at or below which a value contributes nothing to the harmonic mean
    pub harmonic_epsilon: f64,
    /// IQR multiplier for outlier fences
    pub fence_multiplier: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            default_quantile: 0.25,
            quantile_range: [0.01, 0.99],
            quantile_tolerance: 0.001,
            default_confidence: 0.9,
            confidence_range: [0.01, 0.99],
            harmonic_epsilon: 1e-9,
            fence_multiplier: 1.5,
        }
    }
}

impl StatsConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: StatsConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded stats config from {}", path.as_ref().display());
        Self::from_toml_str(&source)
    }

    /// Check that ranges are ordered and defaults fall inside them
    pub fn validate(&self) -> Result<()> {
        check_range("quantile_range", self.quantile_range)?;
        check_range("confidence_range", self.confidence_range)?;

        let [q_lo, q_hi] = self.quantile_range;
        if q_lo <= 0.0 || q_hi >= 1.0 {
            return Err(Error::InvalidValue(format!(
                "quantile_range must lie inside (0, 1), got [{}, {}]",
                q_lo, q_hi
            )));
        }
        if !(q_lo..=q_hi).contains(&self.default_quantile) {
            return Err(Error::InvalidValue(format!(
                "default_quantile {} is outside quantile_range",
                self.default_quantile
            )));
        }

        let [c_lo, c_hi] = self.confidence_range;
        if !(c_lo..=c_hi).contains(&self.default_confidence) {
            return Err(Error::InvalidValue(format!(
                "default_confidence {} is outside confidence_range",
                self.default_confidence
            )));
        }

        for (name, value) in [
            ("quantile_tolerance", self.quantile_tolerance),
            ("harmonic_epsilon", self.harmonic_epsilon),
            ("fence_multiplier", self.fence_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidValue(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn check_range(name: &str, [lo, hi]: [f64; 2]) -> Result<()> {
    if lo.is_nan() || hi.is_nan() || lo > hi {
        return Err(Error::InvalidValue(format!(
            "{} must be an ordered pair, got [{}, {}]",
            name, lo, hi
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(StatsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StatsConfig::from_toml_str("default_confidence = 0.95\n").unwrap();
        assert_eq!(config.default_confidence, 0.95);
        assert_eq!(config.default_quantile, 0.25);
        assert_eq!(config.quantile_range, [0.01, 0.99]);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = StatsConfig::from_toml_str("confidence_range = [0.9, 0.1]\n");
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_default_outside_range() {
        let result = StatsConfig::from_toml_str("default_quantile = 0.5\nquantile_range = [0.01, 0.3]\n");
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = StatsConfig::from_toml_str("default_quantile = \"quarter\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_zero_epsilon() {
        let result = StatsConfig::from_toml_str("harmonic_epsilon = 0.0\n");
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }
}
