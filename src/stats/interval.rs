use serde::Serialize;

use crate::config::StatsConfig;

/// Symmetric confidence interval around the mean
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ConfidenceInterval {
    pub left: f64,
    pub right: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }
}

/// Confidence factor after defaulting NaN and clamping to the configured range
pub(crate) fn confidence_factor(t: f64, config: &StatsConfig) -> f64 {
    let [lo, hi] = config.confidence_range;
    if t.is_nan() {
        log::debug!("confidence factor is NaN, using {}", config.default_confidence);
        return config.default_confidence;
    }
    let clamped = t.clamp(lo, hi);
    if clamped != t {
        log::debug!("confidence factor {} clamped to {}", t, clamped);
    }
    clamped
}

/// `mean ± t·std/sqrt(n)`; `{0, 0}` when `n == 0`.
pub(crate) fn confidence_interval(n: usize, mean: f64, std: f64, t: f64) -> ConfidenceInterval {
    if n == 0 {
        return ConfidenceInterval::default();
    }
    let half = t * std / (n as f64).sqrt();
    ConfidenceInterval {
        left: mean - half,
        right: mean + half,
    }
}
