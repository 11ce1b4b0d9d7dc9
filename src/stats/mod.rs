//! Descriptive statistics module
//!
//! [`DataStats`] holds one dataset and answers repeated queries about it,
//! caching the common statistics until the dataset is reassigned. Paired
//! statistics ([`covariance`], [`correlation`]) are stateless functions.

mod bivariate;
mod cache;
mod engine;
mod interval;
mod mode;
mod moments;
mod order;

use serde::Serialize;

use crate::error::Result;

pub use bivariate::{correlation, covariance};
pub use engine::DataStats;
pub use interval::ConfidenceInterval;

/// Lower and upper outlier fences, `Q1 - k·IQR` and `Q3 + k·IQR`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Fences {
    pub lower: f64,
    pub upper: f64,
}

impl Fences {
    /// Whether `x` lies outside the fences
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower || x > self.upper
    }
}

/// Snapshot of the common statistics of a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of values
    pub count: usize,
    pub min: f64,
    /// Lower quartile from the five-number summary
    pub q1: f64,
    pub median: f64,
    /// Upper quartile from the five-number summary
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    /// Coefficient of variation, in percent
    pub cv: f64,
    pub mode: f64,
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Serialize as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Describe a dataset in one call
///
/// ```
/// let d = datastats::stats::describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(d.count, 5);
/// assert_eq!(d.q1, 2.0);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    let mut stats = DataStats::new();
    stats.assign(data);
    stats.describe()
}
