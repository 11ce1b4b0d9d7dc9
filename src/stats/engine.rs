use num_traits::NumCast;

use super::cache::Cached;
use super::interval::{self, ConfidenceInterval};
use super::{mode, moments, order, DescriptiveStats, Fences};
use crate::config::StatsConfig;
use crate::error::{Error, Result};

/// Descriptive statistics over one assigned numeric dataset.
///
/// Assign data once with [`DataStats::assign`], then query as often as
/// needed. Min, max, mean, standard deviation, median and mode are cached and
/// only recomputed after the next successful assignment; the rest are cheap
/// or infrequent and computed on every call.
///
/// ```
/// use datastats::DataStats;
///
/// let mut stats = DataStats::new();
/// stats.assign(&[1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// assert_eq!(stats.mean(), 3.0);
/// assert_eq!(stats.median(), 3.0);
/// assert_eq!(stats.quantiles(0.25), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone)]
pub struct DataStats {
    data: Vec<f64>,
    config: StatsConfig,

    min: Cached<f64>,
    max: Cached<f64>,
    mean: Cached<f64>,
    std: Cached<f64>,
    median: Cached<f64>,
    mode: Cached<f64>,

    // bumped by every accepted assignment
    generation: u64,
}

impl Default for DataStats {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStats {
    /// Engine with an empty dataset and the default configuration
    pub fn new() -> Self {
        Self::build(StatsConfig::default())
    }

    /// Engine with an empty dataset and a custom configuration.
    ///
    /// Fails with [`Error::InvalidValue`] when the configuration does not
    /// pass [`StatsConfig::validate`].
    pub fn with_config(config: StatsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StatsConfig) -> Self {
        DataStats {
            data: Vec::new(),
            config,
            min: Cached::new(),
            max: Cached::new(),
            mean: Cached::new(),
            std: Cached::new(),
            median: Cached::new(),
            mode: Cached::new(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Number of values in the current dataset
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of accepted assignments so far. Ignored (empty) assignments
    /// leave it unchanged.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the dataset with a copy of `data` and invalidate every cached
    /// statistic. Empty input is ignored and leaves the engine untouched.
    pub fn assign<T: AsRef<[f64]>>(&mut self, data: T) {
        let data = data.as_ref();
        if data.is_empty() {
            log::debug!("ignoring empty dataset assignment");
            return;
        }

        self.data = data.to_vec();
        self.generation += 1;
        self.invalidate_all();
        log::debug!("assigned dataset of {} values", self.data.len());
    }

    /// Like [`assign`](Self::assign), treating `None` as an absent dataset
    pub fn assign_opt(&mut self, data: Option<&[f64]>) {
        if let Some(data) = data {
            self.assign(data);
        } else {
            log::debug!("ignoring absent dataset assignment");
        }
    }

    /// Assign any numeric values castable to `f64`, skipping those that are not
    pub fn assign_numeric<T: NumCast + Copy>(&mut self, data: &[T]) {
        let values: Vec<f64> = data.iter().filter_map(|&v| <f64 as NumCast>::from(v)).collect();
        if values.len() < data.len() {
            log::warn!(
                "skipped {} values that could not be represented as f64",
                data.len() - values.len()
            );
        }
        self.assign(values);
    }

    fn invalidate_all(&mut self) {
        self.min.invalidate();
        self.max.invalidate();
        self.mean.invalidate();
        self.std.invalidate();
        self.median.invalidate();
        self.mode.invalidate();
    }

    /// Smallest value, 0 for an empty dataset
    pub fn min(&mut self) -> f64 {
        let data = &self.data;
        self.min.get_or_compute("min", || order::min(data))
    }

    /// Largest value, 0 for an empty dataset
    pub fn max(&mut self) -> f64 {
        let data = &self.data;
        self.max.get_or_compute("max", || order::max(data))
    }

    /// Arithmetic mean, 0 for an empty dataset
    pub fn mean(&mut self) -> f64 {
        let data = &self.data;
        self.mean.get_or_compute("mean", || moments::mean(data))
    }

    /// Geometric mean; NaN when the product of the values is negative
    pub fn geometric_mean(&self) -> f64 {
        moments::geometric_mean(&self.data)
    }

    /// Harmonic mean, ignoring the reciprocal of values at or near zero
    pub fn harmonic_mean(&self) -> f64 {
        moments::harmonic_mean(&self.data, self.config.harmonic_epsilon)
    }

    /// Sample standard deviation, 0 for fewer than two values
    pub fn std(&mut self) -> f64 {
        let data = &self.data;
        self.std.get_or_compute("std", || moments::std_dev(data))
    }

    /// Coefficient of variation in percent
    pub fn cv(&mut self) -> f64 {
        100.0 * self.std() / self.mean()
    }

    pub fn median(&mut self) -> f64 {
        let data = &self.data;
        self.median.get_or_compute("median", || order::median(data))
    }

    /// Most frequent value, earliest first on ties; 0 for an empty dataset
    pub fn mode(&mut self) -> f64 {
        let data = &self.data;
        self.mode.get_or_compute("mode", || mode::mode(data))
    }

    /// `[min, Q1, median, Q3, max]`, empty when there is no data
    pub fn five_number_summary(&self) -> Vec<f64> {
        order::five_number_summary(&self.data)
    }

    /// IQR-based outlier fences derived from the five-number summary
    pub fn fences(&self) -> Fences {
        let summary = self.five_number_summary();
        if summary.is_empty() {
            return Fences::default();
        }
        let (q1, q3) = (summary[1], summary[3]);
        let spread = self.config.fence_multiplier * (q3 - q1);
        Fences {
            lower: q1 - spread,
            upper: q3 + spread,
        }
    }

    /// Quantile sequence for fraction `p` (0.25 → quartiles, 0.2 → quintiles).
    ///
    /// An invalid `p` falls back to the configured default. The result starts
    /// with the minimum and ends with the maximum; it is empty for fewer than
    /// two values.
    pub fn quantiles(&self, p: f64) -> Vec<f64> {
        let p = order::quantile_fraction(p, &self.config);
        order::quantiles(&self.data, p, self.config.quantile_tolerance)
    }

    /// Symmetric interval `mean ± t·std/sqrt(n)` for confidence factor `t`
    pub fn confidence_interval(&mut self, t: f64) -> ConfidenceInterval {
        let n = self.data.len();
        if n == 0 {
            return ConfidenceInterval::default();
        }
        let t = interval::confidence_factor(t, &self.config);
        let (mean, std) = (self.mean(), self.std());
        interval::confidence_interval(n, mean, std, t)
    }

    /// Adjusted sample skewness, 0 for fewer than three values or constant data
    pub fn skewness(&mut self) -> f64 {
        if self.data.len() < 3 {
            return 0.0;
        }
        let (mean, std) = (self.mean(), self.std());
        moments::skewness(&self.data, mean, std)
    }

    /// Excess kurtosis, 0 for fewer than four values or constant data
    pub fn kurtosis(&mut self) -> f64 {
        if self.data.len() < 4 {
            return 0.0;
        }
        let (mean, std) = (self.mean(), self.std());
        moments::kurtosis(&self.data, mean, std)
    }

    /// Snapshot of the common statistics of the current dataset
    pub fn describe(&mut self) -> Result<DescriptiveStats> {
        if self.data.is_empty() {
            return Err(Error::EmptyData("no dataset has been assigned".into()));
        }

        let summary = self.five_number_summary();
        Ok(DescriptiveStats {
            count: self.data.len(),
            min: self.min(),
            q1: summary[1],
            median: self.median(),
            q3: summary[3],
            max: self.max(),
            mean: self.mean(),
            std: self.std(),
            cv: self.cv(),
            mode: self.mode(),
            skewness: self.skewness(),
            kurtosis: self.kurtosis(),
        })
    }

    #[cfg(test)]
    pub(crate) fn stale_flags(&self) -> [bool; 6] {
        [
            self.min.is_stale(),
            self.max.is_stale(),
            self.mean.is_stale(),
            self.std.is_stale(),
            self.median.is_stale(),
            self.mode.is_stale(),
        ]
    }
}
