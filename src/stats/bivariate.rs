//! Covariance and Pearson correlation of paired samples.
//!
//! Both operate directly on the borrowed slices, reusing the moment helpers
//! the single-dataset engine uses, so no engine state is touched.

use super::moments;

fn is_valid_pair(x: &[f64], y: &[f64]) -> bool {
    x.len() >= 2 && x.len() == y.len()
}

/// Sample covariance `Σ(x-x̄)(y-ȳ)/(n-1)`.
///
/// Returns 0 unless both inputs have the same length of at least two.
pub fn covariance(x: &[f64], y: &[f64]) -> f64 {
    if !is_valid_pair(x, y) {
        log::debug!("covariance needs two equal-length samples, got {} and {}", x.len(), y.len());
        return 0.0;
    }

    let mean_x = moments::mean(x);
    let mean_y = moments::mean(y);

    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    sum / (x.len() - 1) as f64
}

/// Pearson's r, `cov(x, y) / (std(x) · std(y))`.
///
/// Returns 0 for invalid pairs and when either sample has zero spread.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if !is_valid_pair(x, y) {
        log::debug!("correlation needs two equal-length samples, got {} and {}", x.len(), y.len());
        return 0.0;
    }

    let std_x = moments::std_dev(x);
    let std_y = moments::std_dev(y);
    if std_x == 0.0 || std_y == 0.0 {
        return 0.0;
    }

    covariance(x, y) * (1.0 / std_x) * (1.0 / std_y)
}
