//! Order statistics: extremes, median, five-number summary and quantiles.
//!
//! All functions work on a borrowed slice and never mutate it; those that need
//! ordered data sort a working copy.

use std::cmp::Ordering;

use crate::config::StatsConfig;

/// Ascending copy of `data`
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Smallest value by linear scan, 0 when empty
pub(crate) fn min(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .reduce(|acc, x| if x < acc { x } else { acc })
        .unwrap_or(0.0)
}

/// Largest value by linear scan, 0 when empty
pub(crate) fn max(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .reduce(|acc, x| if x > acc { x } else { acc })
        .unwrap_or(0.0)
}

/// Median of already-sorted data, 0 when empty.
///
/// Even length averages the elements at `n/2 - 1` and `n/2`; odd length
/// takes the element at `(n+1)/2 - 1`.
pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        let m = n / 2 - 1;
        0.5 * (sorted[m] + sorted[m + 1])
    } else {
        sorted[(n + 1) / 2 - 1]
    }
}

/// Median of unsorted data
pub(crate) fn median(data: &[f64]) -> f64 {
    median_sorted(&sorted_copy(data))
}

/// `[min, Q1, median, Q3, max]`, or an empty vector for empty data.
///
/// For odd counts the median datum belongs to both halves; for even counts
/// the halves are disjoint.
pub(crate) fn five_number_summary(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![data[0]; 5],
        _ => {}
    }

    let sorted = sorted_copy(data);
    let med = median_sorted(&sorted);

    let (lower, upper) = if n % 2 == 0 {
        sorted.split_at(n / 2)
    } else {
        let m = (n + 1) / 2 - 1;
        (&sorted[..=m], &sorted[m..])
    };

    vec![
        sorted[0],
        median_sorted(lower),
        med,
        median_sorted(upper),
        sorted[n - 1],
    ]
}

/// Quantile fraction, replaced by the default when NaN or out of range
pub(crate) fn quantile_fraction(p: f64, config: &StatsConfig) -> f64 {
    let [lo, hi] = config.quantile_range;
    if p.is_nan() || p < lo || p > hi {
        log::debug!("quantile fraction {} out of range, using {}", p, config.default_quantile);
        return config.default_quantile;
    }
    p
}

/// Interpolated quantile sequence for a fraction `p` already validated to lie
/// in `(0, 1)`.
///
/// Returns `floor(1/p) + 1` values starting with the minimum and ending with
/// the maximum, or an empty vector when fewer than two points are available.
/// Interior points sit on a uniform grid `i/(n-1)` over the sorted data; a
/// quantile within `tolerance` of a grid point takes that datum directly,
/// otherwise it is interpolated linearly between neighbours.
pub(crate) fn quantiles(data: &[f64], p: f64, tolerance: f64) -> Vec<f64> {
    let n = data.len();
    if n < 2 {
        return Vec::new();
    }

    let count = (1.0 / p).floor() as usize;
    let sorted = sorted_copy(data);
    let last = (n - 1) as f64;
    let grid = |i: usize| i as f64 / last;

    let mut out = Vec::with_capacity(count + 1);
    out.push(sorted[0]);

    for i in 1..count {
        let q = i as f64 * p;
        // q < 1, so r <= n - 2 and r + 1 stays in bounds
        let r = ((q * last).floor() as usize).min(n - 2);
        let fr = grid(r);

        if (fr - q).abs() < tolerance {
            out.push(sorted[r]);
        } else {
            let t = (q - fr) / (grid(r + 1) - fr);
            out.push((1.0 - t) * sorted[r] + t * sorted[r + 1]);
        }
    }

    out.push(sorted[n - 1]);
    out
}
