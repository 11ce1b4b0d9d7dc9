//! Moment statistics over a borrowed slice.
//!
//! These are plain functions so that both the caching engine and the
//! stateless bivariate helpers share the exact same arithmetic.

/// Arithmetic mean, 0 when empty
pub(crate) fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// n-th root of the product. A negative product yields NaN, which is passed
/// through unchanged.
pub(crate) fn geometric_mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let product: f64 = data.iter().product();
    product.powf(1.0 / data.len() as f64)
}

/// `n / Σ(1/x)`, where values with `|x| <= epsilon` contribute 0 to the sum.
pub(crate) fn harmonic_mean(data: &[f64], epsilon: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let reciprocal_sum: f64 = data
        .iter()
        .map(|&x| if x.abs() > epsilon { 1.0 / x } else { 0.0 })
        .sum();
    data.len() as f64 / reciprocal_sum
}

/// Sample standard deviation (n - 1 denominator) by Welford's method.
///
/// 0 for fewer than two values.
pub(crate) fn std_dev(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }

    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += (x - mean) * delta;
    }

    (m2 / (n - 1) as f64).sqrt()
}

/// Adjusted sample skewness given precomputed mean and std; 0 for n < 3 or
/// zero spread.
pub(crate) fn skewness(data: &[f64], mean: f64, std: f64) -> f64 {
    let n = data.len();
    if n < 3 || std == 0.0 {
        return 0.0;
    }
    let nf = n as f64;

    let cubes: f64 = data.iter().map(|&x| (x - mean).powi(3)).sum();
    let multiplier = (nf * (nf - 1.0)).sqrt() / (nf - 2.0);

    multiplier * (cubes / nf) / std.powi(3)
}

/// Bias-corrected excess kurtosis given precomputed mean and std; 0 for n < 4
/// or zero spread.
pub(crate) fn kurtosis(data: &[f64], mean: f64, std: f64) -> f64 {
    let n = data.len();
    if n < 4 || std == 0.0 {
        return 0.0;
    }
    let nf = n as f64;
    let (n1, n2, n3) = (nf - 1.0, nf - 2.0, nf - 3.0);

    let fourths: f64 = data.iter().map(|&x| (x - mean).powi(4)).sum();
    let a = (nf * (nf + 1.0) * fourths) / (n1 * n2 * n3 * std.powi(4));
    let b = 3.0 * n1 * n1 / (n2 * n3);

    a - b
}
