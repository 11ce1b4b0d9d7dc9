use std::collections::HashMap;

/// Grouping key for a value: `-0.0` folds into `0.0` and every NaN shares a key.
fn canonical_key(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

/// Most frequent value, ties broken by first appearance; 0 when empty.
pub(crate) fn mode(data: &[f64]) -> f64 {
    // (representative value, count) in first-seen order
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut slots: HashMap<u64, usize> = HashMap::new();

    for &x in data {
        let slot = *slots.entry(canonical_key(x)).or_insert_with(|| {
            counts.push((x, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let mut best: Option<(f64, usize)> = None;
    for &(value, count) in &counts {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_basic() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0]), 1.0);
        assert_eq!(mode(&[3.0, 2.0, 2.0, 3.0, 2.0]), 2.0);
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(&[]), 0.0);
    }

    #[test]
    fn test_mode_tie_prefers_first_seen() {
        assert_eq!(mode(&[9.0, 4.0, 4.0, 9.0]), 9.0);
        assert_eq!(mode(&[5.0, 6.0, 7.0]), 5.0);
    }

    #[test]
    fn test_mode_signed_zero_grouped() {
        assert_eq!(mode(&[1.0, -0.0, 0.0, 1.0, 0.0]), 0.0);
    }
}
