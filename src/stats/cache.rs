/// A derived value paired with a staleness flag.
///
/// The value is only trusted while the flag is clear. `invalidate` marks it
/// stale; the next `get_or_compute` recomputes and clears the flag.
#[derive(Debug, Clone)]
pub(crate) struct Cached<T> {
    value: T,
    stale: bool,
}

impl<T: Copy + Default> Cached<T> {
    /// A stale entry holding the default value
    pub(crate) fn new() -> Self {
        Cached {
            value: T::default(),
            stale: true,
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.stale = true;
    }

    #[cfg(test)]
    pub(crate) fn is_stale(&self) -> bool {
        self.stale
    }

    /// Return the cached value, recomputing it first if stale
    pub(crate) fn get_or_compute<F>(&mut self, name: &str, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        if self.stale {
            log::trace!("recomputing cached {}", name);
            self.value = compute();
            self.stale = false;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_starts_stale_with_default() {
        let cached: Cached<f64> = Cached::new();
        assert!(cached.is_stale());
    }

    #[test]
    fn test_computes_once_until_invalidated() {
        let calls = Cell::new(0);
        let mut cached: Cached<f64> = Cached::new();

        let compute = || {
            calls.set(calls.get() + 1);
            42.0
        };
        assert_eq!(cached.get_or_compute("x", compute), 42.0);
        assert_eq!(cached.get_or_compute("x", compute), 42.0);
        assert_eq!(calls.get(), 1);
        assert!(!cached.is_stale());

        cached.invalidate();
        assert_eq!(cached.get_or_compute("x", || 7.0), 7.0);
    }
}
