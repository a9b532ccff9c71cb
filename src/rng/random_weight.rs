use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform source used to initialize weight values that were not supplied
/// explicitly.
///
/// The generator is created on the first draw. `new()` seeds it from OS
/// entropy; `seeded()` makes every draw reproducible.
#[derive(Debug, Clone, Default)]
pub struct RandomWeight {
    seed: Option<u64>,
    rng: Option<StdRng>,
}

impl RandomWeight {
    pub fn new() -> RandomWeight {
        RandomWeight { seed: None, rng: None }
    }

    pub fn seeded(seed: u64) -> RandomWeight {
        RandomWeight { seed: Some(seed), rng: None }
    }

    /// Draws a value from `[origin, bound)`.
    ///
    /// A draw that rounds up to `bound` is clamped to the closest
    /// representable value below it. An empty range, a NaN endpoint or a span
    /// too wide to represent returns `origin` without drawing.
    pub fn next_f64(&mut self, origin: f64, bound: f64) -> f64 {
        let span = bound - origin;
        if !span.is_finite() || span <= 0.0 {
            return origin;
        }
        let r = self.generator().gen::<f64>() * span + origin;
        if r >= bound { bound.next_down() } else { r }
    }

    /// Draws from the default weight range `[0, 1)`.
    pub fn next_weight(&mut self) -> f64 {
        self.next_f64(0.0, 1.0)
    }

    fn generator(&mut self) -> &mut StdRng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_half_open_range() {
        let mut rng = RandomWeight::seeded(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64(-0.5, 0.5);
            assert!(v >= -0.5 && v < 0.5);
        }
        for _ in 0..10_000 {
            let v = rng.next_weight();
            assert!(v >= 0.0 && v < 1.0);
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomWeight::seeded(42);
        let mut b = RandomWeight::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_weight(), b.next_weight());
        }
    }

    #[test]
    fn entropy_source_draws_lazily() {
        let mut rng = RandomWeight::new();
        assert!(rng.rng.is_none());
        let v = rng.next_f64(2.0, 3.0);
        assert!(rng.rng.is_some());
        assert!(v >= 2.0 && v < 3.0);
    }

    #[test]
    fn degenerate_ranges_return_origin() {
        let mut rng = RandomWeight::seeded(3);
        assert_eq!(rng.next_f64(0.5, 0.5), 0.5);
        assert_eq!(rng.next_f64(2.0, 1.0), 2.0);
        assert_eq!(rng.next_f64(-f64::MAX, f64::MAX), -f64::MAX);
        assert!(rng.next_f64(f64::NAN, 1.0).is_nan());
        assert!(rng.rng.is_none());
    }

    #[test]
    fn tiny_range_never_returns_bound() {
        let origin = 1.0;
        let bound = 1.0 + f64::EPSILON;
        let mut rng = RandomWeight::seeded(7);
        for _ in 0..1000 {
            let v = rng.next_f64(origin, bound);
            assert!(v >= origin && v < bound);
        }
    }
}
