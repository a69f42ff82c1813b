use core::num::NonZeroUsize;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed numbers in `[0, 1)`.
pub trait RandomSource {
    /// The next draw. Implementations should stay in `[0, 1)`;
    /// [`select_index`] clamps anything that does not.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

impl RngSource<ThreadRng> {
    /// Draws from the thread-local generator, seeded by the OS.
    #[must_use]
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// A reproducible generator for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Always returns the same draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Replays a list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct DrawSequence {
    draws: Vec<f64>,
    next: usize,
}

impl DrawSequence {
    /// Replay `draws` in order. An empty list always draws `0.0`.
    #[must_use]
    pub const fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomSource for DrawSequence {
    fn next_unit(&mut self) -> f64 {
        let Some(&draw) = self.draws.get(self.next) else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.draws.len();
        draw
    }
}

/// Map a unit draw onto `[0, len)` as `floor(draw * len)`.
///
/// A misbehaving source is clamped: NaN and negative draws select the first
/// index, draws at or above `1.0` select the last.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn select_index(draw: f64, len: NonZeroUsize) -> usize {
    let last = len.get() - 1;
    if draw.is_nan() || draw <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate, so huge draws land on usize::MAX before the clamp.
    let index = (draw * len.get() as f64).floor() as usize;
    index.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(len: usize) -> NonZeroUsize {
        NonZeroUsize::new(len).unwrap()
    }

    #[test]
    fn test_floor_mapping() {
        assert_eq!(select_index(0.0, n(2)), 0);
        assert_eq!(select_index(0.499, n(2)), 0);
        assert_eq!(select_index(0.5, n(2)), 1);
        assert_eq!(select_index(0.999, n(2)), 1);
        assert_eq!(select_index(0.74, n(4)), 2);
    }

    #[test]
    fn test_out_of_range_draws_are_clamped() {
        assert_eq!(select_index(1.0, n(3)), 2);
        assert_eq!(select_index(7.5, n(3)), 2);
        assert_eq!(select_index(-0.2, n(3)), 0);
        assert_eq!(select_index(f64::NAN, n(3)), 0);
        assert_eq!(select_index(f64::INFINITY, n(3)), 2);
    }

    #[test]
    fn test_single_element_always_zero() {
        for draw in [0.0, 0.3, 0.999_999] {
            assert_eq!(select_index(draw, n(1)), 0);
        }
    }

    #[test]
    fn test_rng_source_stays_in_unit_interval() {
        let mut source = RngSource::seeded(7);
        for _ in 0..10_000 {
            let draw = source.next_unit();
            assert!((0.0..1.0).contains(&draw), "{draw}");
        }
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..100 {
            assert!((a.next_unit() - b.next_unit()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_draw_sequence_wraps() {
        let mut seq = DrawSequence::new(vec![0.1, 0.9]);
        let draws: Vec<f64> = (0..4).map(|_| seq.next_unit()).collect();
        assert_eq!(draws, vec![0.1, 0.9, 0.1, 0.9]);
        assert!(DrawSequence::new(Vec::new()).next_unit().abs() < f64::EPSILON);
    }
}
