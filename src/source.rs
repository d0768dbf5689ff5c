//! External collaborators consumed by the effect engine
//!
//! Effects never read ambient time or randomness. A [`Clock`] and a
//! [`RandomSource`] are injected by the caller, so tests can drive the
//! engine with synthetic timestamps and scripted random values.

use embassy_time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;
}

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Random value in `[lo, hi)`, or `lo` when the interval is empty
    fn random8(&mut self, lo: u8, hi: u8) -> u8;

    /// Random value in `[lo, hi)`, or `lo` when the interval is empty
    fn random16(&mut self, lo: u16, hi: u16) -> u16;

    /// Mix external entropy into the generator state
    fn add_entropy(&mut self, entropy: u16);
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Random source backed by [`fastrand::Rng`]
#[derive(Debug, Clone)]
pub struct FastRandom {
    rng: fastrand::Rng,
}

impl FastRandom {
    /// Create a generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl RandomSource for FastRandom {
    fn random8(&mut self, lo: u8, hi: u8) -> u8 {
        if hi <= lo {
            return lo;
        }
        self.rng.u8(lo..hi)
    }

    fn random16(&mut self, lo: u16, hi: u16) -> u16 {
        if hi <= lo {
            return lo;
        }
        self.rng.u16(lo..hi)
    }

    fn add_entropy(&mut self, entropy: u16) {
        let seed = self.rng.get_seed() ^ u64::from(entropy).rotate_left(17);
        self.rng.seed(seed);
    }
}
