//! Pinned, seedable random source for reproducible posters.
//!
//! Every randomized step of generation (palette channels, layer placement,
//! blob perturbation) draws from one explicit [`RandomSource`] that the
//! composer creates and seeds per call. The concrete generator is
//! [`Xorshift64`], which is pure integer arithmetic and therefore produces the
//! same stream on every platform and in any language that reimplements it.

/// A stream of uniform random numbers.
///
/// Only [`next_f64`](RandomSource::next_f64) is required; `uniform` and
/// `index` are defined on top of it (or on the raw integer stream) so that the
/// number of draws per call is fixed: each method consumes exactly one value.
pub trait RandomSource {
    /// Returns a uniformly distributed f64 in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed f64 in [min, max).
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed index in [0, n).
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    fn index(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

/// Xorshift64 generator with shift triple (13, 7, 17).
///
/// A state of 0 is a fixed point of xorshift, so a zero seed is replaced by
/// [`Xorshift64::FALLBACK_SEED`].
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Replacement state for a zero seed.
    pub const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator whose state is exactly `seed` (or the fallback for 0).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a generator from a user-facing seed.
    ///
    /// The seed passes through one SplitMix64 round first. Raw xorshift states
    /// with few set bits (the small seeds a user types) produce near-zero
    /// leading outputs; the scramble spreads them over the whole state space.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(splitmix64(seed))
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Modulo reduction of the raw 64-bit value. The bias for small `n` is
    /// negligible at this state width.
    fn index(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// One round of SplitMix64 (Steele, Lea, Flood 2014).
pub fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
