//! Deterministic RNG based on splitmix64. One instance per generation call,
//! never shared, so identical inputs always carve identical mazes.

const SALT_TEXT: u64 = 0x6D41_2E5E_ED00_0001;

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Fold a text seed into a numeric one, byte by byte.
pub fn hash_text(text: &str) -> u64 {
    text.bytes()
        .fold(SALT_TEXT, |h, b| splitmix64(h ^ b as u64))
}

/// Simple sequential RNG for the growth loop.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = splitmix64(self.state);
        self.state
    }

    /// Uniform-ish integer in `[0, max)`. `max` must be non-zero.
    pub fn below(&mut self, max: usize) -> usize {
        debug_assert!(max > 0);
        (self.next_u64() % max as u64) as usize
    }

    /// True with probability `num / den`.
    pub fn chance(&mut self, num: usize, den: usize) -> bool {
        self.below(den) < num
    }
}
