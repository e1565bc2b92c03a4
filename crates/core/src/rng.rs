//! RNG module - seeded random source for the spawner
//!
//! A small LCG keeps sessions reproducible: two sessions built from the same
//! seed spawn the same kind/rotation sequence. Ranges are drawn from the high
//! bits because the low bits of a power-of-two LCG cycle with short periods
//! (the lowest two repeat every 4 draws, which would make rotations periodic).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Random boolean that is true with probability `num / den`
    pub fn chance(&mut self, num: u32, den: u32) -> bool {
        self.next_range(den) < num
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
