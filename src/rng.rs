//! RNG module - deterministic piece generation
//!
//! A small seedable LCG drives uniform, independent piece draws: every draw
//! picks one of the seven kinds with equal probability and no bag or
//! history balancing. Same seed, same sequence, end to end.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    /// A seed of 0 is replaced with 1
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    /// Create a new piece source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
