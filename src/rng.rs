//! Seeded random stream
//!
//! Mulberry32 with wrapping 32-bit arithmetic. The exact bit pattern matters:
//! a paint with a given seed must produce the same flecks in every runtime
//! that implements the same generator, so nothing here may be swapped for a
//! "better" RNG.

use rand::{RngCore, SeedableRng};

/// Added to the state on every step
const INCREMENT: u32 = 0x6D2B_79F5;
/// 2^32, maps a u32 output onto [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;

/// Deterministic random stream, created fresh for each paint call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomStream {
    state: u32,
}

impl RandomStream {
    /// Create a stream from a signed 32-bit seed
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    /// Advance the state and return the raw 32-bit output
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Uniform value in [0, 1)
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.next_raw() as f64 / U32_RANGE
    }

    /// Uniform value in `[min, max)`
    ///
    /// The upper bound is best-effort: for wide ranges floating rounding can
    /// land exactly on `max`. `sample(x, x)` always returns `x`.
    #[inline]
    pub fn sample(&mut self, min: f64, max: f64) -> f64 {
        self.unit() * (max - min) + min
    }
}

impl RngCore for RandomStream {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_raw() as u64;
        let hi = self.next_raw() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for RandomStream {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }
}
