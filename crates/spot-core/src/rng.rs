//! Seeded RNG wrapper for grid generation.
//!
//! The engine never touches a global random source.  Callers build a
//! `GridRng` from a seed (or any other `rand::Rng`) and pass it by `&mut`
//! into the grid builder, so the same seed always produces the same grid.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Deterministic RNG for one build.
///
/// Used only in single-threaded contexts.  Concurrent builds each need their
/// own instance.
pub struct GridRng(SmallRng);

impl GridRng {
    pub fn new(seed: u64) -> Self {
        GridRng(SmallRng::seed_from_u64(seed))
    }
}

impl RngCore for GridRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
