//! Replay time model.
//!
//! Time is a plain counter of consumed moves.  `Step(0)` is the starting
//! position; `Step(k)` is the state after the `k`-th turn.  The occupancy
//! registries are indexed by the same counter.

use std::fmt;

/// An absolute time-step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u32);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u32) -> Step {
        Step(self.0 + rhs)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
