//! Fixed-length move sequences.
//!
//! A `Trajectory` is built once (preset or sampled) and then only ever
//! consumed from the front by the turn engine.  Its identity for uniqueness
//! checks is the ordered sequence of directions, so `Eq`/`Hash` are derived
//! straight from the underlying queue.

use std::collections::VecDeque;

use crate::{MoveDirection, Position};

/// An ordered FIFO queue of moves.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    moves: VecDeque<MoveDirection>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_moves<I: IntoIterator<Item = MoveDirection>>(moves: I) -> Self {
        Self { moves: moves.into_iter().collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The next queued move, if any.
    #[inline]
    pub fn front(&self) -> Option<MoveDirection> {
        self.moves.front().copied()
    }

    /// Remove and return the next queued move.
    #[inline]
    pub fn pop_front(&mut self) -> Option<MoveDirection> {
        self.moves.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        self.moves.iter().copied()
    }

    /// Copy of the remaining moves in order.
    pub fn to_vec(&self) -> Vec<MoveDirection> {
        self.moves.iter().copied().collect()
    }

    /// Per-direction move counts.
    pub fn counts(&self) -> MoveCounts {
        let mut counts = MoveCounts::default();
        for m in &self.moves {
            match m {
                MoveDirection::Up          => counts.up += 1,
                MoveDirection::Down        => counts.down += 1,
                MoveDirection::Left        => counts.left += 1,
                MoveDirection::Right       => counts.right += 1,
                MoveDirection::Unspecified => {}
            }
        }
        counts
    }

    /// Positions at every time step `0..=len` when replayed from `start`.
    ///
    /// Element 0 is `start`; element `k` is the position after the first `k`
    /// moves.  Returns `None` if any move is `Unspecified`.
    pub fn path_from(&self, start: Position) -> Option<Vec<Position>> {
        let mut path = Vec::with_capacity(self.moves.len() + 1);
        let mut here = start;
        path.push(here);
        for &m in &self.moves {
            here = here.step(m)?;
            path.push(here);
        }
        Some(path)
    }
}

impl FromIterator<MoveDirection> for Trajectory {
    fn from_iter<I: IntoIterator<Item = MoveDirection>>(iter: I) -> Self {
        Self::from_moves(iter)
    }
}

/// How many moves of each direction a trajectory holds.
///
/// Placement reserves `left` cells of margin on the low x side and `right`
/// on the high side (likewise `down`/`up` for y), which keeps the replayed
/// path inside the grid whatever the move order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct MoveCounts {
    pub up:    u32,
    pub down:  u32,
    pub left:  u32,
    pub right: u32,
}
