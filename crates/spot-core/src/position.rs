//! Grid offsets.

use std::fmt;

use crate::MoveDirection;

/// A cell on the grid, `(x, y)` with `0 <= x < width` and `0 <= y < height`
/// for every committed person at every time step.
///
/// Signed so that applying a delta can never wrap; bounds are guaranteed by
/// placement, not by this type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position reached after one move in `direction`.
    ///
    /// Returns `None` for `MoveDirection::Unspecified`.
    #[inline]
    pub fn step(self, direction: MoveDirection) -> Option<Position> {
        let (dx, dy) = direction.delta()?;
        Some(Position::new(self.x + dx, self.y + dy))
    }

    /// `true` if the position lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn within(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i64) < width as i64 && (self.y as i64) < height as i64
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
