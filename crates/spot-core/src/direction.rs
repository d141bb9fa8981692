//! The move vocabulary: four cardinal directions plus an `Unspecified` guard.

use std::fmt;

/// One queued move of a person.
///
/// `Unspecified` exists only as the `Default` value so that an uninitialised
/// move is visibly invalid.  It never appears in a committed trajectory; the
/// turn engine treats it as a corrupted queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MoveDirection {
    #[default]
    Unspecified,
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Every concrete direction, in declaration order.
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// `false` only for the `Unspecified` sentinel.
    #[inline]
    pub fn is_specified(self) -> bool {
        self != MoveDirection::Unspecified
    }

    /// `(dx, dy)` applied by one move.  UP increments y, RIGHT increments x.
    ///
    /// Returns `None` for `Unspecified`.
    #[inline]
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            MoveDirection::Up          => Some((0, 1)),
            MoveDirection::Down        => Some((0, -1)),
            MoveDirection::Left        => Some((-1, 0)),
            MoveDirection::Right       => Some((1, 0)),
            MoveDirection::Unspecified => None,
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveDirection::Up          => "UP",
            MoveDirection::Down        => "DOWN",
            MoveDirection::Left        => "LEFT",
            MoveDirection::Right       => "RIGHT",
            MoveDirection::Unspecified => "UNSPECIFIED",
        };
        f.write_str(s)
    }
}
