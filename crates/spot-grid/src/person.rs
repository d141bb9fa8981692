//! A person on the grid.

use std::fmt;

use spot_core::{PersonId, Position, Trajectory};

/// Whether a person is the single indigenous one or one of the aliens.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PersonKind {
    Indigenous,
    Alien,
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonKind::Indigenous => f.write_str("indigenous"),
            PersonKind::Alien      => f.write_str("alien"),
        }
    }
}

/// Full state of one person.
///
/// `trajectory` is the queue of moves still to play; the turn engine pops
/// from its front and updates `position` in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id:         PersonId,
    pub kind:       PersonKind,
    /// HSL color string derived from placement order.
    pub color:      String,
    pub trajectory: Trajectory,
    pub position:   Position,
}

impl Person {
    #[inline]
    pub fn is_indigenous(&self) -> bool {
        self.kind == PersonKind::Indigenous
    }

    /// `true` while at least one move is queued.
    #[inline]
    pub fn has_moves(&self) -> bool {
        !self.trajectory.is_empty()
    }
}
