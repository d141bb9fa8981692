//! Plain data row types written by output backends.

use spot_grid::PersonKind;

/// One person's state at a given time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonSnapshotRow {
    pub person_id:       u32,
    pub kind:            PersonKind,
    pub step:            u32,
    pub x:               i32,
    pub y:               i32,
    /// Moves still queued after this step.
    pub remaining_moves: u32,
}

/// Outcome of one call to `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummaryRow {
    pub step:  u32,
    pub moved: bool,
}
