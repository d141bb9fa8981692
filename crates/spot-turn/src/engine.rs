//! The turn engine.

use spot_grid::Grid;
use tracing::trace;

use crate::{TurnError, TurnResult};

/// Advance every person by one queued move, in place.
///
/// Returns `true` if at least one person still had a move to consume.  On a
/// fully drained grid this returns `false` and touches nothing.
///
/// Every head move is checked before any is applied, so an
/// [`TurnError::InvalidDirection`] leaves the grid exactly as it was.
pub fn advance(grid: &mut Grid) -> TurnResult<bool> {
    for person in grid.people() {
        if let Some(direction) = person.trajectory.front() {
            if !direction.is_specified() {
                return Err(TurnError::InvalidDirection { person: person.id, direction });
            }
        }
    }

    let mut moved = 0usize;
    for person in grid.people_mut() {
        let Some(direction) = person.trajectory.front() else {
            continue;
        };
        let Some(next) = person.position.step(direction) else {
            return Err(TurnError::InvalidDirection { person: person.id, direction });
        };
        person.position = next;
        person.trajectory.pop_front();
        moved += 1;
    }

    trace!(moved, "turn applied");
    Ok(moved > 0)
}
