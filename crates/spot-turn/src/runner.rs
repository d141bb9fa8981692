//! Replay loop.

use spot_core::Step;
use spot_grid::Grid;

use crate::{advance, TurnObserver, TurnResult};

/// Call [`advance`] until no person has a move left.
///
/// Returns the last step reached, which equals the level's move count for a
/// freshly built grid and `Step(0)` for one that is already drained.
pub fn run_to_completion<O: TurnObserver>(grid: &mut Grid, observer: &mut O) -> TurnResult<Step> {
    let mut step = Step::ZERO;
    observer.on_snapshot(step, grid);

    loop {
        let next = step.next();
        observer.on_turn_start(next);
        let moved = advance(grid)?;
        observer.on_turn_end(next, moved);
        if !moved {
            break;
        }
        step = next;
        observer.on_snapshot(step, grid);
    }

    observer.on_replay_end(step);
    Ok(step)
}
