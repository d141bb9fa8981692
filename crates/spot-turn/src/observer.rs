//! Replay observer trait for progress reporting and data collection.

use spot_core::Step;
use spot_grid::Grid;

/// Callbacks invoked by [`run_to_completion`][crate::run_to_completion].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move counter
///
/// ```rust,ignore
/// struct MoveCounter { turns: usize }
///
/// impl TurnObserver for MoveCounter {
///     fn on_turn_end(&mut self, _step: Step, moved: bool) {
///         if moved {
///             self.turns += 1;
///         }
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called before each call to [`advance`][crate::advance].  `step` is the
    /// step the turn would produce.
    fn on_turn_start(&mut self, _step: Step) {}

    /// Called after each call to `advance`.  The last call of a replay has
    /// `moved == false`.
    fn on_turn_end(&mut self, _step: Step, _moved: bool) {}

    /// Called with the grid at step 0 and after every turn that moved someone.
    fn on_snapshot(&mut self, _step: Step, _grid: &Grid) {}

    /// Called once after the grid is drained.
    fn on_replay_end(&mut self, _final_step: Step) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
