//! `spot-turn` — advances a built grid one move per person per turn.
//!
//! # Turn
//!
//! ```text
//! advance(grid):
//!   ① Check   — every queued head move must be a concrete direction
//!   ② Apply   — for each person (aliens, then indigenous) with a queued move:
//!                 position += delta(head); pop head
//!   ③ Report  — true if at least one person moved
//! ```
//!
//! The caller repeats `advance` until it returns `false`; at that point every
//! trajectory queue is empty.  [`run_to_completion`] does exactly that and
//! reports each step to a [`TurnObserver`].
//!
//! No bounds checks happen here: placement already guaranteed that every
//! committed trajectory stays on the grid when replayed from its start.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use spot_turn::{run_to_completion, NoopObserver};
//!
//! let mut grid = GridBuilder::new(level).build(&mut rng)?;
//! let last = run_to_completion(&mut grid, &mut NoopObserver)?;
//! assert!(grid.is_drained());
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod runner;

#[cfg(test)]
mod tests;

pub use engine::advance;
pub use error::{TurnError, TurnResult};
pub use observer::{NoopObserver, TurnObserver};
pub use runner::run_to_completion;
