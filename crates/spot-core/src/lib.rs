//! `spot-core` — foundational types for the `spot` grid scenario engine.
//!
//! This crate is a dependency of every other `spot-*` crate.  It has no
//! `spot-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `MoveDirection` vocabulary                            |
//! | [`position`]    | `Position` grid offsets                               |
//! | [`trajectory`]  | `Trajectory` FIFO move queue, `MoveCounts`            |
//! | [`ids`]         | `PersonId`                                            |
//! | [`step`]        | `Step` time-step counter                              |
//! | [`rng`]         | `GridRng` (seeded `SmallRng` wrapper)                 |
//! | [`config`]      | `Level`, `EngineConfig`, size and move caps           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod position;
pub mod rng;
pub mod step;
pub mod trajectory;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EngineConfig, Level, MAX_GRID_SIZE, MAX_MOVES};
pub use direction::MoveDirection;
pub use error::{CoreError, CoreResult};
pub use ids::PersonId;
pub use position::Position;
pub use rng::GridRng;
pub use step::Step;
pub use trajectory::{MoveCounts, Trajectory};
