//! `spot-grid` — builds a collision-free grid scenario from a [`Level`].
//!
//! # Build pipeline
//!
//! ```text
//! GridBuilder::build(rng):
//!   ① Validate  — Level::validate; preset length must equal level.moves
//!   ② Indigenous — place PersonId(0) from its preset or a sampled trajectory
//!   ③ Aliens    — place PersonId(1..=num_aliens), always sampled
//! ```
//!
//! Every placement goes through one [`PlacementGenerator`], which owns the
//! [`OccupancyRegistry`] for that build: the set of used trajectories and,
//! per time step, the set of occupied positions.  A person is committed to
//! the registry in full or not at all.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`person`]    | `Person`, `PersonKind`                                   |
//! | [`grid`]      | `Grid`                                                   |
//! | [`color`]     | golden-angle HSL color for a placement index             |
//! | [`registry`]  | `OccupancyRegistry`                                      |
//! | [`placement`] | `PlacementGenerator`, `TrajectorySource`                 |
//! | [`builder`]   | `GridBuilder`                                            |
//! | [`error`]     | `GridError`, `GridResult<T>`                             |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Use FxHash instead of SipHash in the registries.        |
//! | `serde`   | Derive `Serialize`/`Deserialize` on `Person` and `Grid`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use spot_core::{GridRng, Level};
//! use spot_grid::GridBuilder;
//!
//! let level = Level::new(5, 3, 2);
//! let mut rng = GridRng::new(42);
//! let grid = GridBuilder::new(level).build(&mut rng)?;
//! ```
//!
//! [`Level`]: spot_core::Level

pub mod builder;
pub mod color;
pub mod error;
pub mod grid;
pub mod person;
pub mod placement;
pub mod registry;


pub use builder::GridBuilder;
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use person::{Person, PersonKind};
pub use placement::{PlacementGenerator, TrajectorySource};
pub use registry::OccupancyRegistry;
