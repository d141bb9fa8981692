//! Per-build occupancy bookkeeping.
//!
//! Two owned collections, created fresh for every build and dropped with it:
//!
//! - the set of trajectories already handed out (exact sequence equality);
//! - one set of occupied positions per time step `0..=moves`.
//!
//! With the `fx-hash` feature the sets use FxHash, which is noticeably
//! faster on these small integer keys.

use spot_core::{Position, Step, Trajectory};

#[cfg(feature = "fx-hash")]
type Set<T> = rustc_hash::FxHashSet<T>;
#[cfg(not(feature = "fx-hash"))]
type Set<T> = std::collections::HashSet<T>;

#[derive(Debug, Default)]
pub struct OccupancyRegistry {
    trajectories: Set<Trajectory>,
    positions:    Vec<Set<Position>>,
}

impl OccupancyRegistry {
    /// An empty registry tracking `step_count` time steps.
    pub fn new(step_count: usize) -> Self {
        Self {
            trajectories: Set::default(),
            positions:    (0..step_count).map(|_| Set::default()).collect(),
        }
    }

    #[inline]
    pub fn has_trajectory(&self, trajectory: &Trajectory) -> bool {
        self.trajectories.contains(trajectory)
    }

    /// `true` if no committed person occupies `path[t]` at time step `t`.
    pub fn is_path_free(&self, path: &[Position]) -> bool {
        path.iter().enumerate().all(|(t, pos)| {
            self.positions.get(t).is_none_or(|occupied| !occupied.contains(pos))
        })
    }

    /// Register a person's trajectory and every time-step position of its
    /// path.  Callers check [`has_trajectory`](Self::has_trajectory) and
    /// [`is_path_free`](Self::is_path_free) first.
    pub fn commit(&mut self, trajectory: &Trajectory, path: &[Position]) {
        if self.positions.len() < path.len() {
            self.positions.resize_with(path.len(), Set::default);
        }
        self.trajectories.insert(trajectory.clone());
        for (occupied, &pos) in self.positions.iter_mut().zip(path) {
            occupied.insert(pos);
        }
    }

    /// Number of committed trajectories (one per placed person).
    #[inline]
    pub fn trajectory_count(&self) -> usize {
        self.trajectories.len()
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions registered at `step`, or `None` past the last step.
    pub fn occupied_at(&self, step: Step) -> Option<impl Iterator<Item = &Position>> {
        self.positions.get(step.index()).map(|occupied| occupied.iter())
    }

    #[inline]
    pub fn is_occupied(&self, step: Step, position: Position) -> bool {
        self.positions
            .get(step.index())
            .is_some_and(|occupied| occupied.contains(&position))
    }
}
