//! Collision-free placement of one person at a time.
//!
//! # Algorithm
//!
//! For a sampled trajectory:
//!
//! 1. Draw `level.moves` independent uniform picks from `allowed_moves`.
//!    If that exact sequence is already registered, or it cannot fit on the
//!    grid at all, throw the whole candidate away and draw again.
//! 2. From the move counts, the legal start range per axis is
//!    `[backward, size - forward)`: LEFT/RIGHT for x, DOWN/UP for y.
//! 3. Draw a start in that range, replay the trajectory to get the position
//!    at every time step, and keep it only if no registered person holds the
//!    same cell at the same step.  Otherwise draw another start.  If every
//!    start collides, go back to step 1 with a fresh trajectory.
//! 4. Commit trajectory and path to the registry.
//!
//! Both loops are capped by [`EngineConfig`]; running out of the trajectory
//! cap is a [`GridError::PlacementExhausted`].  A preset trajectory skips
//! step 1, so for it running out of start positions is already final.

use std::ops::Range;

use rand::Rng;
use spot_core::{EngineConfig, Level, PersonId, Position, Trajectory};
use tracing::{debug, trace};

use crate::color::placement_color;
use crate::{GridError, GridResult, OccupancyRegistry, Person, PersonKind};

/// Where a person's trajectory comes from.
#[derive(Clone, Debug)]
pub enum TrajectorySource {
    /// Use this trajectory as is (the indigenous preset).
    Preset(Trajectory),
    /// Sample a fresh, unregistered trajectory from `level.allowed_moves`.
    Random,
}

/// Outcome of searching start positions for one trajectory.
enum StartSearch {
    Found { path: Vec<Position>, attempts: u32 },
    /// The trajectory's margins leave an empty start range on some axis.
    DoesNotFit,
    Exhausted { attempts: u32 },
}

/// Places people one by one against a shared [`OccupancyRegistry`].
///
/// One generator serves exactly one build; the registry it owns is never
/// visible to another build.
pub struct PlacementGenerator<'a> {
    level:    &'a Level,
    config:   &'a EngineConfig,
    registry: OccupancyRegistry,
}

impl<'a> PlacementGenerator<'a> {
    pub fn new(level: &'a Level, config: &'a EngineConfig) -> Self {
        Self {
            level,
            config,
            registry: OccupancyRegistry::new(level.step_count()),
        }
    }

    pub fn into_registry(self) -> OccupancyRegistry {
        self.registry
    }

    /// Produce one fully valid person and register it.
    ///
    /// `order` is the number of people already placed; it alone decides the
    /// color.  On error nothing is registered.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        id:     PersonId,
        kind:   PersonKind,
        order:  usize,
        source: TrajectorySource,
        rng:    &mut R,
    ) -> GridResult<Person> {
        let color = placement_color(order);

        let (trajectory, path, attempts) = match source {
            TrajectorySource::Preset(trajectory) => {
                if self.registry.has_trajectory(&trajectory) {
                    return Err(GridError::DuplicateTrajectory(id));
                }
                match self.search_start(&trajectory, rng) {
                    StartSearch::Found { path, attempts } => (trajectory, path, attempts),
                    StartSearch::DoesNotFit => {
                        return Err(GridError::PlacementExhausted { person: id, attempts: 0 });
                    }
                    StartSearch::Exhausted { attempts } => {
                        return Err(GridError::PlacementExhausted { person: id, attempts });
                    }
                }
            }
            TrajectorySource::Random => self.sample_placement(id, rng)?,
        };

        self.registry.commit(&trajectory, &path);
        debug!(
            person = %id,
            %kind,
            %color,
            start = %path[0],
            attempts,
            "person placed"
        );

        Ok(Person {
            id,
            kind,
            color,
            trajectory,
            position: path[0],
        })
    }

    /// Sample trajectories until one is new and has a free start position.
    ///
    /// Each candidate counts against `max_trajectory_attempts` whether it was
    /// a duplicate, did not fit, or ran out of start positions.
    fn sample_placement<R: Rng + ?Sized>(
        &self,
        id:  PersonId,
        rng: &mut R,
    ) -> GridResult<(Trajectory, Vec<Position>, u32)> {
        let max = self.config.max_trajectory_attempts;
        for attempt in 1..=max {
            let candidate = self.sample_trajectory(rng);
            if self.registry.has_trajectory(&candidate) {
                trace!(person = %id, attempt, "trajectory already taken");
                continue;
            }
            match self.search_start(&candidate, rng) {
                StartSearch::Found { path, .. } => return Ok((candidate, path, attempt)),
                StartSearch::DoesNotFit => {
                    trace!(person = %id, attempt, "trajectory does not fit the grid");
                }
                StartSearch::Exhausted { attempts } => {
                    trace!(person = %id, attempt, attempts, "no free start, resampling");
                }
            }
        }
        Err(GridError::PlacementExhausted { person: id, attempts: max })
    }

    fn sample_trajectory<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory {
        let allowed = &self.level.allowed_moves;
        (0..self.level.moves)
            .map(|_| allowed[rng.gen_range(0..allowed.len())])
            .collect()
    }

    /// Draw starts until the replayed path collides with nobody.
    fn search_start<R: Rng + ?Sized>(&self, trajectory: &Trajectory, rng: &mut R) -> StartSearch {
        let counts = trajectory.counts();
        let (Some(xs), Some(ys)) = (
            start_range(self.level.size, counts.left, counts.right),
            start_range(self.level.size, counts.down, counts.up),
        ) else {
            return StartSearch::DoesNotFit;
        };

        let max = self.config.max_position_attempts;
        for attempt in 1..=max {
            let start = Position::new(rng.gen_range(xs.clone()), rng.gen_range(ys.clone()));
            let Some(path) = trajectory.path_from(start) else {
                return StartSearch::DoesNotFit;
            };
            debug_assert!(path.iter().all(|p| p.within(self.level.size, self.level.size)));
            if self.registry.is_path_free(&path) {
                return StartSearch::Found { path, attempts: attempt };
            }
            trace!(attempt, %start, "start position collides");
        }
        StartSearch::Exhausted { attempts: max }
    }
}

/// Legal start offsets `[backward, size - forward)` on one axis, or `None`
/// if the margins leave no room or do not fit in `i32`.
fn start_range(size: u32, backward: u32, forward: u32) -> Option<Range<i32>> {
    let lo = i32::try_from(backward).ok()?;
    let hi = i32::try_from(i64::from(size) - i64::from(forward)).ok()?;
    (lo < hi).then_some(lo..hi)
}

#[cfg(test)]
mod tests {
    use super::start_range;

    #[test]
    fn start_range_reserves_margins() {
        assert_eq!(start_range(5, 0, 0), Some(0..5));
        assert_eq!(start_range(5, 1, 2), Some(1..3));
        assert_eq!(start_range(5, 3, 2), None);
        assert_eq!(start_range(1, 0, 1), None);
    }

    #[test]
    fn start_range_never_truncates() {
        assert_eq!(start_range(u32::MAX, 0, 0), None);
        assert_eq!(start_range(u32::MAX, 0, 1), None);
        let max = i32::MAX as u32;
        assert_eq!(start_range(max, 1, 0), Some(1..i32::MAX));
    }
}
