//! Fluent builder for constructing a [`Grid`] from a [`Level`].

use rand::Rng;
use spot_core::{EngineConfig, Level, PersonId, Trajectory};
use tracing::info;

use crate::{
    Grid, GridError, GridResult, OccupancyRegistry, PersonKind, PlacementGenerator,
    TrajectorySource,
};

/// Fluent builder for [`Grid`].
///
/// # Required inputs
///
/// - [`Level`] — size, move count, alien count, allowed directions, optional
///   indigenous preset
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                   |
/// |--------------|---------------------------|
/// | `.config(c)` | `EngineConfig::default()` |
///
/// The random source is passed to [`build`](Self::build) so that callers own
/// its seeding.
///
/// # Example
///
/// ```rust,ignore
/// let level = Level::new(5, 3, 2)
///     .with_indigenous_moves(vec![Right, Down, Right]);
/// let grid = GridBuilder::new(level)
///     .config(EngineConfig { max_position_attempts: 200, ..Default::default() })
///     .build(&mut GridRng::new(42))?;
/// ```
pub struct GridBuilder {
    level:  Level,
    config: EngineConfig,
}

impl GridBuilder {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            config: EngineConfig::default(),
        }
    }

    /// Override the retry caps (the seed in `config` is not used here; the
    /// caller seeds the RNG it passes to `build`).
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the level, place the indigenous person, then every alien.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> GridResult<Grid> {
        self.build_with_registry(rng).map(|(grid, _)| grid)
    }

    /// Like [`build`](Self::build) but also hands back the occupancy registry
    /// the build filled, e.g. to check a replay against the plan.
    pub fn build_with_registry<R: Rng + ?Sized>(
        self,
        rng: &mut R,
    ) -> GridResult<(Grid, OccupancyRegistry)> {
        let level = &self.level;
        level.validate()?;

        // ── Indigenous person ─────────────────────────────────────────────
        let source = match &level.indigenous_moves {
            Some(preset) => {
                let trajectory = Trajectory::from_moves(preset.iter().copied());
                check_indigenous_trajectory(&trajectory, level.moves)?;
                TrajectorySource::Preset(trajectory)
            }
            None => TrajectorySource::Random,
        };
        check_trajectory_space(level)?;

        let mut placer = PlacementGenerator::new(level, &self.config);
        let indigenous =
            placer.place(PersonId::INDIGENOUS, PersonKind::Indigenous, 0, source, rng)?;
        check_indigenous_trajectory(&indigenous.trajectory, level.moves)?;

        // ── Aliens, in placement order ────────────────────────────────────
        let mut aliens = Vec::with_capacity(level.num_aliens as usize);
        for order in 1..=level.num_aliens {
            let alien = placer.place(
                PersonId(order),
                PersonKind::Alien,
                order as usize,
                TrajectorySource::Random,
                rng,
            )?;
            aliens.push(alien);
        }

        info!(
            name = %level.name,
            size = level.size,
            moves = level.moves,
            people = aliens.len() + 1,
            "grid built"
        );

        let grid = Grid {
            name: level.name.clone(),
            width: level.size,
            height: level.size,
            indigenous,
            aliens,
        };
        Ok((grid, placer.into_registry()))
    }
}

/// Every person needs its own trajectory, so a level whose directions cannot
/// form enough of them fails before any sampling.  The reported person is the
/// first one left without a trajectory.
///
/// A preset built from directions outside `allowed_moves` does not use up any
/// of the sampled space.
fn check_trajectory_space(level: &Level) -> GridResult<()> {
    let preset_outside = level
        .indigenous_moves
        .as_ref()
        .is_some_and(|preset| preset.iter().any(|m| !level.allowed_moves.contains(m)));
    let sampled = u64::from(level.num_aliens) + u64::from(!preset_outside);
    let space = level.trajectory_space();
    if space < sampled {
        let first = space + u64::from(preset_outside);
        let person = PersonId(u32::try_from(first).unwrap_or(u32::MAX));
        return Err(GridError::PlacementExhausted { person, attempts: 0 });
    }
    Ok(())
}

/// Aliens may only be placed once the indigenous trajectory has exactly
/// `moves` entries.
fn check_indigenous_trajectory(trajectory: &Trajectory, moves: u32) -> GridResult<()> {
    if trajectory.len() != moves as usize {
        return Err(GridError::InvalidGrid {
            expected: moves,
            got:      trajectory.len(),
        });
    }
    Ok(())
}
