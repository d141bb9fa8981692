//! Level and engine configuration.
//!
//! `Level` is what the serving layer hands to the engine for one build,
//! typically parsed from JSON.  `EngineConfig` holds the knobs that are not
//! part of a level: the seed and the placement retry caps.

use crate::{CoreError, CoreResult, MoveDirection};

/// Largest accepted `Level::size`; coordinates are `i32`.
pub const MAX_GRID_SIZE: u32 = i32::MAX as u32;

/// Largest accepted `Level::moves`.  The occupancy registry keeps one set per
/// time step.
pub const MAX_MOVES: u32 = 1 << 16;

// ── Level ─────────────────────────────────────────────────────────────────────

/// One scenario to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// Copied onto the generated grid.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Difficulty rank.  Carried through for the caller; the engine ignores it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rank: u32,

    /// The grid is square: width = height = `size`.
    pub size: u32,

    /// Trajectory length shared by every person.
    pub moves: u32,

    /// How many aliens to place after the indigenous person.
    pub num_aliens: u32,

    /// Directions random trajectories are sampled from.  Must be non-empty,
    /// free of duplicates and must not contain `Unspecified`.
    pub allowed_moves: Vec<MoveDirection>,

    /// Preset trajectory forced onto the indigenous person.  `None` means the
    /// indigenous trajectory is sampled like any alien's.
    #[cfg_attr(feature = "serde", serde(default))]
    pub indigenous_moves: Option<Vec<MoveDirection>>,
}

impl Level {
    /// A level with every direction allowed and no preset.
    pub fn new(size: u32, moves: u32, num_aliens: u32) -> Self {
        Self {
            name: String::new(),
            rank: 0,
            size,
            moves,
            num_aliens,
            allowed_moves: MoveDirection::ALL.to_vec(),
            indigenous_moves: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_allowed_moves(mut self, allowed: Vec<MoveDirection>) -> Self {
        self.allowed_moves = allowed;
        self
    }

    pub fn with_indigenous_moves(mut self, moves: Vec<MoveDirection>) -> Self {
        self.indigenous_moves = Some(moves);
        self
    }

    /// Reject levels the builder cannot work with at all.
    ///
    /// A preset of the wrong *length* is not rejected here; the builder
    /// reports that as an invalid grid.
    pub fn validate(&self) -> CoreResult<()> {
        if self.size == 0 {
            return Err(CoreError::Config("grid size must be at least 1".into()));
        }
        if self.size > MAX_GRID_SIZE {
            return Err(CoreError::Config(format!(
                "grid size {} exceeds {MAX_GRID_SIZE}",
                self.size
            )));
        }
        if self.moves > MAX_MOVES {
            return Err(CoreError::Config(format!(
                "moves {} exceeds {MAX_MOVES}",
                self.moves
            )));
        }
        if self.allowed_moves.is_empty() {
            return Err(CoreError::Config("allowed_moves must not be empty".into()));
        }
        if self.allowed_moves.iter().any(|m| !m.is_specified()) {
            return Err(CoreError::Config("allowed_moves contains UNSPECIFIED".into()));
        }
        for (i, m) in self.allowed_moves.iter().enumerate() {
            if self.allowed_moves[..i].contains(m) {
                return Err(CoreError::Config(format!("allowed_moves lists {m} twice")));
            }
        }
        if let Some(preset) = &self.indigenous_moves {
            if preset.iter().any(|m| !m.is_specified()) {
                return Err(CoreError::Config(
                    "indigenous preset trajectory contains UNSPECIFIED".into(),
                ));
            }
        }
        Ok(())
    }

    /// Number of people on the finished grid (indigenous + aliens).
    #[inline]
    pub fn person_count(&self) -> usize {
        self.num_aliens as usize + 1
    }

    /// Number of time steps per replay, including step 0.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.moves as usize + 1
    }

    /// How many distinct trajectories the allowed directions can form,
    /// saturating at `u64::MAX`.  Assumes a validated level.
    pub fn trajectory_space(&self) -> u64 {
        let directions = self.allowed_moves.len() as u64;
        (0..self.moves).fold(1u64, |acc, _| acc.saturating_mul(directions))
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Engine-wide settings that are not part of a level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Master RNG seed.  The same seed always produces identical grids.
    pub seed: u64,

    /// Candidate trajectories sampled per person before giving up.
    pub max_trajectory_attempts: u32,

    /// Starting positions sampled per trajectory before giving up.
    pub max_position_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_trajectory_attempts: 1_000,
            max_position_attempts: 1_000,
        }
    }
}
