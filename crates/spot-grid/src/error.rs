use spot_core::{CoreError, PersonId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid: indigenous trajectory has {got} moves, level requires {expected}")]
    InvalidGrid {
        expected: u32,
        got:      usize,
    },

    #[error("no collision-free placement for {person} after {attempts} attempts")]
    PlacementExhausted {
        person:   PersonId,
        attempts: u32,
    },

    #[error("preset trajectory for {0} is already taken")]
    DuplicateTrajectory(PersonId),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type GridResult<T> = Result<T, GridError>;
