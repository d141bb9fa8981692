use spot_core::{MoveDirection, PersonId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurnError {
    /// A queued move has no delta.  Committed trajectories never contain one,
    /// so this means the grid was corrupted after it was built.
    #[error("{person} has invalid queued move {direction}")]
    InvalidDirection {
        person:    PersonId,
        direction: MoveDirection,
    },
}

pub type TurnResult<T> = Result<T, TurnError>;
