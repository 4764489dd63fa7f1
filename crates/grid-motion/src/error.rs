use grid_core::{Direction, GridPoint};
use thiserror::Error;

use crate::MoveKind;

/// Why a move request was turned down.
///
/// Rejections are routine: nothing was changed, and the caller may simply try
/// again on a later frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("actor already has a pending {0} move")]
    AlreadyMoving(MoveKind),

    #[error("actor is not registered on the grid")]
    NotRegistered,

    #[error("direction {0} is not a grid direction")]
    InvalidDirection(Direction),

    #[error("destination {0} is occupied")]
    DestinationOccupied(GridPoint),

    #[error("destination {0} is reserved by another move")]
    DestinationReserved(GridPoint),
}

pub type AdmissionResult<T> = Result<T, MoveRejected>;
