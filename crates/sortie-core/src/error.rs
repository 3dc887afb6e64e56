use crate::geom::Point;
use crate::occupant::UnitId;

/// Why an occupancy change was rejected.
///
/// All variants describe routine contention; the grid is left untouched
/// whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{0} is outside the grid")]
    OutOfBounds(Point),

    #[error("{pos} is already occupied by a {by}")]
    Occupied { pos: Point, by: &'static str },

    #[error("{0} is reserved")]
    Reserved(Point),

    #[error("{unit} is already on {pos}")]
    DuplicateUnit { pos: Point, unit: UnitId },

    #[error("{unit} is not on {pos}")]
    UnitNotFound { pos: Point, unit: UnitId },
}
