//! Simulation error type.

use thiserror::Error;

use lift_core::{CoreError, Floor};

#[derive(Debug, Error)]
pub enum SimError {
    /// A move would take the carriage outside the building.  The elevator
    /// state is untouched when this is returned.
    #[error("move of {delta:+} from floor {from} leaves the building ({floors} floors)")]
    OutOfRangeMove {
        from:   Floor,
        delta:  i32,
        floors: usize,
    },

    #[error("a building needs at least one floor")]
    NoFloors,

    #[error("floor count {0} exceeds the supported maximum of 256")]
    TooManyFloors(usize),

    /// Floor platforms must be handed over in order: `floors[i]` at `Floor(i)`.
    #[error("floor platform at index {index} reports location {found}")]
    MisplacedFloor { index: usize, found: Floor },

    #[error("carriage starts at floor {location} but the building has {floors} floors")]
    CarriageOutOfRange { location: Floor, floors: usize },

    #[error("destination floor {destination} does not exist ({floors} floors)")]
    DestinationOutOfRange { destination: Floor, floors: usize },

    #[error("scenario places {got} people in a carriage with capacity {capacity}")]
    CarriageOverfull { got: usize, capacity: usize },

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
