//! The driver-facing command vocabulary.

use lift_core::{Direction, Floor};

/// One discrete thing a driver can ask the elevator to do.
///
/// Commands are produced outside the simulation (a human at a keyboard, an
/// automated controller) and applied one at a time by
/// [`Game::apply`][crate::Game::apply].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Move the carriage by a signed number of floors.
    Move(i32),
    /// Open the doors, advertising a boarding direction.
    OpenDoors(Direction),
}

/// What a command actually did.
///
/// Rejected moves are an outcome, not an error: the simulation shrugs them
/// off and the driver decides whether to mention it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The carriage relocated to this floor.
    Moved(Floor),
    /// The requested move would have left the building; nothing changed.
    MoveRejected { delta: i32 },
    /// A door cycle completed at the current floor.
    DoorsOpened {
        direction: Direction,
        alighted:  usize,
        boarded:   usize,
    },
}
