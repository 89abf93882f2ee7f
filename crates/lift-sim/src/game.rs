//! Turn-based driver loop around an [`Elevator`].

use log::debug;

use crate::{Command, Elevator, Outcome, SimError, SimResult};

/// Callbacks invoked by [`Game::apply`] after each completed turn.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait GameObserver {
    /// Called after every applied command, with the outcome and the state it
    /// produced.
    fn on_turn(&mut self, _turn: u32, _outcome: &Outcome, _elevator: &Elevator) {}

    /// Called once, on the turn that settles the building (carriage empty,
    /// nobody left who wants to travel).
    fn on_settled(&mut self, _turns: u32, _delivered: usize) {}
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Owns an [`Elevator`] and feeds it one command per turn.
///
/// Each command is applied exactly once and runs to completion before the
/// observer is notified; there is no way for two commands to interleave.
pub struct Game {
    elevator: Elevator,
    turn: u32,
    delivered: usize,
}

impl Game {
    pub fn new(elevator: Elevator) -> Game {
        Game {
            elevator,
            turn: 0,
            delivered: 0,
        }
    }

    #[inline]
    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    /// Commands applied so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Passengers delivered to their destination so far.
    #[inline]
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// `true` once there is nothing left to do.
    pub fn is_over(&self) -> bool {
        self.elevator.is_settled()
    }

    /// Apply one command atomically and report the outcome.
    ///
    /// Out-of-range moves come back as [`Outcome::MoveRejected`] rather than
    /// an error — the simulation treats them as a no-op and leaves any
    /// reporting to the driver.
    pub fn apply<O: GameObserver>(
        &mut self,
        command: Command,
        observer: &mut O,
    ) -> SimResult<Outcome> {
        let settled_before = self.is_over();
        let outcome = match command {
            Command::Move(delta) => match self.elevator.move_by(delta) {
                Ok(floor) => Outcome::Moved(floor),
                Err(SimError::OutOfRangeMove { .. }) => {
                    debug!("turn {}: move {delta:+} rejected at the building edge", self.turn + 1);
                    Outcome::MoveRejected { delta }
                }
                Err(e) => return Err(e),
            },
            Command::OpenDoors(direction) => {
                let cycle = self.elevator.open_doors(direction);
                self.delivered += cycle.alighted.len();
                Outcome::DoorsOpened {
                    direction,
                    alighted: cycle.alighted.len(),
                    boarded: cycle.boarded,
                }
            }
        };

        self.turn += 1;
        observer.on_turn(self.turn, &outcome, &self.elevator);
        if !settled_before && self.is_over() {
            observer.on_settled(self.turn, self.delivered);
        }
        Ok(outcome)
    }
}
