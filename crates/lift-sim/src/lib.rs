//! `lift-sim` — the elevator state machine and its turn-based driver loop.
//!
//! # Turn loop
//!
//! ```text
//! loop:
//!   ① Command  — the driver (human or controller) picks one Command.
//!   ② Apply    — Game::apply runs it to completion, atomically:
//!                  Move(delta)         → carriage relocates, or the move
//!                                        is rejected at the building edge
//!                  OpenDoors(dir)      → let_off (arrived passengers leave)
//!                                        then let_on (exact-direction
//!                                        matches board until full)
//!   ③ Observe  — GameObserver sees the outcome; render, log, or count.
//! ```
//!
//! No two commands ever interleave: state changes only inside `apply`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::Direction;
//! use lift_sim::{Command, Game, NoopObserver, ScenarioBuilder};
//!
//! let elevator = ScenarioBuilder::new().seed(42).build()?;
//! let mut game = Game::new(elevator);
//! game.apply(Command::Move(1), &mut NoopObserver)?;
//! game.apply(Command::OpenDoors(Direction::Up), &mut NoopObserver)?;
//! ```

pub mod command;
pub mod elevator;
pub mod error;
pub mod game;
pub mod scenario;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{Command, Outcome};
pub use elevator::{DoorCycle, Elevator};
pub use error::{SimError, SimResult};
pub use game::{Game, GameObserver, NoopObserver};
pub use scenario::{load_scenario_json, load_scenario_reader, ScenarioBuilder, ScenarioSpec};
