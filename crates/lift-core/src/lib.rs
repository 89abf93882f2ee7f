//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`floor`]    | `Floor` index, `Direction`                     |
//! | [`person`]   | `Person` — a passenger with a destination      |
//! | [`platform`] | `Platform` — an ordered group of persons       |
//! | [`rng`]      | `SimRng` — seeded, reproducible randomness     |
//! | [`error`]    | `CoreError`, `CoreResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod floor;
pub mod person;
pub mod platform;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use floor::{Direction, Floor};
pub use person::Person;
pub use platform::Platform;
pub use rng::SimRng;
