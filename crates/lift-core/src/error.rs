//! Core error type.
//!
//! Capacity refusals are *not* errors — a full platform hands the person back
//! to the caller as ordinary flow control.  This enum covers genuine
//! invariant breaches only: conditions that indicate a logic bug in the
//! caller, not a normal simulation outcome.

use thiserror::Error;

use crate::Floor;

/// Invalid-state conditions in the person/platform model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A location-derived property was queried on a person who has never
    /// been placed on a platform.
    #[error("person bound for floor {destination} has not been placed on any platform")]
    UnplacedPerson { destination: Floor },
}

/// Shorthand result type for all `lift-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
