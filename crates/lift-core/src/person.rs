//! A passenger with a destination.

use crate::{CoreError, CoreResult, Direction, Floor};

/// A person who wants to ride to `destination`.
///
/// `location` starts out unset and is assigned by the first [`Platform`] the
/// person is added to; from then on the owning platform keeps it in sync.
/// Application code never writes it directly — that is what preserves the
/// platform invariant (every contained person's location equals the
/// platform's).
///
/// The location-derived accessors return a [`CoreResult`] because querying an
/// unplaced person has no meaningful answer; producing a number anyway would
/// hide the bug.  Once a person is on a platform these never fail.
///
/// [`Platform`]: crate::Platform
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    destination: Floor,
    location: Option<Floor>,
}

impl Person {
    /// A person bound for `destination`, not yet standing anywhere.
    pub fn new(destination: Floor) -> Person {
        Person {
            destination,
            location: None,
        }
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    /// Where the person currently stands, if they have been placed.
    #[inline]
    pub fn location(&self) -> Option<Floor> {
        self.location
    }

    /// Signed floors remaining: destination minus current location.
    pub fn relative_destination(&self) -> CoreResult<i32> {
        let location = self.location.ok_or(CoreError::UnplacedPerson {
            destination: self.destination,
        })?;
        Ok(self.destination.distance_from(location))
    }

    /// Which way the person wants to travel *from where they stand now*.
    pub fn direction(&self) -> CoreResult<Direction> {
        Ok(Direction::from_delta(self.relative_destination()?))
    }

    /// `true` once the person is standing on their destination floor.
    pub fn is_happy(&self) -> CoreResult<bool> {
        Ok(self.relative_destination()? == 0)
    }

    pub fn wants_up(&self) -> CoreResult<bool> {
        Ok(self.direction()?.is_up())
    }

    pub fn wants_down(&self) -> CoreResult<bool> {
        Ok(self.direction()?.is_down())
    }

    /// Reposition the person.  Only the owning platform calls this, either
    /// when the person is added or when the platform itself moves.
    pub(crate) fn set_location(&mut self, location: Floor) {
        self.location = Some(location);
    }
}
