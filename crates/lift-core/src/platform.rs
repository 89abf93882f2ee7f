//! A place for people to stand: one per floor, plus the moving carriage.

use crate::{Direction, Floor, Person};

/// An ordered group of [`Person`]s sharing one location.
///
/// The person list is private so every mutation goes through methods that
/// uphold the invariant *every contained person's location equals the
/// platform's location*.  Insertion order is preserved (it is the arrival
/// order, used by renderers) and capacity, when set, is never exceeded.
///
/// Because the invariant is maintained here, the derived queries
/// ([`wants_up`], [`wants_down`], [`direction_of`]) can be computed against
/// the platform's own location and are infallible — no person inside a
/// platform is ever unplaced.
///
/// [`wants_up`]: Platform::wants_up
/// [`wants_down`]: Platform::wants_down
/// [`direction_of`]: Platform::direction_of
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Platform {
    location: Floor,
    max_capacity: Option<usize>,
    persons: Vec<Person>,
}

impl Platform {
    /// An empty, unlimited platform at `location` (a floor of the building).
    pub fn new(location: Floor) -> Platform {
        Platform {
            location,
            max_capacity: None,
            persons: Vec::new(),
        }
    }

    /// An empty platform that refuses additions beyond `max_capacity`
    /// (the elevator carriage).
    pub fn with_capacity(location: Floor, max_capacity: usize) -> Platform {
        Platform {
            location,
            max_capacity: Some(max_capacity),
            persons: Vec::new(),
        }
    }

    // ── Location ──────────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self) -> Floor {
        self.location
    }

    /// Move the platform to `location`, repositioning everyone standing on
    /// it.  The carriage calls this on every elevator movement.
    pub fn set_location(&mut self, location: Floor) {
        self.location = location;
        for person in &mut self.persons {
            person.set_location(location);
        }
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    #[inline]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// `true` when a capacity is set and reached.  Unlimited platforms are
    /// never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        match self.max_capacity {
            Some(cap) => self.persons.len() >= cap,
            None => false,
        }
    }

    /// Read-only view of everyone standing here, in arrival order.
    #[inline]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    // ── Adding and removing ───────────────────────────────────────────────

    /// Append `person`, assigning them this platform's location.
    ///
    /// A full platform refuses and hands the person back — being turned away
    /// at the door is ordinary flow control, not an error.
    pub fn add(&mut self, mut person: Person) -> Result<(), Person> {
        if self.is_full() {
            return Err(person);
        }
        person.set_location(self.location);
        self.persons.push(person);
        Ok(())
    }

    /// Re-insert `person` at position `index`, assigning them this
    /// platform's location.  Capacity is honoured exactly as in [`add`];
    /// `index` is clamped to the end of the list.
    ///
    /// Used by the elevator to restore a passenger to their old spot after a
    /// refused hand-off, so boarding never reorders those left behind.
    ///
    /// [`add`]: Platform::add
    pub fn insert_at(&mut self, index: usize, mut person: Person) -> Result<(), Person> {
        if self.is_full() {
            return Err(person);
        }
        person.set_location(self.location);
        self.persons.insert(index.min(self.persons.len()), person);
        Ok(())
    }

    /// Remove and return the person at `index`, or `None` if out of range.
    ///
    /// The removed person keeps their current location; whichever platform
    /// they transfer into next will reassign it.
    pub fn remove_at(&mut self, index: usize) -> Option<Person> {
        if index < self.persons.len() {
            Some(self.persons.remove(index))
        } else {
            None
        }
    }

    /// Remove and return everyone whose destination is this platform's
    /// location, preserving the order of those who remain.
    pub fn drain_arrived(&mut self) -> Vec<Person> {
        let mut arrived = Vec::new();
        let mut staying = Vec::with_capacity(self.persons.len());
        for person in self.persons.drain(..) {
            if person.destination() == self.location {
                arrived.push(person);
            } else {
                staying.push(person);
            }
        }
        self.persons = staying;
        arrived
    }

    // ── Derived queries ───────────────────────────────────────────────────

    /// Which way `person` would want to travel if they stood here.
    ///
    /// For persons actually on this platform this equals
    /// [`Person::direction`], by the location invariant.
    #[inline]
    pub fn direction_of(&self, person: &Person) -> Direction {
        Direction::from_delta(person.destination().distance_from(self.location))
    }

    /// `true` if anyone here wants to travel up.  Recomputed on each call.
    pub fn wants_up(&self) -> bool {
        self.persons.iter().any(|p| self.direction_of(p).is_up())
    }

    /// `true` if anyone here wants to travel down.  Recomputed on each call.
    pub fn wants_down(&self) -> bool {
        self.persons.iter().any(|p| self.direction_of(p).is_down())
    }
}
