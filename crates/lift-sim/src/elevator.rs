//! The elevator: a column of stationary floors and one moving carriage.

use log::debug;

use lift_core::{Direction, Floor, Person, Platform};

use crate::{SimError, SimResult};

/// What happened during one door cycle: who left the carriage, and how many
/// boarded from the floor.
#[derive(Debug, Default)]
pub struct DoorCycle {
    /// Passengers who reached their destination and stepped off.  Ownership
    /// passes to the caller — delivered people leave the simulation.
    pub alighted: Vec<Person>,
    /// How many waiting passengers boarded.
    pub boarded: usize,
}

/// One carriage serving a fixed column of floors.
///
/// There is no mode enum: the whole state is the carriage's position, the
/// carriage's passengers, and each floor's passengers.  Behaviour is driven
/// by the discrete operations below, each of which runs to completion and
/// leaves every platform's location invariant intact.
///
/// Two invariants are enforced at construction and preserved by every
/// operation:
///
/// - `floors[i].location() == Floor(i)` for all `i`;
/// - the carriage's location names an existing floor.
pub struct Elevator {
    floors: Vec<Platform>,
    carriage: Platform,
}

impl Elevator {
    /// Assemble an elevator from pre-populated floor platforms and a
    /// carriage.  Validates the layout invariants listed on [`Elevator`].
    pub fn new(floors: Vec<Platform>, carriage: Platform) -> SimResult<Elevator> {
        if floors.is_empty() {
            return Err(SimError::NoFloors);
        }
        for (index, floor) in floors.iter().enumerate() {
            if floor.location().index() != index {
                return Err(SimError::MisplacedFloor {
                    index,
                    found: floor.location(),
                });
            }
        }
        if carriage.location().index() >= floors.len() {
            return Err(SimError::CarriageOutOfRange {
                location: carriage.location(),
                floors: floors.len(),
            });
        }
        Ok(Elevator { floors, carriage })
    }

    /// An empty building: `floor_count` empty floors, an empty carriage at
    /// the ground floor.  `capacity` of `None` means unlimited.
    pub fn empty(floor_count: usize, capacity: Option<usize>) -> SimResult<Elevator> {
        let floors = (0..floor_count)
            .map(|i| {
                Floor::try_from(i)
                    .map(Platform::new)
                    .map_err(|_| SimError::TooManyFloors(floor_count))
            })
            .collect::<SimResult<Vec<_>>>()?;
        let carriage = match capacity {
            Some(cap) => Platform::with_capacity(Floor(0), cap),
            None => Platform::new(Floor(0)),
        };
        Elevator::new(floors, carriage)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Where the carriage currently is.
    #[inline]
    pub fn location(&self) -> Floor {
        self.carriage.location()
    }

    /// The stationary platform at `floor`, if it exists.
    pub fn floor(&self, floor: Floor) -> Option<&Platform> {
        self.floors.get(floor.index())
    }

    /// All floors, bottom to top.  `floors()[i]` is at `Floor(i)`.
    #[inline]
    pub fn floors(&self) -> &[Platform] {
        &self.floors
    }

    #[inline]
    pub fn carriage(&self) -> &Platform {
        &self.carriage
    }

    /// `true` once the carriage is empty and nobody anywhere wants to
    /// travel.  Waiting people who are already on their destination floor
    /// don't count — they have nowhere to go.
    pub fn is_settled(&self) -> bool {
        self.carriage.is_empty()
            && self
                .floors
                .iter()
                .all(|f| !f.wants_up() && !f.wants_down())
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Move the carriage `delta` floors (positive = up), repositioning every
    /// passenger inside.
    ///
    /// A move that would leave the building is rejected: the error carries
    /// the refused delta and nothing changes.  Rejecting (rather than
    /// clamping to the top or bottom floor) keeps caller bugs visible.
    pub fn move_by(&mut self, delta: i32) -> SimResult<Floor> {
        match self.location().offset(delta, self.floors.len()) {
            Some(target) => {
                self.carriage.set_location(target);
                Ok(target)
            }
            None => Err(SimError::OutOfRangeMove {
                from: self.location(),
                delta,
                floors: self.floors.len(),
            }),
        }
    }

    /// Open the doors at the current floor, advertising `direction`.
    ///
    /// Arrived passengers always leave first so their seats are free before
    /// anyone boards.
    pub fn open_doors(&mut self, direction: Direction) -> DoorCycle {
        let alighted = self.let_off();
        let boarded = self.let_on(direction);
        debug!(
            "doors open at floor {} ({}): {} off, {} on, {} aboard",
            self.location(),
            direction,
            alighted.len(),
            boarded,
            self.carriage.len(),
        );
        DoorCycle { alighted, boarded }
    }

    /// Remove and return every carriage passenger whose destination is the
    /// current floor.  The remaining passengers keep their order.
    pub fn let_off(&mut self) -> Vec<Person> {
        self.carriage.drain_arrived()
    }

    /// Board waiting passengers from the current floor whose travel
    /// direction equals `direction` exactly — a `None` advertisement matches
    /// nobody who actually wants to move.
    ///
    /// Scanning stops as soon as the carriage is full; passengers who don't
    /// match stay where they stand, in order.  Returns the number boarded.
    pub fn let_on(&mut self, direction: Direction) -> usize {
        let at = self.carriage.location().index();
        let floor = &mut self.floors[at];

        let mut boarded = 0;
        let mut i = 0;
        while i < floor.len() {
            if self.carriage.is_full() {
                break;
            }
            if floor.direction_of(&floor.persons()[i]) != direction {
                i += 1;
                continue;
            }
            let Some(person) = floor.remove_at(i) else {
                break;
            };
            match self.carriage.add(person) {
                // The slot at `i` now holds the next candidate; don't advance.
                Ok(()) => boarded += 1,
                // Hand-off refused: return the person to their old spot and
                // stop the scan.
                Err(person) => {
                    let _ = floor.insert_at(i, person);
                    break;
                }
            }
        }
        boarded
    }

    /// Put `person` straight into the carriage, bypassing any floor queue.
    ///
    /// Used by scenario construction to pre-load the carriage; refuses
    /// exactly like [`Platform::add`] when full.
    pub fn board(&mut self, person: Person) -> Result<(), Person> {
        self.carriage.add(person)
    }
}
