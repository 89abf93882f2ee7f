//! Scenario construction: seeded random buildings and JSON scenario files.
//!
//! # JSON format
//!
//! One object per scenario.  `floors[i]` lists the destination floors of the
//! people waiting on floor `i`; `carriage` lists the destinations of people
//! already aboard.
//!
//! ```json
//! {
//!   "capacity": 3,
//!   "start_floor": 0,
//!   "floors": [[5, 2], [], [0], [7, 7, 1]],
//!   "carriage": [2]
//! }
//! ```
//!
//! Every destination (and `start_floor`) must name an existing floor; the
//! loader rejects anything else before an elevator is built.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lift_core::{Floor, Person, Platform, SimRng};

use crate::{Elevator, SimError, SimResult};

// ── Defaults (shared by the builder and the demo binary) ──────────────────────

pub const DEFAULT_FLOOR_COUNT: usize = 8;
pub const DEFAULT_CAPACITY: usize = 3;
pub const DEFAULT_PEOPLE_PER_FLOOR: usize = 7;

// ── ScenarioBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for a randomized [`Elevator`].
///
/// Every person gets a uniformly random destination; with `fill_carriage`
/// (the default) the carriage starts at capacity with random riders.  The
/// same seed always produces the same building.
///
/// ```rust,ignore
/// let elevator = ScenarioBuilder::new()
///     .floor_count(12)
///     .capacity(Some(4))
///     .people_per_floor(5)
///     .seed(7)
///     .build()?;
/// ```
pub struct ScenarioBuilder {
    floor_count: usize,
    capacity: Option<usize>,
    people_per_floor: usize,
    fill_carriage: bool,
    seed: u64,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        ScenarioBuilder {
            floor_count: DEFAULT_FLOOR_COUNT,
            capacity: Some(DEFAULT_CAPACITY),
            people_per_floor: DEFAULT_PEOPLE_PER_FLOOR,
            fill_carriage: true,
            seed: 0,
        }
    }
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor_count(mut self, floor_count: usize) -> Self {
        self.floor_count = floor_count;
        self
    }

    /// Carriage capacity; `None` means unlimited (and implies an empty
    /// starting carriage, since there is no "full" to fill to).
    pub fn capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn people_per_floor(mut self, people_per_floor: usize) -> Self {
        self.people_per_floor = people_per_floor;
        self
    }

    /// Whether the carriage starts pre-loaded to capacity with random riders.
    pub fn fill_carriage(mut self, fill_carriage: bool) -> Self {
        self.fill_carriage = fill_carriage;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> SimResult<Elevator> {
        if self.floor_count == 0 {
            return Err(SimError::NoFloors);
        }
        let mut rng = SimRng::new(self.seed);

        let mut floors = Vec::with_capacity(self.floor_count);
        for i in 0..self.floor_count {
            let location = Floor::try_from(i)
                .map_err(|_| SimError::TooManyFloors(self.floor_count))?;
            let mut floor = Platform::new(location);
            for _ in 0..self.people_per_floor {
                // Floors are unlimited, so the hand-back arm is unreachable.
                let _ = floor.add(Person::new(rng.random_floor(self.floor_count)));
            }
            floors.push(floor);
        }

        let carriage = match self.capacity {
            Some(cap) => Platform::with_capacity(Floor(0), cap),
            None => Platform::new(Floor(0)),
        };
        let mut elevator = Elevator::new(floors, carriage)?;

        if self.fill_carriage && self.capacity.is_some() {
            while !elevator.carriage().is_full() {
                let _ = elevator.board(Person::new(rng.random_floor(self.floor_count)));
            }
        }

        Ok(elevator)
    }
}

// ── ScenarioSpec (JSON) ───────────────────────────────────────────────────────

/// A fully specified scenario, as found in a JSON scenario file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Carriage capacity; omit for unlimited.
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Where the carriage starts.
    #[serde(default)]
    pub start_floor: u8,

    /// Destination floors of the people waiting on each floor, bottom-up.
    /// The outer length is the floor count.
    pub floors: Vec<Vec<u8>>,

    /// Destination floors of the people already aboard.
    #[serde(default)]
    pub carriage: Vec<u8>,
}

impl ScenarioSpec {
    /// Validate the spec and build the elevator it describes.
    pub fn build(&self) -> SimResult<Elevator> {
        let floor_count = self.floors.len();
        if floor_count == 0 {
            return Err(SimError::NoFloors);
        }
        let check = |destination: Floor| -> SimResult<Floor> {
            if destination.index() < floor_count {
                Ok(destination)
            } else {
                Err(SimError::DestinationOutOfRange {
                    destination,
                    floors: floor_count,
                })
            }
        };

        let start = check(Floor(self.start_floor)).map_err(|_| SimError::CarriageOutOfRange {
            location: Floor(self.start_floor),
            floors: floor_count,
        })?;

        if let Some(capacity) = self.capacity {
            if self.carriage.len() > capacity {
                return Err(SimError::CarriageOverfull {
                    got: self.carriage.len(),
                    capacity,
                });
            }
        }

        let mut floors = Vec::with_capacity(floor_count);
        for (i, destinations) in self.floors.iter().enumerate() {
            let location = Floor::try_from(i)
                .map_err(|_| SimError::TooManyFloors(floor_count))?;
            let mut floor = Platform::new(location);
            for &destination in destinations {
                let _ = floor.add(Person::new(check(Floor(destination))?));
            }
            floors.push(floor);
        }

        let mut carriage = match self.capacity {
            Some(cap) => Platform::with_capacity(start, cap),
            None => Platform::new(start),
        };
        for &destination in &self.carriage {
            // Overfull carriages were rejected above.
            let _ = carriage.add(Person::new(check(Floor(destination))?));
        }

        Elevator::new(floors, carriage)
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

/// Load a scenario from a JSON file and build its elevator.
pub fn load_scenario_json(path: &Path) -> SimResult<Elevator> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_scenario_reader<R: Read>(reader: R) -> SimResult<Elevator> {
    let spec: ScenarioSpec =
        serde_json::from_reader(reader).map_err(|e| SimError::Parse(e.to_string()))?;
    spec.build()
}
