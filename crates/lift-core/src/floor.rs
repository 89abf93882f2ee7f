//! Floor indices and travel directions.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// Index of a floor, counted from the ground up: `Floor(0)` is the ground
/// floor.
///
/// Stored as `u8` — 255 floors is taller than any building ever built.  All
/// *relative* arithmetic is done in `i32` (see [`Floor::distance_from`]) so
/// signed distances never wrap.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Signed distance from `from` up to `self` (positive = `self` is above).
    #[inline]
    pub fn distance_from(self, from: Floor) -> i32 {
        self.0 as i32 - from.0 as i32
    }

    /// The floor `delta` floors away, or `None` if that would leave a
    /// building with `floor_count` floors.
    pub fn offset(self, delta: i32, floor_count: usize) -> Option<Floor> {
        let target = self.0 as i32 + delta;
        if target < 0 || target as usize >= floor_count {
            None
        } else {
            Some(Floor(target as u8))
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

impl From<Floor> for usize {
    #[inline(always)]
    fn from(floor: Floor) -> usize {
        floor.0 as usize
    }
}

impl TryFrom<usize> for Floor {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<Floor, Self::Error> {
        u8::try_from(n).map(Floor)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// The direction a person wants to travel, or the direction an elevator
/// advertises when its doors open.
///
/// A person's direction is always relative to where they currently stand,
/// never a property of the destination alone: someone bound for floor 5 wants
/// `Up` from floor 2 and `Down` from floor 7.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Below the current floor.
    Down,
    /// Already there (or no preference).
    #[default]
    None,
    /// Above the current floor.
    Up,
}

impl Direction {
    /// Sign of a relative distance: positive → `Up`, negative → `Down`,
    /// zero → `None`.
    #[inline]
    pub fn from_delta(delta: i32) -> Direction {
        match delta.signum() {
            1 => Direction::Up,
            -1 => Direction::Down,
            _ => Direction::None,
        }
    }

    /// The sign this direction represents: `+1`, `-1`, or `0`.
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::None => 0,
        }
    }

    #[inline]
    pub fn is_up(self) -> bool {
        self == Direction::Up
    }

    #[inline]
    pub fn is_down(self) -> bool {
        self == Direction::Down
    }

    /// Human-readable label for logs and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
