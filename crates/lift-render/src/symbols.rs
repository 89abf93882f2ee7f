//! Arrow glyphs shared by the person and platform renderers.

pub const UP_ARROW: char = '↑';
pub const DOWN_ARROW: char = '↓';
pub const UPDOWN_ARROW: char = '↕';

/// The arrow for a want-up / want-down pair; a space when neither holds.
pub fn arrow(up: bool, down: bool) -> char {
    match (up, down) {
        (true, true) => UPDOWN_ARROW,
        (true, false) => UP_ARROW,
        (false, true) => DOWN_ARROW,
        (false, false) => ' ',
    }
}
