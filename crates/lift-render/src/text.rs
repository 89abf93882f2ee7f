//! Plain and ANSI text rendering.
//!
//! Layout, floors printed top-down, carriage drawn beside its current floor:
//!
//! ```text
//!   3 ↑  [ (↑+2) (↑+4) ]
//!   2    [ ]
//!   1 ↕  [ (↑+1) (↓-1) ]   ]↑]  [ (+2) ]
//!   0    [ (±0) ]
//! ```
//!
//! Padding is applied before coloring so ANSI escape codes never skew the
//! column widths.

use colored::Colorize;

use lift_core::{Direction, Floor, Person, Platform};
use lift_sim::Elevator;

use crate::symbols::arrow;
use crate::RenderOptions;

// ── Person ────────────────────────────────────────────────────────────────────

/// One passenger cell, e.g. `(↑+3)` in relative mode or `(↑ 5)` in absolute
/// mode.  `location` is where the person stands (their platform's location).
pub fn render_person(person: &Person, location: Floor, opts: RenderOptions) -> String {
    let remaining = person.destination().distance_from(location);
    let direction = Direction::from_delta(remaining);
    let glyph = arrow(direction.is_up(), direction.is_down());

    let number = if opts.relative_destinations {
        match remaining {
            0 => "±0".to_string(),
            r if r > 0 => format!("+{r}"),
            r => r.to_string(),
        }
    } else {
        person.destination().to_string()
    };
    let number = format!("{number:>2}");

    if opts.color {
        format!("({}{})", glyph.to_string().magenta(), number.yellow())
    } else {
        format!("({glyph}{number})")
    }
}

// ── Platform ──────────────────────────────────────────────────────────────────

/// Everyone on a platform, in arrival order: `[ (↑+3) (↓-2) ]`.
pub fn render_platform(platform: &Platform, opts: RenderOptions) -> String {
    let cells: Vec<String> = platform
        .persons()
        .iter()
        .map(|p| render_person(p, platform.location(), opts))
        .collect();
    if cells.is_empty() {
        "[ ]".to_string()
    } else {
        format!("[ {} ]", cells.join(" "))
    }
}

/// A platform prefixed with its want-up/want-down arrow.
fn platform_with_arrow(platform: &Platform, opts: RenderOptions) -> String {
    let glyph = arrow(platform.wants_up(), platform.wants_down());
    let glyph = if opts.color {
        glyph.to_string().blue().to_string()
    } else {
        glyph.to_string()
    };
    format!("{glyph}  {}", render_platform(platform, opts))
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// The whole building, floors top-down.  The carriage appears beside its
/// current floor together with the `advertised` boarding direction from the
/// most recent door cycle (use [`Direction::None`] for no advertisement).
pub fn render_elevator(elevator: &Elevator, advertised: Direction, opts: RenderOptions) -> String {
    let mut out = String::new();
    for floor in elevator.floors().iter().rev() {
        let here = floor.location() == elevator.location();

        out.push_str(&format!("{:>3} ", floor.location()));
        out.push_str(&platform_with_arrow(floor, opts));

        if here {
            let glyph = arrow(advertised.is_up(), advertised.is_down());
            let glyph = if opts.color {
                glyph.to_string().yellow().to_string()
            } else {
                glyph.to_string()
            };
            out.push_str(&format!(
                "   ]{glyph}]  {}",
                render_platform(elevator.carriage(), opts)
            ));
        }
        out.push('\n');
    }
    out
}
