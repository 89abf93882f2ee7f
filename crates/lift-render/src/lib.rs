//! `lift-render` — text rendering of simulation state.
//!
//! The simulation crates know nothing about presentation; this crate reads
//! their query surface and produces strings.  All knobs travel in an explicit
//! [`RenderOptions`] value — there is no global display state to toggle.
//!
//! With `color: false` the output is plain text, which is what the tests
//! assert against; with `color: true` the same layout gains ANSI colors via
//! `colored`.

pub mod options;
pub mod symbols;
pub mod text;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use options::RenderOptions;
pub use symbols::arrow;
pub use text::{render_elevator, render_person, render_platform};
