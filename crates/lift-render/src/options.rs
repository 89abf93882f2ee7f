//! Rendering knobs.

/// How to draw things.  Passed explicitly to every render function.
#[derive(Copy, Clone, Debug)]
pub struct RenderOptions {
    /// Show each person's remaining signed distance (`+3`, `-1`, `±0`)
    /// instead of their raw destination floor.
    pub relative_destinations: bool,

    /// Emit ANSI colors.  Turn off for tests, pipes, and plain terminals.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            relative_destinations: true,
            color: true,
        }
    }
}
