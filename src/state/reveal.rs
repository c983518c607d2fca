#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Observer tuning for standalone `.reveal` sections.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observer tuning for card grids, which trigger a little earlier.
pub const GRID_THRESHOLD: f64 = 0.1;
pub const GRID_ROOT_MARGIN: &str = "0px 0px -30px 0px";

/// Class added once an element has revealed.
pub const VISIBLE_CLASS: &str = "is-visible";

const STAGGER_STEP_MS: u32 = 50;

/// Delay before a grid card becomes visible. The index is the entry's
/// position within its own observer callback batch; each batch restarts
/// at zero.
pub fn stagger_delay_ms(batch_index: u32) -> u32 {
    batch_index * STAGGER_STEP_MS
}
