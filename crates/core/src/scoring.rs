//! Scoring module - classic line-clear points, drop points and level speed
//!
//! Levels start at 1. Line-clear points are scaled by the level that was
//! current when the rows were cleared.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for a manual soft-drop step that did not lock the stone
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points for clearing `lines` rows at once on `level`.
///
/// More than four rows at once score like four.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}

/// Whether the accumulated line count completes `level`
pub fn reaches_next_level(total_lines: u32, level: u32) -> bool {
    total_lines >= level.saturating_mul(LINES_PER_LEVEL)
}

/// Gravity interval for a level in milliseconds: 1000 at level 1, 50 less per
/// level, never below 100.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
