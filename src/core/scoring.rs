//! Scoring module - line-clear points, level progression, gravity cadence
//!
//! Points for one lock are `[0, 100, 300, 500, 800]` indexed by lines
//! cleared, times `level + 1`, where the level is the one in effect before
//! that lock is accounted. The level is always `lines / 10`.

use crate::types::{
    FALL_BASE_MS, FALL_DECREASE_PER_LEVEL_MS, FALL_FLOOR_MS, FAST_FALL_MS, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points awarded for a single lock clearing `lines` rows at `level`.
///
/// Counts outside the table (more than 4 lines from one lock) are not
/// reachable with 10-wide rows and 4-cell pieces and score nothing.
pub fn score_delta(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Level for a cumulative line count.
pub fn level_for(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, in milliseconds.
///
/// The core never owns a clock: the driver reads this formula and issues
/// gravity commands on its own cadence. While soft drop is held the fast
/// interval applies regardless of level; otherwise each level shaves 50 ms
/// off the base second, down to a floor of 100 ms.
pub fn fall_interval_ms(level: u32, fast_fall: bool) -> u64 {
    if fast_fall {
        return FAST_FALL_MS;
    }
    FALL_BASE_MS
        .saturating_sub(level as u64 * FALL_DECREASE_PER_LEVEL_MS)
        .max(FALL_FLOOR_MS)
}
