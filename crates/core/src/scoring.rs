//! Scoring module - line clear points, drop bonuses, leveling and gravity
//!
//! Classic rules: clear points come from [`LINE_SCORES`] multiplied by the
//! current level, levels start at 1 and advance every 10 lines, and gravity
//! speeds up by 0.05s per level down to a 0.1s floor.

use crate::types::{
    BASE_DROP_INTERVAL_SECS, DROP_INTERVAL_STEP_SECS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, MIN_DROP_INTERVAL_SECS, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at `level` (level is 1-based)
///
/// Four or more rows score as four.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base_score = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base_score.saturating_mul(level)
}

/// Calculate drop score
/// soft drop: +1 per cell
/// hard drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Level for a cumulative line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in seconds
pub fn drop_interval_secs(level: u32) -> f32 {
    let steps = level.saturating_sub(1) as f32;
    (BASE_DROP_INTERVAL_SECS - steps * DROP_INTERVAL_STEP_SECS).max(MIN_DROP_INTERVAL_SECS)
}
