//! Scoring module - line clear points, level and gravity
//!
//! Level is a pure view of the score (`score / 1000 + 1`); it is never stored
//! apart from the score it was derived from.

use crate::types::{GAME_SPEEDS, LINE_SCORES, POINTS_PER_LEVEL};

/// Points for clearing `lines` rows with one placement at `level`.
///
/// `level` is the level in effect before the points are added.
/// Counts beyond the table score 0.
pub fn score_for_clear(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a cumulative score. Starts at 1, no cap.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Get gravity interval for a level (in milliseconds)
///
/// Levels outside the table (0, or past 10) use the fastest entry.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let fastest = GAME_SPEEDS[GAME_SPEEDS.len() - 1];
    match level.checked_sub(1) {
        Some(idx) => GAME_SPEEDS.get(idx as usize).copied().unwrap_or(fastest),
        None => fastest,
    }
}
