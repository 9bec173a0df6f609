//! Scoring module
//!
//! Score is derived from the session on demand and never stored.

use crate::types::{BASE_SCORE, MISTAKE_PENALTY, SCORE_FLOOR, SECOND_PENALTY};

/// `max(1000 - mistakes * 50 - seconds * 2, 100)`
///
/// Non-increasing in both arguments; floors at [`SCORE_FLOOR`].
pub fn calculate_score(mistakes: u32, elapsed_seconds: u32) -> u32 {
    let penalty = mistakes
        .saturating_mul(MISTAKE_PENALTY)
        .saturating_add(elapsed_seconds.saturating_mul(SECOND_PENALTY));
    BASE_SCORE.saturating_sub(penalty).max(SCORE_FLOOR)
}
