//! Score combination
//!
//! The final score is the larger of the rule score and the estimator score,
//! clamped to 100.

/// Upper bound of every final score
pub const MAX_SCORE: u8 = 100;

/// Fuse rule points with the estimator score
///
/// `estimator_score` is `None` when no estimator is loaded.
pub fn combine(rule_points: u32, estimator_score: Option<u32>) -> u8 {
    let raw = match estimator_score {
        Some(estimator) => estimator.max(rule_points),
        None => rule_points,
    };
    raw.min(MAX_SCORE as u32) as u8
}
