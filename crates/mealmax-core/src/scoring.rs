//! Battle scoring.
//!
//! `score = price * chars(cuisine) - penalty(difficulty)`. Two scores are
//! turned into a normalized separation, and the separation into the
//! probability that the higher scorer wins.

use crate::model::Meal;

/// Compute the deterministic battle score for a meal.
pub fn compute_score(meal: &Meal) -> f64 {
    let cuisine_len = meal.cuisine.chars().count() as f64;
    meal.price * cuisine_len - meal.difficulty.penalty()
}

/// Normalized separation between two scores, in `[0, 1]`.
///
/// `|a - b| / max(a, b)`, clamped. Returns 0 when neither score is positive.
pub fn normalized_delta(score_a: f64, score_b: f64) -> f64 {
    let max = score_a.max(score_b);
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    ((score_a - score_b).abs() / max).clamp(0.0, 1.0)
}

/// Probability that the higher-scoring meal wins for a given separation.
///
/// Linear from a coin flip at `delta = 0` to a certain win at `delta = 1`.
pub fn win_threshold(delta: f64) -> f64 {
    0.5 + 0.5 * delta.clamp(0.0, 1.0)
}
