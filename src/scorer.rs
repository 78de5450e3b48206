//! Scorer - turns password facts into a 0..=100 score.

use crate::facts::PasswordFacts;
use crate::types::PasswordScore;

const POINTS_PER_CHAR_TYPE: i64 = 10;
const COMMON_PASSWORD_PENALTY: i64 = 40;
const PERSONAL_KEYWORD_PENALTY: i64 = 20;

/// Calculates the password score from its facts.
///
/// Intermediate arithmetic may leave the `0..=100` range (heavy penalties on a
/// short password); the result is clamped at the end.
pub fn calculate_score(facts: &PasswordFacts) -> PasswordScore {
    let length = facts.length;
    let char_types = facts.char_type_count();
    let mut score: i64 = 0;

    // Length band: up to 30 points
    score += match length {
        16.. => 30,
        12..=15 => 25,
        8..=11 => 20,
        6..=7 => 10,
        _ => 5,
    };

    // Character classes: up to 40 points
    score += char_types as i64 * POINTS_PER_CHAR_TYPE;

    // Length and diversity combined
    if length >= 12 && char_types >= 3 {
        score += 15;
    } else if length >= 8 && char_types >= 2 {
        score += 10;
    }

    // Extra length bonus
    if length >= 16 {
        score += 10;
    }

    if facts.is_common_password {
        score -= COMMON_PASSWORD_PENALTY;
    }
    if facts.contains_personal_keyword {
        score -= PERSONAL_KEYWORD_PENALTY;
    }

    PasswordScore::new(score)
}
