//! Password facts - everything the sections and the scorer need, derived once.

use crate::blacklist::{find_personal_keyword, is_blacklisted, is_special_char};

const RUN_LENGTH: usize = 3;

/// Raw observations about a password.
///
/// Recomputed on every evaluation; shared by the rule sections and the scorer
/// so both always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordFacts {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Length in characters.
    pub length: usize,
    pub is_common_password: bool,
    pub contains_personal_keyword: bool,
    pub has_ascending_sequence: bool,
    pub has_repeating_run: bool,
}

impl PasswordFacts {
    pub fn from_password(password: &str) -> Self {
        let chars: Vec<char> = password.chars().collect();

        Self {
            has_lower: chars.iter().any(|c| c.is_lowercase()),
            has_upper: chars.iter().any(|c| c.is_uppercase()),
            has_digit: chars.iter().any(|c| c.is_ascii_digit()),
            has_special: chars.iter().any(|&c| is_special_char(c)),
            length: chars.len(),
            is_common_password: is_blacklisted(password),
            contains_personal_keyword: find_personal_keyword(password).is_some(),
            has_ascending_sequence: has_ascending_sequence(&chars),
            has_repeating_run: has_repeating_run(&chars),
        }
    }

    /// Number of character classes present (lower, upper, digit, special).
    pub fn char_type_count(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Detects three consecutive ascending digits ("123") or letters ("abc", "XyZ").
///
/// Descending runs and mixed digit/letter windows do not count.
pub fn has_ascending_sequence(chars: &[char]) -> bool {
    chars.windows(RUN_LENGTH).any(|w| {
        if let (Some(a), Some(b), Some(c)) = (w[0].to_digit(10), w[1].to_digit(10), w[2].to_digit(10)) {
            return a + 1 == b && b + 1 == c;
        }
        if w.iter().all(|c| c.is_alphabetic()) {
            let lowered: Vec<u32> = w.iter().map(|c| c.to_ascii_lowercase() as u32).collect();
            return lowered[0] + 1 == lowered[1] && lowered[1] + 1 == lowered[2];
        }
        false
    })
}

/// Detects three identical consecutive characters (case-sensitive).
pub fn has_repeating_run(chars: &[char]) -> bool {
    chars
        .windows(RUN_LENGTH)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}
