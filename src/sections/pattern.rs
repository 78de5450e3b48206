//! Pattern sections - ascending sequences and repeated characters.

use super::{Moment, SectionResult};
use crate::facts::PasswordFacts;

pub fn sequence_section(facts: &PasswordFacts) -> SectionResult {
    if facts.has_ascending_sequence {
        return vec![Moment::Bad("Contains sequential characters (e.g., 123, abc)")];
    }
    Vec::new()
}

pub fn repeating_run_section(facts: &PasswordFacts) -> SectionResult {
    if facts.has_repeating_run {
        return vec![Moment::Bad("Contains repeating characters")];
    }
    Vec::new()
}
