//! Blacklist sections - common passwords and personal data.

use super::{Moment, SectionResult};
use crate::facts::PasswordFacts;

/// Flags passwords found in the common password list.
pub fn common_password_section(facts: &PasswordFacts) -> SectionResult {
    if facts.is_common_password {
        return vec![Moment::Bad(
            "This is a very common password (in top 20 most used)",
        )];
    }
    Vec::new()
}

/// Flags passwords containing a personal keyword. At most one moment.
pub fn personal_keyword_section(facts: &PasswordFacts) -> SectionResult {
    if facts.contains_personal_keyword {
        return vec![Moment::Bad("It is advisable not to use personal data")];
    }
    Vec::new()
}
