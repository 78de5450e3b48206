//! Length section - classifies password length into tiers.

use super::{Moment, SectionResult};
use crate::facts::PasswordFacts;

pub const MIN_LENGTH: usize = 8;
pub const GOOD_LENGTH: usize = 12;
pub const EXCELLENT_LENGTH: usize = 16;

/// Emits exactly one length moment.
pub fn length_section(facts: &PasswordFacts) -> SectionResult {
    let moment = match facts.length {
        l if l >= EXCELLENT_LENGTH => Moment::Good("Excellent length (16+ characters)"),
        l if l >= GOOD_LENGTH => Moment::Good("Good length (12+ characters)"),
        l if l >= MIN_LENGTH => Moment::Good("Acceptable length (8+ characters)"),
        _ => Moment::Bad("Too short (minimum 8 characters recommended)"),
    };
    vec![moment]
}
