//! Password evaluation sections
//!
//! Each section inspects one aspect of the password facts and reports
//! good or bad moments. The evaluator runs them in a fixed order, which is
//! also the order of the messages in the final result.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::{common_password_section, personal_keyword_section};
pub use length::length_section;
pub use pattern::{repeating_run_section, sequence_section};
pub use variety::{
    case_mix_section, character_variety_section, digit_section, special_char_section,
};

use crate::facts::PasswordFacts;

/// A single observation emitted by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    Good(&'static str),
    Bad(&'static str),
}

/// Result type for section evaluation functions.
/// - empty - nothing to report
/// - otherwise the moments in emission order
pub type SectionResult = Vec<Moment>;

/// Signature shared by all sections.
pub type Section = fn(&PasswordFacts) -> SectionResult;

/// All sections in evaluation order.
pub const SECTIONS: [(&str, Section); 9] = [
    ("length", length_section),
    ("case_mix", case_mix_section),
    ("digits", digit_section),
    ("special", special_char_section),
    ("variety", character_variety_section),
    ("common_password", common_password_section),
    ("personal_keyword", personal_keyword_section),
    ("sequence", sequence_section),
    ("repetition", repeating_run_section),
];
