//! Character variety sections - case mix, digits, special chars and the variety bonus.

use super::{Moment, SectionResult};
use crate::facts::PasswordFacts;

/// Reports on upper/lower case usage. Passwords without letters get no moment.
pub fn case_mix_section(facts: &PasswordFacts) -> SectionResult {
    match (facts.has_lower, facts.has_upper) {
        (true, true) => vec![Moment::Good("Using both uppercase and lowercase letters")],
        (true, false) => vec![Moment::Bad("No uppercase letters")],
        (false, true) => vec![Moment::Bad("No lowercase letters")],
        (false, false) => Vec::new(),
    }
}

pub fn digit_section(facts: &PasswordFacts) -> SectionResult {
    if facts.has_digit {
        vec![Moment::Good("Contains numbers")]
    } else {
        vec![Moment::Bad("No numbers")]
    }
}

pub fn special_char_section(facts: &PasswordFacts) -> SectionResult {
    if facts.has_special {
        vec![Moment::Good("Contains special characters")]
    } else {
        vec![Moment::Bad("No special characters")]
    }
}

/// Bonus moment for using three or four character classes.
pub fn character_variety_section(facts: &PasswordFacts) -> SectionResult {
    match facts.char_type_count() {
        4 => vec![Moment::Good("Uses all character types (letters, numbers, symbols)")],
        3 => vec![Moment::Good("Good character variety")],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(lower: bool, upper: bool, digit: bool, special: bool) -> PasswordFacts {
        PasswordFacts {
            has_lower: lower,
            has_upper: upper,
            has_digit: digit,
            has_special: special,
            ..Default::default()
        }
    }

    #[test]
    fn test_case_mix_section() {
        assert_eq!(
            case_mix_section(&facts(true, true, false, false)),
            vec![Moment::Good("Using both uppercase and lowercase letters")]
        );
        assert_eq!(
            case_mix_section(&facts(true, false, false, false)),
            vec![Moment::Bad("No uppercase letters")]
        );
        assert_eq!(
            case_mix_section(&facts(false, true, false, false)),
            vec![Moment::Bad("No lowercase letters")]
        );
    }

    #[test]
    fn test_case_mix_section_no_letters() {
        assert!(case_mix_section(&facts(false, false, true, true)).is_empty());
    }

    #[test]
    fn test_digit_and_special_sections() {
        assert_eq!(digit_section(&facts(false, false, true, false)), vec![Moment::Good("Contains numbers")]);
        assert_eq!(digit_section(&facts(true, false, false, false)), vec![Moment::Bad("No numbers")]);
        assert_eq!(
            special_char_section(&facts(false, false, false, true)),
            vec![Moment::Good("Contains special characters")]
        );
        assert_eq!(
            special_char_section(&facts(true, false, false, false)),
            vec![Moment::Bad("No special characters")]
        );
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(
            character_variety_section(&facts(true, true, true, true)),
            vec![Moment::Good("Uses all character types (letters, numbers, symbols)")]
        );
    }

    #[test]
    fn test_variety_section_three_categories() {
        assert_eq!(
            character_variety_section(&facts(true, false, true, true)),
            vec![Moment::Good("Good character variety")]
        );
    }

    #[test]
    fn test_variety_section_two_categories() {
        assert!(character_variety_section(&facts(true, true, false, false)).is_empty());
    }
}
