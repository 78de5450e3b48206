//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::facts::PasswordFacts;
use crate::scorer::calculate_score;
use crate::sections::{Moment, SECTIONS};
use crate::types::AssessmentResult;
use crate::validator::{validate_secret, ValidationError};

/// Evaluates password strength and returns a detailed assessment.
///
/// Facts are derived once and shared by every section and by the scorer.
/// Total over any input; use [`analyze`] to validate first.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `AssessmentResult` containing score, grade, security level and moments.
pub fn evaluate_password_strength(password: &SecretString) -> AssessmentResult {
    let facts = PasswordFacts::from_password(password.expose_secret());

    let mut good_moments = Vec::new();
    let mut bad_moments = Vec::new();

    // Orchestrator: execute sections in sequence
    for (_section_name, section_fn) in SECTIONS {
        for moment in section_fn(&facts) {
            match moment {
                Moment::Good(msg) => good_moments.push(msg.to_string()),
                Moment::Bad(msg) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("section {} reported: {}", _section_name, msg);
                    bad_moments.push(msg.to_string());
                }
            }
        }
    }

    let score = calculate_score(&facts);
    let result = AssessmentResult::new(score, good_moments, bad_moments, facts);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "evaluation finished: score={} grade={} level={} good={} bad={}",
        result.score(),
        result.grade(),
        result.security_level(),
        result.good_moments().len(),
        result.bad_moments().len()
    );

    result
}

/// Validates, then evaluates a password.
///
/// # Errors
///
/// Returns the [`ValidationError`] if the password is empty, too long or
/// contains characters outside printable ASCII.
pub fn analyze(password: &SecretString) -> Result<AssessmentResult, ValidationError> {
    validate_secret(password)?;
    Ok(evaluate_password_strength(password))
}

/// Convenience wrapper around [`analyze`] for a plain string.
pub fn analyze_str(password: &str) -> Result<AssessmentResult, ValidationError> {
    analyze(&SecretString::new(password.to_string().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Grade, SecurityLevel};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn evaluate(pwd: &str) -> AssessmentResult {
        let pwd = SecretString::new(pwd.to_string().into());
        evaluate_password_strength(&pwd)
    }

    #[test]
    fn test_evaluate_common_password() {
        let evaluation = analyze_str("password").expect("valid password");

        assert!(evaluation
            .bad_moments()
            .iter()
            .any(|m| m == "This is a very common password (in top 20 most used)"));
        assert!(evaluation
            .bad_moments()
            .iter()
            .any(|m| m == "It is advisable not to use personal data"));
        assert_eq!(evaluation.score().value(), 0);
        assert_eq!(evaluation.grade(), Grade::F);
        assert_eq!(evaluation.security_level(), SecurityLevel::VeryLow);
    }

    #[test]
    fn test_evaluate_common_password_moment_order() {
        let evaluation = evaluate("password");
        assert_eq!(
            evaluation.good_moments(),
            ["Acceptable length (8+ characters)"]
        );
        assert_eq!(
            evaluation.bad_moments(),
            [
                "No uppercase letters",
                "No numbers",
                "No special characters",
                "This is a very common password (in top 20 most used)",
                "It is advisable not to use personal data",
            ]
        );
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = analyze_str("Tr0ub4dor&3XY").expect("valid password");

        assert_eq!(
            evaluation.good_moments(),
            [
                "Good length (12+ characters)",
                "Using both uppercase and lowercase letters",
                "Contains numbers",
                "Contains special characters",
                "Uses all character types (letters, numbers, symbols)",
            ]
        );
        assert!(evaluation.bad_moments().is_empty());
        assert_eq!(evaluation.score().value(), 80);
        assert_eq!(evaluation.grade(), Grade::B);
        assert_eq!(evaluation.security_level(), SecurityLevel::High);
    }

    #[test]
    fn test_evaluate_long_password_hits_top_grade() {
        let evaluation = evaluate("Gx7!mQ2#vR9$kL4@");
        assert_eq!(evaluation.score().value(), 95);
        assert_eq!(evaluation.grade(), Grade::A);
        assert_eq!(evaluation.security_level(), SecurityLevel::VeryHigh);
        assert_eq!(evaluation.good_moments()[0], "Excellent length (16+ characters)");
    }

    #[test]
    fn test_evaluate_digits_and_symbols_only() {
        let evaluation = evaluate("9!5?7#");
        // no case moment at all
        assert!(!evaluation
            .bad_moments()
            .iter()
            .any(|m| m.contains("uppercase") || m.contains("lowercase")));
        assert!(!evaluation.good_moments().iter().any(|m| m.contains("uppercase")));
    }

    #[test]
    fn test_evaluate_sequences() {
        let seq = "Contains sequential characters (e.g., 123, abc)";
        assert!(evaluate("Xabc!9Q").bad_moments().iter().any(|m| m == seq));
        assert!(!evaluate("Xcba!9Q").bad_moments().iter().any(|m| m == seq));
    }

    #[test]
    fn test_evaluate_repeating_characters() {
        let evaluation = evaluate("Zzz!!!9q");
        assert!(evaluation
            .bad_moments()
            .iter()
            .any(|m| m == "Contains repeating characters"));
    }

    #[test]
    fn test_analyze_rejects_invalid_input() {
        assert_eq!(analyze_str(""), Err(ValidationError::Empty));
        assert_eq!(analyze_str(&"a".repeat(51)), Err(ValidationError::TooLong));
        assert_eq!(analyze_str("héllo"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_evaluate_empty_password_is_total() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score().value(), 5);
        assert_eq!(evaluation.grade(), Grade::F);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for pwd in ["a", "password", "MyPass123!", "Tr0ub4dor&3XY"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let len = rng.gen_range(1..=50);
            let pwd: String = (0..len)
                .map(|_| char::from(rng.gen_range(32u8..=126)))
                .collect();

            let evaluation = analyze_str(&pwd).expect("printable ascii is valid");
            assert!(
                evaluation.score().value() <= 100,
                "Score {} out of bounds for password '{}'",
                evaluation.score(),
                pwd
            );
            assert_eq!(evaluation.grade(), Grade::from_score(evaluation.score()));
            assert_eq!(
                evaluation.security_level(),
                SecurityLevel::from_score(evaluation.score())
            );
        }
    }
}
