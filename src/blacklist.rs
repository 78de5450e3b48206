//! Blacklist tables
//!
//! Fixed, read-only tables of weak passwords and personal-data keywords,
//! plus the special-character set shared by the evaluator and the generator.

/// The 20 most used weak passwords, lowercase.
pub const COMMON_PASSWORDS: [&str; 20] = [
    "password", "123456", "12345678", "1234", "qwerty",
    "abc123", "password1", "12345", "123456789", "111111",
    "1234567", "iloveyou", "admin", "welcome", "monkey",
    "letmein", "sunshine", "master", "hello", "freedom",
];

/// Substrings hinting at personal data or placeholder credentials, lowercase.
pub const PERSONAL_KEYWORDS: [&str; 15] = [
    "name", "surname", "birthday", "birth", "year",
    "qwerty", "123", "admin", "user", "login",
    "password", "pass", "secret", "test", "demo",
];

/// Characters counted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Returns `true` if `c` belongs to [`SPECIAL_CHARS`].
pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Checks if a password is in the common password list (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|p| *p == lowered)
}

/// Returns the first personal keyword contained in the password (case-insensitive).
///
/// Search stops at the first hit, in table order.
pub fn find_personal_keyword(password: &str) -> Option<&'static str> {
    let lowered = password.to_lowercase();
    PERSONAL_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}
