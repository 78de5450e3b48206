//! Input validation - gates raw user input before evaluation.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Maximum accepted password length, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 50;

/// Accepted code points: printable ASCII.
pub const PRINTABLE_ASCII: std::ops::RangeInclusive<u32> = 32..=126;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a password!")]
    Empty,
    #[error("Password is too long (max 50 characters)")]
    TooLong,
    #[error("Password contains invalid characters")]
    InvalidCharacters,
}

/// Validates a raw password, returning it unchanged on success.
///
/// # Errors
///
/// Returns error if:
/// - the password is empty
/// - it is longer than [`MAX_PASSWORD_LENGTH`] characters
/// - any character is outside printable ASCII (32-126)
pub fn validate(password: &str) -> Result<&str, ValidationError> {
    let result = check(password);

    #[cfg(feature = "tracing")]
    {
        if let Err(e) = &result {
            tracing::warn!("Password rejected by validation: {:?}", e);
        }
    }

    result.map(|()| password)
}

/// Same as [`validate`], for a password already wrapped in a [`SecretString`].
pub fn validate_secret(password: &SecretString) -> Result<(), ValidationError> {
    validate(password.expose_secret()).map(|_| ())
}

fn check(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Empty);
    }
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::TooLong);
    }
    if password.chars().any(|c| !PRINTABLE_ASCII.contains(&(c as u32))) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}
