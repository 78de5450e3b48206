//! Password generator module
//!
//! Produces random passwords that contain at least one character from each
//! class: lowercase, uppercase, digit and special.
//!
//! - `generate`: random password of a given length from the OS RNG
//! - `generate_default`: same, with [`DEFAULT_LENGTH`]
//! - `generate_with_rng`: same algorithm over a caller supplied RNG

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::blacklist::SPECIAL_CHARS;

pub const DEFAULT_LENGTH: usize = 12;
pub const MIN_LENGTH: usize = 4;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {requested} is too short (minimum {minimum})")]
    InvalidLength { requested: usize, minimum: usize },
}

/// Generates a password of `length` characters using the OS RNG.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidLength`] if `length` is below [`MIN_LENGTH`].
pub fn generate(length: usize) -> Result<SecretString, GeneratorError> {
    generate_with_rng(&mut OsRng, length)
}

/// Generates a password of [`DEFAULT_LENGTH`] characters.
pub fn generate_default() -> SecretString {
    let mut rng = OsRng;
    SecretString::new(build(&mut rng, DEFAULT_LENGTH).into())
}

/// Generates a password of `length` characters from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GeneratorError> {
    if length < MIN_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::error!("Password generation FAILED: length {} < {}", length, MIN_LENGTH);
        return Err(GeneratorError::InvalidLength {
            requested: length,
            minimum: MIN_LENGTH,
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password of length {}", length);

    Ok(SecretString::new(build(rng, length).into()))
}

/// One character per class, then `length - 4` from the union, then shuffle.
/// Callers guarantee `length >= MIN_LENGTH`.
fn build<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let classes: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL_CHARS.as_bytes()];
    let all: Vec<u8> = classes.concat();

    let mut password: Vec<u8> = Vec::with_capacity(length);
    password.extend(classes.iter().map(|class| pick(rng, class)));
    password.extend((MIN_LENGTH..length).map(|_| pick(rng, &all)));

    password.shuffle(rng);
    password.into_iter().map(char::from).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}
