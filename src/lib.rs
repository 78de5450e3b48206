//! Password strength assessment library
//!
//! This library grades passwords with a fixed battery of heuristic rules
//! and generates random strong passwords.
//!
//! An assessment carries a 0-100 score, a letter grade (A-F), a
//! qualitative security level (Very Low..Very High) and the ordered good and
//! bad observations ("moments") that explain it.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASSWERIFY_IMAGES_DIR`: Directory holding grade images
//!   (default: `images`)
//!
//! # Example
//!
//! ```rust,no_run
//! use passwerify::{analyze, generate, grade_image_path};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! match analyze(&password) {
//!     Ok(assessment) => {
//!         println!("Score: {}", assessment.score());
//!         println!("Grade: {}", assessment.grade());
//!         println!("Security level: {}", assessment.security_level());
//!         println!("Image: {}", grade_image_path(assessment.grade()).display());
//!     }
//!     Err(e) => println!("{}", e),
//! }
//!
//! let suggestion = generate(16).expect("16 is a valid length");
//! ```

// Internal modules
mod assets;
mod blacklist;
mod evaluator;
mod facts;
mod generator;
mod scorer;
mod sections;
mod types;
mod validator;

// Public API
pub use assets::{get_images_dir, grade_image_path};
pub use blacklist::{
    find_personal_keyword, is_blacklisted, is_special_char, COMMON_PASSWORDS, PERSONAL_KEYWORDS,
    SPECIAL_CHARS,
};
pub use evaluator::{analyze, analyze_str, evaluate_password_strength};
pub use facts::PasswordFacts;
pub use generator::{
    generate, generate_default, generate_with_rng, GeneratorError, DEFAULT_LENGTH, MIN_LENGTH,
};
pub use scorer::calculate_score;
pub use types::{AssessmentResult, Grade, PasswordScore, SecurityLevel};
pub use validator::{validate, validate_secret, ValidationError, MAX_PASSWORD_LENGTH};
