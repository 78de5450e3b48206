//! Assessment result types.

use std::fmt;

use crate::facts::PasswordFacts;

/// Numeric password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Creates a score from raw arithmetic, clamping into `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter grade summarizing a score into five bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// Maps a score to its grade: 90 A, 80 B, 70 C, 60 D, anything lower F.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative security label, on a threshold scale independent from [`Grade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityLevel {
    VeryLow,
    Low,
    Mid,
    High,
    VeryHigh,
}

impl SecurityLevel {
    /// Maps a score to its level: 85 Very High, 70 High, 55 Mid, 40 Low, lower Very Low.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            85.. => SecurityLevel::VeryHigh,
            70..=84 => SecurityLevel::High,
            55..=69 => SecurityLevel::Mid,
            40..=54 => SecurityLevel::Low,
            _ => SecurityLevel::VeryLow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::VeryLow => "Very Low",
            SecurityLevel::Low => "Low",
            SecurityLevel::Mid => "Mid",
            SecurityLevel::High => "High",
            SecurityLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete, immutable assessment of one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    score: PasswordScore,
    grade: Grade,
    security_level: SecurityLevel,
    good_moments: Vec<String>,
    bad_moments: Vec<String>,
    facts: PasswordFacts,
}

impl AssessmentResult {
    /// Builds a result; grade and security level are always derived from `score`.
    pub(crate) fn new(
        score: PasswordScore,
        good_moments: Vec<String>,
        bad_moments: Vec<String>,
        facts: PasswordFacts,
    ) -> Self {
        Self {
            score,
            grade: Grade::from_score(score),
            security_level: SecurityLevel::from_score(score),
            good_moments,
            bad_moments,
            facts,
        }
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    pub fn good_moments(&self) -> &[String] {
        &self.good_moments
    }

    pub fn bad_moments(&self) -> &[String] {
        &self.bad_moments
    }

    pub fn facts(&self) -> &PasswordFacts {
        &self.facts
    }
}
