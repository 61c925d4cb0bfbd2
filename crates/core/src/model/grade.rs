use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradeError {
    #[error("grade must be between 1 and 12, got {0}")]
    OutOfRange(i64),

    #[error("invalid grade value: {0:?}")]
    Unparseable(String),
}

//
// ─── DIFFICULTY GRADE ─────────────────────────────────────────────────────────
//

/// School grade used as the difficulty level of a tutorial.
///
/// Always within `[1, 12]`. `easier` and `harder` clamp at the bounds, so
/// repeated presses at either end leave the value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DifficultyGrade(u8);

impl DifficultyGrade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    /// Creates a grade from a raw value.
    ///
    /// # Errors
    ///
    /// Returns `GradeError::OutOfRange` if `value` is outside `[1, 12]`.
    pub fn new(value: u8) -> Result<Self, GradeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GradeError::OutOfRange(i64::from(value)))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// One grade lower, saturating at grade 1.
    #[must_use]
    pub fn easier(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// One grade higher, saturating at grade 12.
    #[must_use]
    pub fn harder(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// Fraction of the full range, for the difficulty meter.
    #[must_use]
    pub fn meter(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }

    /// All selectable grades in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for DifficultyGrade {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for DifficultyGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grade {}", self.0)
    }
}

impl FromStr for DifficultyGrade {
    type Err = GradeError;

    /// Accepts `"7"` as well as the display form `"Grade 7"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("Grade")
            .or_else(|| trimmed.strip_prefix("grade"))
            .unwrap_or(trimmed)
            .trim();
        let value: i64 = digits
            .parse()
            .map_err(|_| GradeError::Unparseable(s.to_string()))?;
        u8::try_from(value)
            .map_err(|_| GradeError::OutOfRange(value))
            .and_then(Self::new)
    }
}
