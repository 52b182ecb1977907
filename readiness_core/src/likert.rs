//! Bounded Likert answer value
//!
//! `Likert` is a closed enum over the five agreement levels. Any integer
//! outside 1..=5 is rejected at construction, so scoring code never sees
//! an invalid answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Five-point agreement scale, 1 = strongly disagree, 5 = strongly agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum Likert {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LikertError {
    #[error("Likert value out of range: {0} (must be {min} to {max})", min = Likert::MIN, max = Likert::MAX)]
    OutOfRange(i64),
}

impl Likert {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a Likert value with bounds validation
    ///
    /// # Errors
    /// Returns `LikertError::OutOfRange` if value is not in 1..=5
    pub fn new(value: i64) -> Result<Self, LikertError> {
        match value {
            1 => Ok(Self::StronglyDisagree),
            2 => Ok(Self::Disagree),
            3 => Ok(Self::Neutral),
            4 => Ok(Self::Agree),
            5 => Ok(Self::StronglyAgree),
            other => Err(LikertError::OutOfRange(other)),
        }
    }

    /// Saturating constructor: anything below 1 becomes 1, above 5 becomes 5.
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(Self::MIN as i64, Self::MAX as i64);
        match Self::new(bounded) {
            Ok(v) => v,
            Err(_) => Self::Neutral,
        }
    }

    /// Numeric value 1..=5
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Display label as shown next to the answer buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly Disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }
}

impl TryFrom<i64> for Likert {
    type Error = LikertError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.value()
    }
}

impl std::fmt::Display for Likert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
