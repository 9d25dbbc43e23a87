use std::{fmt, time::Duration};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DURATION_LITERAL_REGEX: Regex =
        Regex::new(r"^(?P<number>\d+)(?P<unit>[smhd])$").expect("valid regex");
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DurationLiteralError {
    #[error("duration cannot be empty")]
    Empty,

    #[error("invalid duration {0:?}; expected <number><unit> with unit s, m, h or d (e.g. 30s, 5m, 1h)")]
    InvalidFormat(String),

    #[error("duration must be greater than zero, got {0:?}")]
    Zero(String),

    #[error("duration {0:?} is too large")]
    Overflow(String),
}

/// A positive duration written as `<number><unit>`, such as `5m` or `90s`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DurationLiteral(Duration);

impl DurationLiteral {
    pub fn parse(value: &str) -> Result<Self, DurationLiteralError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DurationLiteralError::Empty);
        }

        let lowered = trimmed.to_lowercase();
        let captures = DURATION_LITERAL_REGEX
            .captures(&lowered)
            .ok_or_else(|| DurationLiteralError::InvalidFormat(trimmed.to_string()))?;

        let number: u64 = captures["number"]
            .parse()
            .map_err(|_| DurationLiteralError::Overflow(trimmed.to_string()))?;
        if number == 0 {
            return Err(DurationLiteralError::Zero(trimmed.to_string()));
        }

        let multiplier = match &captures["unit"] {
            "s" => 1,
            "m" => 60,
            "h" => 3_600,
            _ => 86_400,
        };
        let seconds = number
            .checked_mul(multiplier)
            .ok_or_else(|| DurationLiteralError::Overflow(trimmed.to_string()))?;

        Ok(Self(Duration::from_secs(seconds)))
    }

    pub fn from_duration(value: Duration) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for DurationLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.as_secs();
        if seconds != 0 && seconds % 86_400 == 0 {
            write!(f, "{}d", seconds / 86_400)
        } else if seconds != 0 && seconds % 3_600 == 0 {
            write!(f, "{}h", seconds / 3_600)
        } else if seconds != 0 && seconds % 60 == 0 {
            write!(f, "{}m", seconds / 60)
        } else {
            write!(f, "{seconds}s")
        }
    }
}
