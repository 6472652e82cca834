//! Wall-clock time of day used by schedule slots.
//!
//! # Invariants
//! - `hour` is in `0..=23` and `minute` is in `0..=59`.
//! - Text form is always zero-padded `HH:MM`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Hour:minute pair on a 24-hour clock, without date or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Slot start used when a command names no clock time.
    pub const DEFAULT_START: ClockTime = ClockTime { hour: 9, minute: 0 };

    /// Creates a time of day, rejecting out-of-range parts.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockTimeError> {
        if hour > 23 {
            return Err(ClockTimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ClockTimeError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Returns the time one hour later on the same conceptual day.
    ///
    /// The hour wraps modulo 24 (`23:30` -> `00:30`); no date is advanced.
    pub fn plus_one_hour(&self) -> Self {
        Self {
            hour: (self.hour + 1) % 24,
            minute: self.minute,
        }
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    /// Parses strict `HH:MM` text.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockTimeError::Malformed(value.to_string());
        let (hour, minute) = value.split_once(':').ok_or_else(malformed)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(malformed());
        }
        if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let hour = hour.parse::<u32>().map_err(|_| malformed())?;
        let minute = minute.parse::<u32>().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Errors raised when building or parsing a `ClockTime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockTimeError {
    HourOutOfRange(u32),
    MinuteOutOfRange(u32),
    Malformed(String),
}

impl Display for ClockTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourOutOfRange(value) => {
                write!(f, "hour out of range: {value} (expected 0..=23)")
            }
            Self::MinuteOutOfRange(value) => {
                write!(f, "minute out of range: {value} (expected 0..=59)")
            }
            Self::Malformed(value) => {
                write!(f, "clock time is malformed: `{value}` (expected HH:MM)")
            }
        }
    }
}

impl Error for ClockTimeError {}
