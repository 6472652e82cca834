//! Parsed schedule draft.
//!
//! # Responsibility
//! - Define the value the interpreter hands to the persistence gateway.
//! - Keep the wire shape aligned with the schedule store schema.
//!
//! # Invariants
//! - `title` is never blank.
//! - `end_time` is exactly `start_time` plus one wrapped hour.
//! - Drafts are plain values; identity is assigned by the gateway.

use crate::model::clock::ClockTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Color tag marking a draft as machine-generated.
pub const AI_COLOR_TAG: &str = "bg-indigo-500";
/// Annotation stored with drafts created from typed or spoken commands.
pub const AI_NOTE: &str = "Scheduled via AI Command Center";
/// Title used when nothing is left after stripping date/time words.
pub const DEFAULT_TITLE: &str = "New Task";

/// Unsaved, fully-formed candidate schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawParsedDraft")]
pub struct ParsedDraft {
    pub title: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Serialized as `color` to match the schedule store schema.
    #[serde(rename = "color")]
    pub color_tag: String,
    /// Serialized as `description` to match the schedule store schema.
    #[serde(rename = "description")]
    pub note: String,
}

impl ParsedDraft {
    /// Builds a machine-generated draft for a one-hour slot.
    ///
    /// `end_time` is derived from `start_time`; color and note are the fixed
    /// AI markers.
    pub fn new(title: impl Into<String>, date: NaiveDate, start_time: ClockTime) -> Self {
        Self {
            title: title.into(),
            date,
            start_time,
            end_time: start_time.plus_one_hour(),
            color_tag: AI_COLOR_TAG.to_string(),
            note: AI_NOTE.to_string(),
        }
    }

    /// Validates draft invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `InvalidSlot` when `end_time` is not one hour after `start_time`.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        if self.end_time != self.start_time.plus_one_hour() {
            return Err(DraftValidationError::InvalidSlot {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Whether this draft carries the machine-generated markers.
    pub fn is_machine_generated(&self) -> bool {
        self.color_tag == AI_COLOR_TAG && self.note == AI_NOTE
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParsedDraft {
    title: String,
    date: NaiveDate,
    start_time: ClockTime,
    end_time: ClockTime,
    color: String,
    description: String,
}

impl TryFrom<RawParsedDraft> for ParsedDraft {
    type Error = DraftValidationError;

    fn try_from(raw: RawParsedDraft) -> Result<Self, Self::Error> {
        let draft = Self {
            title: raw.title,
            date: raw.date,
            start_time: raw.start_time,
            end_time: raw.end_time,
            color_tag: raw.color,
            note: raw.description,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Draft invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyTitle,
    InvalidSlot { start: ClockTime, end: ClockTime },
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "draft title must not be empty"),
            Self::InvalidSlot { start, end } => write!(
                f,
                "draft end_time ({end}) must be one hour after start_time ({start})"
            ),
        }
    }
}

impl Error for DraftValidationError {}
