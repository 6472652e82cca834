//! Core domain logic for TimeFlow scheduling commands.
//! This crate is the single source of truth for interpreter rules.

pub mod command;
pub mod logging;
pub mod model;
pub mod service;

pub use command::{interpret, interpret_detailed, interpret_now, DateCue, Interpretation};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::clock::{ClockTime, ClockTimeError};
pub use model::draft::{DraftValidationError, ParsedDraft, AI_COLOR_TAG, AI_NOTE, DEFAULT_TITLE};
pub use service::command_service::{
    CommandOutcome, CommandService, CommandServiceError, EntryId, GatewayError, GatewayResult,
    scheduled_message, ScheduleGateway, VoiceTranscript, NOT_UNDERSTOOD_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
