//! Command use-case service.
//!
//! # Responsibility
//! - Interpret typed or finalized spoken commands into drafts.
//! - Hand drafts to a `ScheduleGateway` that assigns identity and stores them.
//! - Produce the user-facing feedback line for each outcome.
//!
//! # Invariants
//! - Interim voice transcripts never reach the interpreter.
//! - Drafts are validated before they are submitted.
//! - The service keeps no state between calls.

use crate::command::interpret;
use crate::model::draft::{DraftValidationError, ParsedDraft};
use chrono::NaiveDateTime;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identity assigned to a stored schedule entry by the gateway.
pub type EntryId = Uuid;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Feedback shown when a command produced no draft.
pub const NOT_UNDERSTOOD_MESSAGE: &str =
    "Couldn't understand the command. Try 'Meeting tomorrow at 3pm'";

/// Storage port for interpreted drafts.
///
/// Implementations own remote storage and any local fallback; the service
/// only sees the assigned entry ID or an error.
pub trait ScheduleGateway {
    /// Stores one draft and returns its assigned identity.
    fn submit(&self, draft: &ParsedDraft) -> GatewayResult<EntryId>;
}

/// Gateway-side failure reported back through the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Neither the remote store nor any fallback accepted the draft.
    Unavailable(String),
    /// The store refused the draft.
    Rejected(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "schedule store unavailable: {details}"),
            Self::Rejected(details) => write!(f, "schedule store rejected draft: {details}"),
        }
    }
}

impl Error for GatewayError {}

/// Finalized or interim text from a speech session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceTranscript {
    pub text: String,
    /// `false` for interim results streamed while the user is still speaking.
    pub is_final: bool,
}

impl VoiceTranscript {
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }
}

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Draft was stored under `entry_id`.
    Scheduled { entry_id: EntryId, draft: ParsedDraft },
    /// Input was blank; the caller should let the user retry.
    NotUnderstood,
}

impl CommandOutcome {
    /// Confirmation or retry hint for the UI.
    pub fn feedback_message(&self) -> String {
        match self {
            Self::Scheduled { draft, .. } => scheduled_message(draft),
            Self::NotUnderstood => NOT_UNDERSTOOD_MESSAGE.to_string(),
        }
    }
}

/// Confirmation line for a scheduled draft, e.g. `Scheduled: Meeting at 15:00`.
pub fn scheduled_message(draft: &ParsedDraft) -> String {
    format!("Scheduled: {} at {}", draft.title, draft.start_time)
}

/// Service error for command use-cases.
#[derive(Debug)]
pub enum CommandServiceError {
    /// Interim transcript was passed where a finalized one is required.
    InterimTranscript,
    /// Interpreted draft violated a model invariant.
    InvalidDraft(DraftValidationError),
    /// Gateway failed to store the draft.
    Gateway(GatewayError),
}

impl Display for CommandServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InterimTranscript => write!(f, "interim transcripts cannot be scheduled"),
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InterimTranscript => None,
            Self::InvalidDraft(err) => Some(err),
            Self::Gateway(err) => Some(err),
        }
    }
}

impl From<DraftValidationError> for CommandServiceError {
    fn from(value: DraftValidationError) -> Self {
        Self::InvalidDraft(value)
    }
}

impl From<GatewayError> for CommandServiceError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Command service facade over gateway implementations.
pub struct CommandService<G: ScheduleGateway> {
    gateway: G,
}

impl<G: ScheduleGateway> CommandService<G> {
    /// Creates a service using the provided gateway implementation.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns the wrapped gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Interprets a typed command and stores the resulting draft.
    ///
    /// # Errors
    /// - `InvalidDraft` when the interpreted draft fails validation.
    /// - `Gateway` when the gateway cannot store the draft.
    pub fn handle_command(
        &self,
        input: &str,
        now: NaiveDateTime,
    ) -> Result<CommandOutcome, CommandServiceError> {
        let Some(draft) = interpret(input, now) else {
            info!("event=command_handle module=service status=not_understood");
            return Ok(CommandOutcome::NotUnderstood);
        };
        draft.validate()?;

        let entry_id = self.gateway.submit(&draft).map_err(|err| {
            warn!("event=command_handle module=service status=error stage=submit error={err}");
            err
        })?;
        info!("event=command_handle module=service status=ok entry_id={entry_id}");
        Ok(CommandOutcome::Scheduled { entry_id, draft })
    }

    /// Handles one speech-session result.
    ///
    /// # Errors
    /// - `InterimTranscript` when `transcript.is_final` is `false`.
    /// - Any error from [`Self::handle_command`].
    pub fn handle_transcript(
        &self,
        transcript: &VoiceTranscript,
        now: NaiveDateTime,
    ) -> Result<CommandOutcome, CommandServiceError> {
        if !transcript.is_final {
            return Err(CommandServiceError::InterimTranscript);
        }
        self.handle_command(transcript.text.as_str(), now)
    }
}
