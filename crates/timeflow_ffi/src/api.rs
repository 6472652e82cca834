//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose interpreter entry points for typed and spoken commands to Dart via FRB.
//! - Fold every failure into a response envelope the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Reference instants cross the boundary as local wall-clock text; no
//!   timezone conversion happens here.

use chrono::{Local, NaiveDateTime};
use log::warn;
use timeflow_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, interpret,
    ping as ping_inner, scheduled_message, ParsedDraft, NOT_UNDERSTOOD_MESSAGE,
};

const NOW_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const INTERIM_TRANSCRIPT_MESSAGE: &str = "Still listening... waiting for the final transcript.";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Draft envelope returned to the command bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDraftResponse {
    /// Whether a draft was produced.
    pub ok: bool,
    pub title: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `HH:MM`.
    pub start_time: Option<String>,
    /// `HH:MM`.
    pub end_time: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    /// Confirmation line on success, retry hint or error otherwise.
    pub message: String,
}

impl CommandDraftResponse {
    fn from_draft(draft: ParsedDraft) -> Self {
        let message = scheduled_message(&draft);
        Self {
            ok: true,
            title: Some(draft.title),
            date: Some(draft.date.to_string()),
            start_time: Some(draft.start_time.to_string()),
            end_time: Some(draft.end_time.to_string()),
            color: Some(draft.color_tag),
            description: Some(draft.note),
            message,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            title: None,
            date: None,
            start_time: None,
            end_time: None,
            color: None,
            description: None,
            message: message.into(),
        }
    }
}

/// Interprets one typed command into a schedule draft.
///
/// Input semantics:
/// - `text`: raw command bar input.
/// - `now_local`: optional `YYYY-MM-DDTHH:MM:SS` local wall-clock reference;
///   `None` uses the device's local time.
///
/// # FFI contract
/// - Sync call, pure computation; no storage is touched.
/// - Never panics.
/// - Blank input returns `ok=false` with a retry hint.
#[flutter_rust_bridge::frb(sync)]
pub fn interpret_command(text: String, now_local: Option<String>) -> CommandDraftResponse {
    let now = match resolve_now(now_local.as_deref()) {
        Ok(now) => now,
        Err(message) => return CommandDraftResponse::failure(message),
    };

    match interpret(text.as_str(), now) {
        Some(draft) => CommandDraftResponse::from_draft(draft),
        None => CommandDraftResponse::failure(NOT_UNDERSTOOD_MESSAGE),
    }
}

/// Interprets one speech-recognition result.
///
/// # FFI contract
/// - Interim results (`is_final=false`) are never interpreted and return
///   `ok=false`; callers should keep listening.
/// - Finalized results behave exactly like [`interpret_command`].
#[flutter_rust_bridge::frb(sync)]
pub fn voice_command(
    transcript: String,
    is_final: bool,
    now_local: Option<String>,
) -> CommandDraftResponse {
    if !is_final {
        return CommandDraftResponse::failure(INTERIM_TRANSCRIPT_MESSAGE);
    }
    interpret_command(transcript, now_local)
}

fn resolve_now(now_local: Option<&str>) -> Result<NaiveDateTime, String> {
    match now_local.map(str::trim) {
        None | Some("") => Ok(Local::now().naive_local()),
        Some(raw) => NaiveDateTime::parse_from_str(raw, NOW_LOCAL_FORMAT).map_err(|err| {
            warn!("event=ffi_interpret module=ffi status=error reason=invalid_now_local");
            format!("interpret_command failed: invalid now_local `{raw}`: {err}")
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, interpret_command, ping, voice_command};

    const NEW_YEAR: &str = "2024-01-01T08:00:00";

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn interpret_command_returns_draft_fields() {
        let response = interpret_command(
            "Meeting tomorrow at 3pm".to_string(),
            Some(NEW_YEAR.to_string()),
        );
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.title.as_deref(), Some("Meeting"));
        assert_eq!(response.date.as_deref(), Some("2024-01-02"));
        assert_eq!(response.start_time.as_deref(), Some("15:00"));
        assert_eq!(response.end_time.as_deref(), Some("16:00"));
        assert_eq!(response.color.as_deref(), Some("bg-indigo-500"));
        assert_eq!(response.message, "Scheduled: Meeting at 15:00");
    }

    #[test]
    fn interpret_command_reports_blank_input() {
        let response = interpret_command("  ".to_string(), Some(NEW_YEAR.to_string()));
        assert!(!response.ok);
        assert!(response.title.is_none());
        assert!(response.message.starts_with("Couldn't understand"));
    }

    #[test]
    fn interpret_command_rejects_malformed_reference_instant() {
        let response = interpret_command("Call mom".to_string(), Some("yesterday".to_string()));
        assert!(!response.ok);
        assert!(response.message.contains("now_local"));
    }

    #[test]
    fn interpret_command_defaults_to_local_now() {
        let response = interpret_command("Call mom at 9am".to_string(), None);
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.start_time.as_deref(), Some("09:00"));
    }

    #[test]
    fn voice_command_ignores_interim_results() {
        let response = voice_command("Meeting tomo".to_string(), false, Some(NEW_YEAR.to_string()));
        assert!(!response.ok);
        assert!(response.title.is_none());

        let response = voice_command(
            "Meeting tomorrow at 3pm".to_string(),
            true,
            Some(NEW_YEAR.to_string()),
        );
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.date.as_deref(), Some("2024-01-02"));
    }
}
