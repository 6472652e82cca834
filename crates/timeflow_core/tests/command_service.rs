use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;
use std::error::Error;
use timeflow_core::{
    CommandOutcome, CommandService, CommandServiceError, EntryId, GatewayError, GatewayResult,
    ParsedDraft, ScheduleGateway, VoiceTranscript, NOT_UNDERSTOOD_MESSAGE,
};
use uuid::Uuid;

#[derive(Default)]
struct RecordingGateway {
    submitted: RefCell<Vec<ParsedDraft>>,
    fail_with: Option<GatewayError>,
}

impl ScheduleGateway for RecordingGateway {
    fn submit(&self, draft: &ParsedDraft) -> GatewayResult<EntryId> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.submitted.borrow_mut().push(draft.clone());
        Ok(Uuid::new_v4())
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("valid reference instant")
}

#[test]
fn handle_command_submits_draft_and_confirms() {
    let service = CommandService::new(RecordingGateway::default());

    let outcome = service
        .handle_command("Meeting tomorrow at 3pm", now())
        .expect("command should succeed");

    let CommandOutcome::Scheduled { entry_id, draft } = &outcome else {
        panic!("expected scheduled outcome, got {outcome:?}");
    };
    assert!(!entry_id.is_nil());
    assert_eq!(draft.date.to_string(), "2024-01-02");
    assert_eq!(outcome.feedback_message(), "Scheduled: Meeting at 15:00");

    let submitted = service.gateway().submitted.borrow();
    assert_eq!(submitted.len(), 1);
    assert_eq!(&submitted[0], draft);
}

#[test]
fn blank_command_is_not_understood_and_not_submitted() {
    let service = CommandService::new(RecordingGateway::default());

    let outcome = service.handle_command("   ", now()).expect("blank is not an error");

    assert_eq!(outcome, CommandOutcome::NotUnderstood);
    assert_eq!(outcome.feedback_message(), NOT_UNDERSTOOD_MESSAGE);
    assert!(service.gateway().submitted.borrow().is_empty());
}

#[test]
fn gateway_failure_is_propagated() {
    let service = CommandService::new(RecordingGateway {
        submitted: RefCell::new(Vec::new()),
        fail_with: Some(GatewayError::Unavailable("connection refused".to_string())),
    });

    let err = service
        .handle_command("Call mom at 9am", now())
        .expect_err("gateway failure should surface");

    assert!(matches!(err, CommandServiceError::Gateway(GatewayError::Unavailable(_))));
    assert!(err.to_string().contains("connection refused"));
    assert!(err.source().is_some());
}

#[test]
fn interim_transcript_is_rejected_before_interpretation() {
    let service = CommandService::new(RecordingGateway::default());

    let err = service
        .handle_transcript(&VoiceTranscript::interim("Meeting tomor"), now())
        .expect_err("interim transcripts must be rejected");

    assert!(matches!(err, CommandServiceError::InterimTranscript));
    assert!(service.gateway().submitted.borrow().is_empty());
}

#[test]
fn finalized_transcript_is_scheduled() {
    let service = CommandService::new(RecordingGateway::default());

    let outcome = service
        .handle_transcript(&VoiceTranscript::finalized("Dentist on friday at 2:30 pm"), now())
        .expect("final transcript should schedule");

    assert_eq!(outcome.feedback_message(), "Scheduled: Dentist at 14:30");
    let submitted = service.gateway().submitted.borrow();
    assert_eq!(submitted[0].date.to_string(), "2024-01-05");
    assert_eq!(submitted[0].end_time.to_string(), "15:30");
}
