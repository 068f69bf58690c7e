use transcriber::domain::{Transcript, TranscriptStatus, Utterance};

#[test]
fn given_utterances_when_completed_then_status_is_completed_without_error() {
    let transcript = Transcript::completed(vec![Utterance::new("A", "Hello")]);

    assert_eq!(transcript.status, TranscriptStatus::Completed);
    assert!(!transcript.is_error());
    assert_eq!(transcript.error, None);
    assert_eq!(transcript.utterances.len(), 1);
}

#[test]
fn given_detail_when_failed_then_carries_error_and_no_utterances() {
    let transcript = Transcript::failed("audio too short");

    assert!(transcript.is_error());
    assert_eq!(transcript.error.as_deref(), Some("audio too short"));
    assert!(transcript.utterances.is_empty());
}
