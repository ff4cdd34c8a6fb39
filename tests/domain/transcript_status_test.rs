use campaign_scribe::domain::TranscriptStatus;
use campaign_scribe::domain::TranscriptStatus::*;

#[test]
fn given_every_status_when_parsing_its_name_then_returns_same_status() {
    for status in TranscriptStatus::ALL {
        assert_eq!(status.to_string().parse::<TranscriptStatus>().unwrap(), status);
    }
}

#[test]
fn given_lowercase_name_when_parsing_then_matches_ignoring_case() {
    assert_eq!("done".parse::<TranscriptStatus>().unwrap(), Done);
    assert_eq!(
        "TRANSCRIPTIONFAILED".parse::<TranscriptStatus>().unwrap(),
        TranscriptionFailed
    );
}

#[test]
fn given_unknown_name_when_parsing_then_returns_invalid_value() {
    let err = "Finished".parse::<TranscriptStatus>().unwrap_err();

    assert_eq!(err.kind(), "transcript status");
    assert_eq!(err.value(), "Finished");
}

#[test]
fn given_forward_edges_when_checking_transition_then_allowed() {
    assert!(NotStarted.can_transition_to(Transcribing));
    assert!(Transcribing.can_transition_to(Summarizing));
    assert!(Transcribing.can_transition_to(TranscriptionFailed));
    assert!(Summarizing.can_transition_to(Done));
    assert!(Summarizing.can_transition_to(SummarizingFailed));
}

#[test]
fn given_backward_or_skipping_edges_when_checking_transition_then_rejected() {
    assert!(!Transcribing.can_transition_to(NotStarted));
    assert!(!Transcribing.can_transition_to(Done));
    assert!(!NotStarted.can_transition_to(Summarizing));
    assert!(!Summarizing.can_transition_to(TranscriptionFailed));
    assert!(!Transcribing.can_transition_to(Transcribing));
}

#[test]
fn given_terminal_status_when_checking_any_transition_then_rejected() {
    for terminal in [Done, TranscriptionFailed, SummarizingFailed] {
        assert!(terminal.is_terminal());
        for next in TranscriptStatus::ALL {
            assert!(!terminal.can_transition_to(next), "{terminal} -> {next}");
        }
    }
}

#[test]
fn given_statuses_when_checking_transcript_text_then_only_after_transcription() {
    let with_text: Vec<TranscriptStatus> = TranscriptStatus::ALL
        .into_iter()
        .filter(|s| s.has_transcript_text())
        .collect();

    assert_eq!(with_text, vec![Summarizing, Done, SummarizingFailed]);
}
