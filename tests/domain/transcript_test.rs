use campaign_scribe::domain::{AudioFormat, JobId, StorageLocation, Transcript, TranscriptStatus};

fn locations() -> (JobId, StorageLocation, StorageLocation) {
    (
        JobId::from_raw("session0-1"),
        StorageLocation::from_raw("u/c/s/audio-1"),
        StorageLocation::from_raw("u/c/s/transcript-1"),
    )
}

#[test]
fn given_submission_when_creating_record_then_status_is_transcribing() {
    let (job_id, audio, text) = locations();

    let transcript = Transcript::submitted(job_id.clone(), audio, AudioFormat::Wav, text);

    assert_eq!(transcript.job_id, job_id);
    assert_eq!(transcript.status, TranscriptStatus::Transcribing);
    assert!(transcript.summary_location.is_empty());
    assert_eq!(transcript.created_at, transcript.updated_at);
}

#[test]
fn given_backfill_when_creating_record_then_status_is_not_started() {
    let (job_id, audio, text) = locations();

    let transcript = Transcript::not_started(job_id, audio, AudioFormat::Ogg, text);

    assert_eq!(transcript.status, TranscriptStatus::NotStarted);
}
