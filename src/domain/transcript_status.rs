use std::fmt;
use std::str::FromStr;

use super::InvalidValue;

/// Progress of a transcription job.
///
/// Statuses only move forward:
///
/// ```text
/// NotStarted -> Transcribing -> Summarizing -> Done
///                    |               |
///                    v               v
///           TranscriptionFailed  SummarizingFailed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptStatus {
    NotStarted,
    Transcribing,
    Summarizing,
    Done,
    TranscriptionFailed,
    SummarizingFailed,
}

impl TranscriptStatus {
    pub const ALL: [TranscriptStatus; 6] = [
        TranscriptStatus::NotStarted,
        TranscriptStatus::Transcribing,
        TranscriptStatus::Summarizing,
        TranscriptStatus::Done,
        TranscriptStatus::TranscriptionFailed,
        TranscriptStatus::SummarizingFailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptStatus::NotStarted => "NotStarted",
            TranscriptStatus::Transcribing => "Transcribing",
            TranscriptStatus::Summarizing => "Summarizing",
            TranscriptStatus::Done => "Done",
            TranscriptStatus::TranscriptionFailed => "TranscriptionFailed",
            TranscriptStatus::SummarizingFailed => "SummarizingFailed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptStatus::Done
                | TranscriptStatus::TranscriptionFailed
                | TranscriptStatus::SummarizingFailed
        )
    }

    pub fn can_transition_to(&self, next: TranscriptStatus) -> bool {
        use TranscriptStatus::*;

        matches!(
            (*self, next),
            (NotStarted, Transcribing)
                | (Transcribing, Summarizing)
                | (Transcribing, TranscriptionFailed)
                | (Summarizing, Done)
                | (Summarizing, SummarizingFailed)
        )
    }

    /// Whether the provider has already written the raw transcript text.
    pub fn has_transcript_text(&self) -> bool {
        matches!(
            self,
            TranscriptStatus::Summarizing
                | TranscriptStatus::Done
                | TranscriptStatus::SummarizingFailed
        )
    }
}

impl FromStr for TranscriptStatus {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidValue::new("transcript status", s))
    }
}

impl fmt::Display for TranscriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
