use std::fmt;
use std::str::FromStr;

use super::InvalidValue;

/// Encoding of an uploaded session recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Mp4,
    Wav,
    Flac,
    Amr,
    Ogg,
    WebM,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 7] = [
        AudioFormat::Mp3,
        AudioFormat::Mp4,
        AudioFormat::Wav,
        AudioFormat::Flac,
        AudioFormat::Amr,
        AudioFormat::Ogg,
        AudioFormat::WebM,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "MP3",
            AudioFormat::Mp4 => "MP4",
            AudioFormat::Wav => "WAV",
            AudioFormat::Flac => "FLAC",
            AudioFormat::Amr => "AMR",
            AudioFormat::Ogg => "OGG",
            AudioFormat::WebM => "WebM",
        }
    }
}

impl FromStr for AudioFormat {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidValue::new("audio format", s))
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
