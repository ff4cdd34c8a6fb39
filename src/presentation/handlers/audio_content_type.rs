use crate::domain::AudioFormat;

/// Maps an upload's `Content-Type` to the recording format. Media type
/// parameters such as `; codecs=opus` are ignored.
pub fn audio_format_from_content_type(content_type: &str) -> Option<AudioFormat> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "audio/mpeg" | "audio/mp3" => Some(AudioFormat::Mp3),
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => Some(AudioFormat::Mp4),
        "audio/wav" | "audio/x-wav" | "audio/wave" => Some(AudioFormat::Wav),
        "audio/flac" | "audio/x-flac" => Some(AudioFormat::Flac),
        "audio/amr" => Some(AudioFormat::Amr),
        "audio/ogg" => Some(AudioFormat::Ogg),
        "audio/webm" => Some(AudioFormat::WebM),
        _ => None,
    }
}
