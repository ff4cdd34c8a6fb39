use campaign_scribe::domain::AudioFormat;
use campaign_scribe::presentation::handlers::audio_format_from_content_type;

#[test]
fn given_audio_mime_types_when_mapping_then_returns_matching_format() {
    let cases = [
        ("audio/mpeg", AudioFormat::Mp3),
        ("audio/mp4", AudioFormat::Mp4),
        ("audio/x-m4a", AudioFormat::Mp4),
        ("audio/wav", AudioFormat::Wav),
        ("audio/x-wav", AudioFormat::Wav),
        ("audio/flac", AudioFormat::Flac),
        ("audio/amr", AudioFormat::Amr),
        ("audio/ogg", AudioFormat::Ogg),
        ("audio/webm", AudioFormat::WebM),
    ];

    for (content_type, expected) in cases {
        assert_eq!(
            audio_format_from_content_type(content_type),
            Some(expected),
            "{content_type}"
        );
    }
}

#[test]
fn given_parameters_and_mixed_case_when_mapping_then_ignored() {
    assert_eq!(
        audio_format_from_content_type("Audio/OGG; codecs=opus"),
        Some(AudioFormat::Ogg)
    );
}

#[test]
fn given_non_audio_type_when_mapping_then_none() {
    assert_eq!(audio_format_from_content_type("text/plain"), None);
    assert_eq!(audio_format_from_content_type(""), None);
    assert_eq!(audio_format_from_content_type("audio/aac"), None);
}
