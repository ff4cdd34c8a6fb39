use campaign_scribe::domain::AudioFormat;

#[test]
fn given_every_format_when_parsing_its_name_then_returns_same_format() {
    for format in AudioFormat::ALL {
        assert_eq!(format.as_str().parse::<AudioFormat>().unwrap(), format);
    }
}

#[test]
fn given_formats_when_displayed_then_uses_canonical_names() {
    let names: Vec<String> = AudioFormat::ALL.iter().map(|f| f.to_string()).collect();

    assert_eq!(names, ["MP3", "MP4", "WAV", "FLAC", "AMR", "OGG", "WebM"]);
}

#[test]
fn given_mixed_case_name_when_parsing_then_matches_ignoring_case() {
    assert_eq!("mp3".parse::<AudioFormat>().unwrap(), AudioFormat::Mp3);
    assert_eq!("Flac".parse::<AudioFormat>().unwrap(), AudioFormat::Flac);
    assert_eq!("WEBM".parse::<AudioFormat>().unwrap(), AudioFormat::WebM);
}

#[test]
fn given_unknown_name_when_parsing_then_returns_invalid_value() {
    let err = "AAC".parse::<AudioFormat>().unwrap_err();

    assert_eq!(err.value(), "AAC");
    assert_eq!(err.to_string(), "invalid audio format: AAC");
}

#[test]
fn given_empty_name_when_parsing_then_returns_invalid_value() {
    assert!("".parse::<AudioFormat>().is_err());
}
