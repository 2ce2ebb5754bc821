use sketch_error::{
    ImageError, ImageErrorKind, ServerError, ServerErrorKind, SketchError, SketchErrorKind,
    SynthesisError, SynthesisErrorKind, VisionError, VisionErrorKind,
};

#[test]
fn status_message_carries_code_and_body() {
    let err: SketchError = VisionError::new(VisionErrorKind::Status {
        status: 500,
        body: "server error".to_string(),
    })
    .into();

    let message = err.user_message();
    assert!(message.contains("500"));
    assert!(message.contains("server error"));
    assert!(!message.contains(file!()), "user message must not leak source location");
}

#[test]
fn missing_field_names_the_key() {
    let err: SketchError = VisionError::new(VisionErrorKind::MissingField("choices".to_string())).into();

    assert_eq!(
        err.user_message(),
        "KeyError: 'choices' - the structure of the response JSON is not as expected."
    );
    assert!(matches!(err.kind(), SketchErrorKind::Vision(_)));
}

#[test]
fn full_display_keeps_location() {
    let err = ImageError::new(ImageErrorKind::Decode("truncated".to_string()));
    let rendered = err.to_string();

    assert!(rendered.contains("Failed to decode image: truncated"));
    assert!(rendered.contains("user_message_test.rs"));
}

#[test]
fn synthesis_failures_share_one_class() {
    let missing: SketchError = SynthesisError::new(SynthesisErrorKind::MissingUrl).into();
    let transport: SketchError =
        SynthesisError::new(SynthesisErrorKind::Transport("connection reset".to_string())).into();

    assert!(matches!(missing.kind(), SketchErrorKind::Synthesis(_)));
    assert!(matches!(transport.kind(), SketchErrorKind::Synthesis(_)));
}

#[test]
fn form_rejection_shows_only_its_message() {
    let err: SketchError =
        ServerError::new(ServerErrorKind::Form("Unknown style: Cubist".to_string())).into();

    assert!(matches!(err.kind(), SketchErrorKind::Server(_)));
    assert_eq!(err.user_message(), "Unknown style: Cubist");
    assert!(err.to_string().contains("user_message_test.rs"));
}
