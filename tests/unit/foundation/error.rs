use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ExplainerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ExplainerError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ExplainerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn timeline_errors_name_their_numbers() {
    let e = ExplainerError::DurationUnderflow {
        scene_frames: 20,
        transition_frames: 25,
    };
    assert!(e.is_duration_underflow());
    let s = e.to_string();
    assert!(s.starts_with("duration underflow:"));
    assert!(s.contains("25") && s.contains("20"));

    let e = ExplainerError::TransitionCountMismatch {
        scenes: 3,
        transitions: 1,
    };
    assert!(!e.is_duration_underflow());
    assert_eq!(
        e.to_string(),
        "transition count mismatch: 3 scenes need 2 transitions, got 1"
    );

    let e = ExplainerError::DeclaredDurationMismatch {
        id: "intro".to_string(),
        declared: 1190,
        computed: 1200,
    };
    assert!(e.to_string().contains("'intro'"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ExplainerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
