use super::*;

#[test]
fn default_theme_is_valid() {
    let t = Theme::default();
    t.validate().unwrap();
    assert_eq!(t.timing.transition_frames, 15);
    assert_eq!(t.timing.stagger_frames, 8);
    assert_eq!(t.fonts.code, "JetBrains Mono");
    assert_eq!(t.font_sizes.xxl, 80.0);
}

#[test]
fn theme_json_overrides_selected_fields() {
    let t = Theme::from_json_str(
        r##"{"fonts": {"heading": "Roboto"}, "palette": {"bg": [0, 0, 0]}}"##,
    )
    .unwrap();
    assert_eq!(t.fonts.heading, "Roboto");
    assert_eq!(t.fonts.body, "Inter");
    assert_eq!(t.palette.bg.to_hex(), "#000000ff");
}

#[test]
fn invalid_theme_is_rejected() {
    let err = Theme::from_json_str(r#"{"fonts": {"code": "  "}}"#).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));

    let err = Theme::from_json_str(r#"{"timing": {"snappy": {"damping": -1}}}"#).unwrap_err();
    assert!(matches!(err, ExplainerError::Animation(_)));

    assert!(Theme::from_json_str("{not json").is_err());
}

#[test]
fn theme_round_trips_through_json() {
    let t = Theme::default();
    let s = serde_json::to_string(&t).unwrap();
    assert_eq!(Theme::from_json_str(&s).unwrap(), t);
}
