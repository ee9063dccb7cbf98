use super::*;

#[test]
fn canonical_names_round_trip_through_display() {
    for kind in [
        TransitionKind::Fade,
        TransitionKind::ClockWipe,
        TransitionKind::Slide { from: Edge::Bottom },
        TransitionKind::Wipe { from: Edge::Left },
    ] {
        assert_eq!(parse_transition_kind(&kind.to_string()).unwrap(), kind);
    }
}

#[test]
fn shorthands_follow_the_incoming_edge() {
    assert_eq!(
        parse_transition_kind("slide_up").unwrap(),
        TransitionKind::Slide { from: Edge::Bottom }
    );
    assert_eq!(
        parse_transition_kind("slide").unwrap(),
        TransitionKind::Slide { from: Edge::Right }
    );
    assert_eq!(
        parse_transition_kind("wipe_right").unwrap(),
        TransitionKind::Wipe { from: Edge::Left }
    );
    assert_eq!(
        parse_transition_kind("wipe-ltr").unwrap(),
        TransitionKind::Wipe { from: Edge::Left }
    );
}

#[test]
fn parsing_ignores_case_and_separators() {
    assert_eq!(parse_transition_kind(" Cross Fade ").unwrap(), TransitionKind::Fade);
    assert_eq!(parse_transition_kind("Clock-Wipe").unwrap(), TransitionKind::ClockWipe);
    assert_eq!(
        parse_transition_kind("slide-from-top").unwrap(),
        TransitionKind::Slide { from: Edge::Top }
    );
}

#[test]
fn unknown_or_empty_names_are_rejected() {
    assert!(parse_transition_kind("").is_err());
    assert!(parse_transition_kind("   ").is_err());
    let err = parse_transition_kind("zoom").unwrap_err();
    assert!(err.to_string().contains("unknown transition kind 'zoom'"));
    assert!(parse_transition_kind("slide_from_middle").is_err());
}

#[test]
fn serde_uses_the_string_form() {
    let s = serde_json::to_string(&TransitionKind::Slide { from: Edge::Left }).unwrap();
    assert_eq!(s, "\"slide_from_left\"");
    let k: TransitionKind = serde_json::from_str("\"clockwipe\"").unwrap();
    assert_eq!(k, TransitionKind::ClockWipe);
    assert!(serde_json::from_str::<TransitionKind>("\"spin\"").is_err());
}
