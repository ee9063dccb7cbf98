use super::*;
use crate::scene::kinds::{KeyTakeaway, SectionTitle};

fn title(n: u32) -> SceneKind {
    SceneKind::SectionTitle(SectionTitle {
        number: n,
        title: format!("Part {n}"),
        subtitle: None,
        accent: Accent::Indigo,
    })
}

fn seq(durations: &[u64], transition: u64) -> Sequence {
    Sequence {
        scenes: durations
            .iter()
            .enumerate()
            .map(|(i, &d)| SceneSpec::new(d, title(i as u32 + 1)))
            .collect(),
        transitions: vec![TransitionSpec::fade(transition); durations.len().saturating_sub(1)],
    }
}

fn comp(sections: Vec<Sequence>) -> Composition {
    Composition {
        id: "Test".to_owned(),
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas::FULL_HD,
        sections: sections
            .into_iter()
            .enumerate()
            .map(|(i, sequence)| Section {
                title: format!("Section {i}"),
                accent: Accent::cycle(i),
                sequence,
            })
            .collect(),
        declared_frames: None,
        overlays: Overlays::default(),
    }
}

#[test]
fn sequence_total_comes_from_the_accumulator() {
    let s = seq(&[150, 240, 90, 240, 240, 180, 150], 15);
    s.validate().unwrap();
    assert_eq!(s.total_frames().unwrap(), 1200);
    assert_eq!(s.layout().unwrap().starts[1], 135);
}

#[test]
fn sequence_errors_name_the_failing_scene() {
    let mut s = seq(&[90, 90], 15);
    s.scenes[1].duration_frames = 0;
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("scene 1: section_title scene duration must be > 0"));

    let mut s = seq(&[90, 90], 15);
    s.transitions.clear();
    assert!(matches!(
        s.validate().unwrap_err(),
        ExplainerError::TransitionCountMismatch { .. }
    ));
}

#[test]
fn invalid_transition_timing_is_rejected() {
    let mut s = seq(&[90, 90], 15);
    s.transitions[0] = TransitionSpec::fade(15).with_timing(Timing::Spring(SpringConfig {
        damping: 1.0,
        stiffness: 0.0,
        mass: 1.0,
    }));
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("transition 0"));
}

#[test]
fn long_transitions_are_allowed() {
    let s = seq(&[30, 30], 40);
    s.validate().unwrap();
    assert_eq!(s.total_frames().unwrap(), 20);

    let reordered = seq(&[30, 10, 30], 15);
    reordered.validate().unwrap();
    assert_eq!(reordered.layout().unwrap().reordered_starts(), vec![2]);
    assert_eq!(reordered.total_frames().unwrap(), 40);
}

#[test]
fn presets_have_house_durations() {
    let fade = TransitionSpec::preset("fade").unwrap();
    assert_eq!(fade, TransitionSpec::fade(15));

    let up = TransitionSpec::preset("Slide-Up").unwrap();
    assert_eq!(up.kind, TransitionKind::Slide { from: Edge::Bottom });
    assert_eq!(up.duration_frames, 20);

    let wipe = TransitionSpec::preset("wipe_right").unwrap();
    assert_eq!(wipe.kind, TransitionKind::Wipe { from: Edge::Left });
    assert_eq!(wipe.duration_frames, 18);

    assert_eq!(TransitionSpec::preset("clock_wipe").unwrap().duration_frames, 25);
    assert!(matches!(
        TransitionSpec::preset("spring_fade").unwrap().timing,
        Timing::Spring(_)
    ));
    for name in TransitionSpec::PRESETS {
        TransitionSpec::preset(name).unwrap();
    }

    let err = TransitionSpec::preset("zoom").unwrap_err();
    assert!(err.to_string().contains("expected one of: fade, slide_left"));
}

#[test]
fn cut_has_no_overlap() {
    assert_eq!(TransitionSpec::cut().duration_frames, 0);
}

#[test]
fn sections_are_joined_without_overlap() {
    let c = comp(vec![seq(&[150, 240], 15), seq(&[90], 0)]);
    c.validate().unwrap();
    let l = c.section_layout().unwrap();
    assert_eq!(l.starts, vec![0, 375]);
    assert_eq!(c.total_frames().unwrap(), 375 + 90);
}

#[test]
fn declared_total_is_checked() {
    let mut c = comp(vec![seq(&[150, 240], 15)]);
    c.declared_frames = Some(375);
    c.validate().unwrap();

    c.declared_frames = Some(390);
    match c.validate().unwrap_err() {
        ExplainerError::DeclaredDurationMismatch {
            id,
            declared,
            computed,
        } => {
            assert_eq!(id, "Test");
            assert_eq!(declared, 390);
            assert_eq!(computed, 375);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn composition_level_checks() {
    let mut c = comp(vec![]);
    assert!(c.validate().is_err());

    c = comp(vec![seq(&[10], 0)]);
    c.id = " ".to_owned();
    assert!(c.validate().is_err());

    c = comp(vec![seq(&[10], 0)]);
    c.fps = Fps { num: 30, den: 0 };
    assert!(c.validate().is_err());

    c = comp(vec![seq(&[10], 0)]);
    c.sections[0].title.clear();
    assert!(c.validate().is_err());

    c = comp(vec![seq(&[10], 0)]);
    c.overlays.watermark = Some(Watermark {
        opacity: 2.0,
        ..Watermark::default()
    });
    assert!(c.validate().is_err());

    c = comp(vec![seq(&[10], 0)]);
    c.overlays.grid = Some(GridPattern {
        spacing: 0.0,
        ..GridPattern::default()
    });
    assert!(c.validate().is_err());
    c.overlays.grid = Some(GridPattern::default());
    c.validate().unwrap();
}

#[test]
fn section_errors_carry_the_section_title() {
    let mut c = comp(vec![seq(&[10, 10], 0)]);
    c.sections[0].sequence.scenes[1].content = SceneKind::KeyTakeaway(KeyTakeaway {
        heading: "Key Takeaway".to_owned(),
        takeaway: String::new(),
        tone: crate::scene::components::Tone::Success,
    });
    let msg = c.validate().unwrap_err().to_string();
    assert!(msg.contains("section 'Section 0': scene 1: key_takeaway"), "{msg}");
}

#[test]
fn composition_json_round_trip() {
    let mut c = comp(vec![seq(&[150, 240], 15), seq(&[90, 60], 20)]);
    c.sections[1].sequence.scenes[0] = c.sections[1].sequence.scenes[0]
        .clone()
        .with_entrance(EntranceStyle::ScaleUp);
    c.overlays.particles = Some(ParticleField::default());
    let json = c.to_json_pretty().unwrap();
    assert_eq!(Composition::from_json_str(&json).unwrap(), c);
}

#[test]
fn json_defaults_and_errors() {
    let c = Composition::from_json_str(
        r#"{
            "id": "Mini",
            "sections": [{
                "title": "Only",
                "scenes": [{"duration_frames": 30, "content": {"type": "key_takeaway", "takeaway": "Done"}}]
            }]
        }"#,
    )
    .unwrap();
    assert_eq!(c.fps, Fps { num: 30, den: 1 });
    assert_eq!(c.canvas, Canvas::FULL_HD);
    assert!(c.overlays.background && c.overlays.progress_bar);
    assert_eq!(c.overlays.gradient_angle_deg, 135.0);
    assert!(!c.overlays.animate_gradient);
    assert_eq!(c.overlays.grid, None);
    assert_eq!(c.total_frames().unwrap(), 30);

    assert!(matches!(
        Composition::from_json_str("{").unwrap_err(),
        ExplainerError::Serde(_)
    ));
    let err = Composition::from_path("/definitely/missing.json").unwrap_err();
    assert!(err.to_string().contains("open composition JSON"));
}

#[test]
fn scene_entrance_wraps_the_content() {
    let theme = Theme::default();
    let fps = Fps { num: 30, den: 1 };
    let plain = SceneSpec::new(90, title(1));
    let entering = plain.clone().with_entrance(EntranceStyle::FadeUp);

    let start = entering.render(&theme, fps, Canvas::FULL_HD, LocalFrame(0));
    assert!(start.layers.is_empty());

    let settled = entering.render(&theme, fps, Canvas::FULL_HD, LocalFrame(80));
    assert_eq!(settled, plain.render(&theme, fps, Canvas::FULL_HD, LocalFrame(80)));
    assert_eq!(
        entering.render(&theme, fps, Canvas::FULL_HD, LocalFrame(-4)),
        start
    );
}
