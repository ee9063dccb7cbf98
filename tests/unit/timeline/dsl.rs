use super::*;
use crate::scene::kinds::{KeyTakeaway, SceneKind};
use crate::scene::components::Tone;
use crate::transition::kind::{Edge, TransitionKind};

fn scene(frames: u64) -> SceneSpec {
    SceneSpec::new(
        frames,
        SceneKind::KeyTakeaway(KeyTakeaway {
            heading: "Key Takeaway".to_owned(),
            takeaway: "Something".to_owned(),
            tone: Tone::Success,
        }),
    )
}

#[test]
fn default_transition_fills_every_join() {
    let seq = SequenceBuilder::new()
        .scene(scene(150))
        .scene(scene(240))
        .scene(scene(90))
        .build()
        .unwrap();
    assert_eq!(seq.transitions, vec![TransitionSpec::fade(15); 2]);
    assert_eq!(seq.total_frames().unwrap(), 450);
}

#[test]
fn explicit_transition_applies_to_the_next_join_only() {
    let seq = SequenceBuilder::new()
        .default_transition(TransitionSpec::cut())
        .scene(scene(90))
        .transition(TransitionSpec::slide(Edge::Bottom, 20))
        .scene(scene(90))
        .scene(scene(90))
        .build()
        .unwrap();
    assert_eq!(
        seq.transitions[0].kind,
        TransitionKind::Slide { from: Edge::Bottom }
    );
    assert_eq!(seq.transitions[1], TransitionSpec::cut());
    assert_eq!(seq.total_frames().unwrap(), 250);
}

#[test]
fn misplaced_transitions_are_rejected() {
    let err = SequenceBuilder::new()
        .transition(TransitionSpec::fade(10))
        .scene(scene(30))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("before the first scene"));

    let err = SequenceBuilder::new()
        .scene(scene(30))
        .transition(TransitionSpec::fade(10))
        .transition(TransitionSpec::fade(10))
        .scene(scene(30))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("two transitions declared after scene 0"));

    let err = SequenceBuilder::new()
        .scene(scene(30))
        .transition(TransitionSpec::fade(10))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("after the last scene"));
}

#[test]
fn build_validates_durations() {
    assert!(SequenceBuilder::new().build().is_err());
    let err = SequenceBuilder::new()
        .default_transition(TransitionSpec::fade(25))
        .scene(scene(10))
        .scene(scene(10))
        .build()
        .unwrap_err();
    assert!(err.is_duration_underflow());
}

#[test]
fn section_builder_carries_title_and_accent() {
    let section = SectionBuilder::new("DNS Lookup")
        .accent(Accent::Amber)
        .scene(scene(90))
        .scene(scene(210))
        .build()
        .unwrap();
    assert_eq!(section.title, "DNS Lookup");
    assert_eq!(section.accent, Accent::Amber);
    assert_eq!(section.sequence.total_frames().unwrap(), 285);

    assert!(SectionBuilder::new("  ").scene(scene(10)).build().is_err());
}

#[test]
fn composition_builder_checks_declared_total() {
    let section = || {
        SectionBuilder::new("One")
            .scene(scene(150))
            .scene(scene(240))
            .build()
            .unwrap()
    };
    let fps = Fps::new(30, 1).unwrap();

    let comp = CompositionBuilder::new("Demo", fps, Canvas::FULL_HD)
        .section(section())
        .section(section())
        .declared_frames(750)
        .particles(ParticleField::default())
        .watermark(Watermark::default())
        .progress_bar(false)
        .background(false)
        .build()
        .unwrap();
    assert_eq!(comp.total_frames().unwrap(), 750);
    assert!(comp.overlays.particles.is_some());
    assert!(!comp.overlays.progress_bar && !comp.overlays.background);

    let err = CompositionBuilder::new("Demo", fps, Canvas::FULL_HD)
        .section(section())
        .declared_frames(390)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ExplainerError::DeclaredDurationMismatch {
            declared: 390,
            computed: 375,
            ..
        }
    ));
}

#[test]
fn composition_needs_a_section() {
    let fps = Fps::new(30, 1).unwrap();
    assert!(CompositionBuilder::new("Empty", fps, Canvas::FULL_HD).build().is_err());
}
