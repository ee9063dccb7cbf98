use super::*;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::frame::Clip;
use crate::theme::{Accent, Theme};

const SAMPLES: &str = r#"[
    {"type": "hook_question", "question": "What happens when you click?", "subtext": "More than you think"},
    {"type": "title_intro", "title": "How the Web Works", "objectives": ["Clients", "Servers"]},
    {"type": "section_title", "number": 2, "title": "DNS Lookup", "subtitle": "The phone book"},
    {"type": "concept_explain", "heading": "Names to Numbers", "body": "DNS maps names.", "analogy": "Like contacts.", "icon": "book"},
    {"type": "step_sequence", "heading": "Steps", "steps": [{"title": "Read"}, {"title": "Send", "description": "Over HTTP"}]},
    {"type": "visual_metaphor", "icon": "plate", "heading": "Customer", "analogy": "You order."},
    {"type": "key_takeaway", "takeaway": "Clients send requests."},
    {"type": "diagram_flow", "title": "Flow", "nodes": [{"label": "A"}, {"label": "B"}], "connections": [{"from": 0, "to": 1, "label": "ask"}]},
    {"type": "stat_highlight", "stat": 1.1, "decimals": 1, "suffix": " trillion", "label": "queries"},
    {"type": "code_display", "title": "Response", "code": "HTTP/1.1 200 OK\n\n<html>", "annotations": [{"line": 1, "text": "Status"}]},
    {"type": "bullet_list", "heading": "Codes", "items": ["200", "404"], "style": "number"},
    {"type": "comparison_split", "heading": "SQL vs NoSQL",
     "left": {"title": "SQL", "items": ["Tables"], "accent": "cyan"},
     "right": {"title": "NoSQL", "items": ["Documents"], "accent": "violet"}},
    {"type": "warning_callout", "heading": "Careful", "body": "Validate on the server.", "severity": "danger"},
    {"type": "summary_recap", "items": ["One", "Two"]},
    {"type": "end_screen", "channel": "medevsmaker", "tagline": "Tech for builders"},
    {"type": "cold_open", "statement": "Every click starts a journey.", "subtext": "Let's follow it", "entrance": "gradient", "show_particles": false},
    {"type": "outro"},
    {"type": "before_after", "heading": "Caching",
     "before": {"title": "Before", "items": ["Slow", "Repeated lookups"]},
     "after": {"title": "After", "items": ["Fast"]}},
    {"type": "timeline_scene", "heading": "History", "nodes": [{"label": "1989", "description": "WWW"}, {"label": "1995"}, {"label": "2015"}], "layout": "vertical"},
    {"type": "data_chart", "heading": "Latency", "bars": [{"label": "Cache", "value": 2}, {"label": "Disk", "value": 1200, "accent": "amber"}], "suffix": " ms"}
]"#;

fn samples() -> Vec<SceneKind> {
    serde_json::from_str(SAMPLES).unwrap()
}

fn ctx(theme: &Theme) -> SceneCtx<'_> {
    SceneCtx::new(theme, Fps { num: 30, den: 1 }, Canvas::FULL_HD)
}

fn is_periodic(kind: &SceneKind) -> bool {
    match kind {
        SceneKind::WarningCallout(_) | SceneKind::EndScreen(_) => true,
        SceneKind::ColdOpen(c) => c.show_particles || c.entrance != ColdOpenEntrance::Gradient,
        _ => false,
    }
}

#[test]
fn every_kind_parses_with_defaults_and_validates() {
    let kinds = samples();
    let names: Vec<_> = kinds.iter().map(SceneKind::name).collect();
    assert_eq!(names.len(), 20);
    assert_eq!(names[0], "hook_question");
    assert_eq!(names[14], "end_screen");
    assert_eq!(
        names[15..],
        ["cold_open", "outro", "before_after", "timeline_scene", "data_chart"]
    );
    for kind in &kinds {
        kind.validate().unwrap();
    }

    let SceneKind::KeyTakeaway(t) = &kinds[6] else {
        panic!("expected a takeaway");
    };
    assert_eq!(t.heading, "Key Takeaway");
    let SceneKind::EndScreen(e) = &kinds[14] else {
        panic!("expected an end screen");
    };
    assert_eq!(e.cta, "Subscribe for more");
    assert!(e.show_particles);
    let SceneKind::Outro(o) = &kinds[16] else {
        panic!("expected an outro");
    };
    assert_eq!(o, &Outro::default());
    assert_eq!(o.tagline, "AI tools for builders");
    let SceneKind::BeforeAfter(b) = &kinds[17] else {
        panic!("expected before/after");
    };
    assert_eq!(b.reveal, BeforeAfterReveal::Wipe);
    assert_eq!((b.before_accent, b.after_accent), (Accent::Red, Accent::Green));
}

#[test]
fn kinds_round_trip_through_json() {
    for kind in samples() {
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["type"], kind.name());
        let back: SceneKind = serde_json::from_value(json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn unknown_type_is_rejected() {
    assert!(serde_json::from_str::<SceneKind>(r#"{"type": "spinner"}"#).is_err());
}

#[test]
fn every_kind_draws_something_once_entered() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    for kind in samples() {
        let frame = kind.render(&ctx, LocalFrame(120));
        assert!(!frame.layers.is_empty(), "{} drew nothing", kind.name());
        assert_eq!((frame.width, frame.height), (1920, 1080));
    }
}

#[test]
fn frames_before_start_render_like_frame_zero() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    for kind in samples() {
        assert_eq!(
            kind.render(&ctx, LocalFrame(-30)),
            kind.render(&ctx, LocalFrame(0)),
            "{}",
            kind.name()
        );
    }
}

#[test]
fn entrances_hold_their_final_pose() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    for kind in samples().iter().filter(|k| !is_periodic(k)) {
        assert_eq!(
            kind.render(&ctx, LocalFrame(400)),
            kind.render(&ctx, LocalFrame(900)),
            "{}",
            kind.name()
        );
    }
}

#[test]
fn rendering_is_pure() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    for kind in samples() {
        for f in [0, 7, 33, 180] {
            assert_eq!(kind.render(&ctx, LocalFrame(f)), kind.render(&ctx, LocalFrame(f)));
        }
    }
}

#[test]
fn validation_names_the_scene_kind() {
    let kind = SceneKind::KeyTakeaway(KeyTakeaway {
        heading: "Key Takeaway".to_owned(),
        takeaway: "  ".to_owned(),
        tone: crate::scene::components::Tone::Success,
    });
    let err = kind.validate().unwrap_err();
    assert!(err.to_string().contains("key_takeaway: takeaway must be non-empty"));
}

#[test]
fn diagram_connections_must_reference_nodes() {
    let mut flow: DiagramFlow = serde_json::from_str(
        r#"{"title": "F", "nodes": [{"label": "A"}, {"label": "B"}], "connections": [{"from": 0, "to": 2}]}"#,
    )
    .unwrap();
    assert!(flow.validate().is_err());
    flow.connections[0].to = 0;
    let err = flow.validate().unwrap_err();
    assert!(err.to_string().contains("to itself"));
    flow.connections[0].to = 1;
    flow.validate().unwrap();
    flow.nodes.clear();
    flow.connections.clear();
    assert!(flow.validate().is_err());
}

#[test]
fn code_annotations_must_point_at_lines() {
    let mut code: CodeDisplay =
        serde_json::from_str(r#"{"title": "T", "code": "a\nb", "annotations": [{"line": 3, "text": "x"}]}"#)
            .unwrap();
    assert!(code.validate().is_err());
    code.annotations[0].line = 2;
    code.validate().unwrap();
    code.highlight_lines = vec![0];
    assert!(code.validate().is_err());
}

#[test]
fn stat_must_be_finite() {
    let stat = StatHighlight {
        stat: f64::INFINITY,
        decimals: 0,
        prefix: String::new(),
        suffix: String::new(),
        label: "x".to_owned(),
        context: None,
        accent: Accent::Cyan,
    };
    assert!(stat.validate().is_err());
}

#[test]
fn typewriter_heading_types_two_frames_per_char() {
    let concept = ConceptExplain {
        heading: "Hello".to_owned(),
        body: "b".to_owned(),
        analogy: None,
        icon: None,
        heading_entrance: HeadingEntrance::Typewriter,
        accent: Accent::Violet,
    };
    assert_eq!(concept.typed_chars(LocalFrame(0)), 0);
    assert_eq!(concept.typed_chars(LocalFrame(4)), 2);
    assert_eq!(concept.typed_chars(LocalFrame(100)), 5);
}

#[test]
fn step_and_node_delays_are_staggered() {
    assert_eq!(StepSequence::step_delay(0), 10);
    assert_eq!(StepSequence::step_delay(2), 34);
    assert_eq!(DiagramFlow::node_delay(3), 46);
    assert_eq!(CodeDisplay::annotation_delay(1), 42);
}

#[test]
fn cold_open_typewriter_types_two_frames_per_char() {
    let open = ColdOpen {
        statement: "Click".to_owned(),
        subtext: None,
        entrance: ColdOpenEntrance::Typewriter,
        show_particles: false,
        accent: Accent::Indigo,
    };
    assert_eq!(open.typed_chars(LocalFrame(0)), 0);
    assert_eq!(open.typed_chars(LocalFrame(5)), 2);
    assert_eq!(open.typed_chars(LocalFrame(500)), 5);
    open.validate().unwrap();

    let blank = ColdOpen {
        statement: " ".to_owned(),
        ..open
    };
    assert!(blank.validate().is_err());
}

#[test]
fn cold_open_glow_keeps_pulsing() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let open = SceneKind::ColdOpen(ColdOpen {
        statement: "Hi".to_owned(),
        subtext: None,
        entrance: ColdOpenEntrance::Glow,
        show_particles: false,
        accent: Accent::Indigo,
    });
    assert_ne!(open.render(&ctx, LocalFrame(400)), open.render(&ctx, LocalFrame(415)));
    assert_eq!(open.render(&ctx, LocalFrame(400)), open.render(&ctx, LocalFrame(460)));
}

#[test]
fn data_chart_counts_up_to_each_value() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let SceneKind::DataChart(chart) = &samples()[19] else {
        panic!("expected a chart");
    };
    assert_eq!(chart.scale_max(), 1200.0);
    assert_eq!(chart.value_text(&ctx, LocalFrame(0), 1), "0 ms");
    assert_eq!(chart.value_text(&ctx, LocalFrame(300), 1), "1,200 ms");
    assert_eq!(chart.value_text(&ctx, LocalFrame(300), 9), "");
    assert_eq!(DataChart::bar_delay(2), 24);
}

#[test]
fn data_chart_rejects_unusable_scales() {
    let mut chart: DataChart = serde_json::from_str(
        r#"{"heading": "H", "bars": [{"label": "a", "value": 0}, {"label": "b", "value": 0}]}"#,
    )
    .unwrap();
    assert!(chart.validate().is_err());
    chart.max_value = Some(10.0);
    chart.validate().unwrap();
    chart.bars[1].value = -1.0;
    let err = chart.validate().unwrap_err();
    assert!(err.to_string().contains("bars[1].value"));
    chart.bars.clear();
    assert!(chart.validate().is_err());
}

#[test]
fn timeline_scene_lays_nodes_along_its_axis() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let mut scene: TimelineScene = serde_json::from_str(
        r#"{"heading": "H", "nodes": [{"label": "a"}, {"label": "b"}, {"label": "c"}]}"#,
    )
    .unwrap();
    assert_eq!(scene.layout, FlowDirection::Horizontal);
    let (a, c) = (scene.dot_center(&ctx, 0), scene.dot_center(&ctx, 2));
    assert_eq!(a.y, c.y);
    assert!((a.x + c.x - 1920.0).abs() < 1e-9);

    scene.layout = FlowDirection::Vertical;
    let (a, c) = (scene.dot_center(&ctx, 0), scene.dot_center(&ctx, 2));
    assert_eq!(a.x, c.x);
    assert!(c.y > a.y);

    assert_eq!(TimelineScene::node_delay(2), 34);
    scene.nodes[1].label = String::new();
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("nodes[1].label"));
}

fn clip_widths(frame: &VisualFrame) -> Vec<f64> {
    frame
        .layers
        .iter()
        .filter_map(|l| match l.clip {
            Some(Clip::Rect { rect }) => Some(rect.width()),
            _ => None,
        })
        .collect()
}

#[test]
fn before_after_wipe_uncovers_the_after_panel() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let kind = samples().swap_remove(17);
    let start = clip_widths(&kind.render(&ctx, LocalFrame(0)));
    assert_eq!(start, vec![0.0]);
    let done = clip_widths(&kind.render(&ctx, LocalFrame(400)));
    assert_eq!(done.len(), 1);
    assert!((done[0] - (1920.0 - 160.0 - 32.0) / 2.0).abs() < 1e-9);

    let SceneKind::BeforeAfter(mut split) = kind else {
        panic!("expected before/after");
    };
    split.reveal = BeforeAfterReveal::Split;
    let split = SceneKind::BeforeAfter(split);
    assert!(clip_widths(&split.render(&ctx, LocalFrame(400))).is_empty());
}
