use super::*;
use crate::foundation::core::Fps;
use crate::theme::Theme;

fn ctx(theme: &Theme) -> SceneCtx<'_> {
    SceneCtx::new(theme, Fps { num: 30, den: 1 }, Canvas::FULL_HD)
}

fn children(layer: &Layer) -> &[Layer] {
    match &layer.content {
        LayerContent::Group { children } => children,
        _ => &[],
    }
}

#[test]
fn background_gradient_follows_css_angle() {
    let canvas = Canvas {
        width: 200,
        height: 100,
    };
    let layer = background(canvas, Rgba8::WHITE, Rgba8::TRANSPARENT, 90.0);
    let LayerContent::Rect {
        fill: Paint::Linear { start, end, .. },
        rect,
        ..
    } = layer.content
    else {
        panic!("expected a gradient rect");
    };
    assert_eq!(rect, canvas.rect());
    assert!((start.x - 0.0).abs() < 1e-9 && (start.y - 50.0).abs() < 1e-9);
    assert!((end.x - 200.0).abs() < 1e-9 && (end.y - 50.0).abs() < 1e-9);

    let layer = background(canvas, Rgba8::WHITE, Rgba8::TRANSPARENT, 180.0);
    let LayerContent::Rect {
        fill: Paint::Linear { start, end, .. },
        ..
    } = layer.content
    else {
        panic!("expected a gradient rect");
    };
    assert!((start.y - 0.0).abs() < 1e-9);
    assert!((end.y - 100.0).abs() < 1e-9);
}

#[test]
fn particles_are_reproducible_and_stay_on_canvas() {
    let field = ParticleField {
        count: 25,
        speed: 0.3,
        opacity: 0.1,
        ..ParticleField::default()
    };
    let canvas = Canvas::FULL_HD;
    for frame in [0, 1, 500, 5499] {
        let a = field.layer(canvas, frame, Rgba8::WHITE);
        assert_eq!(a, field.layer(canvas, frame, Rgba8::WHITE));
        assert_eq!(children(&a).len(), 25);
        for dot in children(&a) {
            let LayerContent::Circle { center, radius, .. } = dot.content else {
                panic!("expected circles");
            };
            assert!((0.0..=1080.0).contains(&center.y));
            assert!((1.0..=3.0).contains(&radius));
            assert!(dot.opacity <= 0.1 + 1e-12);
        }
    }
}

#[test]
fn particles_move_and_depend_on_seed() {
    let field = ParticleField::default();
    let canvas = Canvas::FULL_HD;
    assert_ne!(
        field.layer(canvas, 0, Rgba8::WHITE),
        field.layer(canvas, 60, Rgba8::WHITE)
    );
    let reseeded = ParticleField { seed: 7, ..field };
    assert_ne!(
        field.layer(canvas, 0, Rgba8::WHITE),
        reseeded.layer(canvas, 0, Rgba8::WHITE)
    );
}

#[test]
fn particle_field_json_fills_defaults() {
    let field: ParticleField = serde_json::from_str(r#"{"count": 5, "drift": "left"}"#).unwrap();
    assert_eq!(field.count, 5);
    assert_eq!(field.drift, Drift::Left);
    assert_eq!(field.speed, ParticleField::default().speed);
}

#[test]
fn progress_bar_marks_reached_sections() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let bar = ProgressBar {
        total: 5,
        current: 2,
        active: theme.palette.amber,
    };
    let layer = bar.layer(&ctx, LocalFrame(200));
    assert_eq!(layer.opacity, 1.0);

    let kids = children(&layer);
    // Five segments plus the label over the current one.
    assert_eq!(kids.len(), 6);
    let fills: Vec<_> = kids
        .iter()
        .filter_map(|l| match &l.content {
            LayerContent::Rect {
                fill: Paint::Solid(c),
                ..
            } => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(fills[..2], [theme.palette.amber, theme.palette.amber]);
    assert_eq!(fills[2..], [theme.palette.border; 3]);

    let label = kids.iter().find_map(|l| match &l.content {
        LayerContent::Text(run) => Some(run.text.clone()),
        _ => None,
    });
    assert_eq!(label.as_deref(), Some("2/5"));
}

#[test]
fn progress_bar_fades_in_with_the_section() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let bar = ProgressBar {
        total: 3,
        current: 1,
        active: theme.palette.indigo,
    };
    assert_eq!(bar.layer(&ctx, LocalFrame(0)).opacity, 0.0);
}

#[test]
fn watermark_is_uppercase_and_delayed() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let mark = Watermark::default();

    let early = mark.layer(&ctx, LocalFrame(10));
    assert_eq!(early.opacity, 0.0);

    let late = mark.layer(&ctx, LocalFrame(300));
    assert!((late.opacity - 0.35).abs() < 1e-12);
    let LayerContent::Text(run) = &late.content else {
        panic!("expected text");
    };
    assert_eq!(run.text, "MEDEVSMAKER");
    assert_eq!(run.align, TextAlign::End);
}

#[test]
fn gradient_sweeps_thirty_degrees_when_animated() {
    assert_eq!(gradient_angle(135.0, false, 150), 135.0);
    assert_eq!(gradient_angle(135.0, true, 0), 135.0);
    assert!((gradient_angle(135.0, true, 150) - 150.0).abs() < 1e-9);
    assert_eq!(gradient_angle(135.0, true, 300), 165.0);
    assert_eq!(gradient_angle(135.0, true, 5000), 165.0);
}

#[test]
fn grid_tiles_the_canvas_and_drifts_only_when_animated() {
    let canvas = Canvas {
        width: 120,
        height: 60,
    };
    let grid = GridPattern::default();
    let layer = grid.layer(canvas, 0, Rgba8::WHITE);
    assert_eq!(layer.opacity, 0.08);
    assert_eq!(layer.clip, Some(Clip::Rect { rect: canvas.rect() }));
    // Two columns and one row, plus a spare ring of cells for drift.
    assert_eq!(children(&layer).len(), 4 * 3);
    assert_eq!(layer, grid.layer(canvas, 500, Rgba8::WHITE));

    let lines = GridPattern {
        variant: GridVariant::Lines,
        ..grid
    };
    assert_eq!(children(&lines.layer(canvas, 0, Rgba8::WHITE)).len(), 2 * 4 * 3);

    let drifting = GridPattern {
        animated: true,
        ..grid
    };
    assert_eq!(drifting.offset(0), 0.0);
    assert!((drifting.offset(10) - 3.0).abs() < 1e-9);
    assert!((drifting.offset(210) - 3.0).abs() < 1e-9);
    assert_ne!(
        drifting.layer(canvas, 0, Rgba8::WHITE),
        drifting.layer(canvas, 10, Rgba8::WHITE)
    );
}

#[test]
fn grid_json_fills_defaults() {
    let grid: GridPattern =
        serde_json::from_str(r#"{"variant": "crosses", "animated": true}"#).unwrap();
    assert_eq!(grid.variant, GridVariant::Crosses);
    assert!(grid.animated);
    assert_eq!(grid.spacing, 60.0);
}
