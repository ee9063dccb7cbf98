use super::*;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::frame::LayerContent;
use crate::theme::Theme;

fn ctx(theme: &Theme) -> SceneCtx<'_> {
    SceneCtx::new(theme, Fps { num: 30, den: 1 }, Canvas::FULL_HD)
}

#[test]
fn grouped_numbers() {
    assert_eq!(format_grouped(1_234_567.8, 1), "1,234,567.8");
    assert_eq!(format_grouped(999.0, 0), "999");
    assert_eq!(format_grouped(1000.0, 0), "1,000");
    assert_eq!(format_grouped(1.1, 1), "1.1");
    assert_eq!(format_grouped(-12_345.0, 0), "-12,345");
    assert_eq!(format_grouped(-0.0001, 2), "0.00");
    assert_eq!(format_grouped(f64::NAN, 1), "0.0");
}

#[test]
fn typewriter_counts_newlines_as_characters() {
    let code = "ab\ncd\nef";
    assert_eq!(typewriter_lines(code, 0), vec!["", "", ""]);
    assert_eq!(typewriter_lines(code, 2), vec!["ab", "", ""]);
    assert_eq!(typewriter_lines(code, 4), vec!["ab", "c", ""]);
    assert_eq!(typewriter_lines(code, 100), vec!["ab", "cd", "ef"]);
}

#[test]
fn bullet_glyphs() {
    assert_eq!(BulletStyle::Number.glyph(0), "1.");
    assert_eq!(BulletStyle::Number.glyph(9), "10.");
    assert_eq!(BulletStyle::Check.glyph(3), "\u{2713}");
}

#[test]
fn section_badge_label_is_zero_padded() {
    let badge = SectionBadge {
        number: 3,
        color: Rgba8::WHITE,
        size: 56.0,
        delay: 0,
    };
    assert_eq!(badge.label(), "03");
}

#[test]
fn stat_counter_counts_to_target() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let counter = StatCounter {
        target: 1.1,
        decimals: 1,
        prefix: String::new(),
        suffix: " trillion".to_owned(),
        label: "DNS queries per day".to_owned(),
        color: Rgba8::WHITE,
        delay: 5,
    };
    assert_eq!(counter.display_text(&ctx, LocalFrame(0)), "0.0 trillion");
    assert_eq!(counter.display_text(&ctx, LocalFrame(149)), "1.1 trillion");
}

#[test]
fn code_block_typewriter_reveal() {
    let block = CodeBlock {
        code: "let x = 1;".to_owned(),
        delay: 0,
        highlight_lines: Vec::new(),
        show_line_numbers: true,
        typewriter: true,
        font_size: 22.0,
    };
    assert_eq!(block.visible_chars(LocalFrame(0)), 0);
    assert_eq!(block.visible_chars(LocalFrame(15)), 0);
    assert_eq!(block.visible_chars(LocalFrame(1000)), 10);

    let instant = CodeBlock {
        typewriter: false,
        ..block
    };
    assert_eq!(instant.visible_chars(LocalFrame(0)), 10);
}

#[test]
fn entry_is_clamped_before_and_after_its_window() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    assert_eq!(ctx.entry(LocalFrame(-10), 0), 0.0);
    assert_eq!(ctx.entry(LocalFrame(0), 10), 0.0);
    assert_eq!(ctx.entry(LocalFrame(500), 10), 1.0);
    assert_eq!(ctx.stagger(10, 3), 10 + 3 * 8);
}

#[test]
fn reveal_lands_on_rest_pose() {
    let dot = Layer::circle(Point::new(1.0, 1.0), 1.0, Rgba8::WHITE);
    let done = reveal(dot.clone(), 1.0, Vec2::new(0.0, 30.0));
    assert_eq!(done.opacity, 1.0);
    assert!(done.transform.is_identity());

    let half = reveal(dot, 0.5, Vec2::new(0.0, 30.0));
    assert_eq!(half.opacity, 0.5);
    assert_eq!(half.transform.translate.y, 15.0);
}

#[test]
fn text_run_uses_theme_fonts() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let run = text_run(
        &ctx,
        FontRole::Code,
        "x",
        Point::ZERO,
        20.0,
        400,
        Rgba8::WHITE,
        TextAlign::Start,
    );
    assert_eq!(run.font, theme.fonts.code);
}

#[test]
fn bullet_list_staggers_items() {
    let theme = Theme::default();
    let ctx = ctx(&theme);
    let list = BulletList {
        items: vec!["a".to_owned(), "b".to_owned()],
        style: BulletStyle::Dot,
        color: Rgba8::WHITE,
        delay: 0,
        font_size: 32.0,
    };
    let LayerContent::Group { children } = list.layer(&ctx, LocalFrame(10), Point::ZERO).content
    else {
        panic!("expected a group");
    };
    assert_eq!(children.len(), 2);
    assert!(children[0].opacity > children[1].opacity);
}

#[test]
fn periodic_motion_scales_with_frame_rate() {
    let theme = Theme::default();
    assert_eq!(ctx(&theme).period(1.0), 30);
    assert_eq!(ctx(&theme).period(2.0), 60);

    let fast = SceneCtx::new(&theme, Fps { num: 60, den: 1 }, Canvas::FULL_HD);
    assert_eq!(fast.period(1.0), 60);
    let ntsc = SceneCtx::new(&theme, Fps { num: 30000, den: 1001 }, Canvas::FULL_HD);
    assert_eq!(ntsc.period(1.0), 29);
    assert_eq!(ctx(&theme).period(0.0), 1);
}
