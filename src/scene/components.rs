//! Reusable building blocks shared by the scene kinds.
//!
//! Each component is a small value describing *what* to show plus a `layer` method that
//! evaluates it at a local frame. Components never hold state between frames.

use crate::animation::entrance::EntranceStyle;
use crate::animation::interp::{Extrapolate, interpolate, lerp};
use crate::foundation::color::Rgba8;
use crate::foundation::core::{LocalFrame, Point, Rect, Transform2D, Vec2};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Layer, TextAlign, TextRun};
use crate::theme::Accent;

/// Which theme font family a text run uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontRole {
    /// Titles.
    Heading,
    /// Body copy.
    #[default]
    Body,
    /// Monospace.
    Code,
}

/// Build a text run using the theme's font for `role`.
#[allow(clippy::too_many_arguments)]
pub fn text_run(
    ctx: &SceneCtx<'_>,
    role: FontRole,
    text: impl Into<String>,
    origin: Point,
    size: f64,
    weight: u16,
    color: Rgba8,
    align: TextAlign,
) -> TextRun {
    let fonts = &ctx.theme.fonts;
    let font = match role {
        FontRole::Heading => &fonts.heading,
        FontRole::Body => &fonts.body,
        FontRole::Code => &fonts.code,
    };
    TextRun {
        text: text.into(),
        origin,
        font: font.clone(),
        size,
        weight,
        color,
        align,
        max_width: None,
    }
}

/// Fade `layer` in while sliding it by `offset * (1 - progress)`.
pub fn reveal(layer: Layer, progress: f64, offset: Vec2) -> Layer {
    let t = 1.0 - progress.clamp(0.0, 1.0);
    layer
        .with_opacity(progress)
        .with_transform(Transform2D::translate(offset.x * t, offset.y * t))
}

/// Text that enters with one of the named entrance styles.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedText {
    /// Text.
    pub text: String,
    /// Font family role.
    pub role: FontRole,
    /// Size in pixels.
    pub size: f64,
    /// Weight.
    pub weight: u16,
    /// Color.
    pub color: Rgba8,
    /// Anchoring.
    pub align: TextAlign,
    /// Wrap width.
    pub max_width: Option<f64>,
    /// Frames before the entrance starts.
    pub delay: i64,
    /// Entrance style.
    pub entrance: EntranceStyle,
}

impl AnimatedText {
    /// Centered heading-weight text with a fade-up entrance.
    pub fn heading(text: impl Into<String>, size: f64, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            role: FontRole::Heading,
            size,
            weight: 800,
            color,
            align: TextAlign::Center,
            max_width: None,
            delay: 0,
            entrance: EntranceStyle::FadeUp,
        }
    }

    /// Centered body text with a fade-up entrance.
    pub fn body(text: impl Into<String>, size: f64, color: Rgba8) -> Self {
        Self {
            role: FontRole::Body,
            weight: 400,
            ..Self::heading(text, size, color)
        }
    }

    /// Same text starting `delay` frames later.
    pub fn delayed(mut self, delay: i64) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the entrance.
    pub fn entering(mut self, entrance: EntranceStyle) -> Self {
        self.entrance = entrance;
        self
    }

    /// Set anchoring.
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Let the host wrap at `width`.
    pub fn wrapped(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Evaluate at `local` with the baseline anchored at `origin`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, origin: Point) -> Layer {
        let p = ctx.entry(local, self.delay);
        let fx = self.entrance.fx(p);
        let mut run = text_run(
            ctx,
            self.role,
            self.text.clone(),
            origin,
            self.size,
            self.weight,
            self.color,
            self.align,
        );
        run.max_width = self.max_width;
        Layer::text(run)
            .with_opacity(fx.opacity)
            .with_transform(fx.transform(origin))
            .with_blur(fx.blur_px)
    }
}

/// Format `value` with `decimals` fraction digits and `,` thousands separators.
///
/// Non-finite input formats as zero.
pub fn format_grouped(value: f64, decimals: u32) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let decimals = decimals.min(9) as usize;
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Big number counting up from zero, with a label underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    /// Final value.
    pub target: f64,
    /// Fraction digits shown while counting.
    pub decimals: u32,
    /// Text before the number.
    pub prefix: String,
    /// Text after the number.
    pub suffix: String,
    /// Caption.
    pub label: String,
    /// Number color.
    pub color: Rgba8,
    /// Frames before counting starts.
    pub delay: i64,
}

impl StatCounter {
    /// Number text shown at `local`.
    pub fn display_text(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> String {
        let p = ctx.entry(local, self.delay);
        let value = lerp(0.0, self.target, p);
        format!(
            "{}{}{}",
            self.prefix,
            format_grouped(value, self.decimals),
            self.suffix
        )
    }

    /// Evaluate with the number centered on `center`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, center: Point) -> Layer {
        let theme = ctx.theme;
        let pop = ctx.entry_with(local, self.delay, theme.timing.snappy);
        let scale = interpolate(pop, [0.0, 1.0], [0.8, 1.0], Extrapolate::Extend);

        let number = Layer::text(text_run(
            ctx,
            FontRole::Heading,
            self.display_text(ctx, local),
            center,
            120.0,
            800,
            self.color,
            TextAlign::Center,
        ))
        .with_transform(Transform2D::scale_about(scale, center));

        let label_origin = Point::new(center.x, center.y + 90.0);
        let label = reveal(
            Layer::text(text_run(
                ctx,
                FontRole::Body,
                self.label.clone(),
                label_origin,
                28.0,
                400,
                theme.palette.muted,
                TextAlign::Center,
            )),
            ctx.entry(local, self.delay + 10),
            Vec2::new(0.0, 15.0),
        );

        Layer::group(vec![number, label])
    }
}

/// Split `code` into lines showing only the first `chars` characters (newlines count).
pub fn typewriter_lines(code: &str, chars: usize) -> Vec<String> {
    let mut remaining = chars;
    code.split('\n')
        .map(|line| {
            let len = line.chars().count();
            let take = remaining.min(len);
            remaining = remaining.saturating_sub(len + 1);
            line.chars().take(take).collect()
        })
        .collect()
}

/// Monospace code card with an optional typewriter reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeBlock {
    /// Source text, `\n` separated.
    pub code: String,
    /// Frames before the card enters.
    pub delay: i64,
    /// 1-based lines drawn with a highlight bar.
    pub highlight_lines: Vec<usize>,
    /// Draw line numbers in a gutter.
    pub show_line_numbers: bool,
    /// Reveal characters progressively.
    pub typewriter: bool,
    /// Font size in pixels.
    pub font_size: f64,
}

impl CodeBlock {
    /// Line height in pixels.
    pub fn line_height(&self) -> f64 {
        self.font_size * 1.6
    }

    /// Number of characters visible at `local`.
    ///
    /// Reveal starts 15 frames after `delay` and types 1.2 frames per character.
    pub fn visible_chars(&self, local: LocalFrame) -> usize {
        let total = self.code.chars().count();
        if !self.typewriter {
            return total;
        }
        let start = (self.delay + 15) as f64;
        let end = start + total as f64 * 1.2;
        let shown = interpolate(
            local.as_f64(),
            [start, end],
            [0.0, total as f64],
            Extrapolate::Clamp,
        );
        (shown.floor() as usize).min(total)
    }

    /// Card height for the full code.
    pub fn height(&self) -> f64 {
        let lines = self.code.split('\n').count() as f64;
        lines * self.line_height() + 56.0
    }

    /// Evaluate with the card's top-left corner at `origin`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, origin: Point, width: f64) -> Layer {
        let palette = &ctx.theme.palette;
        let card = Rect::new(origin.x, origin.y, origin.x + width, origin.y + self.height());
        let mut children = vec![
            Layer::rect(card, palette.code_bg, ctx.theme.radius.lg).with_stroke(palette.border, 1.0),
        ];

        let gutter = if self.show_line_numbers { 56.0 } else { 0.0 };
        let lh = self.line_height();
        let lines = typewriter_lines(&self.code, self.visible_chars(local));
        for (i, line) in lines.into_iter().enumerate() {
            let top = origin.y + 28.0 + i as f64 * lh;
            let baseline = top + lh * 0.75;
            if self.highlight_lines.contains(&(i + 1)) {
                children.push(Layer::rect(
                    Rect::new(card.x0 + 24.0, top, card.x1 - 24.0, top + lh),
                    palette.indigo.with_alpha(0.13),
                    4.0,
                ));
            }
            if self.show_line_numbers {
                children.push(Layer::text(text_run(
                    ctx,
                    FontRole::Code,
                    (i + 1).to_string(),
                    Point::new(card.x0 + 36.0 + gutter - 16.0, baseline),
                    self.font_size,
                    400,
                    palette.muted.with_alpha(0.5),
                    TextAlign::End,
                )));
            }
            children.push(Layer::text(text_run(
                ctx,
                FontRole::Code,
                line,
                Point::new(card.x0 + 36.0 + gutter, baseline),
                self.font_size,
                400,
                palette.text,
                TextAlign::Start,
            )));
        }

        reveal(
            Layer::group(children),
            ctx.entry(local, self.delay),
            Vec2::new(0.0, 20.0),
        )
    }
}

/// Labeled box of a flow diagram; pops in with a snappy spring.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramBox {
    /// Main label.
    pub label: String,
    /// Secondary label.
    pub sublabel: Option<String>,
    /// Outline color.
    pub color: Rgba8,
    /// Frames before the box appears.
    pub delay: i64,
}

impl DiagramBox {
    /// Evaluate inside `rect`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, rect: Rect) -> Layer {
        let palette = &ctx.theme.palette;
        let pop = ctx.entry_with(local, self.delay, ctx.theme.timing.snappy);
        let scale = pop.max(0.0);
        let center = rect.center();

        let label_y = if self.sublabel.is_some() {
            center.y - 2.0
        } else {
            center.y + 8.0
        };
        let mut children = vec![
            Layer::rect(rect, self.color.with_alpha(0.094), ctx.theme.radius.lg)
                .with_stroke(self.color, 2.0),
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                self.label.clone(),
                Point::new(center.x, label_y),
                24.0,
                700,
                palette.text,
                TextAlign::Center,
            )),
        ];
        if let Some(sub) = &self.sublabel {
            children.push(Layer::text(text_run(
                ctx,
                FontRole::Body,
                sub.clone(),
                Point::new(center.x, center.y + 26.0),
                18.0,
                400,
                palette.muted,
                TextAlign::Center,
            )));
        }

        Layer::group(children)
            .with_opacity(pop)
            .with_transform(Transform2D::scale_about(scale, center))
    }
}

/// Arrow drawn progressively from `from` to `to`, with an optional midpoint label.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramArrow {
    /// Tail.
    pub from: Point,
    /// Head.
    pub to: Point,
    /// Midpoint label.
    pub label: Option<String>,
    /// Stroke color.
    pub color: Rgba8,
    /// Frames before drawing starts.
    pub delay: i64,
}

impl DiagramArrow {
    const HEAD_SIZE: f64 = 12.0;

    /// Evaluate at `local`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Layer {
        let p = ctx.entry(local, self.delay);
        let d = self.to - self.from;
        let end = self.from + d * p;
        let mut children = Vec::with_capacity(4);
        if p > 0.0 {
            children.push(Layer::line(self.from, end, self.color, 3.0));
        }

        if p > 0.1 {
            let angle = d.y.atan2(d.x);
            let head_angle = std::f64::consts::FRAC_PI_6;
            for a in [angle - head_angle, angle + head_angle] {
                let tip = Point::new(
                    end.x - Self::HEAD_SIZE * a.cos(),
                    end.y - Self::HEAD_SIZE * a.sin(),
                );
                children.push(Layer::line(end, tip, self.color, 3.0).with_opacity(p));
            }
        }

        if let Some(label) = &self.label {
            let mid = self.from.midpoint(self.to);
            let opacity = interpolate(p, [0.5, 1.0], [0.0, 1.0], Extrapolate::Clamp);
            children.push(
                Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    label.clone(),
                    Point::new(mid.x, mid.y - 12.0),
                    16.0,
                    400,
                    ctx.theme.palette.muted,
                    TextAlign::Center,
                ))
                .with_opacity(opacity),
            );
        }

        Layer::group(children)
    }
}

/// Bullet glyph family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletStyle {
    /// `•`
    #[default]
    Dot,
    /// `✓`
    Check,
    /// `→`
    Arrow,
    /// `1.`, `2.`, …
    Number,
}

impl BulletStyle {
    /// Glyph for the `i`-th (0-based) item.
    pub fn glyph(self, i: usize) -> String {
        match self {
            Self::Dot => "\u{2022}".to_owned(),
            Self::Check => "\u{2713}".to_owned(),
            Self::Arrow => "\u{2192}".to_owned(),
            Self::Number => format!("{}.", i + 1),
        }
    }
}

/// Vertical list whose items slide in one after another.
#[derive(Clone, Debug, PartialEq)]
pub struct BulletList {
    /// Items, top to bottom.
    pub items: Vec<String>,
    /// Glyph family.
    pub style: BulletStyle,
    /// Glyph color.
    pub color: Rgba8,
    /// Frames before the first item.
    pub delay: i64,
    /// Item font size.
    pub font_size: f64,
}

impl BulletList {
    /// Vertical distance between items.
    pub fn row_height(&self) -> f64 {
        self.font_size * 1.4 + 20.0
    }

    /// Evaluate with the first item's glyph baseline at `origin`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, origin: Point) -> Layer {
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let y = origin.y + i as f64 * self.row_height();
                let glyph = Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    self.style.glyph(i),
                    Point::new(origin.x, y),
                    self.font_size - 4.0,
                    700,
                    self.color,
                    TextAlign::Start,
                ));
                let text = Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    item.clone(),
                    Point::new(origin.x + 44.0, y),
                    self.font_size,
                    400,
                    ctx.theme.palette.text,
                    TextAlign::Start,
                ));
                reveal(
                    Layer::group(vec![glyph, text]),
                    ctx.entry(local, ctx.stagger(self.delay, i)),
                    Vec2::new(-30.0, 0.0),
                )
            })
            .collect();
        Layer::group(rows)
    }
}

/// Rounded square showing a zero-padded number.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBadge {
    /// Number shown.
    pub number: u32,
    /// Fill color.
    pub color: Rgba8,
    /// Edge length.
    pub size: f64,
    /// Frames before the badge pops in.
    pub delay: i64,
}

impl SectionBadge {
    /// Two-digit label.
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }

    /// Evaluate centered on `center`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, center: Point) -> Layer {
        let pop = ctx.entry_with(local, self.delay, ctx.theme.timing.snappy);
        let half = self.size / 2.0;
        let rect = Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        );
        Layer::group(vec![
            Layer::rect(rect, self.color, 14.0),
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                self.label(),
                Point::new(center.x, center.y + self.size * 0.16),
                self.size * 0.45,
                800,
                Rgba8::WHITE,
                TextAlign::Center,
            )),
        ])
        .with_transform(Transform2D::scale_about(pop.max(0.0), center))
    }
}

/// Tone of a callout box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Neutral information.
    #[default]
    Info,
    /// Caution.
    Warning,
    /// Positive outcome.
    Success,
    /// Serious problem.
    Danger,
}

impl Tone {
    /// Accent used for the tone.
    pub fn accent(self) -> Accent {
        match self {
            Self::Info => Accent::Cyan,
            Self::Warning => Accent::Amber,
            Self::Success => Accent::Green,
            Self::Danger => Accent::Red,
        }
    }
}

/// Tinted box with a colored left border around a paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct AccentBox {
    /// Paragraph.
    pub body: String,
    /// Tone.
    pub tone: Tone,
    /// Frames before the box appears.
    pub delay: i64,
    /// Body font size.
    pub font_size: f64,
}

impl AccentBox {
    /// Evaluate inside `rect`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, rect: Rect) -> Layer {
        let color = ctx.theme.accent(self.tone.accent());
        let p = ctx.entry(local, self.delay);
        let mut body = text_run(
            ctx,
            FontRole::Body,
            self.body.clone(),
            Point::new(rect.x0 + 36.0, rect.y0 + 24.0 + self.font_size),
            self.font_size,
            400,
            ctx.theme.palette.text,
            TextAlign::Start,
        );
        body.max_width = Some((rect.width() - 68.0).max(0.0));

        Layer::group(vec![
            Layer::rect(rect, color.with_alpha(0.063), ctx.theme.radius.md),
            Layer::rect(
                Rect::new(rect.x0, rect.y0, rect.x0 + 4.0, rect.y1),
                color,
                0.0,
            ),
            Layer::text(body),
        ])
        .with_opacity(p)
        .with_transform(Transform2D::scale_about(lerp(0.95, 1.0, p), rect.center()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/components.rs"]
mod tests;
