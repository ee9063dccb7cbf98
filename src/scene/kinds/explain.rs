use crate::animation::entrance::EntranceStyle;
use crate::animation::interp::{Extrapolate, interpolate};
use crate::animation::periodic::{blink, pulse};
use crate::foundation::core::{LocalFrame, Point, Rect, Transform2D, Vec2};
use crate::foundation::error::ExplainerResult;
use crate::scene::components::{
    AccentBox, AnimatedText, FontRole, SectionBadge, Tone, reveal, text_run,
};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Layer, TextAlign};
use crate::scene::kinds::{Scene, require_items, require_text};
use crate::theme::Accent;

const MARGIN: f64 = 160.0;

/// How a [`ConceptExplain`] heading appears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingEntrance {
    /// Rise while fading in.
    #[default]
    FadeUp,
    /// Slide in from the left.
    FadeLeft,
    /// Type out two frames per character behind a blinking cursor.
    Typewriter,
}

fn violet() -> Accent {
    Accent::Violet
}

/// Heading, explanatory paragraph and an optional analogy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConceptExplain {
    /// Heading.
    pub heading: String,
    /// Paragraph.
    pub body: String,
    /// Analogy shown under the paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analogy: Option<String>,
    /// Glyph left of the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Heading entrance.
    #[serde(default)]
    pub heading_entrance: HeadingEntrance,
    /// Cursor and analogy color.
    #[serde(default = "violet")]
    pub accent: Accent,
}

impl ConceptExplain {
    /// Heading characters shown at `local` by the typewriter entrance.
    pub fn typed_chars(&self, local: LocalFrame) -> usize {
        let len = self.heading.chars().count();
        let shown = interpolate(
            local.as_f64(),
            [0.0, len as f64 * 2.0],
            [0.0, len as f64],
            Extrapolate::Clamp,
        );
        (shown.floor() as usize).min(len)
    }

    fn heading_layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame, origin: Point) -> Layer {
        let color = ctx.theme.palette.text;
        match self.heading_entrance {
            HeadingEntrance::FadeUp | HeadingEntrance::FadeLeft => {
                let entrance = if self.heading_entrance == HeadingEntrance::FadeLeft {
                    EntranceStyle::FadeLeft
                } else {
                    EntranceStyle::FadeUp
                };
                AnimatedText::heading(self.heading.clone(), 52.0, color)
                    .aligned(TextAlign::Start)
                    .entering(entrance)
                    .layer(ctx, local, origin)
            }
            HeadingEntrance::Typewriter => {
                let typed: String = self.heading.chars().take(self.typed_chars(local)).collect();
                let mut children = vec![Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    typed.clone(),
                    origin,
                    52.0,
                    800,
                    color,
                    TextAlign::Start,
                ))];
                if blink(local.0, ctx.period(1.0)) {
                    // Rough advance; real text metrics belong to the host.
                    let advance = typed.chars().count() as f64 * 52.0 * 0.55;
                    children.push(Layer::text(text_run(
                        ctx,
                        FontRole::Heading,
                        "|",
                        Point::new(origin.x + advance, origin.y),
                        52.0,
                        800,
                        ctx.theme.accent(self.accent),
                        TextAlign::Start,
                    )));
                }
                Layer::group(children)
            }
        }
    }
}

impl Scene for ConceptExplain {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let accent = ctx.theme.accent(self.accent);
        let top = ctx.height() / 2.0 - 140.0;

        let mut layers = Vec::with_capacity(4);
        let mut heading_x = MARGIN;
        if let Some(icon) = &self.icon {
            layers.push(
                AnimatedText::body(icon.clone(), 48.0, palette.text)
                    .aligned(TextAlign::Start)
                    .entering(EntranceStyle::ScaleUp)
                    .layer(ctx, local, Point::new(MARGIN, top)),
            );
            heading_x += 72.0;
        }
        layers.push(self.heading_layer(ctx, local, Point::new(heading_x, top)));

        let mut body = text_run(
            ctx,
            FontRole::Body,
            self.body.clone(),
            Point::new(MARGIN, top + 90.0),
            30.0,
            400,
            palette.text,
            TextAlign::Start,
        );
        body.max_width = Some(1200.0_f64.min(ctx.width() - 2.0 * MARGIN));
        layers.push(reveal(
            Layer::text(body),
            ctx.entry(local, 12),
            Vec2::new(0.0, 20.0),
        ));

        if let Some(analogy) = &self.analogy {
            let y = top + 250.0;
            let mut run = text_run(
                ctx,
                FontRole::Body,
                analogy.clone(),
                Point::new(MARGIN + 20.0, y),
                26.0,
                400,
                accent,
                TextAlign::Start,
            );
            run.max_width = Some(ctx.width() - 2.0 * MARGIN - 20.0);
            layers.push(
                Layer::group(vec![
                    Layer::rect(
                        Rect::new(MARGIN, y - 30.0, MARGIN + 3.0, y + 12.0),
                        accent.with_alpha(0.27),
                        0.0,
                    ),
                    Layer::text(run),
                ])
                .with_opacity(ctx.entry(local, 25)),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_text("body", &self.body)
    }
}

/// One entry of a [`StepSequence`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Step title.
    pub title: String,
    /// Line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Heading over numbered steps revealed one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepSequence {
    /// Heading.
    pub heading: String,
    /// Steps, top to bottom.
    pub steps: Vec<Step>,
    /// Badge color.
    #[serde(default)]
    pub accent: Accent,
}

impl StepSequence {
    /// Frame at which step `i` starts entering.
    pub fn step_delay(i: usize) -> i64 {
        10 + 12 * i as i64
    }
}

impl Scene for StepSequence {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let color = ctx.theme.accent(self.accent);

        let mut layers = vec![
            AnimatedText::heading(self.heading.clone(), 48.0, palette.text)
                .aligned(TextAlign::Start)
                .layer(ctx, local, Point::new(80.0, 130.0)),
        ];

        let row = 110.0;
        let block = row * self.steps.len() as f64;
        let top = 160.0 + ((ctx.height() - 160.0 - block) / 2.0).max(0.0);
        for (i, step) in self.steps.iter().enumerate() {
            let delay = Self::step_delay(i);
            let y = top + i as f64 * row + row / 2.0;
            let mut children = vec![
                SectionBadge {
                    number: (i + 1) as u32,
                    color,
                    size: 48.0,
                    delay,
                }
                .layer(ctx, local, Point::new(104.0, y)),
                Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    step.title.clone(),
                    Point::new(148.0, y - if step.description.is_some() { 4.0 } else { -10.0 }),
                    30.0,
                    700,
                    palette.text,
                    TextAlign::Start,
                )),
            ];
            if let Some(desc) = &step.description {
                children.push(Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    desc.clone(),
                    Point::new(148.0, y + 28.0),
                    22.0,
                    400,
                    palette.muted,
                    TextAlign::Start,
                )));
            }
            layers.push(reveal(
                Layer::group(children),
                ctx.entry(local, delay),
                Vec2::new(-30.0, 0.0),
            ));
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_items("steps", &self.steps)?;
        for (i, step) in self.steps.iter().enumerate() {
            require_text(&format!("steps[{i}].title"), &step.title)?;
        }
        Ok(())
    }
}

/// Oversized glyph next to a comparison with something familiar.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualMetaphor {
    /// Glyph, typically an emoji.
    pub icon: String,
    /// Heading.
    pub heading: String,
    /// Analogy paragraph.
    pub analogy: String,
    /// Halo color behind the glyph.
    #[serde(default = "violet")]
    pub accent: Accent,
}

impl Scene for VisualMetaphor {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let c = ctx.canvas.center();
        let icon_center = Point::new(c.x, c.y - 150.0);
        let pop = ctx.entry_with(local, 0, ctx.theme.timing.snappy).max(0.0);

        let icon = Layer::group(vec![
            Layer::circle(icon_center, 90.0, ctx.theme.accent(self.accent).with_alpha(0.12)),
            Layer::text(text_run(
                ctx,
                FontRole::Body,
                self.icon.clone(),
                Point::new(icon_center.x, icon_center.y + 36.0),
                100.0,
                400,
                palette.text,
                TextAlign::Center,
            )),
        ])
        .with_opacity(ctx.entry(local, 0))
        .with_transform(Transform2D::scale_about(pop, icon_center));

        let heading = reveal(
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                self.heading.clone(),
                Point::new(c.x, c.y + 30.0),
                52.0,
                800,
                palette.text,
                TextAlign::Center,
            )),
            ctx.entry(local, 10),
            Vec2::new(0.0, 20.0),
        );

        let analogy = AnimatedText::body(self.analogy.clone(), 30.0, palette.muted)
            .delayed(22)
            .wrapped(1100.0)
            .layer(ctx, local, Point::new(c.x, c.y + 110.0));

        vec![icon, heading, analogy]
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("icon", &self.icon)?;
        require_text("heading", &self.heading)?;
        require_text("analogy", &self.analogy)
    }
}

fn takeaway_heading() -> String {
    "Key Takeaway".to_owned()
}

/// One sentence worth remembering, in a tinted box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyTakeaway {
    /// Small label above the box.
    #[serde(default = "takeaway_heading")]
    pub heading: String,
    /// The sentence.
    pub takeaway: String,
    /// Box tone.
    #[serde(default = "success_tone")]
    pub tone: Tone,
}

fn success_tone() -> Tone {
    Tone::Success
}

impl Scene for KeyTakeaway {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let c = ctx.canvas.center();
        let color = ctx.theme.accent(self.tone.accent());
        let heading = AnimatedText::heading(self.heading.to_uppercase(), 24.0, color)
            .layer(ctx, local, Point::new(c.x, c.y - 120.0));
        let card = AccentBox {
            body: self.takeaway.clone(),
            tone: self.tone,
            delay: 12,
            font_size: 36.0,
        }
        .layer(
            ctx,
            local,
            Rect::new(c.x - 700.0, c.y - 80.0, c.x + 700.0, c.y + 100.0),
        );
        vec![heading, card]
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("takeaway", &self.takeaway)
    }
}

/// Severity of a [`WarningCallout`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Amber.
    #[default]
    Warning,
    /// Red.
    Danger,
}

impl Severity {
    fn tone(self) -> Tone {
        match self {
            Self::Warning => Tone::Warning,
            Self::Danger => Tone::Danger,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Warning => "\u{26a0}",
            Self::Danger => "\u{26d4}",
        }
    }
}

/// Pulsing caution heading over an explanation box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WarningCallout {
    /// Heading.
    pub heading: String,
    /// Explanation.
    pub body: String,
    /// Severity.
    #[serde(default)]
    pub severity: Severity,
}

impl Scene for WarningCallout {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let c = ctx.canvas.center();
        let tone = self.severity.tone();
        let color = ctx.theme.accent(tone.accent());
        let origin = Point::new(c.x, c.y - 110.0);
        let scale = 1.0 + pulse(local.0, ctx.period(2.0), 0.03);

        let heading = Layer::text(text_run(
            ctx,
            FontRole::Heading,
            format!("{} {}", self.severity.glyph(), self.heading),
            origin,
            52.0,
            800,
            color,
            TextAlign::Center,
        ))
        .with_opacity(ctx.entry(local, 0))
        .with_transform(Transform2D::scale_about(scale, origin));

        let card = AccentBox {
            body: self.body.clone(),
            tone,
            delay: 12,
            font_size: 28.0,
        }
        .layer(
            ctx,
            local,
            Rect::new(c.x - 650.0, c.y - 60.0, c.x + 650.0, c.y + 140.0),
        );
        vec![heading, card]
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_text("body", &self.body)
    }
}
