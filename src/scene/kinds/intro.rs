use crate::animation::interp::{Extrapolate, clamp01, interpolate, lerp};
use crate::animation::periodic::{blink, glow_intensity};
use crate::foundation::color::Rgba8;
use crate::foundation::core::{LocalFrame, Point, Rect, Transform2D, Vec2};
use crate::foundation::error::ExplainerResult;
use crate::scene::components::{AnimatedText, FontRole, SectionBadge, reveal, text_run};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Layer, TextAlign};
use crate::scene::kinds::{Scene, require_text};
use crate::scene::overlays::ParticleField;
use crate::theme::Accent;

/// Large centered question that opens a video.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HookQuestion {
    /// The question.
    pub question: String,
    /// Line under the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    /// Subtext color.
    #[serde(default)]
    pub accent: Accent,
}

impl Scene for HookQuestion {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let c = ctx.canvas.center();
        let origin = Point::new(c.x, c.y - 10.0);

        let pop = ctx.entry_with(local, 0, ctx.theme.timing.snappy);
        let scale = interpolate(pop, [0.0, 1.0], [0.9, 1.0], Extrapolate::Extend);
        let mut run = text_run(
            ctx,
            FontRole::Heading,
            self.question.clone(),
            origin,
            72.0,
            800,
            palette.text,
            TextAlign::Center,
        );
        run.max_width = Some(ctx.width() - 200.0);

        let mut layers = vec![
            Layer::text(run)
                .with_opacity(ctx.entry(local, 0))
                .with_transform(Transform2D::scale_about(scale, origin)),
        ];
        if let Some(sub) = &self.subtext {
            layers.push(
                AnimatedText::body(sub.clone(), 30.0, ctx.theme.accent(self.accent))
                    .delayed(15)
                    .layer(ctx, local, Point::new(c.x, c.y + 80.0)),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("question", &self.question)
    }
}

/// Video title with a short list of learning objectives.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleIntro {
    /// Title.
    pub title: String,
    /// What the viewer will learn.
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Underline color.
    #[serde(default)]
    pub accent: Accent,
}

impl Scene for TitleIntro {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let c = ctx.canvas.center();
        let top = c.y - 60.0 - self.objectives.len() as f64 * 25.0;

        let title = AnimatedText::heading(self.title.clone(), 72.0, palette.text)
            .wrapped(ctx.width() - 240.0)
            .layer(ctx, local, Point::new(c.x, top));

        let line_w = lerp(0.0, 200.0, ctx.entry(local, 12));
        let line = Layer::rect(
            Rect::new(c.x - line_w / 2.0, top + 30.0, c.x + line_w / 2.0, top + 34.0),
            ctx.theme.accent(self.accent),
            2.0,
        );

        let mut layers = vec![title, line];
        for (i, objective) in self.objectives.iter().enumerate() {
            let y = top + 100.0 + i as f64 * 50.0;
            layers.push(reveal(
                Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    objective.clone(),
                    Point::new(c.x, y),
                    26.0,
                    400,
                    palette.muted,
                    TextAlign::Center,
                )),
                ctx.entry(local, ctx.stagger(20, i)),
                Vec2::new(0.0, 20.0),
            ));
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("title", &self.title)
    }
}

/// Divider introducing a numbered section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionTitle {
    /// Section number shown in the badge.
    pub number: u32,
    /// Section title.
    pub title: String,
    /// Line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Badge color.
    #[serde(default)]
    pub accent: Accent,
}

impl Scene for SectionTitle {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let c = ctx.canvas.center();

        let badge = SectionBadge {
            number: self.number,
            color: ctx.theme.accent(self.accent),
            size: 56.0,
            delay: 0,
        }
        .layer(ctx, local, Point::new(c.x, c.y - 90.0));

        let title = reveal(
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                self.title.clone(),
                Point::new(c.x, c.y + 10.0),
                56.0,
                800,
                palette.text,
                TextAlign::Center,
            )),
            ctx.entry(local, 8),
            Vec2::new(0.0, 30.0),
        );

        let mut layers = vec![badge, title];
        if let Some(sub) = &self.subtitle {
            layers.push(
                Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    sub.clone(),
                    Point::new(c.x, c.y + 70.0),
                    26.0,
                    400,
                    palette.muted,
                    TextAlign::Center,
                ))
                .with_opacity(ctx.entry(local, 18)),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("title", &self.title)
    }
}

/// Social handle shown on the end screen.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EndLink {
    /// Platform name.
    pub label: String,
    /// Handle or URL.
    pub handle: String,
}

fn default_cta() -> String {
    "Subscribe for more".to_owned()
}

fn default_true() -> bool {
    true
}

/// Closing screen: channel name, call to action and links.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EndScreen {
    /// Channel name.
    pub channel: String,
    /// Button text.
    #[serde(default = "default_cta")]
    pub cta: String,
    /// Line under the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Links row.
    #[serde(default)]
    pub links: Vec<EndLink>,
    /// Drift particles behind the content.
    #[serde(default = "default_true")]
    pub show_particles: bool,
    /// Button and particle color.
    #[serde(default)]
    pub accent: Accent,
}

impl Scene for EndScreen {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let theme = ctx.theme;
        let palette = &theme.palette;
        let accent = theme.accent(self.accent);
        let c = ctx.canvas.center();
        let mut layers = Vec::new();

        if self.show_particles {
            let field = ParticleField {
                count: 20,
                opacity: 0.1,
                ..ParticleField::default()
            };
            layers.push(field.layer(ctx.canvas, local.0, accent));
        }

        let name_origin = Point::new(c.x, c.y - 120.0);
        let name_pop = ctx.entry_with(local, 0, theme.timing.bouncy).max(0.0);
        layers.push(
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                self.channel.clone(),
                name_origin,
                72.0,
                800,
                palette.text,
                TextAlign::Center,
            ))
            .with_opacity(ctx.entry(local, 0))
            .with_transform(Transform2D::scale_about(name_pop, name_origin)),
        );

        let line_w = lerp(0.0, 300.0, ctx.entry(local, 10));
        layers.push(Layer::rect(
            Rect::new(c.x - line_w / 2.0, c.y - 90.0, c.x + line_w / 2.0, c.y - 86.0),
            accent,
            2.0,
        ));

        let cta_center = Point::new(c.x, c.y + 10.0);
        let cta_pop = ctx.entry_with(local, 18, theme.timing.snappy).max(0.0);
        let button = Rect::new(c.x - 180.0, c.y - 26.0, c.x + 180.0, c.y + 46.0);
        let glow = glow_intensity(local.0, ctx.period(2.0));
        layers.push(
            Layer::group(vec![
                Layer::rect(button.inflate(12.0, 12.0), accent, theme.radius.xl)
                    .with_opacity(0.25 * glow)
                    .with_blur(16.0),
                Layer::rect(button, accent, theme.radius.full),
                Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    self.cta.clone(),
                    Point::new(cta_center.x, cta_center.y + 12.0),
                    30.0,
                    700,
                    Rgba8::WHITE,
                    TextAlign::Center,
                )),
            ])
            .with_opacity(ctx.entry(local, 18))
            .with_transform(Transform2D::scale_about(cta_pop, cta_center)),
        );

        if let Some(tagline) = &self.tagline {
            layers.push(
                Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    tagline.clone(),
                    Point::new(c.x, c.y + 110.0),
                    24.0,
                    400,
                    palette.muted,
                    TextAlign::Center,
                ))
                .with_opacity(ctx.entry(local, 28)),
            );
        }

        let spacing = 320.0;
        let row_left = c.x - spacing * (self.links.len().saturating_sub(1)) as f64 / 2.0;
        for (i, link) in self.links.iter().enumerate() {
            let x = row_left + i as f64 * spacing;
            layers.push(reveal(
                Layer::group(vec![
                    Layer::text(text_run(
                        ctx,
                        FontRole::Body,
                        link.label.clone(),
                        Point::new(x, c.y + 180.0),
                        18.0,
                        600,
                        palette.muted,
                        TextAlign::Center,
                    )),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Heading,
                        link.handle.clone(),
                        Point::new(x, c.y + 210.0),
                        22.0,
                        700,
                        palette.text,
                        TextAlign::Center,
                    )),
                ]),
                ctx.entry(local, 35 + i as i64 * 5),
                Vec2::new(0.0, 15.0),
            ));
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("channel", &self.channel)?;
        require_text("cta", &self.cta)
    }
}

/// How the [`ColdOpen`] statement appears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColdOpenEntrance {
    /// Grow in under a pulsing accent glow.
    #[default]
    Glow,
    /// Grow in from further away, drawn in the accent color.
    Gradient,
    /// Type out two frames per character behind a blinking cursor.
    Typewriter,
}

/// Single bold statement that opens a video before any title.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColdOpen {
    /// The statement.
    pub statement: String,
    /// Line under the statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    /// Statement entrance.
    #[serde(default)]
    pub entrance: ColdOpenEntrance,
    /// Drift faint particles behind the statement.
    #[serde(default = "default_true")]
    pub show_particles: bool,
    /// Glow, cursor, subtext and particle color.
    #[serde(default)]
    pub accent: Accent,
}

impl ColdOpen {
    /// Characters of the statement shown by the typewriter entrance at `local`.
    pub fn typed_chars(&self, local: LocalFrame) -> usize {
        let len = self.statement.chars().count();
        let shown = interpolate(
            local.as_f64(),
            [0.0, len as f64 * 2.0],
            [0.0, len as f64],
            Extrapolate::Clamp,
        );
        (shown.floor() as usize).min(len)
    }

    fn statement_run(
        &self,
        ctx: &SceneCtx<'_>,
        text: String,
        origin: Point,
        color: Rgba8,
    ) -> Layer {
        let mut run = text_run(
            ctx,
            FontRole::Heading,
            text,
            origin,
            80.0,
            800,
            color,
            TextAlign::Center,
        );
        run.max_width = Some(ctx.width() - 200.0);
        Layer::text(run)
    }
}

impl Scene for ColdOpen {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let accent = ctx.theme.accent(self.accent);
        let c = ctx.canvas.center();
        let origin = Point::new(c.x, c.y);
        let mut layers = Vec::new();

        if self.show_particles {
            let field = ParticleField {
                count: 15,
                opacity: 0.08,
                ..ParticleField::default()
            };
            layers.push(field.layer(ctx.canvas, local.0, accent));
        }

        match self.entrance {
            ColdOpenEntrance::Typewriter => {
                let typed: String = self.statement.chars().take(self.typed_chars(local)).collect();
                layers.push(
                    self.statement_run(ctx, typed.clone(), origin, accent)
                        .with_opacity(0.5)
                        .with_blur(20.0),
                );
                layers.push(self.statement_run(ctx, typed.clone(), origin, palette.text));
                if blink(local.0, ctx.period(1.0)) {
                    let advance = typed.chars().count() as f64 * 80.0 * 0.55 / 2.0;
                    layers.push(Layer::text(text_run(
                        ctx,
                        FontRole::Heading,
                        "|",
                        Point::new(origin.x + advance, origin.y),
                        80.0,
                        800,
                        accent,
                        TextAlign::Start,
                    )));
                }
            }
            ColdOpenEntrance::Gradient | ColdOpenEntrance::Glow => {
                let p = clamp01(ctx.entry(local, 0));
                let (from_scale, color) = match self.entrance {
                    ColdOpenEntrance::Gradient => (0.8, accent),
                    _ => (0.85, palette.text),
                };
                let scale = Transform2D::scale_about(lerp(from_scale, 1.0, p), origin);
                if self.entrance == ColdOpenEntrance::Glow {
                    let glow = glow_intensity(local.0, ctx.period(2.0));
                    layers.push(
                        self.statement_run(ctx, self.statement.clone(), origin, accent)
                            .with_opacity(p * (0.3 + 0.4 * glow))
                            .with_blur(20.0 + 20.0 * glow)
                            .with_transform(scale),
                    );
                }
                layers.push(
                    self.statement_run(ctx, self.statement.clone(), origin, color)
                        .with_opacity(p)
                        .with_transform(scale),
                );
            }
        }

        if let Some(sub) = &self.subtext {
            layers.push(
                Layer::text(text_run(
                    ctx,
                    FontRole::Body,
                    sub.clone(),
                    Point::new(c.x, c.y + 90.0),
                    28.0,
                    400,
                    accent,
                    TextAlign::Center,
                ))
                .with_opacity(ctx.entry(local, 20)),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("statement", &self.statement)
    }
}

fn default_channel() -> String {
    "medevsmaker".to_owned()
}

fn default_outro_tagline() -> String {
    "AI tools for builders".to_owned()
}

/// Short sign-off: channel name popping in over a call-to-action button.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Outro {
    /// Channel name.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Button text.
    #[serde(default = "default_cta")]
    pub cta: String,
    /// Line under the button.
    #[serde(default = "default_outro_tagline")]
    pub tagline: String,
    /// Button color.
    #[serde(default)]
    pub accent: Accent,
}

impl Default for Outro {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            cta: default_cta(),
            tagline: default_outro_tagline(),
            accent: Accent::default(),
        }
    }
}

impl Scene for Outro {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let theme = ctx.theme;
        let palette = &theme.palette;
        let c = ctx.canvas.center();

        let name_origin = Point::new(c.x, c.y - 70.0);
        let name_scale = clamp01(ctx.entry_with(local, 0, theme.timing.snappy));
        let name = Layer::text(text_run(
            ctx,
            FontRole::Heading,
            self.channel.clone(),
            name_origin,
            64.0,
            800,
            palette.text,
            TextAlign::Center,
        ))
        .with_transform(Transform2D::scale_about(name_scale, name_origin));

        let button = Rect::new(c.x - 170.0, c.y - 10.0, c.x + 170.0, c.y + 50.0);
        let cta = reveal(
            Layer::group(vec![
                Layer::rect(button, ctx.theme.accent(self.accent), theme.radius.md),
                Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    self.cta.clone(),
                    Point::new(c.x, c.y + 29.0),
                    26.0,
                    600,
                    Rgba8::WHITE,
                    TextAlign::Center,
                )),
            ]),
            ctx.entry(local, 12),
            Vec2::new(0.0, 20.0),
        );

        let tagline = Layer::text(text_run(
            ctx,
            FontRole::Body,
            self.tagline.clone(),
            Point::new(c.x, c.y + 110.0),
            22.0,
            400,
            palette.muted,
            TextAlign::Center,
        ))
        .with_opacity(ctx.entry(local, 22));

        vec![name, cta, tagline]
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("channel", &self.channel)?;
        require_text("cta", &self.cta)
    }
}
