use crate::animation::entrance::EntranceStyle;
use crate::animation::timing::SpringConfig;
use crate::foundation::color::Rgba8;
use crate::animation::interp::clamp01;
use crate::foundation::core::{LocalFrame, Point, Rect, Transform2D};
use crate::foundation::error::ExplainerResult;
use crate::scene::components::{self, AnimatedText, BulletStyle, FontRole, text_run};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Clip, Layer, TextAlign};
use crate::scene::kinds::{Scene, require_items, require_text};
use crate::theme::Accent;

/// Heading over a staggered bullet list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulletList {
    /// Heading.
    pub heading: String,
    /// Items, top to bottom.
    pub items: Vec<String>,
    /// Glyph family.
    #[serde(default)]
    pub style: BulletStyle,
    /// Glyph color.
    #[serde(default)]
    pub accent: Accent,
}

impl Scene for BulletList {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let list = components::BulletList {
            items: self.items.clone(),
            style: self.style,
            color: ctx.theme.accent(self.accent),
            delay: 12,
            font_size: 32.0,
        };
        let block = list.row_height() * self.items.len() as f64;
        let top = 220.0 + ((ctx.height() - 220.0 - block) / 2.0).max(0.0);

        vec![
            AnimatedText::heading(self.heading.clone(), 52.0, ctx.theme.palette.text)
                .aligned(TextAlign::Start)
                .layer(ctx, local, Point::new(160.0, 170.0)),
            list.layer(ctx, local, Point::new(180.0, top)),
        ]
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_items("items", &self.items)
    }
}

/// One column of a [`ComparisonSplit`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SplitSide {
    /// Column title.
    pub title: String,
    /// Points listed under the title.
    pub items: Vec<String>,
    /// Column color.
    pub accent: Accent,
}

/// How the two columns of a [`ComparisonSplit`] arrive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEntrance {
    /// Smooth spring from 60px outside.
    #[default]
    Slide,
    /// Snappy spring from 60px outside.
    Spring,
    /// Bouncy spring from 100px outside, overshooting the rest position.
    Overshoot,
}

impl SideEntrance {
    fn spring(self, ctx: &SceneCtx<'_>) -> SpringConfig {
        let timing = &ctx.theme.timing;
        match self {
            Self::Slide => timing.smooth,
            Self::Spring => timing.snappy,
            Self::Overshoot => timing.bouncy,
        }
    }

    fn distance(self) -> f64 {
        match self {
            Self::Overshoot => 100.0,
            Self::Slide | Self::Spring => 60.0,
        }
    }
}

/// Two columns compared side by side, divided by "VS".
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonSplit {
    /// Heading.
    pub heading: String,
    /// Left column.
    pub left: SplitSide,
    /// Right column.
    pub right: SplitSide,
    /// Column entrance.
    #[serde(default)]
    pub entrance: SideEntrance,
}

impl ComparisonSplit {
    fn side_layer(
        &self,
        ctx: &SceneCtx<'_>,
        local: LocalFrame,
        side: &SplitSide,
        rect: Rect,
        delay: i64,
        direction: f64,
    ) -> Layer {
        let palette = &ctx.theme.palette;
        let color = ctx.theme.accent(side.accent);
        let p = ctx.entry_with(local, delay, self.entrance.spring(ctx));
        let dx = direction * self.entrance.distance() * (1.0 - p);

        let mut children = vec![
            Layer::rect(rect, color.with_alpha(0.063), ctx.theme.radius.lg)
                .with_stroke(color.with_alpha(0.2), 1.0),
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                side.title.clone(),
                Point::new(rect.x0 + 36.0, rect.y0 + 64.0),
                32.0,
                700,
                color,
                TextAlign::Start,
            )),
        ];
        for (i, item) in side.items.iter().enumerate() {
            let y = rect.y0 + 130.0 + i as f64 * 56.0;
            children.push(
                Layer::group(vec![
                    Layer::circle(Point::new(rect.x0 + 40.0, y - 9.0), 4.0, color),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Body,
                        item.clone(),
                        Point::new(rect.x0 + 60.0, y),
                        26.0,
                        400,
                        palette.text,
                        TextAlign::Start,
                    )),
                ])
                .with_opacity(ctx.entry(local, ctx.stagger(20, i))),
            );
        }

        Layer::group(children)
            .with_opacity(p)
            .with_transform(Transform2D::translate(dx, 0.0))
    }
}

impl Scene for ComparisonSplit {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let (margin, top, bottom, divider) = (80.0, 230.0, ctx.height() - 120.0, 120.0);
        let col_w = (ctx.width() - 2.0 * margin - divider) / 2.0;
        let left_rect = Rect::new(margin, top, margin + col_w, bottom);
        let right_rect = Rect::new(ctx.width() - margin - col_w, top, ctx.width() - margin, bottom);
        let mid = Point::new(ctx.width() / 2.0, (top + bottom) / 2.0);

        vec![
            AnimatedText::heading(self.heading.clone(), 48.0, palette.text).layer(
                ctx,
                local,
                Point::new(ctx.width() / 2.0, 150.0),
            ),
            self.side_layer(ctx, local, &self.left, left_rect, 0, -1.0),
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                "VS",
                Point::new(mid.x, mid.y + 12.0),
                32.0,
                800,
                palette.muted,
                TextAlign::Center,
            ))
            .with_opacity(ctx.entry(local, 5)),
            self.side_layer(ctx, local, &self.right, right_rect, 10, 1.0),
        ]
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_text("left.title", &self.left.title)?;
        require_text("right.title", &self.right.title)
    }
}

fn recap_heading() -> String {
    "What We Covered".to_owned()
}

/// Numbered recap of the video's main points.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryRecap {
    /// Heading.
    #[serde(default = "recap_heading")]
    pub heading: String,
    /// Points, in order.
    pub items: Vec<String>,
    /// Entrance applied to each item.
    #[serde(default = "fade_left")]
    pub item_entrance: EntranceStyle,
}

fn fade_left() -> EntranceStyle {
    EntranceStyle::FadeLeft
}

impl Scene for SummaryRecap {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let mut layers = vec![
            AnimatedText::heading(self.heading.clone(), 52.0, palette.text).layer(
                ctx,
                local,
                Point::new(ctx.width() / 2.0, 180.0),
            ),
        ];

        let row = 80.0;
        let block = row * self.items.len() as f64;
        let top = 240.0 + ((ctx.height() - 240.0 - block) / 2.0).max(0.0);
        let left = ctx.width() / 2.0 - 420.0;
        for (i, item) in self.items.iter().enumerate() {
            let color = ctx.theme.accent(Accent::cycle(i));
            let y = top + i as f64 * row;
            let anchor = Point::new(left, y);
            let fx = self
                .item_entrance
                .fx(ctx.entry(local, ctx.stagger(10, i)));
            layers.push(
                Layer::group(vec![
                    Layer::rect(Rect::new(left, y - 18.0, left + 36.0, y + 18.0), color, 8.0),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Heading,
                        (i + 1).to_string(),
                        Point::new(left + 18.0, y + 7.0),
                        18.0,
                        800,
                        Rgba8::WHITE,
                        TextAlign::Center,
                    )),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Body,
                        item.clone(),
                        Point::new(left + 60.0, y + 10.0),
                        30.0,
                        400,
                        palette.text,
                        TextAlign::Start,
                    )),
                ])
                .with_opacity(fx.opacity)
                .with_transform(fx.transform(anchor))
                .with_blur(fx.blur_px),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_items("items", &self.items)
    }
}

/// One panel of a [`BeforeAfter`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Panel {
    /// Panel title.
    pub title: String,
    /// Points listed under the title.
    #[serde(default)]
    pub items: Vec<String>,
}

/// How the "after" panel of a [`BeforeAfter`] appears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeforeAfterReveal {
    /// Uncovered left to right by a growing clip.
    #[default]
    Wipe,
    /// Slides in from the right beside an arrow.
    Split,
}

fn red() -> Accent {
    Accent::Red
}

fn green() -> Accent {
    Accent::Green
}

/// A "before" panel followed by the improved "after" panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeforeAfter {
    /// Heading.
    pub heading: String,
    /// Left panel.
    pub before: Panel,
    /// Right panel.
    pub after: Panel,
    /// After-panel entrance.
    #[serde(default)]
    pub reveal: BeforeAfterReveal,
    /// Before-panel color.
    #[serde(default = "red")]
    pub before_accent: Accent,
    /// After-panel color.
    #[serde(default = "green")]
    pub after_accent: Accent,
}

impl BeforeAfter {
    /// Frame at which the after panel starts its entrance.
    pub const AFTER_DELAY: i64 = 25;

    fn panel_layer(
        &self,
        ctx: &SceneCtx<'_>,
        local: LocalFrame,
        panel: &Panel,
        accent: Accent,
        rect: Rect,
        item_delay: i64,
    ) -> Layer {
        let color = ctx.theme.accent(accent);
        let mut children = vec![
            Layer::rect(rect, color.with_alpha(0.063), ctx.theme.radius.lg)
                .with_stroke(color.with_alpha(0.2), 2.0),
            Layer::text(text_run(
                ctx,
                FontRole::Heading,
                panel.title.clone(),
                Point::new(rect.x0 + 36.0, rect.y0 + 62.0),
                30.0,
                700,
                color,
                TextAlign::Start,
            )),
        ];
        for (i, item) in panel.items.iter().enumerate() {
            let y = rect.y0 + 120.0 + i as f64 * 50.0;
            children.push(
                Layer::group(vec![
                    Layer::circle(Point::new(rect.x0 + 40.0, y - 8.0), 4.0, color),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Body,
                        item.clone(),
                        Point::new(rect.x0 + 60.0, y),
                        24.0,
                        400,
                        ctx.theme.palette.text,
                        TextAlign::Start,
                    )),
                ])
                .with_opacity(ctx.entry(local, ctx.stagger(item_delay, i))),
            );
        }
        Layer::group(children)
    }
}

impl Scene for BeforeAfter {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let (margin, top, bottom) = (80.0, 220.0, ctx.height() - 100.0);
        let divider = match self.reveal {
            BeforeAfterReveal::Wipe => 32.0,
            BeforeAfterReveal::Split => 96.0,
        };
        let col_w = (ctx.width() - 2.0 * margin - divider) / 2.0;
        let before_rect = Rect::new(margin, top, margin + col_w, bottom);
        let after_rect = Rect::new(ctx.width() - margin - col_w, top, ctx.width() - margin, bottom);
        let p = clamp01(ctx.entry(local, Self::AFTER_DELAY));

        let mut layers = vec![
            AnimatedText::heading(self.heading.clone(), 48.0, palette.text).layer(
                ctx,
                local,
                Point::new(ctx.width() / 2.0, 150.0),
            ),
            self.panel_layer(ctx, local, &self.before, self.before_accent, before_rect, 12)
                .with_opacity(ctx.entry(local, 8)),
        ];

        let after = self.panel_layer(ctx, local, &self.after, self.after_accent, after_rect, 30);
        match self.reveal {
            BeforeAfterReveal::Wipe => {
                let visible = Rect::new(
                    after_rect.x0,
                    after_rect.y0,
                    after_rect.x0 + after_rect.width() * p,
                    after_rect.y1,
                );
                layers.push(after.with_clip(Clip::Rect { rect: visible }));
            }
            BeforeAfterReveal::Split => {
                let mid_y = (top + bottom) / 2.0;
                layers.push(Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    "\u{2192}",
                    Point::new(ctx.width() / 2.0, mid_y + 8.0),
                    24.0,
                    700,
                    palette.muted,
                    TextAlign::Center,
                )));
                layers.push(
                    after
                        .with_opacity(p)
                        .with_transform(Transform2D::translate(60.0 * (1.0 - p), 0.0)),
                );
            }
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_text("before.title", &self.before.title)?;
        require_text("after.title", &self.after.title)
    }
}
