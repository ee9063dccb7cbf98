use crate::animation::interp::clamp01;
use crate::foundation::core::{LocalFrame, Point, Rect, Transform2D, Vec2};
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::components::{
    AnimatedText, CodeBlock, DiagramArrow, DiagramBox, FontRole, StatCounter, format_grouped,
    reveal, text_run,
};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Layer, TextAlign};
use crate::scene::kinds::{Scene, require_items, require_text};
use crate::theme::Accent;

/// Layout axis of a [`DiagramFlow`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Box of a [`DiagramFlow`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowNode {
    /// Main label.
    pub label: String,
    /// Secondary label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    /// Outline color; cycles through the palette when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
}

/// Arrow between two nodes, by index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Connection {
    /// Tail node.
    pub from: usize,
    /// Head node.
    pub to: usize,
    /// Midpoint label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Boxes laid out on one axis and joined by arrows that draw themselves.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramFlow {
    /// Title above the diagram.
    pub title: String,
    /// Boxes in layout order.
    pub nodes: Vec<FlowNode>,
    /// Arrows.
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Layout axis.
    #[serde(default)]
    pub direction: FlowDirection,
}

impl DiagramFlow {
    const BOX_W: f64 = 220.0;
    const BOX_H: f64 = 100.0;

    fn gap(&self) -> f64 {
        match self.direction {
            FlowDirection::Horizontal => 160.0,
            FlowDirection::Vertical => 80.0,
        }
    }

    /// Bounds of node `i`.
    pub fn node_rect(&self, ctx: &SceneCtx<'_>, i: usize) -> Rect {
        let n = self.nodes.len() as f64;
        let gap = self.gap();
        let step = i as f64;
        let (x, y) = match self.direction {
            FlowDirection::Horizontal => {
                let total_w = n * Self::BOX_W + (n - 1.0).max(0.0) * gap;
                let start_x = (ctx.width() - total_w) / 2.0;
                (start_x + step * (Self::BOX_W + gap), 500.0)
            }
            FlowDirection::Vertical => {
                let total_h = n * Self::BOX_H + (n - 1.0).max(0.0) * gap;
                let start_y = (ctx.height() - total_h) / 2.0 + 60.0;
                (
                    (ctx.width() - Self::BOX_W) / 2.0,
                    start_y + step * (Self::BOX_H + gap),
                )
            }
        };
        Rect::new(x, y, x + Self::BOX_W, y + Self::BOX_H)
    }

    /// Frame at which node `i` pops in.
    pub fn node_delay(i: usize) -> i64 {
        10 + 12 * i as i64
    }

    fn arrow_ends(&self, from: Rect, to: Rect) -> (Point, Point) {
        let (a, b) = (from.center(), to.center());
        match self.direction {
            FlowDirection::Horizontal => (
                Point::new(from.x1 + 10.0, a.y),
                Point::new(to.x0 - 10.0, b.y),
            ),
            FlowDirection::Vertical => (
                Point::new(a.x, from.y1 + 10.0),
                Point::new(b.x, to.y0 - 10.0),
            ),
        }
    }
}

impl Scene for DiagramFlow {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let mut layers = vec![
            AnimatedText::heading(self.title.clone(), 48.0, palette.text).layer(
                ctx,
                local,
                Point::new(ctx.width() / 2.0, 160.0),
            ),
        ];

        for conn in &self.connections {
            let (Some(_), Some(_)) = (self.nodes.get(conn.from), self.nodes.get(conn.to)) else {
                continue;
            };
            let (from, to) = self.arrow_ends(
                self.node_rect(ctx, conn.from),
                self.node_rect(ctx, conn.to),
            );
            layers.push(
                DiagramArrow {
                    from,
                    to,
                    label: conn.label.clone(),
                    color: palette.muted,
                    delay: 15 + 12 * conn.from.max(conn.to) as i64,
                }
                .layer(ctx, local),
            );
        }

        for (i, node) in self.nodes.iter().enumerate() {
            let accent = node.accent.unwrap_or_else(|| Accent::cycle(i));
            layers.push(
                DiagramBox {
                    label: node.label.clone(),
                    sublabel: node.sublabel.clone(),
                    color: ctx.theme.accent(accent),
                    delay: Self::node_delay(i),
                }
                .layer(ctx, local, self.node_rect(ctx, i)),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_items("nodes", &self.nodes)?;
        for (i, c) in self.connections.iter().enumerate() {
            for (end, idx) in [("from", c.from), ("to", c.to)] {
                if idx >= self.nodes.len() {
                    return Err(ExplainerError::validation(format!(
                        "connections[{i}].{end} = {idx} is out of range for {} nodes",
                        self.nodes.len()
                    )));
                }
            }
            if c.from == c.to {
                return Err(ExplainerError::validation(format!(
                    "connections[{i}] connects node {} to itself",
                    c.from
                )));
            }
        }
        Ok(())
    }
}

fn cyan() -> Accent {
    Accent::Cyan
}

/// One number counting up, with a label and optional context line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatHighlight {
    /// Final value.
    pub stat: f64,
    /// Fraction digits.
    #[serde(default)]
    pub decimals: u32,
    /// Text before the number.
    #[serde(default)]
    pub prefix: String,
    /// Text after the number.
    #[serde(default)]
    pub suffix: String,
    /// Caption.
    pub label: String,
    /// Line under the caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Number color.
    #[serde(default = "cyan")]
    pub accent: Accent,
}

impl StatHighlight {
    fn counter(&self, ctx: &SceneCtx<'_>) -> StatCounter {
        StatCounter {
            target: self.stat,
            decimals: self.decimals,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            label: self.label.clone(),
            color: ctx.theme.accent(self.accent),
            delay: 0,
        }
    }
}

impl Scene for StatHighlight {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let c = ctx.canvas.center();
        let mut layers = vec![self.counter(ctx).layer(ctx, local, Point::new(c.x, c.y - 20.0))];
        if let Some(context) = &self.context {
            let mut run = text_run(
                ctx,
                FontRole::Body,
                context.clone(),
                Point::new(c.x, c.y + 150.0),
                26.0,
                400,
                ctx.theme.palette.muted,
                TextAlign::Center,
            );
            run.max_width = Some(800.0);
            layers.push(Layer::text(run).with_opacity(ctx.entry(local, 20)));
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        if !self.stat.is_finite() {
            return Err(ExplainerError::validation("stat must be finite"));
        }
        require_text("label", &self.label)
    }
}

/// Note attached to one code line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// 1-based line number.
    pub line: usize,
    /// Note text.
    pub text: String,
}

fn default_true() -> bool {
    true
}

/// Titled code card with annotations listed beside it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeDisplay {
    /// Title above the card.
    pub title: String,
    /// Source text.
    pub code: String,
    /// Notes shown right of the card.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Draw a line-number gutter.
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
    /// 1-based lines to highlight.
    #[serde(default)]
    pub highlight_lines: Vec<usize>,
    /// Type the code out.
    #[serde(default)]
    pub typewriter: bool,
}

impl CodeDisplay {
    /// Frame at which annotation `i` enters.
    pub fn annotation_delay(i: usize) -> i64 {
        30 + 12 * i as i64
    }

    fn block(&self) -> CodeBlock {
        CodeBlock {
            code: self.code.clone(),
            delay: 8,
            highlight_lines: self.highlight_lines.clone(),
            show_line_numbers: self.show_line_numbers,
            typewriter: self.typewriter,
            font_size: 22.0,
        }
    }
}

impl Scene for CodeDisplay {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let margin = 80.0;
        let code_w = if self.annotations.is_empty() {
            ctx.width() - 2.0 * margin
        } else {
            (ctx.width() - 2.0 * margin) * 0.62
        };

        let mut layers = vec![
            AnimatedText::heading(self.title.clone(), 44.0, palette.text)
                .aligned(TextAlign::Start)
                .layer(ctx, local, Point::new(margin, 130.0)),
            self.block()
                .layer(ctx, local, Point::new(margin, 180.0), code_w),
        ];

        let notes_x = margin + code_w + 40.0;
        for (i, ann) in self.annotations.iter().enumerate() {
            let y = 220.0 + i as f64 * 90.0;
            let mut note = text_run(
                ctx,
                FontRole::Body,
                ann.text.clone(),
                Point::new(notes_x + 16.0, y + 30.0),
                22.0,
                400,
                palette.text,
                TextAlign::Start,
            );
            note.max_width = Some((ctx.width() - margin - notes_x - 16.0).max(0.0));
            layers.push(reveal(
                Layer::group(vec![
                    Layer::rect(
                        Rect::new(notes_x, y, notes_x + 3.0, y + 60.0),
                        palette.indigo,
                        0.0,
                    ),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Code,
                        format!("L{}", ann.line),
                        Point::new(notes_x + 16.0, y),
                        16.0,
                        700,
                        palette.indigo,
                        TextAlign::Start,
                    )),
                    Layer::text(note),
                ]),
                ctx.entry(local, Self::annotation_delay(i)),
                Vec2::new(20.0, 0.0),
            ));
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("code", &self.code)?;
        let lines = self.code.split('\n').count();
        let bad = self
            .annotations
            .iter()
            .map(|a| a.line)
            .chain(self.highlight_lines.iter().copied())
            .find(|&l| l == 0 || l > lines);
        if let Some(line) = bad {
            return Err(ExplainerError::validation(format!(
                "line {line} is outside the {lines}-line code block"
            )));
        }
        Ok(())
    }
}

/// One bar of a [`DataChart`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataBar {
    /// Label left of the bar.
    pub label: String,
    /// Bar value.
    pub value: f64,
    /// Bar color; the chart accent when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
}

/// Horizontal bar chart whose bars grow and count up one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataChart {
    /// Heading.
    pub heading: String,
    /// Bars, top to bottom.
    pub bars: Vec<DataBar>,
    /// Value of a full-width bar; the largest bar value when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Text after each value.
    #[serde(default)]
    pub suffix: String,
    /// Default bar color.
    #[serde(default)]
    pub accent: Accent,
}

impl DataChart {
    const ROW_H: f64 = 36.0;
    const ROW_GAP: f64 = 24.0;

    /// Frame at which bar `i` starts growing.
    pub fn bar_delay(i: usize) -> i64 {
        8 + 8 * i as i64
    }

    /// Value of a full-width bar.
    pub fn scale_max(&self) -> f64 {
        self.max_value
            .unwrap_or_else(|| self.bars.iter().map(|b| b.value).fold(0.0, f64::max))
    }

    /// Value label of bar `i` at `local`, counting up with the bar.
    pub fn value_text(&self, ctx: &SceneCtx<'_>, local: LocalFrame, i: usize) -> String {
        let Some(bar) = self.bars.get(i) else {
            return String::new();
        };
        let p = clamp01(ctx.entry_with(local, Self::bar_delay(i), ctx.theme.timing.snappy));
        format!("{}{}", format_grouped((bar.value * p).round(), 0), self.suffix)
    }
}

impl Scene for DataChart {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let palette = &ctx.theme.palette;
        let mut layers = vec![
            AnimatedText::heading(self.heading.clone(), 48.0, palette.text).layer(
                ctx,
                local,
                Point::new(ctx.width() / 2.0, 160.0),
            ),
        ];

        let max = self.scale_max();
        let n = self.bars.len() as f64;
        let block = n * Self::ROW_H + (n - 1.0).max(0.0) * Self::ROW_GAP;
        let top = 220.0 + ((ctx.height() - 300.0 - block) / 2.0).max(0.0);
        let (label_right, track_left) = (260.0, 280.0);
        let track_right = ctx.width() - 216.0;

        for (i, bar) in self.bars.iter().enumerate() {
            let color = ctx.theme.accent(bar.accent.unwrap_or(self.accent));
            let delay = Self::bar_delay(i);
            let grow = clamp01(ctx.entry_with(local, delay, ctx.theme.timing.snappy));
            let y = top + i as f64 * (Self::ROW_H + Self::ROW_GAP);
            let baseline = y + Self::ROW_H * 0.7;
            let full = (track_right - track_left) * (bar.value / max).clamp(0.0, 1.0);

            let track = Rect::new(track_left, y, track_right, y + Self::ROW_H);
            let fill = Rect::new(track_left, y, track_left + full * grow, y + Self::ROW_H);
            layers.push(
                Layer::group(vec![
                    Layer::text(text_run(
                        ctx,
                        FontRole::Heading,
                        bar.label.clone(),
                        Point::new(label_right, baseline),
                        22.0,
                        600,
                        palette.text,
                        TextAlign::End,
                    )),
                    Layer::rect(track, color.with_alpha(0.08), 8.0),
                    Layer::rect(fill, color, 8.0),
                    Layer::text(text_run(
                        ctx,
                        FontRole::Heading,
                        self.value_text(ctx, local, i),
                        Point::new(track_right + 16.0, baseline),
                        22.0,
                        700,
                        color,
                        TextAlign::Start,
                    ))
                    .with_opacity(ctx.entry(local, delay + 5)),
                ])
                .with_opacity(grow),
            );
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_items("bars", &self.bars)?;
        if let Some(i) = self
            .bars
            .iter()
            .position(|b| !b.value.is_finite() || b.value < 0.0)
        {
            return Err(ExplainerError::validation(format!(
                "bars[{i}].value must be finite and >= 0"
            )));
        }
        let max = self.scale_max();
        if !max.is_finite() || max <= 0.0 {
            return Err(ExplainerError::validation(
                "chart scale must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Point on a [`TimelineScene`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineNode {
    /// Label next to the dot.
    pub label: String,
    /// Line under the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Dots along one axis joined by connectors that draw themselves in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineScene {
    /// Heading.
    pub heading: String,
    /// Points in order.
    pub nodes: Vec<TimelineNode>,
    /// Layout axis.
    #[serde(default)]
    pub layout: FlowDirection,
    /// Dot and connector color.
    #[serde(default)]
    pub accent: Accent,
}

impl TimelineScene {
    const DOT: f64 = 24.0;

    /// Frame at which node `i` pops in and its connector starts drawing.
    pub fn node_delay(i: usize) -> i64 {
        10 + 12 * i as i64
    }

    fn step(&self) -> f64 {
        match self.layout {
            FlowDirection::Horizontal => 260.0,
            FlowDirection::Vertical => 110.0,
        }
    }

    /// Center of the dot of node `i`.
    pub fn dot_center(&self, ctx: &SceneCtx<'_>, i: usize) -> Point {
        let span = self.step() * self.nodes.len().saturating_sub(1) as f64;
        let along = i as f64 * self.step();
        match self.layout {
            FlowDirection::Horizontal => {
                Point::new((ctx.width() - span) / 2.0 + along, ctx.height() / 2.0 + 20.0)
            }
            FlowDirection::Vertical => Point::new(
                ctx.width() / 2.0 - 240.0,
                (ctx.height() - span) / 2.0 + 60.0 + along,
            ),
        }
    }
}

impl Scene for TimelineScene {
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer> {
        let theme = ctx.theme;
        let palette = &theme.palette;
        let color = theme.accent(self.accent);
        let r = Self::DOT / 2.0;
        let mut layers = vec![
            AnimatedText::heading(self.heading.clone(), 48.0, palette.text).layer(
                ctx,
                local,
                Point::new(ctx.width() / 2.0, 160.0),
            ),
        ];

        for i in 1..self.nodes.len() {
            let (a, b) = (self.dot_center(ctx, i - 1), self.dot_center(ctx, i));
            let (from, to) = match self.layout {
                FlowDirection::Horizontal => {
                    (Point::new(a.x + r + 8.0, a.y), Point::new(b.x - r - 8.0, b.y))
                }
                FlowDirection::Vertical => {
                    (Point::new(a.x, a.y + r + 8.0), Point::new(b.x, b.y - r - 8.0))
                }
            };
            let p = clamp01(ctx.entry(local, Self::node_delay(i - 1)));
            layers.push(Layer::line(from, to, color.with_alpha(0.2), 3.0));
            if p > 0.0 {
                layers.push(Layer::line(from, from + (to - from) * p, color, 3.0));
            }
        }

        for (i, node) in self.nodes.iter().enumerate() {
            let center = self.dot_center(ctx, i);
            let delay = Self::node_delay(i);
            let pop = clamp01(ctx.entry_with(local, delay, theme.timing.snappy));
            layers.push(
                Layer::group(vec![
                    Layer::circle(center, r + 8.0, color.with_alpha(0.25)).with_blur(8.0),
                    Layer::circle(center, r, color),
                ])
                .with_opacity(pop)
                .with_transform(Transform2D::scale_about(pop, center)),
            );

            let (label_at, align, desc_width) = match self.layout {
                FlowDirection::Horizontal => (
                    Point::new(center.x, center.y + r + 40.0),
                    TextAlign::Center,
                    160.0,
                ),
                FlowDirection::Vertical => (
                    Point::new(center.x + r + 24.0, center.y + 8.0),
                    TextAlign::Start,
                    400.0,
                ),
            };
            let mut children = vec![Layer::text(text_run(
                ctx,
                FontRole::Heading,
                node.label.clone(),
                label_at,
                22.0,
                700,
                palette.text,
                align,
            ))];
            if let Some(desc) = &node.description {
                let mut run = text_run(
                    ctx,
                    FontRole::Body,
                    desc.clone(),
                    Point::new(label_at.x, label_at.y + 28.0),
                    18.0,
                    400,
                    palette.muted,
                    align,
                );
                run.max_width = Some(desc_width);
                children.push(Layer::text(run));
            }
            layers.push(Layer::group(children).with_opacity(ctx.entry(local, delay + 5)));
        }
        layers
    }

    fn validate(&self) -> ExplainerResult<()> {
        require_text("heading", &self.heading)?;
        require_items("nodes", &self.nodes)?;
        for (i, node) in self.nodes.iter().enumerate() {
            require_text(&format!("nodes[{i}].label"), &node.label)?;
        }
        Ok(())
    }
}
