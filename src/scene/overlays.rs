//! Composition-level layers drawn around the scenes: background, grid, particles,
//! section progress and watermark.

use crate::animation::interp::{Extrapolate, interpolate};
use crate::foundation::color::Rgba8;
use crate::foundation::core::{
    Canvas, LocalFrame, Point, Rect, Transform2D, Vec2, stable_hash64, unit_from_hash,
};
use crate::scene::components::{FontRole, text_run};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Clip, Layer, LayerContent, Paint, TextAlign};

/// Diagonal two-color gradient covering the canvas.
///
/// `angle_deg` follows the CSS convention: 90 runs left to right, 180 top to bottom.
pub fn background(canvas: Canvas, from: Rgba8, to: Rgba8, angle_deg: f64) -> Layer {
    let rect = canvas.rect();
    let c = rect.center();
    let a = angle_deg.to_radians();
    let (dx, dy) = (a.sin(), -a.cos());
    let half = (rect.width() * dx.abs() + rect.height() * dy.abs()) / 2.0;
    Layer::new(LayerContent::Rect {
        rect,
        fill: Paint::Linear {
            start: Point::new(c.x - dx * half, c.y - dy * half),
            end: Point::new(c.x + dx * half, c.y + dy * half),
            from,
            to,
        },
        radius: 0.0,
        stroke: None,
    })
}

/// Gradient angle at `frame`: fixed, or sweeping 30 degrees past `base` over the first
/// 300 frames when `animated`.
pub fn gradient_angle(base: f64, animated: bool, frame: i64) -> f64 {
    if !animated {
        return base;
    }
    interpolate(frame as f64, [0.0, 300.0], [base, base + 30.0], Extrapolate::Clamp)
}

/// Shape repeated by a [`GridPattern`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridVariant {
    /// A dot per cell.
    #[default]
    Dots,
    /// Cell borders.
    Lines,
    /// A small plus per cell.
    Crosses,
}

/// Faint repeating pattern over the background, optionally drifting diagonally.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridPattern {
    /// Cell shape.
    pub variant: GridVariant,
    /// Cell edge in pixels.
    pub spacing: f64,
    /// Dot radius; line width is half of it.
    pub size: f64,
    /// Whole-pattern opacity.
    pub opacity: f64,
    /// Drift 0.3 px per frame toward the bottom right.
    pub animated: bool,
}

impl Default for GridPattern {
    fn default() -> Self {
        Self {
            variant: GridVariant::Dots,
            spacing: 60.0,
            size: 2.0,
            opacity: 0.08,
            animated: false,
        }
    }
}

impl GridPattern {
    /// Pattern offset at `frame`, always in `[0, spacing)`.
    pub fn offset(&self, frame: i64) -> f64 {
        if !self.animated || self.spacing <= 0.0 {
            return 0.0;
        }
        (frame as f64 * 0.3).rem_euclid(self.spacing)
    }

    /// Evaluate at `frame` over `canvas` in `color`.
    pub fn layer(&self, canvas: Canvas, frame: i64, color: Rgba8) -> Layer {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Layer::group(Vec::new());
        }
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let s = self.spacing;
        let shift = self.offset(frame) - s;
        let cols = (w / s).ceil() as i64 + 2;
        let rows = (h / s).ceil() as i64 + 2;
        let stroke = self.size * 0.5;

        let mut cells = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let x = shift + col as f64 * s;
                let y = shift + row as f64 * s;
                let half = s / 2.0;
                match self.variant {
                    GridVariant::Dots => {
                        cells.push(Layer::circle(Point::new(x + half, y + half), self.size, color));
                    }
                    GridVariant::Lines => {
                        let corner = Point::new(x, y);
                        cells.push(Layer::line(corner, Point::new(x + s, y), color, stroke));
                        cells.push(Layer::line(corner, Point::new(x, y + s), color, stroke));
                    }
                    GridVariant::Crosses => {
                        let arm = self.size * 3.0;
                        let c = Point::new(x + half, y + half);
                        cells.push(Layer::line(
                            Point::new(c.x - arm, c.y),
                            Point::new(c.x + arm, c.y),
                            color,
                            stroke,
                        ));
                        cells.push(Layer::line(
                            Point::new(c.x, c.y - arm),
                            Point::new(c.x, c.y + arm),
                            color,
                            stroke,
                        ));
                    }
                }
            }
        }
        Layer::group(cells)
            .with_opacity(self.opacity)
            .with_clip(Clip::Rect { rect: canvas.rect() })
    }
}

/// Drift direction of a particle field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drift {
    /// Particles rise.
    #[default]
    Up,
    /// Particles fall.
    Down,
    /// Particles move left.
    Left,
    /// Particles move right.
    Right,
}

/// Slowly drifting dots placed by a seeded hash, so every frame is reproducible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleField {
    /// Number of particles.
    pub count: u32,
    /// Pixels per frame at full speed.
    pub speed: f64,
    /// Peak opacity.
    pub opacity: f64,
    /// Smallest diameter.
    pub min_size: f64,
    /// Largest diameter.
    pub max_size: f64,
    /// Drift direction.
    pub drift: Drift,
    /// Placement seed.
    pub seed: u64,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self {
            count: 30,
            speed: 0.5,
            opacity: 0.15,
            min_size: 2.0,
            max_size: 6.0,
            drift: Drift::Up,
            seed: 0,
        }
    }
}

impl ParticleField {
    fn rand(&self, i: u32, slot: u32) -> f64 {
        unit_from_hash(stable_hash64(self.seed, &format!("particle/{i}/{slot}")))
    }

    /// Evaluate at `frame` over `canvas` in `color`.
    pub fn layer(&self, canvas: Canvas, frame: i64, color: Rgba8) -> Layer {
        let w = f64::from(canvas.width).max(1.0);
        let h = f64::from(canvas.height).max(1.0);
        let t = frame as f64;

        let dots = (0..self.count)
            .map(|i| {
                let (r1, r2, r3, r4) = (
                    self.rand(i, 0),
                    self.rand(i, 1),
                    self.rand(i, 2),
                    self.rand(i, 3),
                );
                let size = self.min_size + r3 * (self.max_size - self.min_size);
                let (base_x, base_y) = (r1 * w, r2 * h);
                let travel = t * self.speed * (0.5 + r4 * 0.5);
                let sway = (t * 0.02 + f64::from(i)).sin() * 20.0;
                let (x, y) = match self.drift {
                    Drift::Up => (base_x + sway, (base_y - travel).rem_euclid(h)),
                    Drift::Down => (base_x + sway, (base_y + travel).rem_euclid(h)),
                    Drift::Left => ((base_x - travel).rem_euclid(w), base_y + sway),
                    Drift::Right => ((base_x + travel).rem_euclid(w), base_y + sway),
                };
                Layer::circle(Point::new(x, y), size / 2.0, color)
                    .with_opacity(self.opacity * (0.3 + r4 * 0.7))
            })
            .collect();
        Layer::group(dots)
    }
}

/// Segmented bar at the bottom showing how many sections have been reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBar {
    /// Number of sections.
    pub total: u32,
    /// 1-based current section.
    pub current: u32,
    /// Color of reached segments.
    pub active: Rgba8,
}

impl ProgressBar {
    /// Evaluate at section-local `local`.
    pub fn layer(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Layer {
        let palette = &ctx.theme.palette;
        let total = self.total.max(1);
        let (left, right) = (80.0, ctx.width() - 80.0);
        let y = ctx.height() - 40.0 - 6.0;
        let gap = 12.0;
        let seg_w = ((right - left) - gap * f64::from(total - 1)) / f64::from(total);

        let mut children = Vec::with_capacity(total as usize + 1);
        for i in 0..total {
            let x0 = left + f64::from(i) * (seg_w + gap);
            let reached = i < self.current;
            let fill = if reached { self.active } else { palette.border };
            let pop = ctx.entry_with(local, i64::from(i) * 3, ctx.theme.timing.snappy).max(0.0);
            children.push(
                Layer::rect(Rect::new(x0, y, x0 + seg_w, y + 6.0), fill, 3.0).with_transform(
                    Transform2D {
                        scale: Vec2::new(pop, 1.0),
                        anchor: Vec2::new(x0, y + 3.0),
                        ..Transform2D::default()
                    },
                ),
            );
            if i + 1 == self.current {
                children.push(Layer::text(text_run(
                    ctx,
                    FontRole::Heading,
                    format!("{}/{}", self.current, total),
                    Point::new(x0 + seg_w / 2.0, y - 10.0),
                    14.0,
                    400,
                    palette.muted,
                    TextAlign::Center,
                )));
            }
        }

        Layer::group(children).with_opacity(ctx.entry(local, 0))
    }
}

/// Corner label fading in after `delay` frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Watermark {
    /// Label, shown uppercase.
    pub text: String,
    /// Final opacity.
    pub opacity: f64,
    /// Frames before fading in.
    pub delay: i64,
}

impl Default for Watermark {
    fn default() -> Self {
        Self {
            text: "medevsmaker".to_owned(),
            opacity: 0.35,
            delay: 30,
        }
    }
}

impl Watermark {
    /// Evaluate at global frame `frame`, anchored to the top-right corner.
    pub fn layer(&self, ctx: &SceneCtx<'_>, frame: LocalFrame) -> Layer {
        Layer::text(text_run(
            ctx,
            FontRole::Heading,
            self.text.to_uppercase(),
            Point::new(ctx.width() - 32.0, 24.0 + 20.0),
            20.0,
            600,
            Rgba8::WHITE,
            TextAlign::End,
        ))
        .with_opacity(self.opacity * ctx.entry(frame, self.delay))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/overlays.rs"]
mod tests;
