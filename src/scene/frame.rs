use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Rect, Transform2D};

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Origin is the left edge.
    #[default]
    Start,
    /// Origin is the horizontal center.
    Center,
    /// Origin is the right edge.
    End,
}

/// Fill for rectangles.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Single color.
    Solid(Rgba8),
    /// Two-stop linear gradient between `start` and `end` points.
    Linear {
        /// Gradient start point.
        start: Point,
        /// Gradient end point.
        end: Point,
        /// Color at `start`.
        from: Rgba8,
        /// Color at `end`.
        to: Rgba8,
    },
}

/// Stroke style for outlines and lines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
}

/// A run of text. Fonts are opaque family names resolved by the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextRun {
    /// Visible text.
    pub text: String,
    /// Baseline anchor point.
    pub origin: Point,
    /// Font family.
    pub font: String,
    /// Size in pixels.
    pub size: f64,
    /// CSS-style weight (400 regular, 700 bold, 800 extra bold).
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// Anchoring relative to `origin`.
    pub align: TextAlign,
    /// Wrap width, if the host should wrap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

/// Drawable payload of a [`Layer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerContent {
    /// Filled, optionally rounded and outlined rectangle.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Fill.
        fill: Paint,
        /// Corner radius.
        radius: f64,
        /// Optional outline.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Text run.
    Text(TextRun),
    /// Straight line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke.
        stroke: Stroke,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        fill: Rgba8,
    },
    /// Nested layers sharing this layer's opacity, transform, blur and clip.
    Group {
        /// Children, bottom-most first.
        children: Vec<Layer>,
    },
}

/// Region outside which a layer is invisible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Clip {
    /// Axis-aligned rectangle.
    Rect {
        /// Visible region.
        rect: Rect,
    },
    /// Circular sector swept clockwise from twelve o'clock.
    Sweep {
        /// Pivot point.
        center: Point,
        /// Swept angle in degrees, `[0, 360]`.
        sweep_deg: f64,
    },
}

/// One node of the display list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Local transform.
    pub transform: Transform2D,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Optional clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<Clip>,
    /// What to draw.
    pub content: LayerContent,
}

impl Layer {
    /// Fully opaque, untransformed layer.
    pub fn new(content: LayerContent) -> Self {
        Self {
            opacity: 1.0,
            transform: Transform2D::default(),
            blur_px: 0.0,
            clip: None,
            content,
        }
    }

    /// Group of `children`.
    pub fn group(children: Vec<Layer>) -> Self {
        Self::new(LayerContent::Group { children })
    }

    /// Solid rounded rectangle.
    pub fn rect(rect: Rect, fill: Rgba8, radius: f64) -> Self {
        Self::new(LayerContent::Rect {
            rect,
            fill: Paint::Solid(fill),
            radius,
            stroke: None,
        })
    }

    /// Text run.
    pub fn text(run: TextRun) -> Self {
        Self::new(LayerContent::Text(run))
    }

    /// Line segment.
    pub fn line(from: Point, to: Point, color: Rgba8, width: f64) -> Self {
        Self::new(LayerContent::Line {
            from,
            to,
            stroke: Stroke { color, width },
        })
    }

    /// Filled circle.
    pub fn circle(center: Point, radius: f64, fill: Rgba8) -> Self {
        Self::new(LayerContent::Circle {
            center,
            radius,
            fill,
        })
    }

    /// Multiply opacity by `opacity` (clamped, NaN as 0).
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        let o = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.opacity *= o;
        self
    }

    /// Replace the transform.
    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// Set blur radius; negative or non-finite values disable blur.
    pub fn with_blur(mut self, blur_px: f64) -> Self {
        self.blur_px = if blur_px.is_finite() {
            blur_px.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Set the clip.
    pub fn with_clip(mut self, clip: Clip) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Outline a rectangle layer; other content is unchanged.
    pub fn with_stroke(mut self, color: Rgba8, width: f64) -> Self {
        if let LayerContent::Rect { stroke, .. } = &mut self.content {
            *stroke = Some(Stroke { color, width });
        }
        self
    }

    fn has_no_effect(&self) -> bool {
        self.opacity >= 1.0 && self.transform.is_identity() && self.blur_px == 0.0 && self.clip.is_none()
    }

    fn is_invisible(&self) -> bool {
        if self.opacity <= 0.0 {
            return true;
        }
        match &self.content {
            LayerContent::Group { children } => children.is_empty(),
            LayerContent::Text(run) => run.text.is_empty(),
            _ => false,
        }
    }
}

/// Display list for one frame: what to draw, bottom-most layer first.
///
/// Frames are plain data so hosts can rasterize them however they like and so that two
/// renders can be compared for equality.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualFrame {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Layers, bottom-most first.
    pub layers: Vec<Layer>,
}

impl VisualFrame {
    /// Empty frame for `canvas`.
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            layers: Vec::new(),
        }
    }

    /// Frame with the given layers.
    pub fn with_layers(canvas: Canvas, layers: Vec<Layer>) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            layers,
        }
    }

    /// Canvas this frame was rendered for.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Wrap every layer in one group layer.
    pub fn into_group(self) -> Layer {
        Layer::group(self.layers)
    }

    /// Canonical form: invisible layers removed, effect-free groups flattened.
    ///
    /// Two frames that draw the same thing normalize to equal values.
    pub fn normalized(self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            layers: normalize_layers(self.layers),
        }
    }
}

fn normalize_layers(layers: Vec<Layer>) -> Vec<Layer> {
    let mut out = Vec::with_capacity(layers.len());
    for mut layer in layers {
        if let LayerContent::Group { children } = layer.content {
            let children = normalize_layers(children);
            layer.content = LayerContent::Group { children };
        }
        if layer.is_invisible() {
            continue;
        }
        if layer.has_no_effect()
            && let LayerContent::Group { children } = layer.content
        {
            out.extend(children);
            continue;
        }
        out.push(layer);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
