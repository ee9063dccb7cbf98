use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::entrance::EntranceStyle;
use crate::animation::timing::{SpringConfig, Timing};
use crate::foundation::core::{Canvas, Fps, LocalFrame};
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::VisualFrame;
use crate::scene::kinds::SceneKind;
use crate::scene::overlays::{GridPattern, ParticleField, Watermark};
use crate::theme::{Accent, Theme};
use crate::timeline::accumulator::{SequenceLayout, accumulate};
use crate::transition::kind::{Edge, TransitionKind};

/// One visual beat: a scene payload shown for a fixed number of frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    /// Nominal length in frames, must be > 0.
    pub duration_frames: u64,
    /// Entrance applied to the whole scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<EntranceStyle>,
    /// What to draw.
    pub content: SceneKind,
}

impl SceneSpec {
    /// Scene showing `content` for `duration_frames` frames.
    pub fn new(duration_frames: u64, content: SceneKind) -> Self {
        Self {
            duration_frames,
            entrance: None,
            content,
        }
    }

    /// Apply `entrance` to the whole scene.
    pub fn with_entrance(mut self, entrance: EntranceStyle) -> Self {
        self.entrance = Some(entrance);
        self
    }

    /// Reject zero-length scenes and invalid payloads.
    pub fn validate(&self) -> ExplainerResult<()> {
        if self.duration_frames == 0 {
            return Err(ExplainerError::validation(format!(
                "{} scene duration must be > 0 frames",
                self.content.name()
            )));
        }
        self.content.validate()
    }

    /// Draw the scene at `local`.
    ///
    /// Negative frames render like frame 0. The optional scene entrance runs over the
    /// theme's element-entry window, pivoting on the canvas center.
    pub fn render(&self, theme: &Theme, fps: Fps, canvas: Canvas, local: LocalFrame) -> VisualFrame {
        let ctx = SceneCtx::new(theme, fps, canvas);
        let local = LocalFrame(local.0.max(0));
        let frame = self.content.render(&ctx, local);
        let Some(entrance) = self.entrance else {
            return frame;
        };

        let fx = entrance.fx(ctx.entry(local, 0));
        let group = frame
            .into_group()
            .with_opacity(fx.opacity)
            .with_transform(fx.transform(canvas.center()))
            .with_blur(fx.blur_px);
        VisualFrame::with_layers(canvas, vec![group]).normalized()
    }
}

/// Overlap between two adjacent scenes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    /// Blend style.
    #[serde(default)]
    pub kind: TransitionKind,
    /// Overlap in frames; 0 is a hard cut.
    pub duration_frames: u64,
    /// Shape applied to linear window progress.
    #[serde(default)]
    pub timing: Timing,
}

impl TransitionSpec {
    /// Names accepted by [`TransitionSpec::preset`].
    pub const PRESETS: [&'static str; 7] = [
        "fade",
        "slide_left",
        "slide_right",
        "slide_up",
        "wipe_right",
        "clock_wipe",
        "spring_fade",
    ];

    /// Linear crossfade over `frames`.
    pub fn fade(frames: u64) -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration_frames: frames,
            timing: Timing::LINEAR,
        }
    }

    /// Linear slide over `frames`, entering from `from`.
    pub fn slide(from: Edge, frames: u64) -> Self {
        Self {
            kind: TransitionKind::Slide { from },
            ..Self::fade(frames)
        }
    }

    /// Hard cut.
    pub fn cut() -> Self {
        Self::fade(0)
    }

    /// Replace the timing.
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Named transition with its house duration.
    ///
    /// `slide_up` enters from the bottom edge; `wipe_right` reveals left to right.
    pub fn preset(name: &str) -> ExplainerResult<Self> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        let spec = match key.as_str() {
            "fade" => Self::fade(15),
            "slide_left" => Self::slide(Edge::Left, 20),
            "slide_right" => Self::slide(Edge::Right, 20),
            "slide_up" => Self::slide(Edge::Bottom, 20),
            "wipe_right" => Self {
                kind: TransitionKind::Wipe { from: Edge::Left },
                ..Self::fade(18)
            },
            "clock_wipe" => Self {
                kind: TransitionKind::ClockWipe,
                ..Self::fade(25)
            },
            "spring_fade" => Self::fade(25).with_timing(Timing::Spring(SpringConfig::SMOOTH)),
            _ => {
                return Err(ExplainerError::validation(format!(
                    "unknown transition preset '{name}' (expected one of: {})",
                    Self::PRESETS.join(", ")
                )));
            }
        };
        Ok(spec)
    }
}

/// Scenes joined by transitions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    /// Scenes in play order.
    pub scenes: Vec<SceneSpec>,
    /// One transition between each adjacent pair.
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
}

impl Sequence {
    fn durations(&self) -> (Vec<u64>, Vec<u64>) {
        (
            self.scenes.iter().map(|s| s.duration_frames).collect(),
            self.transitions.iter().map(|t| t.duration_frames).collect(),
        )
    }

    /// Scene placement.
    pub fn layout(&self) -> ExplainerResult<SequenceLayout> {
        let (scenes, transitions) = self.durations();
        accumulate(&scenes, &transitions)
    }

    /// Playable length in frames.
    pub fn total_frames(&self) -> ExplainerResult<u64> {
        Ok(self.layout()?.total)
    }

    /// Validate every scene and transition, then the layout.
    ///
    /// A transition longer than either neighbouring scene is allowed but logged, as is a
    /// scene starting before its predecessor.
    pub fn validate(&self) -> ExplainerResult<()> {
        for (i, scene) in self.scenes.iter().enumerate() {
            scene.validate().map_err(|e| prefix(e, &format!("scene {i}")))?;
        }
        for (j, t) in self.transitions.iter().enumerate() {
            t.timing
                .validate()
                .map_err(|e| prefix(e, &format!("transition {j}")))?;
        }
        let layout = self.layout()?;
        for (j, &t) in layout.overlaps.iter().enumerate() {
            let shorter = layout.durations[j].min(layout.durations[j + 1]);
            if t > shorter {
                tracing::warn!(
                    transition = j,
                    transition_frames = t,
                    scene_frames = shorter,
                    "transition is longer than an adjacent scene"
                );
            }
        }
        for i in layout.reordered_starts() {
            tracing::warn!(
                scene = i,
                start = layout.starts[i],
                previous_start = layout.starts[i - 1],
                "scene starts before the scene it follows"
            );
        }
        Ok(())
    }
}

/// A named sequence: one chapter of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Chapter title.
    pub title: String,
    /// Progress bar color while this section plays.
    #[serde(default)]
    pub accent: Accent,
    /// Scenes and transitions.
    #[serde(flatten)]
    pub sequence: Sequence,
}

impl Section {
    /// Validate the title and the owned sequence.
    pub fn validate(&self) -> ExplainerResult<()> {
        if self.title.trim().is_empty() {
            return Err(ExplainerError::validation("section title must be non-empty"));
        }
        self.sequence
            .validate()
            .map_err(|e| prefix(e, &format!("section '{}'", self.title)))
    }
}

fn default_gradient_angle() -> f64 {
    135.0
}

fn default_true() -> bool {
    true
}

/// Composition-wide layers drawn around the scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Overlays {
    /// Fill the canvas with the theme background gradient.
    pub background: bool,
    /// Gradient direction, CSS degrees.
    #[serde(default = "default_gradient_angle")]
    pub gradient_angle_deg: f64,
    /// Sweep the gradient 30 degrees over the first 300 frames.
    pub animate_gradient: bool,
    /// Repeating pattern over the background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridPattern>,
    /// Drifting particles over the background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles: Option<ParticleField>,
    /// Section progress bar along the bottom edge.
    #[serde(default = "default_true")]
    pub progress_bar: bool,
    /// Corner watermark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<Watermark>,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            background: true,
            gradient_angle_deg: default_gradient_angle(),
            animate_gradient: false,
            grid: None,
            particles: None,
            progress_bar: true,
            watermark: None,
        }
    }
}

impl Overlays {
    fn validate(&self) -> ExplainerResult<()> {
        if !self.gradient_angle_deg.is_finite() {
            return Err(ExplainerError::validation(
                "overlays.gradient_angle_deg must be finite",
            ));
        }
        if let Some(g) = &self.grid
            && (!g.spacing.is_finite()
                || g.spacing <= 0.0
                || !g.size.is_finite()
                || g.size < 0.0
                || !(0.0..=1.0).contains(&g.opacity))
        {
            return Err(ExplainerError::validation(
                "overlays.grid needs spacing > 0, size >= 0 and opacity in [0, 1]",
            ));
        }
        if let Some(p) = &self.particles
            && [p.speed, p.opacity, p.min_size, p.max_size]
                .iter()
                .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ExplainerError::validation(
                "overlays.particles values must be finite and >= 0",
            ));
        }
        if let Some(w) = &self.watermark
            && !(0.0..=1.0).contains(&w.opacity)
        {
            return Err(ExplainerError::validation(
                "overlays.watermark.opacity must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

fn default_fps() -> Fps {
    Fps { num: 30, den: 1 }
}

fn default_canvas() -> Canvas {
    Canvas::FULL_HD
}

/// Root timeline: sections played back to back.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Registration id.
    pub id: String,
    /// Playback rate.
    #[serde(default = "default_fps")]
    pub fps: Fps,
    /// Output size.
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    /// Chapters in play order.
    pub sections: Vec<Section>,
    /// Hand-declared total, checked against the accumulated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_frames: Option<u64>,
    /// Background, particles, progress bar and watermark.
    #[serde(default)]
    pub overlays: Overlays,
}

impl Composition {
    /// Placement of the sections on the root timeline (no overlaps between sections).
    pub fn section_layout(&self) -> ExplainerResult<SequenceLayout> {
        let totals = self
            .sections
            .iter()
            .map(|s| s.sequence.total_frames())
            .collect::<ExplainerResult<Vec<_>>>()?;
        let joins = vec![0; totals.len().saturating_sub(1)];
        accumulate(&totals, &joins)
            .map_err(|e| prefix(e, &format!("composition '{}'", self.id)))
    }

    /// Total length in frames: the sum of section totals.
    pub fn total_frames(&self) -> ExplainerResult<u64> {
        Ok(self.section_layout()?.total)
    }

    /// Validate everything, including `declared_frames` against the accumulator.
    pub fn validate(&self) -> ExplainerResult<()> {
        if self.id.trim().is_empty() {
            return Err(ExplainerError::validation("composition id must be non-empty"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ExplainerError::validation(
                "composition canvas width/height must be > 0",
            ));
        }
        if self.sections.is_empty() {
            return Err(ExplainerError::validation(
                "composition must contain at least one section",
            ));
        }
        for section in &self.sections {
            section.validate()?;
        }
        self.overlays.validate()?;

        let computed = self.total_frames()?;
        if let Some(declared) = self.declared_frames
            && declared != computed
        {
            return Err(ExplainerError::DeclaredDurationMismatch {
                id: self.id.clone(),
                declared,
                computed,
            });
        }
        Ok(())
    }

    /// Parse and validate a composition from JSON text.
    pub fn from_json_str(s: &str) -> ExplainerResult<Self> {
        let comp: Self = serde_json::from_str(s)
            .map_err(|e| ExplainerError::serde(format!("parse composition JSON: {e}")))?;
        comp.validate()?;
        Ok(comp)
    }

    /// Parse and validate a composition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ExplainerResult<Self> {
        let comp: Self = serde_json::from_reader(r)
            .map_err(|e| ExplainerError::serde(format!("parse composition JSON: {e}")))?;
        comp.validate()?;
        Ok(comp)
    }

    /// Parse and validate a composition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ExplainerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ExplainerError::validation(format!("open composition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON, the same shape [`Composition::from_json_str`] reads.
    pub fn to_json_pretty(&self) -> ExplainerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExplainerError::serde(format!("serialize composition JSON: {e}")))
    }
}

fn prefix(err: ExplainerError, at: &str) -> ExplainerError {
    match err {
        ExplainerError::Validation(msg) => ExplainerError::validation(format!("{at}: {msg}")),
        ExplainerError::Animation(msg) => ExplainerError::animation(format!("{at}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
