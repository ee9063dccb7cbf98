use rayon::prelude::*;

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, LocalFrame};
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::VisualFrame;
use crate::scene::overlays::{ProgressBar, background, gradient_angle};
use crate::theme::Theme;
use crate::timeline::accumulator::{ActiveScene, SequenceLayout};
use crate::timeline::model::Composition;
use crate::transition::compositor::composite;

/// Where a global frame lands: which section, and which scenes inside it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedFrame {
    /// Requested frame after clamping to the composition.
    pub frame: FrameIndex,
    /// Section index.
    pub section: usize,
    /// Frame relative to the section start.
    pub section_local: LocalFrame,
    /// Visible scenes, bottom-most first; later entries carry transition progress.
    pub scenes: Vec<ActiveScene>,
}

impl ResolvedFrame {
    /// `true` while two or more scenes are blending.
    pub fn in_transition(&self) -> bool {
        self.scenes.len() > 1
    }
}

/// Validated composition with every layout precomputed.
///
/// Construction does all checking; rendering a frame cannot fail.
#[derive(Clone, Debug)]
pub struct Timeline {
    comp: Composition,
    sections: SequenceLayout,
    layouts: Vec<SequenceLayout>,
}

impl Timeline {
    /// Validate `comp` and lay out its sections.
    #[tracing::instrument(skip(comp), fields(id = %comp.id))]
    pub fn new(comp: &Composition) -> ExplainerResult<Self> {
        comp.validate()?;
        let layouts = comp
            .sections
            .iter()
            .map(|s| s.sequence.layout())
            .collect::<ExplainerResult<Vec<_>>>()?;
        let sections = comp.section_layout()?;
        tracing::debug!(
            total_frames = sections.total,
            sections = layouts.len(),
            "timeline laid out"
        );
        Ok(Self {
            comp: comp.clone(),
            sections,
            layouts,
        })
    }

    /// Source composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// Total frames.
    pub fn total_frames(&self) -> u64 {
        self.sections.total
    }

    /// Playback rate.
    pub fn fps(&self) -> Fps {
        self.comp.fps
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.comp.canvas
    }

    /// Placement of sections on the root timeline.
    pub fn section_layout(&self) -> &SequenceLayout {
        &self.sections
    }

    /// Scene placement inside section `i`.
    pub fn layout(&self, i: usize) -> Option<&SequenceLayout> {
        self.layouts.get(i)
    }

    /// Locate `frame`; frames past the end clamp to the last frame.
    pub fn resolve(&self, frame: FrameIndex) -> ResolvedFrame {
        let last = self.total_frames().saturating_sub(1);
        let f = frame.0.min(last);
        let global = i64::try_from(f).unwrap_or(i64::MAX);

        // Sections never overlap, so exactly one is active.
        let (section, section_local) = self
            .sections
            .active_at(global)
            .first()
            .map(|a| (a.index, a.local))
            .unwrap_or((0, LocalFrame(0)));
        let scenes = self
            .layouts
            .get(section)
            .map(|l| l.active_at(section_local.0))
            .unwrap_or_default();

        ResolvedFrame {
            frame: FrameIndex(f),
            section,
            section_local,
            scenes,
        }
    }

    /// Scene content at `frame`, transitions applied, without overlays.
    pub fn render_scenes(&self, theme: &Theme, frame: FrameIndex) -> VisualFrame {
        let resolved = self.resolve(frame);
        self.compose_scenes(theme, &resolved)
    }

    fn compose_scenes(&self, theme: &Theme, resolved: &ResolvedFrame) -> VisualFrame {
        let canvas = self.canvas();
        let Some(section) = self.comp.sections.get(resolved.section) else {
            return VisualFrame::empty(canvas);
        };
        let seq = &section.sequence;

        let mut acc: Option<VisualFrame> = None;
        for active in &resolved.scenes {
            let Some(spec) = seq.scenes.get(active.index) else {
                continue;
            };
            let rendered = spec.render(theme, self.fps(), canvas, active.local);
            acc = Some(match (acc, active.blend_in) {
                (Some(below), Some(p)) => match seq.transitions.get(active.index - 1) {
                    Some(t) => composite(&below, &rendered, t.timing.sample(p), t.kind, canvas),
                    None => rendered,
                },
                _ => rendered,
            });
        }
        acc.unwrap_or_else(|| VisualFrame::empty(canvas))
    }

    /// Full frame: background, grid, particles, scenes, progress bar and watermark.
    pub fn render_frame(&self, theme: &Theme, frame: FrameIndex) -> VisualFrame {
        let resolved = self.resolve(frame);
        let canvas = self.canvas();
        let overlays = &self.comp.overlays;
        let palette = &theme.palette;
        let global = LocalFrame(i64::try_from(resolved.frame.0).unwrap_or(i64::MAX));

        let mut layers = Vec::new();
        if overlays.background {
            let angle = gradient_angle(
                overlays.gradient_angle_deg,
                overlays.animate_gradient,
                global.0,
            );
            layers.push(background(canvas, palette.bg, palette.bg_light, angle));
        }
        if let Some(grid) = &overlays.grid {
            layers.push(grid.layer(canvas, global.0, palette.text));
        }
        if let Some(field) = &overlays.particles {
            layers.push(field.layer(canvas, global.0, palette.text));
        }

        layers.extend(self.compose_scenes(theme, &resolved).layers);

        let ctx = SceneCtx::new(theme, self.fps(), canvas);
        if overlays.progress_bar
            && let Some(section) = self.comp.sections.get(resolved.section)
        {
            let bar = ProgressBar {
                total: u32::try_from(self.comp.sections.len()).unwrap_or(u32::MAX),
                current: u32::try_from(resolved.section + 1).unwrap_or(u32::MAX),
                active: theme.accent(section.accent),
            };
            layers.push(bar.layer(&ctx, resolved.section_local));
        }
        if let Some(watermark) = &overlays.watermark {
            layers.push(watermark.layer(&ctx, global));
        }

        VisualFrame::with_layers(canvas, layers).normalized()
    }

    /// Render every frame of `range`, in order.
    ///
    /// Parallel output is identical to serial output.
    #[tracing::instrument(skip(self, theme, threading), fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &self,
        theme: &Theme,
        range: FrameRange,
        threading: &RenderThreading,
    ) -> ExplainerResult<Vec<VisualFrame>> {
        if range.is_empty() {
            return Err(ExplainerError::validation("render range must be non-empty"));
        }

        let len = range.len_frames();
        let mut out = Vec::with_capacity(len.min(4096) as usize);
        if !threading.parallel {
            for f in range.start.0..range.end.0 {
                out.push(self.render_frame(theme, FrameIndex(f)));
            }
            return Ok(out);
        }

        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
            let mut frames = pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| self.render_frame(theme, FrameIndex(f)))
                    .collect::<Vec<_>>()
            });
            tracing::debug!(chunk_start, chunk_end, "rendered chunk");
            out.append(&mut frames);
            chunk_start = chunk_end;
        }
        Ok(out)
    }
}

/// Threading options for [`Timeline::render_range`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// Evaluate frames on a rayon pool.
    pub parallel: bool,
    /// Frames per parallel batch; 0 is treated as 1.
    pub chunk_size: usize,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> ExplainerResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ExplainerError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ExplainerError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 { 1 } else { chunk_size as u64 }
}

#[cfg(test)]
#[path = "../../tests/unit/render/timeline.rs"]
mod tests;
