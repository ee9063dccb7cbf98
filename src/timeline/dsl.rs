use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::overlays::{ParticleField, Watermark};
use crate::theme::Accent;
use crate::timeline::model::{Composition, Overlays, SceneSpec, Section, Sequence, TransitionSpec};

/// Builder for [`Sequence`] values.
///
/// Scenes are appended in play order. Between two scenes the pending transition set by
/// [`SequenceBuilder::transition`] is used, or the default transition when none is
/// pending.
pub struct SequenceBuilder {
    scenes: Vec<SceneSpec>,
    transitions: Vec<TransitionSpec>,
    default_transition: TransitionSpec,
    pending: Option<TransitionSpec>,
    error: Option<ExplainerError>,
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuilder {
    /// Empty sequence joining scenes with 15-frame fades.
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            transitions: Vec::new(),
            default_transition: TransitionSpec::fade(15),
            pending: None,
            error: None,
        }
    }

    /// Transition used when none is pending.
    pub fn default_transition(mut self, transition: TransitionSpec) -> Self {
        self.default_transition = transition;
        self
    }

    /// Transition between the last scene and the next one.
    pub fn transition(mut self, transition: TransitionSpec) -> Self {
        if self.scenes.is_empty() {
            self.error.get_or_insert_with(|| {
                ExplainerError::validation("transition declared before the first scene")
            });
        } else if self.pending.replace(transition).is_some() {
            self.error.get_or_insert_with(|| {
                ExplainerError::validation(format!(
                    "two transitions declared after scene {}",
                    self.scenes.len() - 1
                ))
            });
        }
        self
    }

    /// Append a scene.
    pub fn scene(mut self, scene: SceneSpec) -> Self {
        if !self.scenes.is_empty() {
            let t = self.pending.take().unwrap_or(self.default_transition);
            self.transitions.push(t);
        }
        self.scenes.push(scene);
        self
    }

    /// Build and validate the sequence.
    pub fn build(self) -> ExplainerResult<Sequence> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.pending.is_some() {
            return Err(ExplainerError::validation(
                "transition declared after the last scene",
            ));
        }
        let seq = Sequence {
            scenes: self.scenes,
            transitions: self.transitions,
        };
        seq.validate()?;
        Ok(seq)
    }
}

/// Builder for [`Section`] values.
pub struct SectionBuilder {
    title: String,
    accent: Accent,
    sequence: SequenceBuilder,
}

impl SectionBuilder {
    /// Section titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            accent: Accent::default(),
            sequence: SequenceBuilder::new(),
        }
    }

    /// Progress bar color for this section.
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    /// See [`SequenceBuilder::default_transition`].
    pub fn default_transition(mut self, transition: TransitionSpec) -> Self {
        self.sequence = self.sequence.default_transition(transition);
        self
    }

    /// See [`SequenceBuilder::transition`].
    pub fn transition(mut self, transition: TransitionSpec) -> Self {
        self.sequence = self.sequence.transition(transition);
        self
    }

    /// See [`SequenceBuilder::scene`].
    pub fn scene(mut self, scene: SceneSpec) -> Self {
        self.sequence = self.sequence.scene(scene);
        self
    }

    /// Build and validate the section.
    pub fn build(self) -> ExplainerResult<Section> {
        let section = Section {
            title: self.title,
            accent: self.accent,
            sequence: self.sequence.build()?,
        };
        section.validate()?;
        Ok(section)
    }
}

/// Builder for [`Composition`] values.
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    sections: Vec<Section>,
    declared_frames: Option<u64>,
    overlays: Overlays,
}

impl CompositionBuilder {
    /// Composition registered as `id`.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            sections: Vec::new(),
            declared_frames: None,
            overlays: Overlays::default(),
        }
    }

    /// Append a section.
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Expected total; [`CompositionBuilder::build`] fails if the timeline disagrees.
    pub fn declared_frames(mut self, frames: u64) -> Self {
        self.declared_frames = Some(frames);
        self
    }

    /// Toggle the background gradient.
    pub fn background(mut self, on: bool) -> Self {
        self.overlays.background = on;
        self
    }

    /// Draw drifting particles.
    pub fn particles(mut self, field: ParticleField) -> Self {
        self.overlays.particles = Some(field);
        self
    }

    /// Toggle the section progress bar.
    pub fn progress_bar(mut self, on: bool) -> Self {
        self.overlays.progress_bar = on;
        self
    }

    /// Draw a corner watermark.
    pub fn watermark(mut self, watermark: Watermark) -> Self {
        self.overlays.watermark = Some(watermark);
        self
    }

    /// Build and validate final [`Composition`].
    pub fn build(self) -> ExplainerResult<Composition> {
        let comp = Composition {
            id: self.id,
            fps: self.fps,
            canvas: self.canvas,
            sections: self.sections,
            declared_frames: self.declared_frames,
            overlays: self.overlays,
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
