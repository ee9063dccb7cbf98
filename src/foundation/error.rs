/// Convenience result type used across the crate.
pub type ExplainerResult<T> = Result<T, ExplainerError>;

/// Error taxonomy for composition construction.
///
/// Every variant is raised while a composition is being declared or validated. Frame
/// rendering itself has no error path.
#[derive(thiserror::Error, Debug)]
pub enum ExplainerError {
    /// Invalid user-provided or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters (spring constants, windows).
    #[error("animation error: {0}")]
    Animation(String),

    /// Transition overlaps consume more frames than the scenes provide.
    #[error(
        "duration underflow: transitions overlap {transition_frames} frames but scenes only provide {scene_frames}"
    )]
    DurationUnderflow {
        /// Scene frames available up to the failing point.
        scene_frames: u64,
        /// Transition frames consumed up to the failing point.
        transition_frames: u64,
    },

    /// A sequence must have exactly one transition between each pair of scenes.
    #[error(
        "transition count mismatch: {scenes} scenes need {} transitions, got {transitions}",
        expected_transitions(.scenes)
    )]
    TransitionCountMismatch {
        /// Number of scenes in the sequence.
        scenes: usize,
        /// Number of transitions supplied.
        transitions: usize,
    },

    /// A hand-declared total disagrees with the accumulated timeline.
    #[error(
        "declared duration mismatch for '{id}': declared {declared} frames, timeline computes {computed}"
    )]
    DeclaredDurationMismatch {
        /// Composition id.
        id: String,
        /// Declared total.
        declared: u64,
        /// Accumulated total.
        computed: u64,
    },

    /// Errors when serializing or deserializing declarations.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExplainerError {
    /// Build an [`ExplainerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ExplainerError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`ExplainerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for [`ExplainerError::DurationUnderflow`].
    pub fn is_duration_underflow(&self) -> bool {
        matches!(self, Self::DurationUnderflow { .. })
    }
}

fn expected_transitions(scenes: &usize) -> usize {
    scenes.saturating_sub(1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
