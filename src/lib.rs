//! Explainer is a declarative engine for themed, frame-exact explainer videos.
//!
//! A video is a [`Composition`]: sections played back to back, each a sequence of
//! scenes joined by overlapping transitions. Every duration is derived by the
//! [`timeline::accumulator`], never declared by hand. The public API is
//! timeline-oriented:
//!
//! - Build a [`Composition`] with the [`timeline::dsl`] builders or load it from JSON
//! - Create a [`Timeline`], which validates and lays out every section
//! - Render single frames or whole ranges into [`VisualFrame`] display lists
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing, interpolation, springs and entrance effects.
pub mod animation;
/// Frames, colors, geometry and errors.
pub mod foundation;
/// Built-in compositions.
pub mod presets;
/// Named composition lookup.
pub mod registry;
/// Frame resolution, overlays and range rendering.
pub mod render;
/// Scene kinds and the display list they produce.
pub mod scene;
/// Palette and design tokens.
pub mod theme;
/// Durations, sequences, sections and compositions.
pub mod timeline;
/// Transition kinds and frame compositing.
pub mod transition;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, LocalFrame, Point, Rect, Transform2D, Vec2,
};
pub use crate::foundation::error::{ExplainerError, ExplainerResult};

pub use crate::presets::builtin_registry;
pub use crate::registry::{CompositionInfo, Registry};
pub use crate::render::{FrameFingerprint, RenderThreading, ResolvedFrame, Timeline, fingerprint_frame};
pub use crate::scene::{SceneKind, VisualFrame};
pub use crate::theme::{Accent, Theme};
pub use crate::timeline::{
    Composition, CompositionBuilder, SceneSpec, Section, SectionBuilder, Sequence,
    SequenceBuilder, TransitionSpec,
};
pub use crate::transition::TransitionKind;
