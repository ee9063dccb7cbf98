//! Frame bookkeeping for scenes, sequences, sections and compositions.
//!
//! [`accumulator`] is the single source of truth for durations: every total in the crate
//! is derived from it, never declared by hand.

/// Duration accumulation and scene placement.
pub mod accumulator;
/// Fluent builders.
pub mod dsl;
/// Declarative composition model.
pub mod model;

pub use accumulator::{ActiveScene, SequenceLayout, Span, accumulate, sequence_total};
pub use dsl::{CompositionBuilder, SectionBuilder, SequenceBuilder};
pub use model::{Composition, Overlays, SceneSpec, Section, Sequence, TransitionSpec};
