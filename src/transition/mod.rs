//! Blending two rendered scenes across a transition window.

/// Frame compositor.
pub mod compositor;
/// Transition kinds and name parsing.
pub mod kind;

pub use compositor::composite;
pub use kind::{Edge, TransitionKind, parse_transition_kind};
