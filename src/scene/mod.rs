//! Scene rendering: display lists, the per-call context, reusable components and the
//! closed set of scene kinds.
//!
//! Every render function here is a pure function of its arguments. Frames before a
//! scene starts render like its first frame; entrances hold their final pose once
//! their window has passed.

/// Reusable animated building blocks.
pub mod components;
/// Per-call render context.
pub mod ctx;
/// Display-list types.
pub mod frame;
/// Scene payloads and the [`kinds::SceneKind`] union.
pub mod kinds;
/// Background, particles, progress bar and watermark.
pub mod overlays;

pub use ctx::SceneCtx;
pub use frame::{Clip, Layer, LayerContent, Paint, Stroke, TextAlign, TextRun, VisualFrame};
pub use kinds::{Scene, SceneKind};
