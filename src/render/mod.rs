//! Whole-composition evaluation: resolving global frames, layering overlays and
//! rendering frame ranges.

/// Stable frame fingerprints.
pub mod fingerprint;
/// Validated timelines and range rendering.
pub mod timeline;

pub use fingerprint::{FrameFingerprint, fingerprint_frame};
pub use timeline::{RenderThreading, ResolvedFrame, Timeline};
