use std::collections::BTreeMap;

use crate::foundation::core::Fps;
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::render::timeline::Timeline;
use crate::timeline::model::Composition;

/// Summary of a registered composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompositionInfo {
    /// Registration id.
    pub id: String,
    /// Accumulated length in frames.
    pub total_frames: u64,
    /// Playback rate.
    pub fps: Fps,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Named compositions, iterated in id order.
///
/// Only validated compositions are admitted, so every lookup yields something that can
/// be laid out and rendered.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, Entry>,
}

#[derive(Clone, Debug)]
struct Entry {
    comp: Composition,
    total_frames: u64,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `comp` and store it under its id.
    pub fn register(&mut self, comp: Composition) -> ExplainerResult<()> {
        comp.validate()?;
        if self.entries.contains_key(&comp.id) {
            return Err(ExplainerError::validation(format!(
                "duplicate composition id '{}'",
                comp.id
            )));
        }
        let total_frames = comp.total_frames()?;
        tracing::debug!(id = %comp.id, total_frames, "registered composition");
        self.entries.insert(
            comp.id.clone(),
            Entry {
                comp,
                total_frames,
            },
        );
        Ok(())
    }

    /// Composition registered as `id`.
    pub fn get(&self, id: &str) -> Option<&Composition> {
        self.entries.get(id).map(|e| &e.comp)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length, rate and size of `id`.
    pub fn info(&self, id: &str) -> ExplainerResult<CompositionInfo> {
        let entry = self.entry(id)?;
        Ok(CompositionInfo {
            id: entry.comp.id.clone(),
            total_frames: entry.total_frames,
            fps: entry.comp.fps,
            width: entry.comp.canvas.width,
            height: entry.comp.canvas.height,
        })
    }

    /// Renderable timeline for `id`.
    pub fn timeline(&self, id: &str) -> ExplainerResult<Timeline> {
        Timeline::new(&self.entry(id)?.comp)
    }

    fn entry(&self, id: &str) -> ExplainerResult<&Entry> {
        self.entries
            .get(id)
            .ok_or_else(|| ExplainerError::validation(format!("unknown composition '{id}'")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry.rs"]
mod tests;
