use crate::foundation::core::LocalFrame;
use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Half-open frame span `[start, end)` on a sequence timeline.
///
/// Starts may be negative when a transition is longer than the scene before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Span {
    /// First frame (inclusive).
    pub start: i64,
    /// End frame (exclusive).
    pub end: i64,
}

impl Span {
    /// Number of frames covered.
    pub fn len(self) -> u64 {
        self.end.saturating_sub(self.start).max(0) as u64
    }

    /// `true` when the span covers no frames.
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// `true` if `frame` lies in `[start, end)`.
    pub fn contains(self, frame: i64) -> bool {
        self.start <= frame && frame < self.end
    }
}

/// One scene visible at a given sequence frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActiveScene {
    /// Scene index within the sequence.
    pub index: usize,
    /// Frame relative to the scene's own start.
    pub local: LocalFrame,
    /// Progress of the incoming transition, `None` for the bottom-most scene.
    pub blend_in: Option<f64>,
}

/// Placement of every scene of a sequence, produced by [`accumulate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SequenceLayout {
    /// Start frame of each scene.
    pub starts: Vec<i64>,
    /// Scene durations as declared.
    pub durations: Vec<u64>,
    /// Transition overlaps as declared, one fewer than `durations`.
    pub overlaps: Vec<u64>,
    /// Playable length: `Σ durations - Σ overlaps`.
    pub total: u64,
}

impl SequenceLayout {
    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Always `false` for a layout built by [`accumulate`].
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Frames occupied by scene `i`.
    pub fn scene_range(&self, i: usize) -> Option<Span> {
        let start = *self.starts.get(i)?;
        let d = i64::try_from(*self.durations.get(i)?).ok()?;
        Some(Span {
            start,
            end: start.saturating_add(d),
        })
    }

    /// Overlap window of transition `j` (between scenes `j` and `j + 1`).
    ///
    /// Zero-length transitions produce an empty span and act as hard cuts.
    pub fn transition_window(&self, j: usize) -> Option<Span> {
        let t = i64::try_from(*self.overlaps.get(j)?).ok()?;
        let start = *self.starts.get(j + 1)?;
        Some(Span {
            start,
            end: start.saturating_add(t),
        })
    }

    /// Progress of transition `j` at `frame`, clamped to `[0, 1]`.
    ///
    /// The first window frame maps to 0 and the last to 1, so both scene boundaries are
    /// reached exactly. A one-frame window is already complete.
    pub fn transition_progress(&self, j: usize, frame: i64) -> f64 {
        let Some(w) = self.transition_window(j) else {
            return 1.0;
        };
        let dur = w.len();
        if dur <= 1 {
            return if frame >= w.start { 1.0 } else { 0.0 };
        }
        let offset = frame.saturating_sub(w.start);
        (offset as f64 / (dur - 1) as f64).clamp(0.0, 1.0)
    }

    /// Indices `i` whose scene starts before scene `i - 1`.
    ///
    /// Happens when a transition is longer than the scene before it. The later scene
    /// then blends in under an earlier one and may hide it entirely.
    pub fn reordered_starts(&self) -> Vec<usize> {
        self.starts
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[1] < w[0])
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Scenes visible at `frame`, bottom-most first.
    ///
    /// Frames outside `[0, total)` are clamped to the nearest playable frame. When
    /// transition windows overlap, more than two scenes are returned and callers fold
    /// them left to right.
    pub fn active_at(&self, frame: i64) -> Vec<ActiveScene> {
        let last = i64::try_from(self.total).unwrap_or(i64::MAX).saturating_sub(1);
        let frame = frame.clamp(0, last.max(0));

        let mut out = Vec::with_capacity(2);
        for i in 0..self.len() {
            let Some(range) = self.scene_range(i) else {
                continue;
            };
            if !range.contains(frame) {
                continue;
            }
            let blend_in = if out.is_empty() {
                None
            } else {
                Some(self.transition_progress(i - 1, frame))
            };
            out.push(ActiveScene {
                index: i,
                local: LocalFrame(frame - range.start),
                blend_in,
            });
        }
        out
    }
}

/// Place scenes on a sequence timeline.
///
/// `scenes` are scene durations in frames, `transitions` the overlap consumed between
/// each adjacent pair. Fails on an empty sequence, a zero-length scene, a transition
/// count other than `scenes.len() - 1`, or when overlaps consume every scene frame.
pub fn accumulate(scenes: &[u64], transitions: &[u64]) -> ExplainerResult<SequenceLayout> {
    if scenes.is_empty() {
        return Err(ExplainerError::validation(
            "sequence must contain at least one scene",
        ));
    }
    if let Some(i) = scenes.iter().position(|&d| d == 0) {
        return Err(ExplainerError::validation(format!(
            "scene {i} duration must be > 0 frames"
        )));
    }
    if transitions.len() != scenes.len() - 1 {
        return Err(ExplainerError::TransitionCountMismatch {
            scenes: scenes.len(),
            transitions: transitions.len(),
        });
    }

    let overflow = || ExplainerError::validation("sequence duration overflows frame counter");

    let mut starts = Vec::with_capacity(scenes.len());
    let mut cursor: i64 = 0;
    let mut scene_sum: u64 = 0;
    let mut transition_sum: u64 = 0;
    for (i, &d) in scenes.iter().enumerate() {
        starts.push(cursor);
        scene_sum = scene_sum.checked_add(d).ok_or_else(overflow)?;
        let d = i64::try_from(d).map_err(|_| overflow())?;
        cursor = cursor.checked_add(d).ok_or_else(overflow)?;
        if let Some(&t) = transitions.get(i) {
            transition_sum = transition_sum.checked_add(t).ok_or_else(overflow)?;
            let t = i64::try_from(t).map_err(|_| overflow())?;
            cursor = cursor.checked_sub(t).ok_or_else(overflow)?;
        }
    }
    if i64::try_from(scene_sum).is_err() {
        return Err(overflow());
    }

    if transition_sum >= scene_sum {
        return Err(ExplainerError::DurationUnderflow {
            scene_frames: scene_sum,
            transition_frames: transition_sum,
        });
    }

    Ok(SequenceLayout {
        starts,
        durations: scenes.to_vec(),
        overlaps: transitions.to_vec(),
        total: scene_sum - transition_sum,
    })
}

/// Compile-time sequence length.
///
/// Returns `None` in exactly the cases where [`accumulate`] fails, otherwise the same
/// `total`. Usable in `const` items so hand-maintained totals can be replaced by a
/// derived constant.
pub const fn sequence_total(scenes: &[u64], transitions: &[u64]) -> Option<u64> {
    if scenes.is_empty() || transitions.len() != scenes.len() - 1 {
        return None;
    }
    let mut scene_sum: u64 = 0;
    let mut i = 0;
    while i < scenes.len() {
        if scenes[i] == 0 || scenes[i] > i64::MAX as u64 {
            return None;
        }
        scene_sum = match scene_sum.checked_add(scenes[i]) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    if scene_sum > i64::MAX as u64 {
        return None;
    }
    let mut transition_sum: u64 = 0;
    let mut j = 0;
    while j < transitions.len() {
        if transitions[j] > i64::MAX as u64 {
            return None;
        }
        transition_sum = match transition_sum.checked_add(transitions[j]) {
            Some(v) => v,
            None => return None,
        };
        j += 1;
    }
    if transition_sum >= scene_sum {
        return None;
    }
    Some(scene_sum - transition_sum)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/accumulator.rs"]
mod tests;
