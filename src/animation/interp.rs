use crate::animation::timing::Timing;
use crate::foundation::core::LocalFrame;

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Behavior of [`interpolate`] outside its input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the linear mapping.
    Extend,
}

/// Linearly map `x` from `input` onto `output`.
///
/// A degenerate input range yields `output[1]` at or after `input[0]` and `output[0]`
/// before it. Non-finite `x` yields `output[0]`.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2], extrapolate: Extrapolate) -> f64 {
    if !x.is_finite() {
        return output[0];
    }
    let span = input[1] - input[0];
    if span == 0.0 || !span.is_finite() {
        return if x >= input[0] { output[1] } else { output[0] };
    }
    let mut t = (x - input[0]) / span;
    if extrapolate == Extrapolate::Clamp {
        t = clamp01(t);
    }
    output[0] + (output[1] - output[0]) * t
}

/// Shorthand for a clamped `[0,1] -> [from, to]` mapping.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * clamp01(t)
}

/// Fixed frame window over which an animation runs from progress 0 to 1.
///
/// Frames before `start` hold progress 0, frames at or after `start + len` hold 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// First frame of the window (scene-local).
    pub start: i64,
    /// Window length in frames; 0 behaves as a step at `start`.
    pub len: u32,
}

impl Window {
    /// Window starting at `start` lasting `len` frames.
    pub const fn new(start: i64, len: u32) -> Self {
        Self { start, len }
    }

    /// Same window delayed by `frames`.
    pub const fn delayed(self, frames: i64) -> Self {
        Self {
            start: self.start + frames,
            len: self.len,
        }
    }

    /// Linear progress of `frame` through the window, clamped to `[0, 1]`.
    pub fn progress(self, frame: LocalFrame) -> f64 {
        if self.len == 0 {
            return if frame.0 >= self.start { 1.0 } else { 0.0 };
        }
        let offset = frame.0.saturating_sub(self.start);
        clamp01(offset as f64 / f64::from(self.len))
    }

    /// Progress shaped by `timing`.
    pub fn sample(self, timing: Timing, frame: LocalFrame) -> f64 {
        timing.sample(self.progress(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
