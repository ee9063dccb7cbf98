use crate::animation::interp::{Window, clamp01};
use crate::animation::timing::{SpringConfig, Timing};
use crate::foundation::core::{Canvas, Fps, LocalFrame};
use crate::theme::Theme;

/// Everything a scene renderer may read besides its own payload and the frame.
///
/// Borrowed for the duration of one render call; renderers keep no state between calls.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx<'a> {
    /// Styling.
    pub theme: &'a Theme,
    /// Playback rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
}

impl<'a> SceneCtx<'a> {
    /// Context for rendering at `fps` onto `canvas`.
    pub fn new(theme: &'a Theme, fps: Fps, canvas: Canvas) -> Self {
        Self { theme, fps, canvas }
    }

    /// Element entrance window starting `delay` frames into the scene.
    pub fn entry_window(&self, delay: i64) -> Window {
        Window::new(delay, self.theme.timing.element_entry_frames)
    }

    /// Smooth-spring entrance progress in `[0, 1]`.
    pub fn entry(&self, local: LocalFrame, delay: i64) -> f64 {
        clamp01(self.entry_with(local, delay, self.theme.timing.smooth))
    }

    /// Entrance value for an arbitrary spring; may overshoot 1 before settling.
    pub fn entry_with(&self, local: LocalFrame, delay: i64, spring: SpringConfig) -> f64 {
        self.entry_window(delay)
            .sample(Timing::Spring(spring), local)
    }

    /// Frames in `secs` seconds of periodic motion, at least 1.
    pub fn period(&self, secs: f64) -> u32 {
        let frames = self.fps.secs_to_frames_floor(secs).max(1);
        u32::try_from(frames).unwrap_or(u32::MAX)
    }

    /// Delay of the `i`-th staggered item after `base`.
    pub fn stagger(&self, base: i64, i: usize) -> i64 {
        let step = i64::from(self.theme.timing.stagger_frames);
        base.saturating_add(step.saturating_mul(i64::try_from(i).unwrap_or(i64::MAX)))
    }

    /// Canvas width as `f64`.
    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width)
    }

    /// Canvas height as `f64`.
    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height)
    }
}
