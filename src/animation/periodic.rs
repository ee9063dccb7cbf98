//! Periodic signals for ambient motion (pulsing glows, blinking cursors).
//!
//! These are pure functions of a frame number; they repeat exactly every `period`
//! frames and never need clamping.

use std::f64::consts::TAU;

/// Sine wave oscillating around 0 with the given amplitude.
///
/// A `period` of 0 yields a constant 0.
pub fn pulse(frame: i64, period: u32, amplitude: f64) -> f64 {
    if period == 0 {
        return 0.0;
    }
    let phase = frame.rem_euclid(i64::from(period)) as f64 / f64::from(period);
    (phase * TAU).sin() * amplitude
}

/// Glow intensity in `[0, 1]`, peaking a quarter period in.
pub fn glow_intensity(frame: i64, period: u32) -> f64 {
    0.5 + 0.5 * pulse(frame, period, 1.0)
}

/// On for the first half of each period, off for the second.
pub fn blink(frame: i64, period: u32) -> bool {
    if period == 0 {
        return true;
    }
    frame.rem_euclid(i64::from(period)) < i64::from(period.div_ceil(2))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/periodic.rs"]
mod tests;
