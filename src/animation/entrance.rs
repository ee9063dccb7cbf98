use crate::animation::interp::{clamp01, lerp};
use crate::foundation::core::{Point, Transform2D, Vec2};

/// Named entrance animation applied to an element or a whole scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceStyle {
    /// Fade in while rising 30px.
    #[default]
    FadeUp,
    /// Fade in while dropping 30px.
    FadeDown,
    /// Fade in from 40px to the left.
    FadeLeft,
    /// Fade in from 40px to the right.
    FadeRight,
    /// Fade in while growing from 80%.
    ScaleUp,
    /// Fade in while growing from 60% and untwisting 5 degrees.
    ScaleRotate,
    /// Fade in from a slight zoom and 8px blur.
    BlurFade,
    /// Appear immediately.
    None,
}

/// Style values produced by an entrance at a given progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntranceFx {
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Offset in pixels.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
}

impl EntranceFx {
    /// Fully entered: no visible effect.
    pub const REST: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
        rotation_rad: 0.0,
        blur_px: 0.0,
    };

    /// Transform for this effect, pivoting scale and rotation around `anchor`.
    pub fn transform(&self, anchor: Point) -> Transform2D {
        Transform2D {
            translate: self.translate,
            rotation_rad: self.rotation_rad,
            scale: Vec2::new(self.scale, self.scale),
            anchor: anchor.to_vec2(),
        }
    }
}

impl EntranceStyle {
    /// Evaluate the entrance at `progress` (clamped to `[0, 1]`).
    ///
    /// Progress beyond 1 (spring overshoot) is clamped too, so entrances never
    /// extrapolate past their resting pose.
    pub fn fx(self, progress: f64) -> EntranceFx {
        let p = clamp01(progress);
        let fade = EntranceFx {
            opacity: p,
            ..EntranceFx::REST
        };
        match self {
            Self::FadeUp => EntranceFx {
                translate: Vec2::new(0.0, lerp(30.0, 0.0, p)),
                ..fade
            },
            Self::FadeDown => EntranceFx {
                translate: Vec2::new(0.0, lerp(-30.0, 0.0, p)),
                ..fade
            },
            Self::FadeLeft => EntranceFx {
                translate: Vec2::new(lerp(-40.0, 0.0, p), 0.0),
                ..fade
            },
            Self::FadeRight => EntranceFx {
                translate: Vec2::new(lerp(40.0, 0.0, p), 0.0),
                ..fade
            },
            Self::ScaleUp => EntranceFx {
                scale: lerp(0.8, 1.0, p),
                ..fade
            },
            Self::ScaleRotate => EntranceFx {
                scale: lerp(0.6, 1.0, p),
                rotation_rad: lerp(-5.0, 0.0, p).to_radians(),
                ..fade
            },
            Self::BlurFade => EntranceFx {
                scale: lerp(1.05, 1.0, p),
                blur_px: lerp(8.0, 0.0, p),
                ..fade
            },
            Self::None => EntranceFx::REST,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
