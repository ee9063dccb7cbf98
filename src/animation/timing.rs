use crate::animation::ease::Ease;
use crate::animation::interp::clamp01;
use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Residual displacement below which a spring counts as settled.
const SETTLE_EPSILON: f64 = 0.005;

/// Damped harmonic spring driving a value from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient, must be > 0.
    pub damping: f64,
    /// Spring stiffness, must be > 0.
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Mass, must be > 0.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    /// Heavily overdamped; glides in without bounce.
    pub const SMOOTH: Self = Self {
        damping: 200.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    /// Quick with a slight overshoot.
    pub const SNAPPY: Self = Self {
        damping: 20.0,
        stiffness: 200.0,
        mass: 1.0,
    };
    /// Visible bounce.
    pub const BOUNCY: Self = Self {
        damping: 12.0,
        stiffness: 180.0,
        mass: 1.0,
    };

    /// Reject non-finite or non-positive constants.
    pub fn validate(&self) -> ExplainerResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ExplainerError::animation(format!(
                    "spring {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    fn omega0(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn zeta(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Step response at `t` seconds, starting at rest at 0 and settling at 1.
    pub fn response(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 || self.validate().is_err() {
            return 0.0;
        }
        let w0 = self.omega0();
        let zeta = self.zeta();

        let x = if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        };
        if x.is_finite() { x } else { 1.0 }
    }

    /// Seconds after which the residual stays below the settle epsilon.
    pub fn settle_secs(&self) -> f64 {
        if self.validate().is_err() {
            return 0.0;
        }
        let w0 = self.omega0();
        let zeta = self.zeta();

        if (zeta - 1.0).abs() < 1e-9 {
            // u = w0 t solves (1 + u) e^-u = eps.
            let mut u = (1.0 / SETTLE_EPSILON).ln();
            for _ in 0..16 {
                u = ((1.0 + u) / SETTLE_EPSILON).ln();
            }
            u / w0
        } else if zeta < 1.0 {
            let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
            (amplitude / SETTLE_EPSILON).ln() / (zeta * w0)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let slow = w0 * (zeta - root);
            let fast = w0 * (zeta + root);
            let bound = (slow + fast) / (fast - slow);
            (bound / SETTLE_EPSILON).ln() / slow
        }
    }
}

/// Shape applied to linear window progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Closed-form easing curve.
    Eased(Ease),
    /// Spring response stretched so it settles exactly at the end of the window.
    Spring(SpringConfig),
}

impl Default for Timing {
    fn default() -> Self {
        Self::Eased(Ease::Linear)
    }
}

impl Timing {
    /// Linear timing.
    pub const LINEAR: Self = Self::Eased(Ease::Linear);

    /// Validate parameters.
    pub fn validate(&self) -> ExplainerResult<()> {
        match self {
            Self::Eased(_) => Ok(()),
            Self::Spring(cfg) => cfg.validate(),
        }
    }

    /// Map progress `p` (clamped to `[0, 1]`) to an animated value.
    ///
    /// Always 0 at `p = 0` and exactly 1 at `p = 1`. Spring and overshoot curves may leave
    /// `[0, 1]` in between but stay finite.
    pub fn sample(self, p: f64) -> f64 {
        let p = clamp01(p);
        match self {
            Self::Eased(ease) => ease.apply(p),
            Self::Spring(cfg) => {
                if p >= 1.0 {
                    return 1.0;
                }
                cfg.response(p * cfg.settle_secs())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
