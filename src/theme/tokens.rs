use std::{fs::File, io::BufReader, path::Path};

use crate::animation::timing::SpringConfig;
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::theme::palette::{Accent, Palette};

/// Font families, kept as opaque identifiers for the host renderer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Headings and titles.
    pub heading: String,
    /// Body copy.
    pub body: String,
    /// Monospace for code.
    pub code: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            heading: "Inter".to_owned(),
            body: "Inter".to_owned(),
            code: "JetBrains Mono".to_owned(),
        }
    }
}

/// Six-step size scale shared by font sizes and spacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale {
    /// Extra small.
    pub xs: f64,
    /// Small.
    pub sm: f64,
    /// Medium.
    pub md: f64,
    /// Large.
    pub lg: f64,
    /// Extra large.
    pub xl: f64,
    /// Display.
    pub xxl: f64,
}

impl Scale {
    /// Default font sizes in pixels.
    pub const FONT_SIZES: Self = Self {
        xs: 18.0,
        sm: 24.0,
        md: 36.0,
        lg: 48.0,
        xl: 64.0,
        xxl: 80.0,
    };

    /// Default spacing in pixels.
    pub const SPACING: Self = Self {
        xs: 8.0,
        sm: 16.0,
        md: 24.0,
        lg: 32.0,
        xl: 48.0,
        xxl: 64.0,
    };

    fn validate(&self, what: &str) -> ExplainerResult<()> {
        let steps = [self.xs, self.sm, self.md, self.lg, self.xl, self.xxl];
        if steps.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ExplainerError::validation(format!(
                "{what} scale values must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// Corner radii in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Radius {
    /// Small.
    pub sm: f64,
    /// Medium.
    pub md: f64,
    /// Large.
    pub lg: f64,
    /// Extra large.
    pub xl: f64,
    /// Pill shape.
    pub full: f64,
}

impl Default for Radius {
    fn default() -> Self {
        Self {
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            full: 9999.0,
        }
    }
}

/// Frame counts and springs reused by scenes and transitions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingDefaults {
    /// Default transition overlap.
    pub transition_frames: u32,
    /// Delay between consecutive list items.
    pub stagger_frames: u32,
    /// Length of a single element's entrance.
    pub element_entry_frames: u32,
    /// Overdamped spring for calm entrances.
    pub smooth: SpringConfig,
    /// Quick spring with a slight overshoot.
    pub snappy: SpringConfig,
    /// Spring with a visible bounce.
    pub bouncy: SpringConfig,
}

impl Default for TimingDefaults {
    fn default() -> Self {
        Self {
            transition_frames: 15,
            stagger_frames: 8,
            element_entry_frames: 20,
            smooth: SpringConfig::SMOOTH,
            snappy: SpringConfig::SNAPPY,
            bouncy: SpringConfig::BOUNCY,
        }
    }
}

/// Immutable styling passed by reference into every render call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colors.
    pub palette: Palette,
    /// Font families.
    pub fonts: Fonts,
    /// Font size scale.
    pub font_sizes: Scale,
    /// Spacing scale.
    pub spacing: Scale,
    /// Corner radii.
    pub radius: Radius,
    /// Timing constants.
    pub timing: TimingDefaults,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            fonts: Fonts::default(),
            font_sizes: Scale::FONT_SIZES,
            spacing: Scale::SPACING,
            radius: Radius::default(),
            timing: TimingDefaults::default(),
        }
    }
}

impl Theme {
    /// Shorthand for `self.palette.accent(accent)`.
    pub fn accent(&self, accent: Accent) -> crate::foundation::color::Rgba8 {
        self.palette.accent(accent)
    }

    /// Check scales, font names and springs.
    pub fn validate(&self) -> ExplainerResult<()> {
        for (slot, family) in [
            ("heading", &self.fonts.heading),
            ("body", &self.fonts.body),
            ("code", &self.fonts.code),
        ] {
            if family.trim().is_empty() {
                return Err(ExplainerError::validation(format!(
                    "font family '{slot}' must be non-empty"
                )));
            }
        }
        self.font_sizes.validate("font size")?;
        self.spacing.validate("spacing")?;
        let r = &self.radius;
        if [r.sm, r.md, r.lg, r.xl, r.full]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ExplainerError::validation(
                "radius values must be finite and >= 0",
            ));
        }
        if self.timing.element_entry_frames == 0 {
            return Err(ExplainerError::validation(
                "timing.element_entry_frames must be > 0",
            ));
        }
        self.timing.smooth.validate()?;
        self.timing.snappy.validate()?;
        self.timing.bouncy.validate()?;
        Ok(())
    }

    /// Parse and validate a theme from JSON text. Missing fields take brand defaults.
    pub fn from_json_str(s: &str) -> ExplainerResult<Self> {
        let theme: Self = serde_json::from_str(s)
            .map_err(|e| ExplainerError::serde(format!("parse theme JSON: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse and validate a theme from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ExplainerResult<Self> {
        let theme: Self = serde_json::from_reader(r)
            .map_err(|e| ExplainerError::serde(format!("parse theme JSON: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse and validate a theme from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ExplainerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ExplainerError::validation(format!("open theme JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/tokens.rs"]
mod tests;
