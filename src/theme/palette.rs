use crate::foundation::color::Rgba8;

/// Named accent slot of the palette.
///
/// Scenes refer to accents by name so that a theme swap recolors every scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// Primary brand accent.
    #[default]
    Indigo,
    /// Secondary accent.
    Violet,
    /// Highlight / data accent.
    Cyan,
    /// Warnings and emphasis.
    Amber,
    /// Success and positive outcomes.
    Green,
    /// Errors and negative outcomes.
    Red,
}

impl Accent {
    /// Every accent, in cycling order.
    pub const ALL: [Self; 6] = [
        Self::Indigo,
        Self::Violet,
        Self::Cyan,
        Self::Amber,
        Self::Green,
        Self::Red,
    ];

    /// Accent at position `i`, wrapping around.
    pub fn cycle(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }
}

/// Color table shared by every scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Base background.
    pub bg: Rgba8,
    /// Lighter background used for gradients.
    pub bg_light: Rgba8,
    /// Primary text.
    pub text: Rgba8,
    /// Secondary text.
    pub muted: Rgba8,
    /// Accent: indigo.
    pub indigo: Rgba8,
    /// Accent: violet.
    pub violet: Rgba8,
    /// Accent: cyan.
    pub cyan: Rgba8,
    /// Accent: amber.
    pub amber: Rgba8,
    /// Accent: green.
    pub green: Rgba8,
    /// Accent: red.
    pub red: Rgba8,
    /// Code block background.
    pub code_bg: Rgba8,
    /// Card background.
    pub card_bg: Rgba8,
    /// Card and divider borders.
    pub border: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: Rgba8::from_hex_u32(0x0f0f1a),
            bg_light: Rgba8::from_hex_u32(0x1a1a2e),
            text: Rgba8::from_hex_u32(0xf8fafc),
            muted: Rgba8::from_hex_u32(0x94a3b8),
            indigo: Rgba8::from_hex_u32(0x6366f1),
            violet: Rgba8::from_hex_u32(0x8b5cf6),
            cyan: Rgba8::from_hex_u32(0x06b6d4),
            amber: Rgba8::from_hex_u32(0xf59e0b),
            green: Rgba8::from_hex_u32(0x10b981),
            red: Rgba8::from_hex_u32(0xef4444),
            code_bg: Rgba8::from_hex_u32(0x1e1e2e),
            card_bg: Rgba8::from_hex_u32(0x1e1e30),
            border: Rgba8::from_hex_u32(0x2e2e44),
        }
    }
}

impl Palette {
    /// Resolve an accent slot.
    pub fn accent(&self, accent: Accent) -> Rgba8 {
        match accent {
            Accent::Indigo => self.indigo,
            Accent::Violet => self.violet,
            Accent::Cyan => self.cyan,
            Accent::Amber => self.amber,
            Accent::Green => self.green,
            Accent::Red => self.red,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
