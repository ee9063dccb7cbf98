/// Accent slots and the color table.
pub mod palette;
/// Fonts, scales, timing defaults and the [`tokens::Theme`] value.
pub mod tokens;

pub use palette::{Accent, Palette};
pub use tokens::{Fonts, Radius, Scale, Theme, TimingDefaults};
