/// Straight-alpha colors.
pub mod color;
/// Frames, ranges, rates, canvas and transforms.
pub mod core;
/// Error taxonomy.
pub mod error;
