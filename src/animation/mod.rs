/// Easing curves.
pub mod ease;
/// Named entrance animations.
pub mod entrance;
/// Clamped interpolation and frame windows.
pub mod interp;
/// Periodic signals.
pub mod periodic;
/// Spring and eased timing.
pub mod timing;
