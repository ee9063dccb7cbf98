//! Ready-made compositions.

/// The five-section "How the Web Actually Works" explainer.
pub mod how_the_web_works;

pub use how_the_web_works::how_the_web_works;

use crate::foundation::error::ExplainerResult;
use crate::registry::Registry;

/// Registry holding every built-in composition.
pub fn builtin_registry() -> ExplainerResult<Registry> {
    let mut registry = Registry::new();
    registry.register(how_the_web_works()?)?;
    Ok(registry)
}
