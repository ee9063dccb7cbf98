use super::*;
use crate::foundation::core::Canvas;
use crate::presets::{builtin_registry, how_the_web_works};

#[test]
fn builtin_registry_lists_the_preset() {
    let registry = builtin_registry().unwrap();
    assert_eq!(registry.ids().collect::<Vec<_>>(), ["HowTheWebWorks"]);
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());

    let info = registry.info("HowTheWebWorks").unwrap();
    assert_eq!(
        info,
        CompositionInfo {
            id: "HowTheWebWorks".to_owned(),
            total_frames: 5500,
            fps: Fps { num: 30, den: 1 },
            width: 1920,
            height: 1080,
        }
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut registry = Registry::new();
    registry.register(how_the_web_works().unwrap()).unwrap();
    let err = registry.register(how_the_web_works().unwrap()).unwrap_err();
    assert!(err.to_string().contains("duplicate composition id 'HowTheWebWorks'"));
}

#[test]
fn invalid_compositions_are_not_admitted() {
    let mut comp = how_the_web_works().unwrap();
    comp.id = "Broken".to_owned();
    comp.declared_frames = Some(5474);
    let mut registry = Registry::new();
    assert!(matches!(
        registry.register(comp).unwrap_err(),
        ExplainerError::DeclaredDurationMismatch {
            declared: 5474,
            computed: 5500,
            ..
        }
    ));
    assert!(registry.is_empty());
}

#[test]
fn lookups_by_unknown_id_fail() {
    let registry = builtin_registry().unwrap();
    assert!(registry.get("Nope").is_none());
    assert!(registry.info("Nope").is_err());
    assert!(registry.timeline("Nope").is_err());
}

#[test]
fn ids_are_sorted() {
    let mut registry = Registry::new();
    for id in ["b", "a", "c"] {
        let mut comp = how_the_web_works().unwrap();
        comp.id = id.to_owned();
        comp.canvas = Canvas {
            width: 1280,
            height: 720,
        };
        registry.register(comp).unwrap();
    }
    assert_eq!(registry.ids().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(registry.timeline("a").unwrap().total_frames(), 5500);
}
