use super::*;

#[test]
fn presets_validate() {
    for cfg in [SpringConfig::SMOOTH, SpringConfig::SNAPPY, SpringConfig::BOUNCY] {
        cfg.validate().unwrap();
        assert!(cfg.settle_secs().is_finite() && cfg.settle_secs() > 0.0);
    }
}

#[test]
fn invalid_constants_are_rejected() {
    let cfg = SpringConfig {
        damping: 0.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    assert!(cfg.validate().is_err());
    assert!(Timing::Spring(cfg).validate().is_err());
    // Sampling an invalid spring still yields finite values.
    assert!(Timing::Spring(cfg).sample(0.5).is_finite());
}

#[test]
fn spring_response_starts_at_rest_and_settles() {
    for cfg in [SpringConfig::SMOOTH, SpringConfig::SNAPPY, SpringConfig::BOUNCY] {
        assert_eq!(cfg.response(0.0), 0.0);
        assert_eq!(cfg.response(-1.0), 0.0);
        let settled = cfg.response(cfg.settle_secs());
        assert!((settled - 1.0).abs() < 0.006, "{cfg:?} -> {settled}");
    }
}

#[test]
fn critically_damped_spring_settles() {
    let cfg = SpringConfig {
        damping: 20.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    let t = cfg.settle_secs();
    assert!((cfg.response(t) - 1.0).abs() <= 0.005 + 1e-9);
    assert!(cfg.response(t * 0.1) < 1.0);
}

#[test]
fn bouncy_spring_overshoots() {
    let cfg = SpringConfig::BOUNCY;
    let peak = (1..200)
        .map(|i| Timing::Spring(cfg).sample(f64::from(i) / 200.0))
        .fold(0.0f64, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn timing_endpoints_are_exact() {
    for t in [
        Timing::LINEAR,
        Timing::Spring(SpringConfig::SMOOTH),
        Timing::Spring(SpringConfig::BOUNCY),
    ] {
        assert_eq!(t.sample(0.0), 0.0);
        assert_eq!(t.sample(1.0), 1.0);
        assert_eq!(t.sample(5.0), 1.0);
        assert_eq!(t.sample(-5.0), 0.0);
    }
}

#[test]
fn timing_serde_is_tagged() {
    let t: Timing = serde_json::from_str(r#"{"spring": {"damping": 200}}"#).unwrap();
    assert_eq!(t, Timing::Spring(SpringConfig::SMOOTH));
    let t: Timing = serde_json::from_str(r#"{"eased": "out_cubic"}"#).unwrap();
    assert_eq!(t, Timing::Eased(Ease::OutCubic));
}
