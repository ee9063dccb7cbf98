use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Smooth,
    Ease::Snappy,
    Ease::Overshoot,
    Ease::Elastic,
];

#[test]
fn every_ease_hits_both_endpoints() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-9, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?} at 1");
    }
}

#[test]
fn inputs_outside_unit_range_are_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(4.0), e.apply(1.0));
        assert!(e.apply(f64::NAN).is_finite());
    }
}

#[test]
fn bezier_presets_are_monotonic_where_expected() {
    for e in [Ease::Smooth, Ease::Snappy] {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = e.apply(f64::from(i) / 100.0);
            assert!(v + 1e-6 >= prev, "{e:?} not monotonic at {i}");
            prev = v;
        }
    }
}

#[test]
fn overshoot_exceeds_one_midway() {
    let peak = (0..=100)
        .map(|i| Ease::Overshoot.apply(f64::from(i) / 100.0))
        .fold(0.0f64, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn cubic_bezier_linear_control_points_are_identity() {
    for i in 0..=10 {
        let x = f64::from(i) / 10.0;
        assert!((cubic_bezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, x) - x).abs() < 1e-5);
    }
}

#[test]
fn serde_uses_snake_case_names() {
    let s = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(s, "\"in_out_cubic\"");
    let e: Ease = serde_json::from_str("\"smooth\"").unwrap();
    assert_eq!(e, Ease::Smooth);
}
