use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#6366f1")).unwrap();
    assert_eq!(c, Rgba8::rgb(0x63, 0x66, 0xf1));
    assert_eq!(c, Rgba8::from_hex_u32(0x6366f1));

    let c: Rgba8 = serde_json::from_value(json!("0000ff80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#zz0000").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.5])).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(serde_json::from_value::<Rgba8>(json!([0.0, 1.0])).is_err());
}

#[test]
fn serializes_as_hex_string() {
    let s = serde_json::to_string(&Rgba8::rgba(1, 2, 3, 4)).unwrap();
    assert_eq!(s, "\"#01020304\"");
}

#[test]
fn with_alpha_and_lerp_clamp_inputs() {
    let c = Rgba8::WHITE;
    assert_eq!(c.with_alpha(0.5).a, 128);
    assert_eq!(c.with_alpha(2.0).a, 255);
    assert_eq!(c.with_alpha(f64::NAN).a, 0);

    let black = Rgba8::rgb(0, 0, 0);
    assert_eq!(black.lerp(c, 0.0), black);
    assert_eq!(black.lerp(c, 1.0), c);
    assert_eq!(black.lerp(c, 7.0), c);
}
