use super::*;
use serde_json::json;

fn close(a: Rgba, b: Rgba) -> bool {
    (a.r - b.r).abs() < 1e-9
        && (a.g - b.g).abs() < 1e-9
        && (a.b - b.b).abs() < 1e-9
        && (a.a - b.a).abs() < 1e-9
}

#[test]
fn hsv_primary_sectors() {
    assert!(close(Hsva::new(0.0, 1.0, 1.0).to_rgba(), Rgba::new(1.0, 0.0, 0.0, 1.0)));
    assert!(close(Hsva::new(120.0, 1.0, 1.0).to_rgba(), Rgba::new(0.0, 1.0, 0.0, 1.0)));
    assert!(close(Hsva::new(240.0, 1.0, 1.0).to_rgba(), Rgba::new(0.0, 0.0, 1.0, 1.0)));
    assert!(close(Hsva::new(60.0, 1.0, 1.0).to_rgba(), Rgba::new(1.0, 1.0, 0.0, 1.0)));
    assert!(close(Hsva::new(300.0, 1.0, 0.5).to_rgba(), Rgba::new(0.5, 0.0, 0.5, 1.0)));
}

#[test]
fn hue_wraps_and_grey_has_no_hue() {
    assert!(close(Hsva::new(360.0 + 120.0, 1.0, 1.0).to_rgba(), Hsva::new(120.0, 1.0, 1.0).to_rgba()));
    assert!(close(Hsva::new(-120.0, 1.0, 1.0).to_rgba(), Hsva::new(240.0, 1.0, 1.0).to_rgba()));
    let grey = Hsva::new(200.0, 0.0, 0.4).to_rgba();
    assert!(close(grey, Rgba::new(0.4, 0.4, 0.4, 1.0)));
}

#[test]
fn rgb_to_hsv_round_trips_through_sectors() {
    for h in [10.0, 75.0, 150.0, 210.0, 280.0, 345.0] {
        let c = Hsva::new(h, 0.6, 0.7);
        let back = Hsva::from_rgba(c.to_rgba());
        assert!((back.h - h).abs() < 1e-6, "hue {h} -> {}", back.h);
        assert!((back.s - 0.6).abs() < 1e-9);
        assert!((back.v - 0.7).abs() < 1e-9);
    }
}

#[test]
fn deltas_clamp_and_wrap() {
    let c = Hsva::new(350.0, 0.9, 0.95);
    let d = c.delta_hsv(20.0, 0.5, 0.2);
    assert!((d.h - 10.0).abs() < 1e-9);
    assert_eq!(d.s, 1.0);
    assert_eq!(d.v, 1.0);
    assert_eq!(c.delta_v(-2.0).v, 0.0);
}

#[test]
fn premultiplied_bytes() {
    assert_eq!(Rgba::new(1.0, 0.5, 0.0, 1.0).to_premul_u8(), [255, 128, 0, 255]);
    assert_eq!(Rgba::new(1.0, 1.0, 1.0, 0.5).to_premul_u8(), [128, 128, 128, 128]);
    assert_eq!(Rgba::from_hex_rgb(0x111111, 1.0).to_premul_u8(), [17, 17, 17, 255]);
}

#[test]
fn parses_hex_object_and_array() {
    let c: Rgba = serde_json::from_value(json!("#ff0000")).unwrap();
    assert!(close(c, Rgba::new(1.0, 0.0, 0.0, 1.0)));

    let c: Rgba = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);

    let c: Rgba = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert!(close(c, Rgba::new(0.25, 0.5, 0.75, 1.0)));

    let c: Rgba = serde_json::from_value(json!({"h": 120.0, "s": 1.0, "v": 1.0})).unwrap();
    assert!(close(c, Rgba::new(0.0, 1.0, 0.0, 1.0)));

    let c: Rgba = serde_json::from_value(json!([0.1, 0.2, 0.3, 0.4])).unwrap();
    assert!(close(c, Rgba::new(0.1, 0.2, 0.3, 0.4)));

    assert!(serde_json::from_value::<Rgba>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba>(json!([1.0, 2.0])).is_err());
}
