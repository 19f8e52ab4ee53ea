use super::*;

fn snoot() -> SnootProfile {
    SnootProfile {
        base: 120.0,
        scale: -20.0,
        parts_proportion: 0.8,
        mouth_size: 0.2,
        overbite: -10.0,
    }
}

#[test]
fn snoot_jaws_partition_the_thickness() {
    let s = snoot();
    assert_eq!(s.thickness(0.0), 120.0);
    assert!((s.thickness(1.0) - 100.0).abs() < 1e-9);
    for p in [0.0, 0.3, 1.0] {
        let sum = s.top_thickness(p) + s.bottom_thickness(p);
        assert!((sum - s.thickness(p)).abs() < 1e-9);
        assert!(s.top_highlight_thickness(p) <= s.top_thickness(p));
        assert!(s.bottom_highlight_thickness(p) < s.bottom_thickness(p));
    }
}

#[test]
fn mouth_closes_at_the_tip() {
    let s = snoot();
    assert!(s.mouth_thickness(0.0) > 0.0);
    assert_eq!(s.mouth_thickness(1.0), 0.0);
    assert_eq!(s.mouth_clear_offset(1.0), Vec2::ZERO);
    assert_eq!(s.mouth_line_thickness(1.0), 1.0);
}

#[test]
fn jaws_part_with_mouth_size() {
    let s = snoot();
    let gap0 = s.top_offset(0.0).y - s.bottom_offset(0.0).y;
    let gap1 = s.top_offset(1.0).y - s.bottom_offset(1.0).y;
    assert!(gap1 - gap0 > 0.0);
    assert_eq!(s.bottom_offset(1.0).x, -10.0);
}

#[test]
fn nostril_sits_on_the_upper_jaw() {
    let s = snoot();
    let n = s.nostril(0.8, Vec2::new(1.0, 0.0), Vec2::new(100.0, 0.0));
    let expected = Vec2::new(100.0, 0.0) + s.top_offset(0.8) + Vec2::new(0.0, s.top_thickness(0.8) * 0.4);
    assert!((n - expected).length() < 1e-9);
}

#[test]
fn neck_and_horn_profiles_are_linear() {
    let neck = NeckProfile {
        base: 140.0,
        scale: 30.0,
        highlight: 0.7,
    };
    assert_eq!(neck.thickness(0.5), 155.0);
    assert!((neck.highlight_thickness(1.0) - 119.0).abs() < 1e-9);

    let horn = HornProfile {
        base: 40.0,
        scale: -34.0,
    };
    assert_eq!(horn.thickness(1.0), 6.0);
    let thin = horn.scaled(0.5);
    assert_eq!(thin.thickness(0.0), 20.0);
    assert_eq!(thin.thickness(1.0), 3.0);
}
