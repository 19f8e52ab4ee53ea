use super::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn normalize_zero_is_zero() {
    let n = Vec2::ZERO.safe_normalize();
    assert_eq!(n, Vec2::ZERO);
    assert!(n.x.is_finite() && n.y.is_finite());
    assert!(Vec2::ZERO.left_normal().x.is_finite());
}

#[test]
fn normalize_has_unit_length() {
    let n = Vec2::new(3.0, -4.0).safe_normalize();
    assert!((n.length() - 1.0).abs() < 1e-12);
    assert!(close(n, Vec2::new(0.6, -0.8)));
}

#[test]
fn normals_follow_the_shared_convention() {
    let d = Vec2::new(2.0, 0.0);
    assert!(close(d.right_normal(), Vec2::new(0.0, 1.0)));
    assert!(close(d.left_normal(), Vec2::new(0.0, -1.0)));
    assert!(close(d.left_normal(), -d.right_normal()));
}

#[test]
fn rotation_is_counterclockwise() {
    let r = Vec2::new(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);
    assert!(close(r, Vec2::new(0.0, 1.0)));
    assert!(close(Vec2::new(1.0, 0.0).perp(), r));
}

#[test]
fn cross_sign_tracks_turn_direction() {
    let a = Vec2::new(1.0, 0.0);
    assert!(a.cross(Vec2::new(0.0, 1.0)) > 0.0);
    assert!(a.cross(Vec2::new(0.0, -1.0)) < 0.0);
    assert_eq!(
        Vec2::new(2.0, 3.0).hadamard(Vec2::new(4.0, 5.0)),
        Vec2::new(8.0, 15.0)
    );
    assert_eq!(Vec2::new(2.0, 3.0).swap_components(), Vec2::new(3.0, 2.0));
}
