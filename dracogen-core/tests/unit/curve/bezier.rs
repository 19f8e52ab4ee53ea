use super::*;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn quadratic_interpolates_endpoints() {
    let cases = [
        (v(0.0, 0.0), v(5.0, 10.0), v(10.0, 0.0)),
        (v(-3.5, 2.0), v(100.0, -40.0), v(7.25, 7.25)),
        (v(1.0, 1.0), v(1.0, 1.0), v(1.0, 1.0)),
    ];
    for (p0, p1, p2) in cases {
        assert!((quadratic_point(p0, p1, p2, 0.0) - p0).length() < 1e-5);
        assert!((quadratic_point(p0, p1, p2, 1.0) - p2).length() < 1e-5);
    }
}

#[test]
fn quadratic_derivative_matches_finite_difference() {
    let seg = Quadratic {
        start: v(0.0, 0.0),
        control: v(4.0, 8.0),
        end: v(10.0, 0.0),
    };
    let h = 1e-6;
    for t in [0.1, 0.5, 0.9] {
        let fd = (seg.eval(t + h) - seg.eval(t - h)) * (1.0 / (2.0 * h));
        assert!((fd - seg.derivative(t)).length() < 1e-4);
    }
}

#[test]
fn cubic_endpoints_and_derivative() {
    let seg = Cubic {
        start: v(0.0, 0.0),
        control1: v(0.0, 5.0),
        control2: v(10.0, 5.0),
        end: v(10.0, 0.0),
    };
    assert!((seg.eval(0.0) - seg.start).length() < 1e-9);
    assert!((seg.eval(1.0) - seg.end).length() < 1e-9);
    assert!((seg.derivative(0.0) - v(0.0, 15.0)).length() < 1e-9);
    let h = 1e-6;
    let fd = (seg.eval(0.3 + h) - seg.eval(0.3 - h)) * (1.0 / (2.0 * h));
    assert!((fd - seg.derivative(0.3)).length() < 1e-4);
}

#[test]
fn straight_segment_length_is_exact() {
    let seg = Quadratic {
        start: v(0.0, 0.0),
        control: v(5.0, 0.0),
        end: v(10.0, 0.0),
    };
    assert!((seg.approximate_length(20) - 10.0).abs() < 1e-9);
}

#[test]
fn arc_length_is_monotonic_and_converges() {
    let seg = Quadratic {
        start: v(0.0, 0.0),
        control: v(30.0, 80.0),
        end: v(60.0, -10.0),
    };
    let mut prev = 0.0;
    for steps in [5, 10, 20, 40, 80, 160] {
        let len = seg.approximate_length(steps);
        assert!(len >= prev - 1e-12);
        prev = len;
    }
    let coarse = seg.approximate_length(20);
    let fine = seg.approximate_length(200);
    assert!(fine >= coarse);
    assert!((fine - coarse) / fine < 0.01);
}
