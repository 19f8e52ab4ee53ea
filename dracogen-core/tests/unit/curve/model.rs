use super::*;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn segments_chain_end_to_start() {
    let curve = QuadraticCurve::from_points(
        v(0.0, 0.0),
        &[v(5.0, 5.0), v(10.0, 0.0), v(15.0, -5.0), v(20.0, 0.0)],
    )
    .unwrap();
    assert_eq!(curve.segments().len(), 2);
    assert_eq!(curve.segments()[0].end, curve.segments()[1].start);
    assert_eq!(curve.start(), v(0.0, 0.0));
    assert_eq!(curve.end(), v(20.0, 0.0));
    assert_eq!(curve.approximation_steps(), DEFAULT_APPROXIMATION_STEPS);
}

#[test]
fn cached_lengths_sum_to_total() {
    let curve = CubicCurve::from_points(
        v(0.0, 0.0),
        &[v(0.0, 5.0), v(10.0, 5.0), v(10.0, 0.0)],
    )
    .unwrap();
    let sum: f64 = curve.lengths().iter().sum();
    assert!((sum - curve.total_length()).abs() < 1e-12);
    assert!(curve.total_length() > 10.0);
}

#[test]
fn offsets_match_absolute_construction() {
    let p0 = v(3.0, -2.0);
    let d = [v(10.0, 4.0), v(6.0, -8.0), v(-3.0, 12.0), v(7.0, 1.0), v(2.0, 2.0), v(-9.0, 5.0)];
    let by_offsets = QuadraticCurve::from_offsets(p0, &d).unwrap();

    let mut running = p0;
    let absolute: Vec<Vec2> = d
        .iter()
        .map(|&o| {
            running += o;
            running
        })
        .collect();
    let by_points = QuadraticCurve::from_points(p0, &absolute).unwrap();

    assert_eq!(by_offsets.segments().len(), 3);
    for (a, b) in by_offsets.segments().iter().zip(by_points.segments()) {
        assert!((a.start - b.start).length() < 1e-9);
        assert!((a.control - b.control).length() < 1e-9);
        assert!((a.end - b.end).length() < 1e-9);
    }
    assert!((by_offsets.total_length() - by_points.total_length()).abs() < 1e-9);
}

#[test]
fn mismatched_point_counts_are_rejected() {
    assert!(QuadraticCurve::from_points(v(0.0, 0.0), &[v(1.0, 1.0)]).is_err());
    assert!(QuadraticCurve::from_points(v(0.0, 0.0), &[]).is_err());
    assert!(CubicCurve::from_offsets(v(0.0, 0.0), &[v(1.0, 1.0), v(2.0, 2.0)]).is_err());
    let err = CubicCurve::from_points(v(0.0, 0.0), &[v(1.0, 1.0); 4]).unwrap_err();
    assert!(err.to_string().contains("multiple of 3"));
}

#[test]
fn zero_steps_are_rejected() {
    assert!(QuadraticCurve::from_points_with_steps(v(0.0, 0.0), &[v(1.0, 1.0), v(2.0, 0.0)], 0).is_err());
}
