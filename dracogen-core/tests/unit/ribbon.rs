use super::*;
use crate::color::Rgba;
use crate::curve::model::{CubicCurve, QuadraticCurve};
use crate::geom::verts::{Quad, Tri};

#[derive(Debug, PartialEq)]
enum Op {
    Quad(Quad),
    Oval(Vec2, Vec2),
    Slice(Vec2, Vec2),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn quads(&self) -> Vec<Quad> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Quad(q) => Some(*q),
                _ => None,
            })
            .collect()
    }

    fn count(&self, f: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| f(op)).count()
    }
}

impl Rasterizer for Recorder {
    fn fill_triangle(&mut self, _tri: Tri, _paint: Paint) {}

    fn fill_quad(&mut self, quad: Quad, _paint: Paint) {
        self.ops.push(Op::Quad(quad));
    }

    fn fill_oval(&mut self, center: Vec2, radius: Vec2, _paint: Paint) {
        self.ops.push(Op::Oval(center, radius));
    }

    fn fill_oval_slice(&mut self, center: Vec2, radius: Vec2, _s: Vec2, _e: Vec2, _paint: Paint) {
        self.ops.push(Op::Slice(center, radius));
    }

    fn line(&mut self, _a: Vec2, _b: Vec2, _paint: Paint) {}

    fn thick_line(&mut self, _a: Vec2, _b: Vec2, _t: f64, _paint: Paint) {}
}

fn paint() -> Paint {
    Paint::new(Rgba::WHITE)
}

#[test]
fn elbow_emits_quads_caps_and_joint_wedges() {
    let mut r = Recorder::default();
    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
    draw_ribbon(&mut r, &points, |_| 2.0, paint(), true);

    assert_eq!(r.quads().len(), 2);
    assert_eq!(r.count(|op| matches!(op, Op::Oval(..))), 3);
    assert_eq!(r.count(|op| matches!(op, Op::Slice(..))), 2);
    assert!(r.ops.contains(&Op::Oval(Vec2::ZERO, Vec2::new(1.0, 1.0))));
    assert!(r.ops.contains(&Op::Slice(Vec2::new(10.0, 0.0), Vec2::new(1.0, 1.0))));
}

#[test]
fn straight_runs_have_no_joint_wedges() {
    let mut r = Recorder::default();
    let points = [Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0)];
    draw_ribbon(&mut r, &points, |_| 2.0, paint(), false);
    assert_eq!(r.quads().len(), 2);
    assert_eq!(r.ops.len(), 2);
}

#[test]
fn quad_corners_follow_the_normals() {
    let mut r = Recorder::default();
    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
    draw_ribbon(&mut r, &points, |p| 4.0 - 2.0 * p, paint(), false);
    let q = r.quads()[0];
    // left normal of +x is -y
    assert_eq!(q[0], Vec2::new(0.0, -2.0));
    assert_eq!(q[1], Vec2::new(0.0, 2.0));
    assert_eq!(q[2], Vec2::new(10.0, 1.0));
    assert_eq!(q[3], Vec2::new(10.0, -1.0));
}

#[test]
fn too_few_points_draw_nothing() {
    let mut r = Recorder::default();
    draw_ribbon(&mut r, &[Vec2::ZERO], |_| 1.0, paint(), true);
    draw_ribbon(&mut r, &[], |_| 1.0, paint(), true);
    assert!(r.ops.is_empty());
}

#[test]
fn bezier_walk_draws_one_quad_per_chord() {
    let curve = QuadraticCurve::from_points(
        Vec2::ZERO,
        &[Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0), Vec2::new(15.0, -10.0), Vec2::new(20.0, 0.0)],
    )
    .unwrap();
    let mut r = Recorder::default();
    draw_bezier_ribbon(&mut r, &curve, |_| 3.0, paint(), 9, false);
    assert_eq!(r.quads().len(), 18);
    // first and last chords of a two-segment curve are uncapped at their outer ends
    let caps = r.count(|op| matches!(op, Op::Oval(..)));
    assert_eq!(caps, 2 * 7 * 2);
}

#[test]
fn bezier_thickness_sees_whole_curve_fraction() {
    let curve = CubicCurve::from_points(
        Vec2::ZERO,
        &[Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0), Vec2::new(30.0, 0.0)],
    )
    .unwrap();
    let mut r = Recorder::default();
    // thickness equals 2 * fraction, so each chord's start half-width tracks progress
    draw_bezier_ribbon(&mut r, &curve, |p| 2.0 * p, paint(), 10, false);
    let quads = r.quads();
    assert_eq!(quads.len(), 10);
    assert_eq!(quads[0][0].y, 0.0);
    let mut last = -1.0;
    for q in &quads {
        let half = q[1].y;
        assert!(half > last);
        last = half;
    }
    assert!(last < 1.0);
    assert!(last > 0.8);
}
