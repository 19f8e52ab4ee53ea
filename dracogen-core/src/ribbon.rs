//! Variable-thickness ribbons.
//!
//! A ribbon is a run of trapezoids, one per polyline segment, whose half-widths come from a
//! thickness function of the arc-length fraction. Interior joints are patched with oval wedges;
//! `miter_ends` adds round caps at the first waypoint and at every segment end.

use crate::curve::bezier::BezierSegment;
use crate::curve::model::Curve;
use crate::foundation::core::{Vec2, VecExt};
use crate::foundation::math::{lerp, safe_ratio0};
use crate::geom::polyline::polyline_length;
use crate::geom::verts::Verts;
use crate::raster::blend::Paint;
use crate::raster::canvas::Rasterizer;

/// Draw a ribbon through `points`; fewer than two points draw nothing.
pub fn draw_ribbon<R>(
    target: &mut R,
    points: &[Vec2],
    thickness: impl Fn(f64) -> f64,
    paint: Paint,
    miter_ends: bool,
) where
    R: Rasterizer + ?Sized,
{
    if points.len() < 2 {
        return;
    }
    let total = polyline_length(points);
    let mut fraction = 0.0;
    for i in 1..points.len() {
        let (start, end) = (points[i - 1], points[i]);
        let segment = end - start;
        let left = segment.left_normal();
        let right = segment.right_normal();

        let step = safe_ratio0(segment.length(), total);
        let start_half = thickness(fraction) * 0.5;
        let end_half = thickness(fraction + step) * 0.5;

        target.fill_quad(
            Verts::new([
                start + left * start_half,
                start + right * start_half,
                end + right * end_half,
                end + left * end_half,
            ]),
            paint,
        );

        if miter_ends && i == 1 {
            target.fill_oval(start, Vec2::new(start_half, start_half), paint);
        }

        if let Some(&next) = points.get(i + 1) {
            let next_segment = next - end;
            let next_right = next_segment.right_normal();
            let next_left = next_segment.left_normal();
            let radius = Vec2::new(end_half, end_half);
            if next_right != right {
                target.fill_oval_slice(end, radius, right, next_right, paint);
            }
            if next_left != left {
                target.fill_oval_slice(end, radius, left, next_left, paint);
            }
        }

        if miter_ends {
            target.fill_oval(end, Vec2::new(end_half, end_half), paint);
        }

        fraction += step;
    }
}

/// Walk a Bezier curve as `segments_per_curve` chords per segment and draw each chord as a
/// two-point ribbon. The thickness function sees the fraction of the whole curve; interior
/// chords are always capped so the walk has no seams.
pub fn draw_bezier_ribbon<S, R>(
    target: &mut R,
    curve: &Curve<S>,
    thickness: impl Fn(f64) -> f64,
    paint: Paint,
    segments_per_curve: usize,
    miter_ends: bool,
) where
    S: BezierSegment,
    R: Rasterizer + ?Sized,
{
    let steps = segments_per_curve.max(1);
    let count = curve.segments().len();
    let total = curve.total_length();
    let mut fraction = 0.0;
    for (curve_index, segment) in curve.segments().iter().enumerate() {
        for step in 0..steps {
            let t0 = step as f64 / steps as f64;
            let t1 = (step + 1) as f64 / steps as f64;
            let chord = [segment.eval(t0), segment.eval(t1)];
            let next = fraction + safe_ratio0((chord[1] - chord[0]).length(), total);

            let interior =
                (0 < step && step + 1 < steps) || (0 < curve_index && curve_index + 1 < count);
            let (lo, hi) = (fraction, next);
            draw_ribbon(
                target,
                &chord,
                |p| thickness(lerp(lo, hi, p)),
                paint,
                miter_ends || interior,
            );
            fraction = next;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/ribbon.rs"]
mod tests;
