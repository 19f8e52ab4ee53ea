//! Pixel-space fills. Coordinates here are already mapped to pixels; pixel `(X, Y)` is tested at
//! its integer coordinate.

use crate::foundation::core::Vec2;
use crate::foundation::math::unlerp;
use crate::geom::verts::Tri;
use crate::raster::bitmap::Bitmap;
use crate::raster::blend::{BlendMode, PremulRgba8};

/// Edge treatment for ovals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OvalStyle {
    /// Exact `r < 1` membership.
    #[default]
    Hard,
    /// Coverage ramp over a band `2 / rx` wide just inside the rim.
    Smooth,
}

fn span(min: f64, max_exclusive: f64, limit: u32) -> std::ops::Range<i64> {
    if !min.is_finite() || !max_exclusive.is_finite() {
        return 0..0;
    }
    let lo = min.max(0.0) as i64;
    let hi = max_exclusive.min(f64::from(limit)).max(0.0) as i64;
    lo..hi
}

/// Barycentric triangle fill. Winding independent; zero-area triangles paint nothing.
pub fn fill_triangle_px<S>(bitmap: &mut Bitmap<S>, tri: Tri, src: PremulRgba8, mode: BlendMode)
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let [a, b, c] = tri.0;
    let v0 = c - a;
    let v1 = b - a;
    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot11 = v1.dot(v1);
    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() <= f64::EPSILON * dot00 * dot11 {
        return;
    }
    let inv_denom = 1.0 / denom;

    let min = Vec2::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y));
    let max = Vec2::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y));
    let xs = span(min.x.floor(), max.x.floor() + 1.0, bitmap.width());
    let ys = span(min.y.floor(), max.y.floor() + 1.0, bitmap.height());

    for y in ys {
        for x in xs.clone() {
            let v2 = Vec2::new(x as f64, y as f64) - a;
            let dot02 = v0.dot(v2);
            let dot12 = v1.dot(v2);
            let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
            let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
            if u >= 0.0 && v >= 0.0 && u + v <= 1.0 {
                bitmap.blend_pixel(x, y, src, 1.0, mode);
            }
        }
    }
}

/// True when `p` lies in the smaller wedge swept from `start` to `end`. Equal directions
/// accept everything.
pub fn in_wedge(p: Vec2, start: Vec2, end: Vec2) -> bool {
    start.cross(p) * start.cross(end) >= 0.0 && end.cross(p) * end.cross(start) >= 0.0
}

/// Ellipse fill restricted to the wedge between `start_dir` and `end_dir`.
#[allow(clippy::too_many_arguments)]
pub fn fill_oval_slice_px<S>(
    bitmap: &mut Bitmap<S>,
    center: Vec2,
    radius: Vec2,
    start_dir: Vec2,
    end_dir: Vec2,
    src: PremulRgba8,
    mode: BlendMode,
    style: OvalStyle,
) where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    if !(radius.x > 0.0 && radius.y > 0.0) {
        return;
    }
    let band = 2.0 / radius.x;
    let xs = span(
        (center.x - radius.x).floor(),
        (center.x + radius.x + 1.0).floor(),
        bitmap.width(),
    );
    let ys = span(
        (center.y - radius.y).floor(),
        (center.y + radius.y + 1.0).floor(),
        bitmap.height(),
    );

    for y in ys {
        for x in xs.clone() {
            let d = Vec2::new(x as f64, y as f64) - center;
            let r = (d.x / radius.x).powi(2) + (d.y / radius.y).powi(2);
            if r >= 1.0 || !in_wedge(d, start_dir, end_dir) {
                continue;
            }
            let coverage = match style {
                OvalStyle::Hard => 1.0,
                OvalStyle::Smooth if r < 1.0 - band => 1.0,
                OvalStyle::Smooth => 1.0 - unlerp(1.0 - band, 1.0, r),
            };
            bitmap.blend_pixel(x, y, src, coverage, mode);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/primitives.rs"]
mod tests;
