use crate::foundation::core::{Vec2, VecExt};
use crate::foundation::math::fract;
use crate::raster::bitmap::Bitmap;
use crate::raster::blend::{BlendMode, PremulRgba8};

/// Step of the thick-line stroke walk. Strokes land `THICK_LINE_SPACING^2` pixels apart and the
/// stack spans `THICK_LINE_SPACING * thickness`.
pub const THICK_LINE_SPACING: f64 = 0.8;

/// Anti-aliased one-pixel line (Xiaolin Wu) in pixel space. Pixels outside the bitmap are
/// skipped rather than clamping the endpoints.
pub fn wu_line_px<S>(
    bitmap: &mut Bitmap<S>,
    start: Vec2,
    end: Vec2,
    src: PremulRgba8,
    mode: BlendMode,
) where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    if !(start.x.is_finite() && start.y.is_finite() && end.x.is_finite() && end.y.is_finite()) {
        return;
    }
    let steep = (end.y - start.y).abs() > (end.x - start.x).abs();
    let (mut p0, mut p1) = if steep {
        (start.swap_components(), end.swap_components())
    } else {
        (start, end)
    };
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
    }

    let major_limit = i64::from(if steep { bitmap.height() } else { bitmap.width() });
    let mut plot = |major: i64, minor: i64, coverage: f64| {
        if steep {
            bitmap.blend_pixel(minor, major, src, coverage, mode);
        } else {
            bitmap.blend_pixel(major, minor, src, coverage, mode);
        }
    };

    let delta = p1 - p0;
    let gradient = if delta.x == 0.0 { 1.0 } else { delta.y / delta.x };

    let x_end = p0.x.round();
    let y_end = p0.y + gradient * (x_end - p0.x);
    let x_gap = 1.0 - fract(p0.x + 0.5);
    let x_px1 = x_end as i64;
    plot(x_px1, y_end.floor() as i64, (1.0 - fract(y_end)) * x_gap);
    plot(x_px1, y_end.floor() as i64 + 1, fract(y_end) * x_gap);
    let first_y = y_end;

    let x_end = p1.x.round();
    let y_end = p1.y + gradient * (x_end - p1.x);
    let x_gap = fract(p1.x + 0.5);
    let x_px2 = x_end as i64;
    plot(x_px2, y_end.floor() as i64, (1.0 - fract(y_end)) * x_gap);
    plot(x_px2, y_end.floor() as i64 + 1, fract(y_end) * x_gap);

    // only walk the part of the major axis that can land inside the bitmap
    let lo = (x_px1 + 1).max(0);
    let hi = x_px2.min(major_limit);
    for x in lo..hi {
        let y = first_y + gradient * (x - x_px1) as f64;
        plot(x, y.floor() as i64, 1.0 - fract(y));
        plot(x, y.floor() as i64 + 1, fract(y));
    }
}

/// Thick line in pixel space made of parallel Wu lines stacked along the left normal. The stack is
/// centred on the segment and slightly narrower than `thickness`, see [`THICK_LINE_SPACING`].
pub fn thick_line_px<S>(
    bitmap: &mut Bitmap<S>,
    start: Vec2,
    end: Vec2,
    thickness: f64,
    src: PremulRgba8,
    mode: BlendMode,
) where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let normal = (end - start).left_normal();
    let thickness = if thickness.is_finite() { thickness.max(0.0) } else { 0.0 };
    let strokes = (thickness / THICK_LINE_SPACING).floor() as i64;
    for k in 0..=strokes {
        let step = -thickness / 2.0 + k as f64 * THICK_LINE_SPACING;
        let offset = normal * (step * THICK_LINE_SPACING);
        wu_line_px(bitmap, start + offset, end + offset, src, mode);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/line.rs"]
mod tests;
