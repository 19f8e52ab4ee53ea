//! World-space drawing surface.
//!
//! [`Rasterizer`] is the seam higher-level drawers (ribbons, the dragon, the graph renderer)
//! target. [`Canvas`] implements it over a [`Bitmap`] by mapping world coordinates to pixels:
//! `pixel = world * pixels_per_unit + size / 2`.

use crate::foundation::core::{Vec2, VecExt};
use crate::geom::verts::{Quad, Tri, Verts};
use crate::raster::bitmap::Bitmap;
use crate::raster::blend::Paint;
use crate::raster::line::{thick_line_px, wu_line_px};
use crate::raster::primitives::{OvalStyle, fill_oval_slice_px, fill_triangle_px};

/// World-space drawing operations.
pub trait Rasterizer {
    /// Fill a triangle.
    fn fill_triangle(&mut self, tri: Tri, paint: Paint);

    /// Fill a quad as triangles `(0, 1, 2)` and `(2, 3, 0)`.
    fn fill_quad(&mut self, quad: Quad, paint: Paint) {
        self.fill_triangle(Verts::new([quad[0], quad[1], quad[2]]), paint);
        self.fill_triangle(Verts::new([quad[2], quad[3], quad[0]]), paint);
    }

    /// Fill a convex polygon as a fan from its first vertex.
    fn fill_poly(&mut self, points: &[Vec2], paint: Paint) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        for pair in rest.windows(2) {
            self.fill_triangle(Verts::new([first, pair[0], pair[1]]), paint);
        }
    }

    /// Fill a full ellipse.
    fn fill_oval(&mut self, center: Vec2, radius: Vec2, paint: Paint) {
        let dir = Vec2::new(1.0, 0.0);
        self.fill_oval_slice(center, radius, dir, dir, paint);
    }

    /// Fill the part of an ellipse inside the wedge from `start_dir` to `end_dir`.
    fn fill_oval_slice(
        &mut self,
        center: Vec2,
        radius: Vec2,
        start_dir: Vec2,
        end_dir: Vec2,
        paint: Paint,
    );

    /// One-pixel anti-aliased line.
    fn line(&mut self, start: Vec2, end: Vec2, paint: Paint);

    /// Anti-aliased line `thickness` world units wide.
    fn thick_line(&mut self, start: Vec2, end: Vec2, thickness: f64, paint: Paint);

    /// Thick line ending in a triangular head `head_size` units long.
    fn arrow(&mut self, start: Vec2, end: Vec2, thickness: f64, head_size: f64, paint: Paint) {
        let diff = end - start;
        let dir = diff.safe_normalize();
        let tip = start + dir * (diff.length() - head_size);
        self.thick_line(start, tip, thickness, paint);
        self.fill_triangle(
            Verts::new([
                tip + diff.left_normal() * head_size,
                tip + dir * head_size,
                tip + diff.right_normal() * head_size,
            ]),
            paint,
        );
    }
}

/// A bitmap plus its world mapping.
#[derive(Debug)]
pub struct Canvas<S> {
    bitmap: Bitmap<S>,
    pixels_per_unit: f64,
    style: OvalStyle,
}

impl<S: AsRef<[u8]>> Canvas<S> {
    /// Hard-edged canvas; world origin at the bitmap centre.
    pub fn new(bitmap: Bitmap<S>, pixels_per_unit: f64) -> Self {
        Self {
            bitmap,
            pixels_per_unit,
            style: OvalStyle::Hard,
        }
    }

    /// Switch edge treatment. [`OvalStyle::Smooth`] also outlines triangles with AA lines.
    pub fn with_style(mut self, style: OvalStyle) -> Self {
        self.style = style;
        self
    }

    /// Scale from world units to pixels.
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Current edge treatment.
    pub fn style(&self) -> OvalStyle {
        self.style
    }

    /// The underlying bitmap.
    pub fn bitmap(&self) -> &Bitmap<S> {
        &self.bitmap
    }

    /// Give the bitmap back.
    pub fn into_bitmap(self) -> Bitmap<S> {
        self.bitmap
    }

    /// Pixel-space centre of the bitmap.
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.bitmap.width()) / 2.0,
            f64::from(self.bitmap.height()) / 2.0,
        )
    }

    /// Map a world position to pixel space.
    pub fn to_pixel(&self, world: Vec2) -> Vec2 {
        world * self.pixels_per_unit + self.half_size()
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> Canvas<S> {
    /// Mutable access to the underlying bitmap.
    pub fn bitmap_mut(&mut self) -> &mut Bitmap<S> {
        &mut self.bitmap
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> Rasterizer for Canvas<S> {
    fn fill_triangle(&mut self, tri: Tri, paint: Paint) {
        if self.style == OvalStyle::Smooth {
            for i in 0..3 {
                self.line(tri[i], tri[(i + 1) % 3], paint);
            }
        }
        let px = tri.map(|p| self.to_pixel(p));
        fill_triangle_px(&mut self.bitmap, px, paint.premul(), paint.mode);
    }

    fn fill_oval_slice(
        &mut self,
        center: Vec2,
        radius: Vec2,
        start_dir: Vec2,
        end_dir: Vec2,
        paint: Paint,
    ) {
        let center = self.to_pixel(center);
        let radius = radius * self.pixels_per_unit;
        fill_oval_slice_px(
            &mut self.bitmap,
            center,
            radius,
            start_dir,
            end_dir,
            paint.premul(),
            paint.mode,
            self.style,
        );
    }

    fn line(&mut self, start: Vec2, end: Vec2, paint: Paint) {
        let (a, b) = (self.to_pixel(start), self.to_pixel(end));
        wu_line_px(&mut self.bitmap, a, b, paint.premul(), paint.mode);
    }

    fn thick_line(&mut self, start: Vec2, end: Vec2, thickness: f64, paint: Paint) {
        let (a, b) = (self.to_pixel(start), self.to_pixel(end));
        let width = thickness * self.pixels_per_unit;
        thick_line_px(&mut self.bitmap, a, b, width, paint.premul(), paint.mode);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
