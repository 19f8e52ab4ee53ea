//! Glyph text.
//!
//! Glyph rasterization sits behind [`GlyphSource`]; [`TextPainter`] composites the coverage
//! bitmaps it returns with bilinear sampling. Scratch copies of each glyph (with a one-pixel
//! apron so the bilinear taps never leave the buffer) live in a temporary [`Arena`] region.

use std::path::Path;

use crate::color::Rgba;
use crate::foundation::arena::Arena;
use crate::foundation::core::Vec2;
use crate::foundation::error::{DracoError, DracoResult};
use crate::foundation::math::lerp;
use crate::raster::blend::BlendMode;
use crate::raster::canvas::Canvas;

/// Scratch bytes reserved for glyph copies.
pub const GLYPH_SCRATCH_BYTES: usize = 1 << 20;

/// Largest text height in pixels the settings accept. Even a glyph twice as wide as it is tall
/// fits [`GLYPH_SCRATCH_BYTES`] at this size.
pub const MAX_TEXT_PX: f64 = 512.0;

/// A rasterized glyph: coverage rows top-down plus placement metrics in pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Glyph {
    /// Bitmap width.
    pub width: usize,
    /// Bitmap height.
    pub height: usize,
    /// Left edge relative to the pen position.
    pub xmin: i32,
    /// Bottom edge relative to the baseline, positive up.
    pub ymin: i32,
    /// Horizontal pen advance.
    pub advance: f32,
    /// `width * height` coverage bytes, top row first.
    pub coverage: Vec<u8>,
}

/// Rasterizes codepoints at a pixel height.
pub trait GlyphSource {
    /// Coverage bitmap and metrics for `ch` at `px` pixels.
    fn glyph(&self, ch: char, px: f32) -> Glyph;

    /// Extra advance between `left` and `right`.
    fn kern(&self, left: char, right: char, px: f32) -> f32;
}

/// [`GlyphSource`] backed by a TrueType/OpenType font.
pub struct FontdueGlyphs {
    font: fontdue::Font,
}

impl std::fmt::Debug for FontdueGlyphs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueGlyphs").finish_non_exhaustive()
    }
}

impl FontdueGlyphs {
    /// Parse font data.
    pub fn from_bytes(bytes: &[u8]) -> DracoResult<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(DracoError::font)?;
        Ok(Self { font })
    }

    /// Read and parse a font file.
    pub fn from_path(path: &Path) -> DracoResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl GlyphSource for FontdueGlyphs {
    fn glyph(&self, ch: char, px: f32) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(ch, px);
        Glyph {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            advance: metrics.advance_width,
            coverage,
        }
    }

    fn kern(&self, left: char, right: char, px: f32) -> f32 {
        self.font.horizontal_kern(left, right, px).unwrap_or(0.0)
    }
}

/// Draws strings onto a [`Canvas`].
pub struct TextPainter<'g> {
    glyphs: &'g dyn GlyphSource,
    scratch: Arena,
}

impl<'g> TextPainter<'g> {
    /// Painter with the default scratch size.
    pub fn new(glyphs: &'g dyn GlyphSource) -> Self {
        Self::with_scratch(glyphs, GLYPH_SCRATCH_BYTES)
    }

    /// Painter with an explicit scratch size.
    pub fn with_scratch(glyphs: &'g dyn GlyphSource, bytes: usize) -> Self {
        Self {
            glyphs,
            scratch: Arena::with_capacity(bytes),
        }
    }

    /// Composite one glyph with its pen at `pen` (pixel space, baseline). Returns the advance,
    /// or a validation error when the glyph's scratch copy does not fit the arena.
    pub fn draw_glyph<S>(
        &mut self,
        canvas: &mut Canvas<S>,
        ch: char,
        pen: Vec2,
        px: f32,
        color: Rgba,
    ) -> DracoResult<f32>
    where
        S: AsRef<[u8]> + AsMut<[u8]>,
    {
        let glyph = self.glyphs.glyph(ch, px);
        if !(pen.x.is_finite() && pen.y.is_finite()) || glyph.width == 0 || glyph.height == 0 {
            return Ok(glyph.advance);
        }

        // y-up copy with a zero apron on every side
        let (w, h) = (glyph.width, glyph.height);
        let (aw, ah) = (w + 2, h + 2);
        let need = aw.checked_mul(ah).unwrap_or(usize::MAX);
        if need > self.scratch.remaining() {
            return Err(DracoError::validation(format!(
                "glyph '{ch}' at {px} px is {w}x{h}, too large for the {} byte glyph scratch",
                self.scratch.size()
            )));
        }
        let temp = self.scratch.begin_temporary();
        let block = self.scratch.push_size(aw * ah);
        {
            let apron = self.scratch.bytes_mut(block);
            for row in 0..h {
                let src = &glyph.coverage[row * w..(row + 1) * w];
                let dst_row = h - row;
                apron[dst_row * aw + 1..dst_row * aw + 1 + w].copy_from_slice(src);
            }
        }
        let apron = self.scratch.bytes(block);
        let tap = |x: i64, y: i64| -> f64 {
            if x < 0 || y < 0 || x >= aw as i64 || y >= ah as i64 {
                0.0
            } else {
                f64::from(apron[y as usize * aw + x as usize])
            }
        };

        let origin = pen + Vec2::new(f64::from(glyph.xmin), f64::from(glyph.ymin));
        let premul = color.with_alpha(1.0).to_premul_u8();
        let bitmap = canvas.bitmap_mut();
        let x0 = origin.x.floor() as i64 - 1;
        let y0 = origin.y.floor() as i64 - 1;
        let x_end = (x0 + aw as i64 + 1).min(i64::from(bitmap.width()));
        let y_end = (y0 + ah as i64 + 1).min(i64::from(bitmap.height()));
        for y in y0.max(0)..y_end {
            let sy = y as f64 - origin.y + 1.0;
            let (iy, fy) = (sy.floor() as i64, sy - sy.floor());
            for x in x0.max(0)..x_end {
                let sx = x as f64 - origin.x + 1.0;
                let (ix, fx) = (sx.floor() as i64, sx - sx.floor());
                let bottom = lerp(tap(ix, iy), tap(ix + 1, iy), fx);
                let top = lerp(tap(ix, iy + 1), tap(ix + 1, iy + 1), fx);
                let coverage = lerp(bottom, top, fy) / 255.0;
                if coverage > 0.0 {
                    bitmap.blend_pixel(x, y, premul, coverage * color.a, BlendMode::Over);
                }
            }
        }
        self.scratch.end_temporary(temp);
        Ok(glyph.advance)
    }

    /// Width of `text` at `px` pixels including kerning.
    pub fn string_width(&self, text: &str, px: f32) -> f32 {
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            if let Some(p) = prev {
                width += self.glyphs.kern(p, ch, px);
            }
            width += self.glyphs.glyph(ch, px).advance;
            prev = Some(ch);
        }
        width
    }

    /// Draw `text` centred horizontally on `pos`, an offset in pixels from the bitmap centre,
    /// with its baseline at `pos.y`.
    pub fn draw_string<S>(
        &mut self,
        canvas: &mut Canvas<S>,
        text: &str,
        pos: Vec2,
        px: f32,
        color: Rgba,
    ) -> DracoResult<()>
    where
        S: AsRef<[u8]> + AsMut<[u8]>,
    {
        let start = canvas.half_size() + pos;
        let mut x = f64::from(-self.string_width(text, px) / 2.0);
        let mut prev = None;
        for ch in text.chars() {
            if let Some(p) = prev {
                x += f64::from(self.glyphs.kern(p, ch, px));
            }
            x += f64::from(self.draw_glyph(canvas, ch, start + Vec2::new(x, 0.0), px, color)?);
            prev = Some(ch);
        }
        Ok(())
    }

    /// [`TextPainter::draw_string`] in world units: `height` is the glyph height in units and
    /// the baseline sits a quarter height below `pos`.
    pub fn draw_world_string<S>(
        &mut self,
        canvas: &mut Canvas<S>,
        text: &str,
        pos: Vec2,
        height: f64,
        color: Rgba,
    ) -> DracoResult<()>
    where
        S: AsRef<[u8]> + AsMut<[u8]>,
    {
        let ppu = canvas.pixels_per_unit();
        let pixel_pos = (pos - Vec2::new(0.0, 0.25 * height)) * ppu;
        self.draw_string(canvas, text, pixel_pos, (height * ppu) as f32, color)
    }

    /// Scratch arena, for inspecting its balance.
    pub fn scratch(&self) -> &Arena {
        &self.scratch
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/text.rs"]
mod tests;
