use crate::color::Rgba;
use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// How a painted colour combines with the pixel underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over compositing.
    #[default]
    Over,
    /// Overwrite the destination with the coverage-scaled source.
    Replace,
}

/// A colour plus the blend mode it is painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Straight-alpha colour.
    pub color: Rgba,
    /// Compositing mode.
    pub mode: BlendMode,
}

impl Paint {
    /// Source-over paint.
    pub fn new(color: impl Into<Rgba>) -> Self {
        Self {
            color: color.into(),
            mode: BlendMode::Over,
        }
    }

    /// Paint that overwrites whatever is underneath.
    pub fn replace(color: impl Into<Rgba>) -> Self {
        Self {
            color: color.into(),
            mode: BlendMode::Replace,
        }
    }

    pub(crate) fn premul(self) -> PremulRgba8 {
        self.color.to_premul_u8()
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Self::new(color)
    }
}

fn coverage_u16(coverage: f64) -> u16 {
    ((coverage.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16
}

/// Source-over of a premultiplied pixel scaled by `coverage`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, coverage: f64) -> PremulRgba8 {
    if coverage.is_nan() || coverage <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = coverage_u16(coverage);
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// `src` scaled by `coverage`, ignoring the destination.
pub fn scaled(src: PremulRgba8, coverage: f64) -> PremulRgba8 {
    if coverage.is_nan() {
        return [0; 4];
    }
    let op = coverage_u16(coverage);
    src.map(|c| mul_div255_u8(u16::from(c), op))
}

/// Combine according to `mode`.
pub fn blend(dst: PremulRgba8, src: PremulRgba8, coverage: f64, mode: BlendMode) -> PremulRgba8 {
    match mode {
        BlendMode::Over => over(dst, src, coverage),
        BlendMode::Replace => scaled(src, coverage),
    }
}

/// Undo premultiplication for export.
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => {
            let un =
                |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
            [un(px[0]), un(px[1]), un(px[2]), a]
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;
