//! Pixel buffers.
//!
//! A [`Bitmap`] stores premultiplied 8-bit pixels in either RGBA or BGRA byte order. Storage is
//! generic so the same code drives owned buffers, arena blocks and sub-views of a larger buffer.
//! Row 0 is the bottom of the picture; [`Bitmap::to_frame`] flips rows for export.

use crate::color::Rgba;
use crate::foundation::error::{DracoError, DracoResult};
use crate::raster::blend::{BlendMode, PremulRgba8, blend, over, unpremultiply};

/// Bytes in one pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte order of a pixel in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// `R, G, B, A`.
    #[default]
    Rgba,
    /// `B, G, R, A`, the usual display-surface layout.
    Bgra,
}

impl ChannelOrder {
    /// Convert an RGBA pixel into this order.
    pub fn encode(self, px: [u8; 4]) -> [u8; 4] {
        match self {
            Self::Rgba => px,
            Self::Bgra => [px[2], px[1], px[0], px[3]],
        }
    }

    /// Convert a pixel stored in this order back to RGBA.
    pub fn decode(self, px: [u8; 4]) -> [u8; 4] {
        // the swap is its own inverse
        self.encode(px)
    }
}

/// Straight-alpha RGBA8 frame, rows top-down, ready for PNG encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

/// A premultiplied pixel buffer over some byte storage.
#[derive(Clone, Debug)]
pub struct Bitmap<S> {
    width: u32,
    height: u32,
    stride: usize,
    order: ChannelOrder,
    data: S,
}

impl Bitmap<Vec<u8>> {
    /// Zeroed (transparent) owned bitmap.
    pub fn new(width: u32, height: u32, order: ChannelOrder) -> Self {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            stride,
            order,
            data: vec![0; stride * height as usize],
        }
    }
}

impl<S: AsRef<[u8]>> Bitmap<S> {
    /// Wrap existing storage with a tight stride.
    pub fn from_storage(
        data: S,
        width: u32,
        height: u32,
        order: ChannelOrder,
    ) -> DracoResult<Self> {
        Self::with_stride(data, width, height, width as usize * BYTES_PER_PIXEL, order)
    }

    /// Wrap existing storage whose rows are `stride` bytes apart.
    pub fn with_stride(
        data: S,
        width: u32,
        height: u32,
        stride: usize,
        order: ChannelOrder,
    ) -> DracoResult<Self> {
        let row = width as usize * BYTES_PER_PIXEL;
        if stride < row {
            return Err(DracoError::validation(format!(
                "bitmap stride {stride} is smaller than a {width} px row"
            )));
        }
        let needed = required_len(width, height, stride);
        if data.as_ref().len() < needed {
            return Err(DracoError::validation(format!(
                "bitmap storage holds {} bytes, {width}x{height} needs {needed}",
                data.as_ref().len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            order,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte order of stored pixels.
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Raw stored bytes.
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.stride + x as usize * BYTES_PER_PIXEL)
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: i64, y: i64) -> Option<PremulRgba8> {
        let i = self.index(x, y)?;
        let d = &self.data.as_ref()[i..i + BYTES_PER_PIXEL];
        Some(self.order.decode([d[0], d[1], d[2], d[3]]))
    }

    /// Unpremultiply, convert to RGBA and flip rows so the first row is the top of the picture.
    pub fn to_frame(&self) -> FrameRGBA {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut data = Vec::with_capacity(w * h * BYTES_PER_PIXEL);
        let src = self.data.as_ref();
        for y in (0..h).rev() {
            let row = &src[y * self.stride..y * self.stride + w * BYTES_PER_PIXEL];
            for px in row.chunks_exact(BYTES_PER_PIXEL) {
                let rgba = self.order.decode([px[0], px[1], px[2], px[3]]);
                data.extend_from_slice(&unpremultiply(rgba));
            }
        }
        FrameRGBA {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> Bitmap<S> {
    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let px = self.order.encode(color.to_premul_u8());
        let (row_len, stride, height) = (
            self.width as usize * BYTES_PER_PIXEL,
            self.stride,
            self.height as usize,
        );
        let data = self.data.as_mut();
        for y in 0..height {
            for dst in data[y * stride..y * stride + row_len].chunks_exact_mut(BYTES_PER_PIXEL) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Overwrite the pixel at `(x, y)`; out-of-range writes are dropped.
    pub fn put_pixel(&mut self, x: i64, y: i64, px: PremulRgba8) {
        if let Some(i) = self.index(x, y) {
            let encoded = self.order.encode(px);
            self.data.as_mut()[i..i + BYTES_PER_PIXEL].copy_from_slice(&encoded);
        }
    }

    /// Combine a premultiplied RGBA source into `(x, y)`; out-of-range writes are dropped.
    pub fn blend_pixel(
        &mut self,
        x: i64,
        y: i64,
        src: PremulRgba8,
        coverage: f64,
        mode: BlendMode,
    ) {
        if let Some(i) = self.index(x, y) {
            let order = self.order;
            let d = &mut self.data.as_mut()[i..i + BYTES_PER_PIXEL];
            let dst = order.decode([d[0], d[1], d[2], d[3]]);
            d.copy_from_slice(&order.encode(blend(dst, src, coverage, mode)));
        }
    }

    /// Composite `src` over this bitmap, upscaled by an integer factor with nearest sampling,
    /// its bottom-left corner at `(offset_x, offset_y)`. Channel order is converted as needed.
    pub fn draw_bitmap<T: AsRef<[u8]>>(
        &mut self,
        src: &Bitmap<T>,
        offset_x: i64,
        offset_y: i64,
        scale: u32,
    ) {
        let scale = i64::from(scale.max(1));
        let min_x = offset_x.max(0);
        let min_y = offset_y.max(0);
        let max_x = (offset_x + scale * i64::from(src.width)).min(i64::from(self.width));
        let max_y = (offset_y + scale * i64::from(src.height)).min(i64::from(self.height));

        for y in min_y..max_y {
            let sy = (y - offset_y) / scale;
            for x in min_x..max_x {
                let sx = (x - offset_x) / scale;
                let Some(s) = src.pixel(sx, sy) else {
                    continue;
                };
                if let Some(d) = self.pixel(x, y) {
                    self.put_pixel(x, y, over(d, s, 1.0));
                }
            }
        }
    }

    /// Mutable view of the `width x height` rectangle at `(x, y)`, sharing this bitmap's stride.
    pub fn sub_view_mut(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> DracoResult<Bitmap<&mut [u8]>> {
        let fits = |o: u32, len: u32, max: u32| o.checked_add(len).is_some_and(|end| end <= max);
        if !fits(x, width, self.width) || !fits(y, height, self.height) {
            return Err(DracoError::validation(format!(
                "sub-view {width}x{height}@({x},{y}) exceeds {}x{} bitmap",
                self.width, self.height
            )));
        }
        let start = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        let len = required_len(width, height, self.stride);
        let (stride, order) = (self.stride, self.order);
        Bitmap::with_stride(
            &mut self.data.as_mut()[start..start + len],
            width,
            height,
            stride,
            order,
        )
    }
}

fn required_len(width: u32, height: u32, stride: usize) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    (height as usize - 1) * stride + width as usize * BYTES_PER_PIXEL
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap.rs"]
mod tests;
