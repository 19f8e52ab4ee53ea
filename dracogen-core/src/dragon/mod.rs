//! Procedural dragon portraits.
//!
//! A seed drives a [`PcgSource`]; the cave and then the creature draw all of their random
//! choices up front into [`CaveParams`] and [`DragonParams`]. Both layers are painted into small
//! arena-backed bitmaps and then composited, integer-upscaled, into the display buffer.

/// Cave backdrop.
pub mod background;
/// Painting order of the creature.
pub mod draw;
/// Random choices drawn up front.
pub mod params;
pub mod place;
pub mod profile;

use crate::config::DragonSettings;
use crate::dragon::background::draw_cave;
use crate::dragon::draw::draw_dragon;
use crate::dragon::params::{CaveParams, DragonParams};
use crate::foundation::arena::Arena;
use crate::foundation::error::DracoResult;
use crate::random::PcgSource;
use crate::raster::bitmap::{BYTES_PER_PIXEL, Bitmap, ChannelOrder, FrameRGBA};
use crate::raster::canvas::Canvas;

/// Render the dragon for `seed` into straight-alpha RGBA rows, top row first.
#[tracing::instrument(skip(settings))]
pub fn render_dragon(seed: u64, settings: &DragonSettings) -> DracoResult<FrameRGBA> {
    settings.validate()?;
    let mut rng = PcgSource::from_seed(seed);
    let cave = CaveParams::generate(&mut rng);
    let dragon = DragonParams::generate(&mut rng);

    let side = settings.bitmap_size();
    let layer_bytes = side as usize * side as usize * BYTES_PER_PIXEL;
    let mut arena = Arena::with_capacity(2 * layer_bytes);
    let background_block = arena.push_size(layer_bytes);
    let dragon_block = arena.push_size(layer_bytes);
    let pixels_per_unit = 1.0 / settings.units_per_pixel;

    let out = settings.output_size;
    let mut display = Bitmap::new(out, out, ChannelOrder::Bgra);
    display.clear(settings.background);
    let scale = settings.render_scale;
    let offset = (i64::from(out) - i64::from(side) * i64::from(scale)) / 2;

    {
        let storage = arena.bytes_mut(background_block);
        let mut canvas = Canvas::new(
            Bitmap::from_storage(storage, side, side, ChannelOrder::Rgba)?,
            pixels_per_unit,
        );
        draw_cave(&mut canvas, &cave);
        display.draw_bitmap(canvas.bitmap(), offset, offset, scale);
    }
    {
        let storage = arena.bytes_mut(dragon_block);
        let mut canvas = Canvas::new(
            Bitmap::from_storage(storage, side, side, ChannelOrder::Rgba)?,
            pixels_per_unit,
        );
        draw_dragon(&mut canvas, &dragon, settings.segments_per_curve)?;
        display.draw_bitmap(canvas.bitmap(), offset, offset, scale);
    }
    arena.check();

    tracing::debug!(
        side,
        scale,
        horns = dragon.horn_count,
        plates = dragon.plates.map_or(0, |p| p.count),
        "rendered dragon"
    );
    Ok(display.to_frame())
}

