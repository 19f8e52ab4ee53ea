//! Render settings for both generators.
//!
//! Settings are plain `serde` structs: every field has a default, so a JSON file only needs the
//! fields it overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::foundation::error::{DracoError, DracoResult};
use crate::raster::text::MAX_TEXT_PX;

/// Dragon rendering knobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragonSettings {
    /// Side of the square output image in pixels.
    pub output_size: u32,
    /// Integer upscale from the creature bitmaps to the output.
    pub render_scale: u32,
    /// World units covered by one creature-bitmap pixel.
    pub units_per_pixel: f64,
    /// Colour around and behind the creature.
    pub background: Rgba,
    /// Straight pieces each neck segment is flattened into.
    pub segments_per_curve: usize,
}

impl Default for DragonSettings {
    fn default() -> Self {
        Self {
            output_size: 512,
            render_scale: 5,
            units_per_pixel: 4.0,
            background: Rgba::from_hex_rgb(0x111111, 1.0),
            segments_per_curve: 9,
        }
    }
}

impl DragonSettings {
    /// Side of each creature bitmap.
    pub fn bitmap_size(&self) -> u32 {
        self.output_size / self.render_scale.max(1)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> DracoResult<()> {
        if self.render_scale == 0 {
            return Err(DracoError::validation("render_scale must be at least 1"));
        }
        if self.bitmap_size() == 0 {
            return Err(DracoError::validation(format!(
                "output_size {} is smaller than render_scale {}",
                self.output_size, self.render_scale
            )));
        }
        if !(self.units_per_pixel.is_finite() && self.units_per_pixel > 0.0) {
            return Err(DracoError::validation(
                "units_per_pixel must be finite and > 0",
            ));
        }
        if self.segments_per_curve == 0 {
            return Err(DracoError::validation("segments_per_curve must be >= 1"));
        }
        Ok(())
    }

    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DracoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DracoError::serde(format!("parse dragon settings JSON: {e}")))
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DracoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DracoError::validation(format!("open dragon settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Graph layout and rendering knobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Pixels per world unit.
    pub pixels_per_unit: f64,
    /// Simulation steps run before drawing.
    pub iterations: u32,
    /// Simulation timestep in seconds.
    pub dt: f64,
    /// Page colour.
    pub background: Rgba,
    /// Ink colour for edges, rings and text.
    pub ink: Rgba,
    /// Transition label height in world units. This and the other text heights must stay within
    /// [`MAX_TEXT_PX`] once scaled by `pixels_per_unit`.
    pub label_height: f64,
    /// Node name height in world units.
    pub name_height: f64,
    /// Node name height inside a double ring.
    pub final_name_height: f64,
    /// Caption drawn at the top; empty disables it.
    pub title: String,
    /// Caption height in pixels, at most [`MAX_TEXT_PX`].
    pub title_px: f32,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            pixels_per_unit: 40.0,
            iterations: 1000,
            dt: 1.0 / 30.0,
            background: Rgba::WHITE,
            ink: Rgba::BLACK,
            label_height: 0.6,
            name_height: 0.42,
            final_name_height: 0.33,
            title: "GraphGen".to_owned(),
            title_px: 27.0,
        }
    }
}

impl GraphSettings {
    /// Half the canvas in world units; the layout keeps nodes inside it.
    pub fn half_extent(&self) -> (f64, f64) {
        (
            f64::from(self.width) / self.pixels_per_unit / 2.0,
            f64::from(self.height) / self.pixels_per_unit / 2.0,
        )
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> DracoResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DracoError::validation(format!(
                "graph canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(DracoError::validation(
                "pixels_per_unit must be finite and > 0",
            ));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(DracoError::validation("dt must be finite and > 0"));
        }
        for (name, h) in [
            ("label_height", self.label_height),
            ("name_height", self.name_height),
            ("final_name_height", self.final_name_height),
        ] {
            if !(h.is_finite() && h > 0.0) {
                return Err(DracoError::validation(format!("{name} must be finite and > 0")));
            }
            let px = h * self.pixels_per_unit;
            if px > MAX_TEXT_PX {
                return Err(DracoError::validation(format!(
                    "{name} is {px} px at this scale, the limit is {MAX_TEXT_PX} px"
                )));
            }
        }
        let title_px = f64::from(self.title_px);
        if !(title_px.is_finite() && title_px > 0.0) {
            return Err(DracoError::validation("title_px must be finite and > 0"));
        }
        if title_px > MAX_TEXT_PX {
            return Err(DracoError::validation(format!(
                "title_px is {title_px}, the limit is {MAX_TEXT_PX}"
            )));
        }
        Ok(())
    }

    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DracoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DracoError::serde(format!("parse graph settings JSON: {e}")))
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DracoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DracoError::validation(format!("open graph settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
