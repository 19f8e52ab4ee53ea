//! Thickness and offset profiles along the dragon's curves.
//!
//! Each profile is a small immutable struct of random parameters; the drawing code captures it
//! in closures handed to the ribbon drawer and to `line_offset_parametric`.

use crate::foundation::core::{Vec2, VecExt};

/// Snout and jaw shape along the four-point snout polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnootProfile {
    /// Thickness at the back of the snout.
    pub base: f64,
    /// Thickness change toward the tip (negative narrows).
    pub scale: f64,
    /// Share of the thickness given to the upper jaw.
    pub parts_proportion: f64,
    /// How far the jaws are parted, relative to `base`.
    pub mouth_size: f64,
    /// Horizontal lower-jaw shift at the tip.
    pub overbite: f64,
}

impl SnootProfile {
    /// Whole-snout thickness.
    pub fn thickness(&self, p: f64) -> f64 {
        self.scale * p.max(0.0).powf(0.05) + self.base
    }

    /// Upper jaw thickness.
    pub fn top_thickness(&self, p: f64) -> f64 {
        self.parts_proportion * self.thickness(p)
    }

    /// Upper jaw highlight band.
    pub fn top_highlight_thickness(&self, p: f64) -> f64 {
        0.95f64.powf(p * p) * self.top_thickness(p)
    }

    /// Lower jaw thickness.
    pub fn bottom_thickness(&self, p: f64) -> f64 {
        (1.0 - self.parts_proportion) * self.thickness(p)
    }

    /// Lower jaw highlight band.
    pub fn bottom_highlight_thickness(&self, p: f64) -> f64 {
        0.8 * self.bottom_thickness(p)
    }

    /// Upper jaw centreline relative to the snout polyline.
    pub fn top_offset(&self, p: f64) -> Vec2 {
        Vec2::new(
            (1.0 - p) * -10.0,
            (self.thickness(p) - self.top_thickness(p)) / 2.0 + self.mouth_size * self.base * p,
        )
    }

    /// Upper highlight, flush with the top edge of the upper jaw.
    pub fn top_highlight_offset(&self, p: f64) -> Vec2 {
        self.top_offset(p)
            - Vec2::new(0.0, self.top_thickness(p) - self.top_highlight_thickness(p))
    }

    /// Lower jaw centreline relative to the snout polyline.
    pub fn bottom_offset(&self, p: f64) -> Vec2 {
        Vec2::new(
            self.overbite * p,
            -(self.thickness(p) - self.bottom_thickness(p)) / 2.0 - self.mouth_size * self.base * p,
        )
    }

    /// Lower highlight, set back from the tip.
    pub fn bottom_highlight_offset(&self, p: f64) -> Vec2 {
        self.bottom_offset(p)
            + Vec2::new(
                -10.0 * (1.0 - p),
                self.bottom_thickness(p) - self.bottom_highlight_thickness(p),
            )
    }

    /// Open mouth interior, closing to nothing at the tip.
    pub fn mouth_thickness(&self, p: f64) -> f64 {
        (1.0 - p) * self.bottom_thickness(p)
    }

    /// Mouth interior, sitting on top of the lower jaw.
    pub fn mouth_offset(&self, p: f64) -> Vec2 {
        Vec2::new(
            self.overbite * p,
            self.bottom_offset(p).y
                + self.bottom_thickness(p) * 0.5
                + self.mouth_thickness(p) * 0.5,
        )
    }

    /// Lip line along the top of the lower jaw.
    pub fn mouth_line_thickness(&self, p: f64) -> f64 {
        5.0 - 4.0 * p
    }

    /// Lip line position.
    pub fn mouth_line_offset(&self, p: f64) -> Vec2 {
        self.bottom_offset(p) + Vec2::new(0.0, 0.5 * self.bottom_thickness(p))
    }

    /// Region erased behind the jaws so the mouth reads as open.
    pub fn mouth_clear_thickness(&self, p: f64) -> f64 {
        0.7 * self.thickness(p)
    }

    /// Erased region position.
    pub fn mouth_clear_offset(&self, p: f64) -> Vec2 {
        Vec2::new((1.0 - p) * 10.0, 0.0)
    }

    /// Root of the lower front teeth.
    pub fn front_tooth_offset(&self, p: f64) -> Vec2 {
        self.bottom_offset(p) + Vec2::new((0.5 - p) * 40.0, self.bottom_thickness(p)) * 0.5
    }

    /// Root of the back teeth inside the mouth.
    pub fn back_tooth_offset(&self, p: f64) -> Vec2 {
        self.mouth_offset(p) + Vec2::new((0.5 - p) * 20.0, self.mouth_thickness(p)) * 0.5
    }

    /// Nostril centre for a snout sample.
    pub fn nostril(&self, p: f64, direction: Vec2, position: Vec2) -> Vec2 {
        position + self.top_offset(p) + direction.right_normal() * (self.top_thickness(p) * 0.4)
    }
}

/// Neck thickness, growing linearly toward the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeckProfile {
    /// Thickness where the neck meets the head.
    pub base: f64,
    /// Growth over the whole neck.
    pub scale: f64,
    /// Highlight band as a share of the thickness.
    pub highlight: f64,
}

impl NeckProfile {
    /// Thickness at fraction `p`.
    pub fn thickness(&self, p: f64) -> f64 {
        self.scale * p + self.base
    }

    /// Highlight band thickness.
    pub fn highlight_thickness(&self, p: f64) -> f64 {
        self.highlight * self.thickness(p)
    }
}

/// Horn taper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HornProfile {
    /// Thickness at the root.
    pub base: f64,
    /// Change from root to tip.
    pub scale: f64,
}

impl HornProfile {
    /// Thickness at fraction `p`.
    pub fn thickness(&self, p: f64) -> f64 {
        self.scale * p + self.base
    }

    /// Same taper, uniformly thinner or thicker.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            base: self.base * factor,
            scale: self.scale * factor,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dragon/profile.rs"]
mod tests;
