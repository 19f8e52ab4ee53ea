use serde::{Deserialize, Serialize};

use crate::foundation::math::{mod_range, unit_to_u8};

/// Straight-alpha colour with unit-range channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build from unit-range channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `0xRRGGBB` with the given alpha.
    pub fn from_hex_rgb(hex: u32, a: f64) -> Self {
        let ch = |shift: u32| f64::from((hex >> shift) & 0xff) / 255.0;
        Self::new(ch(16), ch(8), ch(0), a)
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Premultiplied 8-bit channels in RGBA order.
    pub fn to_premul_u8(self) -> [u8; 4] {
        let a = self.a.clamp(0.0, 1.0);
        [
            unit_to_u8(self.r.clamp(0.0, 1.0) * a),
            unit_to_u8(self.g.clamp(0.0, 1.0) * a),
            unit_to_u8(self.b.clamp(0.0, 1.0) * a),
            unit_to_u8(a),
        ]
    }
}

/// Hue in degrees, saturation/value/alpha in unit range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsva {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value.
    pub v: f64,
    /// Alpha.
    pub a: f64,
}

impl Hsva {
    /// Opaque colour from hue/saturation/value.
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v, a: 1.0 }
    }

    /// Hexagonal HSV to RGB conversion; hue wraps into `[0, 360)`.
    pub fn to_rgba(self) -> Rgba {
        let h = mod_range(self.h, 360.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Rgba::new(r + m, g + m, b + m, self.a)
    }

    /// Inverse of [`Hsva::to_rgba`].
    pub fn from_rgba(c: Rgba) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;
        let h = if delta < 1e-4 {
            0.0
        } else if max == c.r {
            60.0 * mod_range((c.g - c.b) / delta, 6.0)
        } else if max == c.g {
            60.0 * ((c.b - c.r) / delta + 2.0)
        } else {
            60.0 * ((c.r - c.g) / delta + 4.0)
        };
        let s = if max < 1e-4 { 0.0 } else { delta / max };
        Self { h, s, v: max, a: c.a }
    }

    /// Shift value, clamped to unit range.
    pub fn delta_v(self, dv: f64) -> Self {
        self.delta_hsv(0.0, 0.0, dv)
    }

    /// Shift all three components; hue wraps, saturation and value clamp.
    pub fn delta_hsv(self, dh: f64, ds: f64, dv: f64) -> Self {
        Self {
            h: mod_range(self.h + dh, 360.0),
            s: (self.s + ds).clamp(0.0, 1.0),
            v: (self.v + dv).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl From<Hsva> for Rgba {
    fn from(c: Hsva) -> Self {
        c.to_rgba()
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HsvaObj {
                h: f64,
                s: f64,
                v: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::new(r, g, b, a)),
            Repr::HsvaObj { h, s, v, a } => Ok(Hsva { h, s, v, a }.to_rgba()),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::new(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<f64, String> {
        u8::from_str_radix(pair, 16)
            .map(|b| f64::from(b) / 255.0)
            .map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() || !(s.len() == 6 || s.len() == 8) {
        return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
    }
    let a = if s.len() == 8 { hex_byte(&s[6..8])? } else { 1.0 };
    Ok(Rgba::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
        a,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
