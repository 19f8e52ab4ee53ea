//! Random parameter source.
//!
//! Generators only see [`RandomSource`]; the concrete engine is a seeded PCG so that a dragon
//! name or a `--seed` reproduces the same picture.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::color::Hsva;
use crate::foundation::math::mod_range;

/// Half-open interval `[min, max)` for uniform draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl Range {
    /// Interval between two values in either order.
    pub fn between(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// `center ± deviation`.
    pub fn around(center: f64, deviation: f64) -> Self {
        Self::between(center - deviation, center + deviation)
    }

    /// Degenerate interval that always yields `value`.
    pub fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }
}

/// Source of uniform randomness plus the derived draws generators use.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `range`.
    fn range(&mut self, range: Range) -> f64 {
        range.min + self.next_unit() * (range.max - range.min)
    }

    /// Uniform value between `a` and `b` in either order.
    fn between(&mut self, a: f64, b: f64) -> f64 {
        self.range(Range::between(a, b))
    }

    /// Uniform value in `center ± deviation`.
    fn around(&mut self, center: f64, deviation: f64) -> f64 {
        self.range(Range::around(center, deviation))
    }

    /// `-1.0` or `1.0`.
    fn sign(&mut self) -> f64 {
        if self.between(-1.0, 1.0) < 0.0 { -1.0 } else { 1.0 }
    }

    /// Integer in `[0, n)`; `n == 0` yields 0.
    fn choice(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_unit() * n as f64) as usize).min(n - 1)
    }

    /// Opaque HSV colour with each component drawn from its range; hue wraps into `[0, 360)`.
    fn hsv(&mut self, hue: Range, saturation: Range, value: Range) -> Hsva {
        let h = mod_range(self.range(hue), 360.0);
        let s = self.range(saturation);
        let v = self.range(value);
        Hsva::new(h, s, v)
    }
}

/// Seeded PCG-64 source.
#[derive(Clone, Debug)]
pub struct PcgSource {
    rng: Pcg64,
}

impl PcgSource {
    /// Deterministic source for `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Stable seed for a dragon name (`h = 31 * h + byte`, wrapping).
pub fn seed_from_name(name: &str) -> u64 {
    name.bytes()
        .fold(0u64, |h, c| h.wrapping_mul(31).wrapping_add(u64::from(c)))
}

#[cfg(test)]
#[path = "../tests/unit/random.rs"]
mod tests;
