use std::ops::{Add, Index, Mul, Sub};

use crate::foundation::core::{Vec2, VecExt};

/// Exactly `N` points with value semantics.
///
/// Used both for small polygons ([`Tri`], [`Quad`], decorations) and for short polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verts<const N: usize>(pub [Vec2; N]);

/// Three-point polygon.
pub type Tri = Verts<3>;
/// Four-point polygon.
pub type Quad = Verts<4>;

impl<const N: usize> Default for Verts<N> {
    fn default() -> Self {
        Self([Vec2::ZERO; N])
    }
}

impl<const N: usize> Verts<N> {
    /// Wrap absolute points.
    pub const fn new(points: [Vec2; N]) -> Self {
        Self(points)
    }

    /// Build from a delta-encoded list: `steps[0]` is absolute, every later entry is an offset
    /// from the previously produced point.
    pub fn by_offsets(steps: [Vec2; N]) -> Self {
        let mut points = steps;
        for i in 1..N {
            points[i] = points[i - 1] + steps[i];
        }
        Self(points)
    }

    /// Points as a slice.
    pub fn as_slice(&self) -> &[Vec2] {
        &self.0
    }

    /// Vertex count, always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for `Verts<0>`.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Apply `f` to every point.
    pub fn map(self, mut f: impl FnMut(Vec2) -> Vec2) -> Self {
        Self(self.0.map(&mut f))
    }

    /// Rotate every point about the origin.
    pub fn rotated(self, angle: f64) -> Self {
        self.map(|p| p.rotated(angle))
    }
}

impl<const N: usize> Index<usize> for Verts<N> {
    type Output = Vec2;

    fn index(&self, index: usize) -> &Vec2 {
        &self.0[index]
    }
}

impl<const N: usize> Add<Vec2> for Verts<N> {
    type Output = Self;

    fn add(self, offset: Vec2) -> Self {
        self.map(|p| p + offset)
    }
}

impl<const N: usize> Sub<Vec2> for Verts<N> {
    type Output = Self;

    fn sub(self, offset: Vec2) -> Self {
        self.map(|p| p - offset)
    }
}

impl<const N: usize> Mul<f64> for Verts<N> {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        self.map(|p| p * scale)
    }
}

/// Per-axis scale.
impl<const N: usize> Mul<Vec2> for Verts<N> {
    type Output = Self;

    fn mul(self, scale: Vec2) -> Self {
        self.map(|p| p.hadamard(scale))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geom/verts.rs"]
mod tests;
