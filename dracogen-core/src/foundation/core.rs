use crate::foundation::math::safe_ratio0;

pub use kurbo::Vec2;

/// Vector helpers the rasterizer needs on top of [`kurbo::Vec2`].
///
/// Normal convention, used everywhere: for a direction `d`,
/// `right_normal(d) = normalize(-d.y, d.x)` and `left_normal(d) = normalize(d.y, -d.x)`.
pub trait VecExt: Copy {
    /// Unit vector in the same direction; the zero vector stays zero.
    fn safe_normalize(self) -> Self;
    /// Component-wise product.
    fn hadamard(self, other: Self) -> Self;
    /// Counterclockwise quarter turn, `(-y, x)`, not normalized.
    fn perp(self) -> Self;
    /// Normalized `(y, -x)`.
    fn left_normal(self) -> Self;
    /// Normalized `(-y, x)`.
    fn right_normal(self) -> Self;
    /// Rotate about the origin, counterclockwise for positive radians in a y-up frame.
    fn rotated(self, angle: f64) -> Self;
    /// `(y, x)`.
    fn swap_components(self) -> Self;
}

impl VecExt for Vec2 {
    fn safe_normalize(self) -> Self {
        self * safe_ratio0(1.0, self.length())
    }

    fn hadamard(self, other: Self) -> Self {
        Vec2::new(self.x * other.x, self.y * other.y)
    }

    fn perp(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    fn left_normal(self) -> Self {
        Vec2::new(self.y, -self.x).safe_normalize()
    }

    fn right_normal(self) -> Self {
        Vec2::new(-self.y, self.x).safe_normalize()
    }

    fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn swap_components(self) -> Self {
        Vec2::new(self.y, self.x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
