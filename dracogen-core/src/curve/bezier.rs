use crate::foundation::core::Vec2;

/// One Bezier segment of a chained curve.
///
/// `POINTS` is how many points a segment adds after the shared start point: 2 for quadratic
/// (control, end), 3 for cubic (control1, control2, end).
pub trait BezierSegment: Copy + std::fmt::Debug {
    /// Points contributed per segment after the shared start.
    const POINTS: usize;

    /// Build a segment from its start and exactly `POINTS` following points.
    fn from_points(start: Vec2, rest: &[Vec2]) -> Self;

    /// First point.
    fn start(&self) -> Vec2;
    /// Last point.
    fn end(&self) -> Vec2;
    /// Position at parameter `t`.
    fn eval(&self, t: f64) -> Vec2;
    /// Unnormalized tangent at parameter `t`.
    fn derivative(&self, t: f64) -> Vec2;

    /// Chord-sum length over `steps` evenly spaced samples. Approximate, never adaptive.
    fn approximate_length(&self, steps: usize) -> f64 {
        let steps = steps.max(1);
        let mut prev = self.start();
        let mut len = 0.0;
        for i in 1..=steps {
            let next = self.eval(i as f64 / steps as f64);
            len += (next - prev).length();
            prev = next;
        }
        len
    }
}

/// `B(t) = (1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`.
pub fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// `B'(t) = 2(1-t)(p1-p0) + 2t(p2-p1)`.
pub fn quadratic_derivative(p0: Vec2, p1: Vec2, p2: Vec2, t: f64) -> Vec2 {
    (p1 - p0) * (2.0 * (1.0 - t)) + (p2 - p1) * (2.0 * t)
}

/// Cubic as the lerp of two quadratics.
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    quadratic_point(p0, p1, p2, t) * (1.0 - t) + quadratic_point(p1, p2, p3, t) * t
}

/// `B'(t) = 3(1-t)^2(p1-p0) + 6(1-t)t(p2-p1) + 3t^2(p3-p2)`.
pub fn cubic_derivative(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

/// Quadratic segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    /// Start point.
    pub start: Vec2,
    /// Control point.
    pub control: Vec2,
    /// End point.
    pub end: Vec2,
}

impl BezierSegment for Quadratic {
    const POINTS: usize = 2;

    fn from_points(start: Vec2, rest: &[Vec2]) -> Self {
        Self {
            start,
            control: rest[0],
            end: rest[1],
        }
    }

    fn start(&self) -> Vec2 {
        self.start
    }

    fn end(&self) -> Vec2 {
        self.end
    }

    fn eval(&self, t: f64) -> Vec2 {
        quadratic_point(self.start, self.control, self.end, t)
    }

    fn derivative(&self, t: f64) -> Vec2 {
        quadratic_derivative(self.start, self.control, self.end, t)
    }
}

/// Cubic segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    /// Start point.
    pub start: Vec2,
    /// First control point.
    pub control1: Vec2,
    /// Second control point.
    pub control2: Vec2,
    /// End point.
    pub end: Vec2,
}

impl BezierSegment for Cubic {
    const POINTS: usize = 3;

    fn from_points(start: Vec2, rest: &[Vec2]) -> Self {
        Self {
            start,
            control1: rest[0],
            control2: rest[1],
            end: rest[2],
        }
    }

    fn start(&self) -> Vec2 {
        self.start
    }

    fn end(&self) -> Vec2 {
        self.end
    }

    fn eval(&self, t: f64) -> Vec2 {
        cubic_point(self.start, self.control1, self.control2, self.end, t)
    }

    fn derivative(&self, t: f64) -> Vec2 {
        cubic_derivative(self.start, self.control1, self.control2, self.end, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
