use crate::curve::bezier::BezierSegment;
use crate::curve::model::Curve;
use crate::foundation::core::Vec2;
use crate::geom::polyline::{PathSample, locate_fraction};

impl<S: BezierSegment> Curve<S> {
    /// Resolve arc-length fraction `p` to a segment, position and tangent.
    ///
    /// Fractions are measured against the cached approximate lengths. `p >= 1` resolves to the end
    /// of the final segment; `None` for a zero-length curve or a NaN fraction.
    pub fn sample(&self, p: f64) -> Option<PathSample> {
        let (segment, local_t) = locate_fraction(self.lengths(), self.total_length(), p)?;
        let seg = &self.segments()[segment];
        Some(PathSample {
            segment,
            local_t,
            position: seg.eval(local_t),
            tangent: seg.derivative(local_t),
        })
    }

    /// Place `shape` at fraction `p` along the curve.
    ///
    /// `place` receives the shape, `p`, the unnormalized tangent and the resolved position, and
    /// returns the placed shape.
    pub fn transform_parametric<T>(
        &self,
        shape: T,
        p: f64,
        place: impl FnOnce(T, f64, Vec2, Vec2) -> T,
    ) -> Option<T> {
        let sample = self.sample(p)?;
        Some(place(shape, p, sample.tangent, sample.position))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sample.rs"]
mod tests;
