use crate::curve::bezier::{BezierSegment, Cubic, Quadratic};
use crate::foundation::core::Vec2;
use crate::foundation::error::{DracoError, DracoResult};

/// Default sub-step count for arc-length approximation.
pub const DEFAULT_APPROXIMATION_STEPS: usize = 20;

/// A chain of Bezier segments with cached approximate arc lengths.
///
/// Segment `i`'s end is segment `i + 1`'s start. Lengths are computed once at construction and
/// never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<S> {
    segments: Vec<S>,
    lengths: Vec<f64>,
    total_length: f64,
    approximation_steps: usize,
}

/// Chain of quadratic segments.
pub type QuadraticCurve = Curve<Quadratic>;
/// Chain of cubic segments.
pub type CubicCurve = Curve<Cubic>;

impl<S: BezierSegment> Curve<S> {
    /// Build from absolute points: `start` then `S::POINTS` points per segment.
    pub fn from_points(start: Vec2, points: &[Vec2]) -> DracoResult<Self> {
        Self::from_points_with_steps(start, points, DEFAULT_APPROXIMATION_STEPS)
    }

    /// [`Curve::from_points`] with an explicit arc-length sub-step count.
    pub fn from_points_with_steps(
        start: Vec2,
        points: &[Vec2],
        approximation_steps: usize,
    ) -> DracoResult<Self> {
        check_point_count::<S>(points.len())?;
        let mut segments = Vec::with_capacity(points.len() / S::POINTS);
        let mut seg_start = start;
        for chunk in points.chunks_exact(S::POINTS) {
            let seg = S::from_points(seg_start, chunk);
            seg_start = seg.end();
            segments.push(seg);
        }
        Self::from_segments(segments, approximation_steps)
    }

    /// Build from delta-encoded points: `start` is absolute, every following point is an offset
    /// from the previously produced point.
    pub fn from_offsets(start: Vec2, offsets: &[Vec2]) -> DracoResult<Self> {
        Self::from_offsets_with_steps(start, offsets, DEFAULT_APPROXIMATION_STEPS)
    }

    /// [`Curve::from_offsets`] with an explicit arc-length sub-step count.
    pub fn from_offsets_with_steps(
        start: Vec2,
        offsets: &[Vec2],
        approximation_steps: usize,
    ) -> DracoResult<Self> {
        check_point_count::<S>(offsets.len())?;
        let mut running = start;
        let absolute: Vec<Vec2> = offsets
            .iter()
            .map(|&d| {
                running += d;
                running
            })
            .collect();
        Self::from_points_with_steps(start, &absolute, approximation_steps)
    }

    /// Wrap prebuilt segments. Segments are taken as given; continuity is the caller's concern.
    pub fn from_segments(segments: Vec<S>, approximation_steps: usize) -> DracoResult<Self> {
        if segments.is_empty() {
            return Err(DracoError::validation("curve needs at least one segment"));
        }
        if approximation_steps == 0 {
            return Err(DracoError::validation(
                "curve approximation steps must be > 0",
            ));
        }
        let lengths: Vec<f64> = segments
            .iter()
            .map(|s| s.approximate_length(approximation_steps))
            .collect();
        let total_length = lengths.iter().sum();
        Ok(Self {
            segments,
            lengths,
            total_length,
            approximation_steps,
        })
    }

    /// Segments in order.
    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    /// Cached per-segment approximate lengths.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Sum of [`Curve::lengths`].
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Sub-step count the lengths were computed with.
    pub fn approximation_steps(&self) -> usize {
        self.approximation_steps
    }

    /// First point of the first segment.
    pub fn start(&self) -> Vec2 {
        self.segments[0].start()
    }

    /// Last point of the last segment.
    pub fn end(&self) -> Vec2 {
        self.segments[self.segments.len() - 1].end()
    }
}

fn check_point_count<S: BezierSegment>(len: usize) -> DracoResult<()> {
    if len == 0 || len % S::POINTS != 0 {
        return Err(DracoError::validation(format!(
            "curve point list must hold a positive multiple of {} points, got {len}",
            S::POINTS
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/curve/model.rs"]
mod tests;
