use crate::foundation::core::Vec2;
use crate::foundation::math::unlerp;
use crate::geom::verts::Verts;

/// Where an arc-length fraction lands on a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    /// Index of the segment that owns the fraction.
    pub segment: usize,
    /// Parameter inside that segment, `[0, 1]`.
    pub local_t: f64,
    /// Resolved position.
    pub position: Vec2,
    /// Unnormalized tangent.
    pub tangent: Vec2,
}

/// Sum of Euclidean segment lengths.
pub fn polyline_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

/// Find the segment owning fraction `p` of `total`.
///
/// Segments own half-open ranges `[start, start + len/total)`, so a boundary resolves to the later
/// segment. `p` below 0 clamps to 0; `p >= 1`, or a value lost to accumulated rounding just below
/// 1, resolves to the end (`t = 1`) of the last non-degenerate segment. Returns `None` for a
/// zero-length path or a NaN fraction.
pub(crate) fn locate_fraction(lengths: &[f64], total: f64, p: f64) -> Option<(usize, f64)> {
    if p.is_nan() || !(total > 0.0) || !total.is_finite() {
        return None;
    }
    let p = p.max(0.0);

    if p < 1.0 {
        let mut start = 0.0;
        for (i, len) in lengths.iter().enumerate() {
            let end = start + len / total;
            if start <= p && p < end {
                return Some((i, unlerp(start, end, p)));
            }
            start = end;
        }
    }

    let last = lengths.iter().rposition(|&len| len > 0.0)?;
    Some((last, 1.0))
}

/// Offset every vertex of `line` by `offset(fraction of length at that vertex)`.
pub fn line_offset_parametric<const N: usize>(
    line: Verts<N>,
    offset: impl Fn(f64) -> Vec2,
) -> Verts<N> {
    let total = polyline_length(line.as_slice());
    let mut out = line;
    let mut fraction = 0.0;
    for i in 0..N {
        if i > 0 && total > 0.0 {
            fraction += (line[i] - line[i - 1]).length() / total;
        }
        out.0[i] = line[i] + offset(fraction);
    }
    out
}

/// Resolve fraction `p` of a polyline's length to a position and segment direction.
pub fn sample_polyline(points: &[Vec2], p: f64) -> Option<PathSample> {
    let lengths: Vec<f64> = points.windows(2).map(|w| (w[1] - w[0]).length()).collect();
    let total = lengths.iter().sum();
    let (segment, local_t) = locate_fraction(&lengths, total, p)?;
    let a = points[segment];
    let b = points[segment + 1];
    let tangent = b - a;
    Some(PathSample {
        segment,
        local_t,
        position: a + tangent * local_t,
        tangent,
    })
}

/// Place `shape` at fraction `p` of a polyline.
///
/// `place` receives the shape, the fraction, the segment direction and the position, and returns
/// the placed shape. `None` when the line cannot be sampled.
pub fn line_transform_parametric<T>(
    points: &[Vec2],
    shape: T,
    p: f64,
    place: impl FnOnce(T, f64, Vec2, Vec2) -> T,
) -> Option<T> {
    let sample = sample_polyline(points, p)?;
    Some(place(shape, p, sample.tangent, sample.position))
}

#[cfg(test)]
#[path = "../../tests/unit/geom/polyline.rs"]
mod tests;
