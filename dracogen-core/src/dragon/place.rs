//! Decorations placed along the neck curve.
//!
//! Every placement samples the neck at a fraction, pushes the anchor out to one side of the
//! ribbon and, for spaced decorations, asks a [`DecorationSpacer`] whether the anchor is far
//! enough from the previous one. A rejected placement yields `None` and draws nothing.

use crate::curve::model::QuadraticCurve;
use crate::dragon::profile::NeckProfile;
use crate::foundation::core::{Vec2, VecExt};
use crate::geom::verts::Verts;

/// Minimum spacing between neck spines.
pub const SPINE_SPACING: f64 = 30.0;
/// Minimum spacing between neck plates.
pub const PLATE_SPACING: f64 = 35.0;
/// Plates never sit closer than this to the head centre.
pub const HEAD_CLEARANCE: f64 = 80.0;

/// Unit spine outline; scaled by the dragon's spine size.
pub const SPINE_SHAPE: Verts<5> = Verts::new([
    Vec2::new(-3.0, 0.0),
    Vec2::new(4.0, 0.0),
    Vec2::new(2.0, 2.0),
    Vec2::new(-4.0, 3.0),
    Vec2::new(-3.0, 2.0),
]);

/// Keeps consecutive decorations apart.
///
/// Each decoration row owns one spacer. Placements near the start of the curve (`p < 0.01`) are
/// always spaced acceptably, as is the first placement of a row.
#[derive(Clone, Debug)]
pub struct DecorationSpacer {
    min_distance: f64,
    avoid: Option<(Vec2, f64)>,
    last: Option<Vec2>,
}

impl DecorationSpacer {
    /// Spacer with no exclusion zone.
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            avoid: None,
            last: None,
        }
    }

    /// Reject anchors within `radius` of `point` regardless of spacing.
    pub fn avoiding(mut self, point: Vec2, radius: f64) -> Self {
        self.avoid = Some((point, radius));
        self
    }

    /// Last accepted anchor.
    pub fn last(&self) -> Option<Vec2> {
        self.last
    }

    /// Check `anchor` placed at fraction `p`; accepted anchors become the new reference.
    pub fn accept(&mut self, anchor: Vec2, p: f64) -> bool {
        let spaced = p < 0.01
            || self
                .last
                .is_none_or(|last| (anchor - last).length() > self.min_distance);
        let clear = self
            .avoid
            .is_none_or(|(point, radius)| (point - anchor).length() > radius);
        if spaced && clear {
            self.last = Some(anchor);
            true
        } else {
            false
        }
    }
}

fn place_spaced<const N: usize>(
    neck: &QuadraticCurve,
    shape: Verts<N>,
    p: f64,
    spacer: &mut DecorationSpacer,
    anchor: impl FnOnce(f64, Vec2, Vec2) -> Vec2,
    pose: impl FnOnce(Verts<N>, f64, Vec2) -> Verts<N>,
) -> Option<Verts<N>> {
    neck.transform_parametric(Some(shape), p, |shape, p, dir, pos| {
        let at = anchor(p, dir, pos);
        let angle = dir.y.atan2(dir.x);
        shape
            .filter(|_| spacer.accept(at, p))
            .map(|shape| pose(shape, angle, at))
    })
    .flatten()
}

/// Spine on the outer edge of the neck, pointing back along it.
pub fn place_spine(
    neck: &QuadraticCurve,
    profile: &NeckProfile,
    size: Vec2,
    p: f64,
    spacer: &mut DecorationSpacer,
) -> Option<Verts<5>> {
    place_spaced(
        neck,
        SPINE_SHAPE,
        p,
        spacer,
        |p, dir, pos| pos - dir.right_normal() * (profile.thickness(p) * 0.47),
        |shape, angle, at| (shape * size).rotated(std::f64::consts::PI + angle) + at,
    )
}

/// Main dorsal plate; grows from 15 to 35 units along the neck.
pub fn place_plate(
    neck: &QuadraticCurve,
    profile: &NeckProfile,
    shape: Verts<5>,
    p: f64,
    spacer: &mut DecorationSpacer,
) -> Option<Verts<5>> {
    place_spaced(
        neck,
        shape,
        p,
        spacer,
        |p, dir, pos| pos + dir.left_normal() * (profile.thickness(p) * (0.42 - 0.15 * p)),
        |shape, angle, at| (shape * (15.0 + 20.0 * p)).rotated(angle) + at,
    )
}

/// Smaller plate at `radius` of the neck thickness from the centreline.
pub fn place_secondary_plate(
    neck: &QuadraticCurve,
    profile: &NeckProfile,
    shape: Verts<5>,
    radius: f64,
    p: f64,
    spacer: &mut DecorationSpacer,
) -> Option<Verts<5>> {
    place_spaced(
        neck,
        shape,
        p,
        spacer,
        |p, dir, pos| pos + dir.left_normal() * (profile.thickness(p) * radius),
        |shape, angle, at| (shape * (5.0 + 10.0 * p)).rotated(angle) + at,
    )
}

/// Centre of a scale glint at `radius` of the neck thickness, belly side for positive radii.
pub fn place_glint(
    neck: &QuadraticCurve,
    profile: &NeckProfile,
    radius: f64,
    p: f64,
) -> Option<Vec2> {
    neck.transform_parametric(Vec2::ZERO, p, |glint, p, dir, pos| {
        glint + pos + dir.right_normal() * (radius * profile.thickness(p))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/dragon/place.rs"]
mod tests;
