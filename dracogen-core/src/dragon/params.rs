use std::f64::consts::PI;

use crate::color::Hsva;
use crate::curve::model::QuadraticCurve;
use crate::dragon::profile::{HornProfile, NeckProfile, SnootProfile};
use crate::foundation::core::{Vec2, VecExt};
use crate::foundation::error::DracoResult;
use crate::geom::verts::Verts;
use crate::random::{Range, RandomSource};

/// Dorsal plate row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateStyle {
    /// Plates along the neck.
    pub count: usize,
    /// How far the plate's back edge is pushed in.
    pub concavity: f64,
    /// 1 to 3 rows; rows 2 and 3 are smaller plates lower on the neck.
    pub layers: u32,
}

impl PlateStyle {
    /// Unit plate outline pointing along +x.
    pub fn shape(&self) -> Verts<5> {
        Verts::new([
            Vec2::new(self.concavity, 0.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(-1.0, -0.9),
            Vec2::new(-1.0, 0.9),
            Vec2::new(0.0, 1.0),
        ])
    }
}

/// Every random choice behind one dragon, drawn up front in a fixed order.
#[derive(Clone, Debug, PartialEq)]
pub struct DragonParams {
    /// Body colour.
    pub scale_color: Hsva,
    /// Iris colour.
    pub eye_color: Hsva,
    /// Mouth interior colour.
    pub mouth_color: Hsva,
    /// Horn and spine colour.
    pub horn_color: Hsva,
    /// Tooth colour.
    pub tooth_color: Hsva,
    /// Plate colour: horn hue at body saturation and value.
    pub plate_color: Hsva,

    /// Head radii.
    pub head_dim: Vec2,
    /// Head centre in world units.
    pub head_offset: Vec2,
    /// Snout profile.
    pub snoot: SnootProfile,
    /// Neck profile.
    pub neck: NeckProfile,
    /// Spine scale.
    pub spine_dim: Vec2,
    /// Root horn profile; horn `i` is scaled by `0.8^i`.
    pub horn: HornProfile,
    /// 1 to 3 horns.
    pub horn_count: usize,

    /// Eye radii.
    pub eye_size: Vec2,
    /// Eye centre relative to the head.
    pub eye_offset: Vec2,
    /// Horn root relative to the head.
    pub horn_offset: Vec2,
    /// Extra shift for the horns on the far side of the head.
    pub far_horn_offset: Vec2,
    /// Angle between consecutive horns.
    pub horn_spacing_angle: f64,
    /// Angle of the first horn around the head.
    pub horn_angle_start: f64,
    /// Horn ring radius relative to the head.
    pub horn_radius_scale: f64,

    /// Delta-encoded neck control points after the head centre (three quadratic segments).
    pub neck_offsets: [Vec2; 6],
    /// Delta-encoded snout polyline; the first entry is relative to the head centre.
    pub snoot_offsets: [Vec2; 4],
    /// Delta-encoded horn polyline at the root.
    pub horn_offsets: [Vec2; 5],
    /// Optional plate row.
    pub plates: Option<PlateStyle>,

    /// Eye shadow shift.
    pub eye_shadow_offset: Vec2,
    /// Pupil horizontal position inside the eye.
    pub pupil_x: f64,
    /// Pupil half-width.
    pub pupil_width: f64,
}

impl DragonParams {
    /// Draw a dragon's parameters.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let scale_color = rng.hsv(
            Range::between(0.0, 360.0),
            Range::between(0.3, 0.7),
            Range::between(0.3, 0.6),
        );
        let eye_color = rng.hsv(
            Range::around(scale_color.h, 90.0),
            Range::between(0.7, 1.0),
            Range::between(0.6, 0.8),
        );
        let mouth_color = rng.hsv(
            Range::around(scale_color.h, 5.0),
            Range::between(0.4, 0.8),
            Range::between(0.2, 0.3),
        );
        let horn_hue = scale_color.h + rng.sign() * rng.between(45.0, 90.0);
        let horn_color = Hsva::new(horn_hue, rng.between(0.4, 0.7), rng.between(0.4, 0.7));
        let tooth_color = rng.hsv(
            Range::around(horn_color.h, 5.0),
            Range::between(0.0, 0.3),
            Range::between(0.8, 1.0),
        );
        let plate_color = Hsva {
            s: scale_color.s,
            v: scale_color.v,
            ..horn_color
        };

        let head_dim = Vec2::new(rng.between(70.0, 85.0), rng.between(60.0, 75.0));
        let head_offset = Vec2::new(rng.between(-20.0, 40.0), rng.between(-10.0, 20.0));

        let snoot = SnootProfile {
            base: head_dim.y * rng.between(1.5, 1.8),
            scale: rng.between(-10.0, -35.0),
            parts_proportion: 0.8,
            mouth_size: rng.between(0.0, 0.3),
            overbite: rng.between(-20.0, 2.0),
        };
        let neck = NeckProfile {
            base: head_dim.y * 2.0,
            scale: rng.between(20.0, 50.0),
            highlight: 0.7,
        };
        let spine_dim = Vec2::new(rng.between(4.0, 7.0), rng.between(5.0, 8.0));

        let horn_base = rng.between(30.0, 60.0);
        let horn = HornProfile {
            base: horn_base,
            scale: -horn_base + rng.between(5.0, 8.0),
        };
        let horn_count = rng.choice(3) + 1;

        let eye_size = Vec2::new(rng.between(20.0, 30.0), rng.between(10.0, 15.0));
        let eye_offset = Vec2::new(rng.between(10.0, 20.0), 15.0);
        let far_eye_offset = Vec2::new(
            head_dim.x - 20.0,
            (snoot.base - head_dim.y - 1.5 * eye_size.y).min(head_dim.y * 0.6),
        );

        let horn_offset = Vec2::new(rng.between(-30.0, -50.0), rng.between(10.0, 20.0));
        let far_horn_offset = Vec2::new(head_dim.x / 3.0, 0.5 * far_eye_offset.y);
        let horn_spacing_angle = rng.between(0.7, 1.4);
        let horn_angle_start = PI - rng.between(0.7, 1.4);
        let horn_radius_scale = rng.between(0.8, 0.9);

        let head_angle = rng.between(-PI / 4.0, PI / 4.0);
        let head_dir = Vec2::new(head_angle.cos(), head_angle.sin()) * neck.scale;
        let neck_offsets = [
            -head_dir,
            Vec2::new(rng.around(-70.0, 20.0), rng.between(-50.0, -10.0)),
            Vec2::new(rng.between(-110.0, -70.0), rng.around(-70.0, 20.0)),
            Vec2::new(rng.around(90.0, 10.0), rng.around(-100.0, 10.0)),
            Vec2::new(170.0, -100.0),
            Vec2::new(-200.0, -100.0),
        ];

        let snoot_offsets = [
            Vec2::new(5.0, -head_dim.y + snoot.base / 2.0),
            Vec2::new(40.0, rng.between(0.0, -2.0)),
            Vec2::new(rng.between(25.0, 35.0), rng.between(0.0, -5.0)),
            Vec2::new(rng.between(30.0, 50.0), rng.between(0.0, -5.0)),
        ];

        let horn_offsets = [
            Vec2::ZERO,
            Vec2::new(rng.between(-30.0, -60.0), rng.between(20.0, 40.0)),
            Vec2::new(rng.between(5.0, -90.0), rng.between(5.0, 50.0)),
            Vec2::new(-10.0, 10.0),
            Vec2::new(rng.between(-5.0, -35.0), rng.between(5.0, 20.0)),
        ];

        let layers = rng.choice(3) as u32 + 1;
        let plates = (rng.choice(2) == 1).then(|| PlateStyle {
            count: rng.between(20.0, 22.0) as usize,
            concavity: rng.between(0.0, 0.4),
            layers,
        });

        let eye_shadow_offset =
            Vec2::new(rng.between(-3.0, 3.0), rng.sign() * rng.between(2.0, 5.0));
        let pupil_x = rng.between(-0.4, 0.7) * eye_size.x;
        let pupil_width = rng.between(5.0, 7.0);

        Self {
            scale_color,
            eye_color,
            mouth_color,
            horn_color,
            tooth_color,
            plate_color,
            head_dim,
            head_offset,
            snoot,
            neck,
            spine_dim,
            horn,
            horn_count,
            eye_size,
            eye_offset,
            horn_offset,
            far_horn_offset,
            horn_spacing_angle,
            horn_angle_start,
            horn_radius_scale,
            neck_offsets,
            snoot_offsets,
            horn_offsets,
            plates,
            eye_shadow_offset,
            pupil_x,
            pupil_width,
        }
    }

    /// Neck centreline from the head back into the body.
    pub fn neck_curve(&self) -> DracoResult<QuadraticCurve> {
        QuadraticCurve::from_offsets(self.head_offset, &self.neck_offsets)
    }

    /// Snout polyline in world units.
    pub fn snoot_line(&self) -> Verts<4> {
        Verts::by_offsets(self.snoot_offsets) + self.head_offset
    }

    /// Taper of horn `index`.
    pub fn horn_profile(&self, index: usize) -> HornProfile {
        self.horn.scaled(0.8f64.powi(index as i32))
    }

    /// Root of near-side horn `index`.
    pub fn horn_position(&self, index: usize) -> Vec2 {
        let angle = self.horn_angle_start + self.horn_spacing_angle * index as f64;
        let ring = (self.head_dim * self.horn_radius_scale)
            .hadamard(Vec2::new(0.5 * angle.cos(), 0.5 * angle.sin()));
        let droop = Vec2::new(-20.0, -40.0) * (index as f64 / 3.0).powi(2);
        ring + droop + self.horn_offset + self.head_offset
    }

    /// Horn `index` polyline; `far` shifts it behind the head.
    pub fn horn_line(&self, index: usize, far: bool) -> Verts<5> {
        let shape = Verts::by_offsets(self.horn_offsets) * 0.8f64.powi(index as i32);
        let root = self.horn_position(index) + if far { self.far_horn_offset } else { Vec2::ZERO };
        shape.rotated(index as f64 * self.horn_spacing_angle * 0.5) + root
    }

    /// Pupil half-height, following the eye's outline at `pupil_x`.
    pub fn pupil_height(&self) -> f64 {
        let r = self.pupil_x / self.eye_size.x;
        self.eye_size.y * (1.0 - r * r).max(0.0).sqrt()
    }
}

/// One row of stalactites (or stalagmites) in the cave.
#[derive(Clone, Debug, PartialEq)]
pub struct StalactiteRow {
    /// Spacing divisor across the 400-unit row.
    pub divisor: usize,
    /// Random size component per spike.
    pub sizes: Vec<f64>,
}

/// Random choices for the cave backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct CaveParams {
    /// Rock colour.
    pub color: Hsva,
    /// Outer chamber radii.
    pub outer: Vec2,
    /// Inner chamber radii.
    pub inner: Vec2,
    /// Ceiling front, ceiling back, floor front, floor back.
    pub rows: [StalactiteRow; 4],
}

impl CaveParams {
    /// Draw a cave's parameters.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let color = rng.hsv(
            Range::between(0.0, 360.0),
            Range::between(0.0, 0.3),
            Range::between(0.09, 0.15),
        );
        let outer = Vec2::new(rng.around(240.0, 10.0), rng.around(230.0, 10.0));
        let inner = Vec2::new(rng.around(205.0, 10.0), rng.around(195.0, 10.0));

        let row = |rng: &mut R, base: usize, inclusive: bool, size: Range| {
            let divisor = rng.choice(8) + base;
            let n = if inclusive { divisor + 1 } else { divisor };
            StalactiteRow {
                divisor,
                sizes: (0..n).map(|_| rng.range(size)).collect(),
            }
        };
        let rows = [
            row(rng, 12, true, Range::between(16.0, 24.0)),
            row(rng, 8, false, Range::between(18.0, 42.0)),
            row(rng, 12, true, Range::between(16.0, 24.0)),
            row(rng, 8, false, Range::between(18.0, 42.0)),
        ];
        Self {
            color,
            outer,
            inner,
            rows,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dragon/params.rs"]
mod tests;
