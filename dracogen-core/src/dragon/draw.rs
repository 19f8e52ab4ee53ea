use crate::color::{Hsva, Rgba};
use crate::curve::model::QuadraticCurve;
use crate::dragon::params::DragonParams;
use crate::dragon::place::{
    DecorationSpacer, HEAD_CLEARANCE, PLATE_SPACING, SPINE_SPACING, place_glint, place_plate,
    place_secondary_plate, place_spine,
};
use crate::dragon::profile::SnootProfile;
use crate::foundation::core::Vec2;
use crate::foundation::error::DracoResult;
use crate::geom::polyline::{line_offset_parametric, line_transform_parametric};
use crate::geom::verts::{Tri, Verts};
use crate::raster::blend::Paint;
use crate::raster::canvas::Rasterizer;
use crate::ribbon::{draw_bezier_ribbon, draw_ribbon};

const SPINE_COUNT: usize = 20;

// offset and thickness along the snout, plus colour
type JawBand = (fn(&SnootProfile, f64) -> Vec2, fn(&SnootProfile, f64) -> f64, Hsva);

const TOOTH: Tri = Verts::new([
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.732_050_807_568_877_2),
    Vec2::new(1.0, 0.0),
]);

/// Draw the whole creature back to front.
///
/// Errors only if the neck control points cannot form a curve.
pub fn draw_dragon<R: Rasterizer + ?Sized>(
    target: &mut R,
    params: &DragonParams,
    segments_per_curve: usize,
) -> DracoResult<()> {
    let neck = params.neck_curve()?;

    draw_horns(target, params, true);
    draw_spines(target, params, &neck);
    draw_neck(target, params, &neck, segments_per_curve);
    draw_head(target, params);
    draw_glints(target, params, &neck);
    draw_plates(target, params, &neck);
    draw_snoot(target, params);
    draw_horn_shadows(target, params);
    draw_horns(target, params, false);
    draw_eye(target, params);
    draw_nostril(target, params);
    Ok(())
}

fn draw_horns<R: Rasterizer + ?Sized>(target: &mut R, params: &DragonParams, far: bool) {
    for i in (0..params.horn_count).rev() {
        let line = params.horn_line(i, far);
        let profile = params.horn_profile(i);
        if far {
            let color = params.horn_color.delta_v(-0.2 - 0.03 * i as f64);
            draw_ribbon(target, line.as_slice(), |p| profile.thickness(p), Paint::new(color), true);
        } else {
            let outline = Paint::new(params.horn_color.delta_v(-0.04));
            draw_ribbon(target, line.as_slice(), |p| profile.thickness(p), outline, true);
            let inner = profile.scaled(0.8);
            draw_ribbon(
                target,
                line.as_slice(),
                |p| inner.thickness(p),
                Paint::new(params.horn_color),
                true,
            );
        }
    }
}

fn draw_spines<R>(target: &mut R, params: &DragonParams, neck: &QuadraticCurve)
where
    R: Rasterizer + ?Sized,
{
    let paint = Paint::new(params.horn_color);
    let mut spacer = DecorationSpacer::new(SPINE_SPACING);
    for i in 0..=SPINE_COUNT {
        let p = i as f64 / SPINE_COUNT as f64;
        if let Some(spine) = place_spine(neck, &params.neck, params.spine_dim, p, &mut spacer) {
            target.fill_poly(spine.as_slice(), paint);
        }
    }
}

fn draw_neck<R: Rasterizer + ?Sized>(
    target: &mut R,
    params: &DragonParams,
    neck: &QuadraticCurve,
    segments_per_curve: usize,
) {
    let profile = params.neck;
    draw_bezier_ribbon(
        target,
        neck,
        |p| profile.thickness(p),
        Paint::new(params.scale_color),
        segments_per_curve,
        true,
    );
    draw_bezier_ribbon(
        target,
        neck,
        |p| profile.highlight_thickness(p),
        Paint::new(params.scale_color.delta_v(0.03)),
        segments_per_curve,
        true,
    );
}

fn draw_head<R: Rasterizer + ?Sized>(target: &mut R, params: &DragonParams) {
    target.fill_oval(params.head_offset, params.head_dim, Paint::new(params.scale_color));
    target.fill_oval(
        params.head_offset - Vec2::new(params.head_dim.x * 0.1, 0.0),
        params.head_dim * 0.9,
        Paint::new(params.scale_color.delta_v(0.03)),
    );
}

struct Glint {
    radius: f64,
    start: f64,
    step: f64,
    size: Vec2,
    color: Hsva,
}

fn draw_glints<R>(target: &mut R, params: &DragonParams, neck: &QuadraticCurve)
where
    R: Rasterizer + ?Sized,
{
    let bright = params.scale_color.delta_v(0.3);
    let large = Vec2::new(15.0, 10.0);
    let small = Vec2::new(10.0, 7.0);
    let glint = |radius, start, step, size, alpha| Glint {
        radius,
        start,
        step,
        size,
        color: bright.with_alpha(alpha),
    };
    let always = [
        glint(0.22, 0.10, 0.05, large, 0.2),
        glint(0.10, 0.07, 0.05, large, 0.2),
        glint(-0.15, 0.25, 0.1, large, 0.2),
    ];
    let after_first = [
        Glint {
            color: params.scale_color.delta_hsv(0.0, -0.2, 0.3).with_alpha(0.4),
            ..glint(0.15, 0.12, 0.05, small, 0.4)
        },
        glint(-0.03, 0.07, 0.05, small, 0.15),
        glint(0.34, 0.12, 0.05, small, 0.15),
        glint(-0.22, 0.29, 0.1, small, 0.2),
    ];

    for i in 0..8 {
        let rows: &[Glint] = if i > 0 { &after_first } else { &[] };
        for g in always.iter().chain(rows) {
            let p = g.start + g.step * i as f64;
            if let Some(center) = place_glint(neck, &params.neck, g.radius, p) {
                target.fill_oval(center, g.size, Paint::new(g.color));
            }
        }
    }
}

fn draw_plates<R>(target: &mut R, params: &DragonParams, neck: &QuadraticCurve)
where
    R: Rasterizer + ?Sized,
{
    let Some(style) = params.plates else {
        return;
    };
    let plate = style.shape();
    let highlight = plate * 0.9 + Vec2::new(-0.2, 0.2);
    let paint = Paint::new(params.plate_color);
    let highlight_paint = Paint::new(params.plate_color.delta_v(0.05));
    let n = style.count.max(1) as f64;

    let mut main =
        DecorationSpacer::new(PLATE_SPACING).avoiding(params.head_offset, HEAD_CLEARANCE);
    let mut lit = main.clone();
    let mut secondary = main.clone();

    for i in 0..=style.count {
        let p = 0.16 + 0.92 * (i as f64 / n);
        if let Some(shape) = place_plate(neck, &params.neck, plate, p, &mut main) {
            target.fill_poly(shape.as_slice(), paint);
        }
        if let Some(shape) = place_plate(neck, &params.neck, highlight, p, &mut lit) {
            target.fill_poly(shape.as_slice(), highlight_paint);
        }

        if i == style.count || style.layers < 2 {
            continue;
        }
        let mid = (i as f64 + 0.5) / n;
        if let Some(shape) = place_secondary_plate(
            neck,
            &params.neck,
            plate,
            0.22,
            0.08 + 0.92 * mid,
            &mut secondary,
        ) {
            target.fill_poly(shape.as_slice(), paint);
        }
        if style.layers >= 3 {
            if let Some(shape) = place_secondary_plate(
                neck,
                &params.neck,
                plate * 0.8,
                0.12,
                0.10 + 0.92 * mid,
                &mut secondary,
            ) {
                target.fill_poly(shape.as_slice(), paint);
            }
        }
    }
}

fn draw_snoot<R: Rasterizer + ?Sized>(target: &mut R, params: &DragonParams) {
    let snoot = params.snoot_line();
    let profile = params.snoot;
    let scale = params.scale_color;

    let clear = line_offset_parametric(snoot, |p| profile.mouth_clear_offset(p));
    draw_ribbon(
        target,
        clear.as_slice(),
        |p| profile.mouth_clear_thickness(p),
        Paint::replace(Rgba::TRANSPARENT),
        false,
    );

    let mouth = line_offset_parametric(snoot, |p| profile.mouth_offset(p));
    draw_ribbon(
        target,
        mouth.as_slice(),
        |p| profile.mouth_thickness(p),
        Paint::new(params.mouth_color),
        false,
    );

    let back_teeth = line_offset_parametric(snoot, |p| profile.back_tooth_offset(p));
    let front_teeth = line_offset_parametric(snoot, |p| profile.front_tooth_offset(p));
    for i in 0..snoot.len() {
        target.fill_triangle(
            TOOTH * 4.0 + back_teeth[i],
            Paint::new(params.tooth_color.delta_v(-0.3)),
        );
        target.fill_triangle(TOOTH * 6.0 + front_teeth[i], Paint::new(params.tooth_color));
    }

    let bands: [JawBand; 5] = [
        (SnootProfile::bottom_offset, SnootProfile::bottom_thickness, scale),
        (
            SnootProfile::bottom_highlight_offset,
            SnootProfile::bottom_highlight_thickness,
            scale.delta_v(0.03),
        ),
        (SnootProfile::top_offset, SnootProfile::top_thickness, scale),
        (
            SnootProfile::top_highlight_offset,
            SnootProfile::top_highlight_thickness,
            scale.delta_v(0.03),
        ),
        (
            SnootProfile::mouth_line_offset,
            SnootProfile::mouth_line_thickness,
            scale.delta_v(-0.03),
        ),
    ];
    for (offset, thickness, color) in bands {
        let line = line_offset_parametric(snoot, |p| offset(&profile, p));
        draw_ribbon(
            target,
            line.as_slice(),
            |p| thickness(&profile, p),
            Paint::new(color),
            false,
        );
    }
}

fn draw_horn_shadows<R: Rasterizer + ?Sized>(target: &mut R, params: &DragonParams) {
    let soft = Paint::new(Rgba::BLACK.with_alpha(5.0 / 255.0));
    let dark = Paint::new(Rgba::BLACK.with_alpha(34.0 / 255.0));
    for i in (0..params.horn_count).rev() {
        let pos = params.horn_position(i);
        let base = params.horn_profile(i).base;
        target.fill_oval(pos - Vec2::new(4.0, 0.0), Vec2::new(0.60, 0.62) * base, soft);
        target.fill_oval(pos - Vec2::new(4.0, 5.0), Vec2::new(0.55, 0.55) * base, dark);
    }
}

fn draw_eye<R: Rasterizer + ?Sized>(target: &mut R, params: &DragonParams) {
    let center = params.head_offset + params.eye_offset;
    let size = params.eye_size;
    let eye = params.eye_color;

    target.fill_oval(
        center + params.eye_shadow_offset,
        size * 1.1,
        Paint::new(Rgba::BLACK.with_alpha(51.0 / 255.0)),
    );
    target.fill_oval(center, size, Paint::new(eye));
    target.fill_oval(center, size * 0.8, Paint::new(eye.delta_hsv(0.0, -0.1, 0.1)));
    target.fill_oval(
        center + Vec2::new(params.pupil_x, 0.0),
        Vec2::new(params.pupil_width, params.pupil_height()),
        Paint::new(eye.delta_v(-0.8)),
    );
    target.fill_oval(
        center + Vec2::new(0.0, 3.0),
        Vec2::new(0.6 * size.x, 0.3 * size.y),
        Paint::new(eye.delta_hsv(0.0, -0.8, 0.9).with_alpha(0.2)),
    );
}

fn draw_nostril<R: Rasterizer + ?Sized>(target: &mut R, params: &DragonParams) {
    let snoot = params.snoot_line();
    let profile = params.snoot;
    let nostril = line_transform_parametric(snoot.as_slice(), Vec2::ZERO, 0.8, |_, p, dir, pos| {
        profile.nostril(p, dir, pos)
    });
    if let Some(center) = nostril {
        target.fill_oval(
            center,
            Vec2::new(10.0, 5.0),
            Paint::new(params.scale_color.delta_v(-0.8)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dragon/draw.rs"]
mod tests;
