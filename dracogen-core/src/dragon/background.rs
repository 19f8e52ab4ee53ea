use crate::dragon::params::{CaveParams, StalactiteRow};
use crate::foundation::core::Vec2;
use crate::geom::verts::{Quad, Tri, Verts};
use crate::raster::blend::Paint;
use crate::raster::canvas::Rasterizer;

/// Unit spike hanging down from its base; negated for floor spikes.
pub const STALACTITE: Tri = Verts::new([
    Vec2::new(-0.5, 0.0),
    Vec2::new(0.0, -7.0),
    Vec2::new(0.5, 0.0),
]);

const BACKDROP: Quad = Verts::new([
    Vec2::new(-256.0, -256.0),
    Vec2::new(-256.0, 256.0),
    Vec2::new(256.0, 256.0),
    Vec2::new(256.0, -256.0),
]);

struct RowLayout {
    inclusive: bool,
    edge_growth: f64,
    base_y: f64,
    arch: f64,
    flip: bool,
    dv: f64,
}

const ROW_LAYOUTS: [RowLayout; 4] = [
    RowLayout {
        inclusive: true,
        edge_growth: 20.0,
        base_y: 190.0,
        arch: 40.0,
        flip: false,
        dv: -0.03,
    },
    RowLayout {
        inclusive: false,
        edge_growth: 10.0,
        base_y: 280.0,
        arch: 60.0,
        flip: false,
        dv: 0.0,
    },
    RowLayout {
        inclusive: true,
        edge_growth: 20.0,
        base_y: -210.0,
        arch: -40.0,
        flip: true,
        dv: -0.03,
    },
    RowLayout {
        inclusive: false,
        edge_growth: 10.0,
        base_y: -310.0,
        arch: -60.0,
        flip: true,
        dv: 0.0,
    },
];

/// Draw the cave backdrop: rock fill, two darker chambers, then ceiling and floor spikes.
///
/// Spikes grow toward the row ends and the row arches away from the centre.
pub fn draw_cave<R: Rasterizer + ?Sized>(target: &mut R, cave: &CaveParams) {
    target.fill_quad(BACKDROP, Paint::new(cave.color));
    target.fill_oval(Vec2::ZERO, cave.outer, Paint::new(cave.color.delta_v(-0.03)));
    target.fill_oval(Vec2::ZERO, cave.inner, Paint::new(cave.color.delta_v(-0.06)));

    for (row, layout) in cave.rows.iter().zip(&ROW_LAYOUTS) {
        draw_row(target, row, layout, Paint::new(cave.color.delta_v(layout.dv)));
    }
}

fn draw_row<R: Rasterizer + ?Sized>(
    target: &mut R,
    row: &StalactiteRow,
    layout: &RowLayout,
    paint: Paint,
) {
    let n = row.divisor.max(1) as f64;
    let count = if layout.inclusive { row.divisor + 1 } else { row.divisor };
    for (i, &size) in row.sizes.iter().take(count).enumerate() {
        let x = i as f64 / n;
        let arch = -4.0 * x * x + 4.0 * x;
        let mut scale = size + (1.0 - arch) * layout.edge_growth;
        if layout.flip {
            scale = -scale;
        }
        let base = Vec2::new((x - 0.5) * 400.0, layout.base_y + arch * layout.arch);
        target.fill_triangle(STALACTITE * scale + base, paint);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dragon/background.rs"]
mod tests;
