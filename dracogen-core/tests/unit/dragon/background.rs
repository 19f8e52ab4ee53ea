use super::*;
use crate::color::Rgba;
use crate::random::PcgSource;

#[derive(Default)]
struct Recorder {
    tris: Vec<Tri>,
    quads: usize,
    ovals: Vec<(Vec2, Vec2, Rgba)>,
}

impl Rasterizer for Recorder {
    fn fill_triangle(&mut self, tri: Tri, _paint: Paint) {
        self.tris.push(tri);
    }

    fn fill_quad(&mut self, _quad: Quad, _paint: Paint) {
        self.quads += 1;
    }

    fn fill_oval(&mut self, center: Vec2, radius: Vec2, paint: Paint) {
        self.ovals.push((center, radius, paint.color));
    }

    fn fill_oval_slice(&mut self, _c: Vec2, _r: Vec2, _s: Vec2, _e: Vec2, _paint: Paint) {}

    fn line(&mut self, _a: Vec2, _b: Vec2, _paint: Paint) {}

    fn thick_line(&mut self, _a: Vec2, _b: Vec2, _t: f64, _paint: Paint) {}
}

#[test]
fn cave_draws_every_spike_once() {
    let cave = CaveParams::generate(&mut PcgSource::from_seed(21));
    let mut r = Recorder::default();
    draw_cave(&mut r, &cave);

    let expected: usize = cave.rows.iter().map(|row| row.sizes.len()).sum();
    assert_eq!(r.quads, 1);
    assert_eq!(r.ovals.len(), 2);
    assert_eq!(r.tris.len(), expected);
    assert_eq!(r.ovals[0].1, cave.outer);
    assert_eq!(r.ovals[1].1, cave.inner);
}

#[test]
fn ceiling_spikes_hang_down_and_floor_spikes_rise() {
    let cave = CaveParams::generate(&mut PcgSource::from_seed(4));
    let mut r = Recorder::default();
    draw_cave(&mut r, &cave);

    let ceiling = cave.rows[0].sizes.len() + cave.rows[1].sizes.len();
    for tri in &r.tris[..ceiling] {
        assert!(tri[1].y < tri[0].y);
        assert!(tri[0].y >= 190.0);
    }
    for tri in &r.tris[ceiling..] {
        assert!(tri[1].y > tri[0].y);
        assert!(tri[0].y <= -210.0);
    }
}

#[test]
fn row_ends_carry_the_longest_edge_growth() {
    let cave = CaveParams::generate(&mut PcgSource::from_seed(8));
    let mut r = Recorder::default();
    draw_cave(&mut r, &cave);

    let first = r.tris[0];
    let length = first[0].y - first[1].y;
    assert!((length - 7.0 * (cave.rows[0].sizes[0] + 20.0)).abs() < 1e-9);
    assert!((first[0].x - (-200.0 - 0.5 * (cave.rows[0].sizes[0] + 20.0))).abs() < 1e-9);
}
