use super::*;
use crate::random::PcgSource;
use crate::raster::bitmap::{Bitmap, ChannelOrder};
use crate::raster::blend::BlendMode;
use crate::raster::canvas::Canvas;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Tri(Paint),
    Oval(Vec2, Vec2, Paint),
    Slice(Paint),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Rasterizer for Recorder {
    fn fill_triangle(&mut self, _tri: Tri, paint: Paint) {
        self.ops.push(Op::Tri(paint));
    }

    fn fill_oval(&mut self, center: Vec2, radius: Vec2, paint: Paint) {
        self.ops.push(Op::Oval(center, radius, paint));
    }

    fn fill_oval_slice(&mut self, _c: Vec2, _r: Vec2, _s: Vec2, _e: Vec2, paint: Paint) {
        self.ops.push(Op::Slice(paint));
    }

    fn line(&mut self, _a: Vec2, _b: Vec2, _paint: Paint) {}

    fn thick_line(&mut self, _a: Vec2, _b: Vec2, _t: f64, _paint: Paint) {}
}

fn record(seed: u64) -> (DragonParams, Recorder) {
    let params = DragonParams::generate(&mut PcgSource::from_seed(seed));
    let mut r = Recorder::default();
    draw_dragon(&mut r, &params, 9).unwrap();
    (params, r)
}

#[test]
fn drawing_is_a_pure_function_of_params() {
    let (_, a) = record(17);
    let (_, b) = record(17);
    assert_eq!(a.ops, b.ops);
    assert!(!a.ops.is_empty());
}

#[test]
fn nostril_is_painted_last() {
    let (params, r) = record(2);
    let Some(Op::Oval(_, radius, paint)) = r.ops.last() else {
        panic!("last op is not an oval");
    };
    assert_eq!(*radius, Vec2::new(10.0, 5.0));
    assert_eq!(paint.color, Rgba::from(params.scale_color.delta_v(-0.8)));
}

#[test]
fn only_the_mouth_clear_replaces_pixels() {
    let (_, r) = record(23);
    let replaced: Vec<Paint> = r
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Tri(p) | Op::Oval(_, _, p) | Op::Slice(p) => Some(*p),
        })
        .filter(|p| p.mode == BlendMode::Replace)
        .collect();
    assert!(!replaced.is_empty());
    assert!(replaced.iter().all(|p| p.color == Rgba::TRANSPARENT));
}

#[test]
fn eye_ovals_follow_the_horn_shadows() {
    let (params, r) = record(31);
    let eye_center = params.head_offset + params.eye_offset;
    let eye_ops = r
        .ops
        .iter()
        .position(|op| matches!(op, Op::Oval(c, radius, _) if *c == eye_center && *radius == params.eye_size))
        .unwrap();
    let shadow_radius = Vec2::new(0.55, 0.55) * params.horn_profile(0).base;
    let last_shadow = r
        .ops
        .iter()
        .rposition(|op| matches!(op, Op::Oval(_, radius, _) if *radius == shadow_radius))
        .unwrap();
    assert!(last_shadow < eye_ops);
}

#[test]
fn dragon_paints_onto_a_canvas() {
    let params = DragonParams::generate(&mut PcgSource::from_seed(1));
    let mut canvas = Canvas::new(Bitmap::new(102, 102, ChannelOrder::Rgba), 0.25);
    draw_dragon(&mut canvas, &params, 9).unwrap();

    let alphas: Vec<u8> = canvas.bitmap().data().chunks_exact(4).map(|px| px[3]).collect();
    let opaque = alphas.iter().filter(|&&a| a == 255).count();
    assert!(opaque > 1000, "only {opaque} opaque pixels");
    assert!(alphas.contains(&0));
}
