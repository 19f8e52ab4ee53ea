//! Node-link drawing of a laid-out automaton.

use crate::config::GraphSettings;
use crate::curve::model::CubicCurve;
use crate::foundation::core::{Vec2, VecExt};
use crate::foundation::error::DracoResult;
use crate::graph::layout::NODE_RADIUS;
use crate::graph::model::{Edge, Graph, NodeKind};
use crate::raster::bitmap::{Bitmap, ChannelOrder, FrameRGBA};
use crate::raster::blend::Paint;
use crate::raster::canvas::{Canvas, Rasterizer};
use crate::raster::primitives::OvalStyle;
use crate::raster::text::{GlyphSource, TextPainter};
use crate::ribbon::draw_bezier_ribbon;

/// Label of an epsilon transition in the dump format.
pub const EPSILON_TRANSITION: &str = "-";

const LOOP_SEGMENTS: usize = 15;

type GraphCanvas = Canvas<Vec<u8>>;

/// Text drawn for a transition label.
pub fn display_label(transition: &str) -> &str {
    if transition == EPSILON_TRANSITION {
        "ε"
    } else {
        transition
    }
}

/// Draw `graph` at its current layout.
#[tracing::instrument(skip_all, fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn render_graph(
    graph: &Graph,
    glyphs: &dyn GlyphSource,
    settings: &GraphSettings,
) -> DracoResult<FrameRGBA> {
    settings.validate()?;
    let mut bitmap = Bitmap::new(settings.width, settings.height, ChannelOrder::Rgba);
    bitmap.clear(settings.background);
    let mut canvas = Canvas::new(bitmap, settings.pixels_per_unit).with_style(OvalStyle::Smooth);
    let mut text = TextPainter::new(glyphs);
    // two pixels
    let width = 2.0 / settings.pixels_per_unit;

    for edge in &graph.edges {
        draw_edge(&mut canvas, &mut text, graph, edge, width, settings)?;
    }

    for node in graph.visible_nodes() {
        let rings = if node.kind == NodeKind::Final { 4 } else { 2 };
        for ring in 0..rings {
            let color = if ring % 2 == 0 {
                settings.ink
            } else {
                settings.background
            };
            let radius = NODE_RADIUS - f64::from(ring) * width;
            canvas.fill_oval(node.pos, Vec2::new(radius, radius), Paint::new(color));
        }
        if let Some(name) = &node.name {
            let height = if node.kind == NodeKind::Final {
                settings.final_name_height
            } else {
                settings.name_height
            };
            text.draw_world_string(&mut canvas, name, node.pos, height, settings.ink)?;
        }
    }

    if !settings.title.is_empty() {
        let top = f64::from(settings.height) / 2.0 - f64::from(settings.title_px);
        text.draw_string(
            &mut canvas,
            &settings.title,
            Vec2::new(0.0, top),
            settings.title_px,
            settings.ink,
        )?;
    }

    tracing::debug!(
        width = settings.width,
        height = settings.height,
        "rendered graph"
    );
    Ok(canvas.into_bitmap().to_frame())
}

fn draw_edge(
    canvas: &mut GraphCanvas,
    text: &mut TextPainter<'_>,
    graph: &Graph,
    edge: &Edge,
    width: f64,
    settings: &GraphSettings,
) -> DracoResult<()> {
    let paint = Paint::new(settings.ink);
    let source = &graph.nodes[edge.source];
    let start = source.pos;

    let label_pos = if edge.loopback {
        let toward = edge
            .control
            .map_or(start + Vec2::new(0.0, 1.0), |c| graph.nodes[c].pos);
        let dir = (toward - start).safe_normalize();
        let side = dir.perp() * 2.0;
        let reach = start + dir * 2.0;
        let loop_curve = CubicCurve::from_points(start, &[reach + side, reach - side, start])?;
        draw_bezier_ribbon(canvas, &loop_curve, |_| width, paint, LOOP_SEGMENTS, false);
        start + dir * 1.8
    } else {
        let end = graph.nodes[edge.dest].pos;
        let diff = end - start;
        let dir = diff.safe_normalize();
        let tail = if source.kind == NodeKind::Prestart {
            end - dir * (3.0 * NODE_RADIUS)
        } else {
            start + dir * NODE_RADIUS
        };
        let head = end - dir * NODE_RADIUS;
        canvas.arrow(tail, head, 1.5 * width, 4.0 * width, paint);
        start + diff * 0.5 + diff.left_normal() * 0.3
    };

    if let Some(transition) = &edge.transition {
        text.draw_world_string(
            canvas,
            display_label(transition),
            label_pos,
            settings.label_height,
            settings.ink,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/graph/render.rs"]
mod tests;
