//! dracogen is a small curve-driven software rasterizer and the two generators built on it.
//!
//! - [`render_dragon`] paints a seeded dragon portrait from Bezier ribbons, ovals and triangles.
//! - [`parse_nfa`], [`run_layout`] and [`render_graph`] turn a textual NFA dump into a
//!   force-directed node-link diagram.
//!
//! Both produce a [`FrameRGBA`]: straight-alpha RGBA8 rows, top row first.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Colours and HSV adjustments.
pub mod color;
pub mod config;
/// Bezier curves.
pub mod curve;
pub mod dragon;
/// Scratch memory, vectors, errors and scalar math.
pub mod foundation;
/// Vertex groups and polylines.
pub mod geom;
pub mod graph;
pub mod random;
/// Pixel buffers, primitives and text.
pub mod raster;
pub mod ribbon;

pub use crate::color::{Hsva, Rgba};
pub use crate::config::{DragonSettings, GraphSettings};
pub use crate::dragon::render_dragon;
pub use crate::foundation::core::{Vec2, VecExt};
pub use crate::foundation::error::{DracoError, DracoResult};
pub use crate::graph::layout::{Simulation, run_layout};
pub use crate::graph::model::{Edge, Graph, Node, NodeId, NodeKind};
pub use crate::graph::parse::parse_nfa;
pub use crate::graph::render::render_graph;
pub use crate::random::{PcgSource, RandomSource, seed_from_name};
pub use crate::raster::bitmap::{Bitmap, FrameRGBA};
pub use crate::raster::canvas::{Canvas, Rasterizer};
pub use crate::raster::text::{FontdueGlyphs, Glyph, GlyphSource, MAX_TEXT_PX};
