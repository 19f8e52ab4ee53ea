//! NFA diagrams.
//!
//! [`parse::parse_nfa`] reads the text dump of an automaton into a [`model::Graph`],
//! [`layout::run_layout`] settles it with a force simulation and [`render::render_graph`] draws
//! rings, arrows and labels.

mod lexer;
pub mod layout;
/// Nodes, edges and the graph that owns them.
pub mod model;
pub mod parse;
pub mod render;
