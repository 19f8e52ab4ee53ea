pub mod bitmap;
/// Blend modes and paints.
pub mod blend;
pub mod canvas;
/// Anti-aliased lines.
pub mod line;
pub mod primitives;
pub mod text;
