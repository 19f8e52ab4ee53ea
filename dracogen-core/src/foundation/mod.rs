pub mod arena;
/// Vector type and the helpers the rasterizer adds to it.
pub mod core;
/// Crate error type.
pub mod error;
/// Scalar helpers.
pub mod math;
