/// Quadratic and cubic segments.
pub mod bezier;
/// Chains of segments with cached arc lengths.
pub mod model;
/// Arc-length sampling and parametric placement.
pub mod sample;
